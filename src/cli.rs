//! Command-line interface for the `u-tollnet` binary.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::PipelineConfig;
use crate::coverage::{check_time_coverage, TimeSpanRecord};
use crate::distance::{build, unroll};
use crate::io::{read_records_from_path, write_records};
use crate::models::{EdgeTable, LocationId};
use crate::query::within_threshold_with;
use crate::survey::{
    bus_indexes, car_matrix, car_type_counts, filter_routes, multiply_matrix, SurveyRecord,
};
use crate::toll::{calculate_time_based_toll_rates, calculate_toll_rates};

#[derive(Parser)]
#[command(name = "u-tollnet")]
#[command(
    about = "Toll network distance matrices, threshold queries and toll tables",
    long_about = None
)]
pub struct Cli {
    /// JSON configuration file (thresholds, toll rates, discounts)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the symmetric distance matrix and write it as a pivot table
    Matrix {
        /// Edge CSV (id_start,id_end,distance)
        input: PathBuf,
        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Build the matrix and flatten it into every ordered pair
    Unroll {
        /// Edge CSV (id_start,id_end,distance)
        input: PathBuf,
        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List ids within the threshold of a reference id's mean distance
    Query {
        /// Edge CSV (id_start,id_end,distance)
        input: PathBuf,
        /// Reference location id
        #[arg(short, long, allow_hyphen_values = true)]
        reference: i64,
        /// Build and unroll the input before querying
        #[arg(long)]
        unroll: bool,
        /// Output file, one id per line (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Append per-vehicle toll columns
    Tolls {
        /// Edge CSV (id_start,id_end,distance)
        input: PathBuf,
        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Expand into weekly time windows with discounts
        #[arg(long)]
        timed: bool,
    },
    /// Check that each (id, id_2) pair covers the whole week
    Coverage {
        /// Span CSV (id,id_2,startDay,startTime,endDay,endTime)
        input: PathBuf,
        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write survey statistics as JSON
    Survey {
        /// Survey CSV (id_1,id_2,route,moto,car,rv,bus,truck)
        input: PathBuf,
        /// Output JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Also write the car-count matrix as a pivot CSV
        #[arg(long)]
        car_matrix: Option<PathBuf>,
        /// Also write the scaled car-count matrix as a pivot CSV
        #[arg(long)]
        scaled_matrix: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct CoverageRow {
    id: LocationId,
    id_2: LocationId,
    complete: bool,
}

#[derive(Serialize)]
struct SurveySummary {
    car_type_counts: BTreeMap<&'static str, usize>,
    bus_indexes: Vec<usize>,
    routes: Vec<i64>,
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(p) => Box::new(BufWriter::new(
            File::create(p).with_context(|| format!("creating {}", p.display()))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn load_edges(path: &Path) -> Result<EdgeTable> {
    EdgeTable::from_path(path).with_context(|| format!("reading edges from {}", path.display()))
}

impl Cli {
    /// Loads the configuration and runs the selected command.
    pub fn run(self) -> Result<()> {
        let config = match &self.config {
            Some(path) => PipelineConfig::from_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => PipelineConfig::default(),
        };
        self.command.run(&config)
    }
}

impl Commands {
    /// Runs this command with an already loaded configuration.
    pub fn run(self, config: &PipelineConfig) -> Result<()> {
        match self {
            Commands::Matrix { input, output } => {
                let matrix = build(&load_edges(&input)?)?;
                log::info!("{} locations", matrix.size());
                matrix.write_csv(open_output(output.as_deref())?)?;
            }
            Commands::Unroll { input, output } => {
                let flat = unroll(&build(&load_edges(&input)?)?);
                log::info!("{} unrolled edges", flat.len());
                flat.write_to(open_output(output.as_deref())?)?;
            }
            Commands::Query {
                input,
                reference,
                unroll: flatten,
                output,
            } => {
                let mut edges = load_edges(&input)?;
                if flatten {
                    edges = unroll(&build(&edges)?);
                }
                let reference = LocationId::new(reference);
                let ids = within_threshold_with(&edges, reference, &config.threshold)?;
                log::info!("{} ids within threshold of {}", ids.len(), reference);
                let mut out = open_output(output.as_deref())?;
                for id in ids {
                    writeln!(out, "{id}")?;
                }
                out.flush()?;
            }
            Commands::Tolls {
                input,
                output,
                timed,
            } => {
                let tolls = calculate_toll_rates(&load_edges(&input)?, &config.tolls);
                let out = open_output(output.as_deref())?;
                if timed {
                    let rows = calculate_time_based_toll_rates(&tolls, &config.discounts);
                    write_records(out, &rows)?;
                } else {
                    write_records(out, &tolls)?;
                }
            }
            Commands::Coverage { input, output } => {
                let spans: Vec<TimeSpanRecord> = read_records_from_path(&input)
                    .with_context(|| format!("reading spans from {}", input.display()))?;
                let rows: Vec<CoverageRow> = check_time_coverage(&spans)?
                    .into_iter()
                    .map(|((id, id_2), complete)| CoverageRow { id, id_2, complete })
                    .collect();
                write_records(open_output(output.as_deref())?, &rows)?;
            }
            Commands::Survey {
                input,
                output,
                car_matrix: car_path,
                scaled_matrix,
            } => {
                let records: Vec<SurveyRecord> = read_records_from_path(&input)
                    .with_context(|| format!("reading survey from {}", input.display()))?;
                let summary = SurveySummary {
                    car_type_counts: car_type_counts(&records),
                    bus_indexes: bus_indexes(&records),
                    routes: filter_routes(&records),
                };
                let mut out = open_output(output.as_deref())?;
                serde_json::to_writer_pretty(&mut out, &summary)?;
                writeln!(out)?;
                out.flush()?;

                if car_path.is_some() || scaled_matrix.is_some() {
                    let cars = car_matrix(&records);
                    if let Some(path) = car_path {
                        cars.write_csv(open_output(Some(path.as_path()))?)?;
                    }
                    if let Some(path) = scaled_matrix {
                        let scaled = multiply_matrix(&cars);
                        scaled.write_csv(open_output(Some(path.as_path()))?)?;
                    }
                }
            }
        }

        Ok(())
    }
}
