//! Per-vehicle toll rates.

use serde::{Deserialize, Serialize};

use crate::models::{EdgeTable, LocationId};

/// Vehicle classes charged at the toll plazas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VehicleClass {
    /// Motorcycle.
    Moto,
    /// Passenger car.
    Car,
    /// Recreational vehicle.
    Rv,
    /// Bus.
    Bus,
    /// Truck.
    Truck,
}

impl VehicleClass {
    /// Every class, in column order.
    pub const ALL: [VehicleClass; 5] = [
        VehicleClass::Moto,
        VehicleClass::Car,
        VehicleClass::Rv,
        VehicleClass::Bus,
        VehicleClass::Truck,
    ];

    /// Column name of this class in toll tables.
    pub fn column(self) -> &'static str {
        match self {
            VehicleClass::Moto => "moto",
            VehicleClass::Car => "car",
            VehicleClass::Rv => "rv",
            VehicleClass::Bus => "bus",
            VehicleClass::Truck => "truck",
        }
    }
}

/// Toll charged per unit distance for each vehicle class.
///
/// # Examples
///
/// ```
/// use u_tollnet::toll::{TollRates, VehicleClass};
///
/// let rates = TollRates::default();
/// assert_eq!(rates.coefficient(VehicleClass::Truck), 3.6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TollRates {
    /// Motorcycle rate per unit distance.
    pub moto: f64,
    /// Car rate per unit distance.
    pub car: f64,
    /// Recreational vehicle rate per unit distance.
    pub rv: f64,
    /// Bus rate per unit distance.
    pub bus: f64,
    /// Truck rate per unit distance.
    pub truck: f64,
}

impl TollRates {
    /// Rate per unit distance for `class`.
    pub fn coefficient(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }
}

impl Default for TollRates {
    fn default() -> Self {
        Self {
            moto: 0.8,
            car: 1.2,
            rv: 1.5,
            bus: 2.2,
            truck: 3.6,
        }
    }
}

/// An edge with the toll for every vehicle class appended.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TollRecord {
    /// Origin location.
    pub id_start: LocationId,
    /// Destination location.
    pub id_end: LocationId,
    /// Edge distance the tolls are computed from.
    pub distance: f64,
    /// Motorcycle toll.
    pub moto: f64,
    /// Car toll.
    pub car: f64,
    /// Recreational vehicle toll.
    pub rv: f64,
    /// Bus toll.
    pub bus: f64,
    /// Truck toll.
    pub truck: f64,
}

impl TollRecord {
    /// Toll for `class`.
    pub fn toll(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    /// Copy of this record with every vehicle toll multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            moto: self.moto * factor,
            car: self.car * factor,
            rv: self.rv * factor,
            bus: self.bus * factor,
            truck: self.truck * factor,
            ..*self
        }
    }
}

/// Appends per-class toll columns (`distance × coefficient`) to every edge.
///
/// Row order follows the edge table.
///
/// # Examples
///
/// ```
/// use u_tollnet::models::{Edge, EdgeTable};
/// use u_tollnet::toll::{calculate_toll_rates, TollRates};
///
/// let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0)]);
/// let tolls = calculate_toll_rates(&edges, &TollRates::default());
/// assert_eq!(tolls[0].car, 12.0);
/// assert_eq!(tolls[0].truck, 36.0);
/// ```
pub fn calculate_toll_rates(edges: &EdgeTable, rates: &TollRates) -> Vec<TollRecord> {
    edges
        .iter()
        .map(|e| TollRecord {
            id_start: e.start,
            id_end: e.end,
            distance: e.distance,
            moto: e.distance * rates.moto,
            car: e.distance * rates.car,
            rv: e.distance * rates.rv,
            bus: e.distance * rates.bus,
            truck: e.distance * rates.truck,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Edge;

    #[test]
    fn test_rates_per_class() {
        let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0), Edge::new(2, 3, 5.0)]);
        let rates = TollRates::default();
        let tolls = calculate_toll_rates(&edges, &rates);
        assert_eq!(tolls.len(), 2);
        for class in VehicleClass::ALL {
            assert!((tolls[0].toll(class) - 10.0 * rates.coefficient(class)).abs() < 1e-12);
            assert!((tolls[1].toll(class) - 5.0 * rates.coefficient(class)).abs() < 1e-12);
        }
        assert_eq!(tolls[1].id_start, LocationId::new(2));
        assert_eq!(tolls[1].distance, 5.0);
    }

    #[test]
    fn test_empty_table() {
        assert!(calculate_toll_rates(&EdgeTable::new(), &TollRates::default()).is_empty());
    }

    #[test]
    fn test_scaled_keeps_distance() {
        let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0)]);
        let toll = calculate_toll_rates(&edges, &TollRates::default())[0];
        let half = toll.scaled(0.5);
        assert_eq!(half.distance, 10.0);
        assert!((half.moto - 4.0).abs() < 1e-12);
        assert!((half.bus - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_columns() {
        let names: Vec<&str> = VehicleClass::ALL.iter().map(|c| c.column()).collect();
        assert_eq!(names, vec!["moto", "car", "rv", "bus", "truck"]);
    }

    #[test]
    fn test_csv_header() {
        let edges = EdgeTable::from_edges(vec![Edge::new(1, 2, 10.0)]);
        let tolls = calculate_toll_rates(&edges, &TollRates::default());
        let mut out = Vec::new();
        crate::io::write_records(&mut out, &tolls).expect("write");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("id_start,id_end,distance,moto,car,rv,bus,truck\n"));
    }
}
