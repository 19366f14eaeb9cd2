// src/vehicle/mod.rs
//! Vehicle value types
//!
//! A vehicle owns a single name, fixed at construction. Its only behavior is
//! the travel action, which writes one human-readable line to an output sink.

use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Kind of vehicle, which picks the verb used for the travel action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Car,
    Motorcycle,
}

impl VehicleKind {
    /// Verb the scripting side calls the travel action by
    pub fn verb(&self) -> &'static str {
        match self {
            VehicleKind::Car => "drive",
            VehicleKind::Motorcycle => "ride",
        }
    }
}

/// A named vehicle, immutable after construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    kind: VehicleKind,
    name: String,
}

impl Vehicle {
    /// Create a vehicle. Any name is accepted, including the empty string.
    pub fn new(kind: VehicleKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    /// Create a car
    pub fn car(name: impl Into<String>) -> Self {
        Self::new(VehicleKind::Car, name)
    }

    /// Create a motorcycle
    pub fn motorcycle(name: impl Into<String>) -> Self {
        Self::new(VehicleKind::Motorcycle, name)
    }

    /// Name exactly as passed to the constructor
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> VehicleKind {
        self.kind
    }

    /// The travel message, without a trailing newline
    ///
    /// With a road the message references it verbatim; without one the
    /// message is the same fixed line every time.
    pub fn travel_line(&self, road: Option<&str>) -> String {
        match road {
            Some(road) => format!("Zoom Zoom on road: {}", road),
            None => "Zoom Zoom".to_string(),
        }
    }

    /// Write the travel message as exactly one line to the given sink
    pub fn travel_to(&self, road: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", self.travel_line(road))
    }

    /// Write the travel message to stdout
    pub fn travel(&self, road: Option<&str>) -> io::Result<()> {
        self.travel_to(road, &mut io::stdout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        assert_eq!(Vehicle::car("Tesla").name(), "Tesla");
        assert_eq!(Vehicle::motorcycle("Harley").name(), "Harley");
        assert_eq!(Vehicle::car("").name(), "");
        assert_eq!(Vehicle::car("名前 with spaces\n").name(), "名前 with spaces\n");
    }

    #[test]
    fn test_travel_line_with_road() {
        let car = Vehicle::car("Tesla");
        assert_eq!(car.travel_line(Some("Main St")), "Zoom Zoom on road: Main St");
    }

    #[test]
    fn test_travel_line_without_road_is_fixed() {
        let a = Vehicle::motorcycle("Harley");
        let b = Vehicle::motorcycle("Ducati");
        assert_eq!(a.travel_line(None), "Zoom Zoom");
        assert_eq!(a.travel_line(None), b.travel_line(None));
    }

    #[test]
    fn test_travel_to_writes_one_line_per_call() {
        let car = Vehicle::car("Tesla");
        let mut out = Vec::new();

        car.travel_to(Some("Main St"), &mut out).unwrap();
        car.travel_to(None, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Zoom Zoom on road: Main St");
        assert_eq!(lines[1], "Zoom Zoom");
    }

    #[test]
    fn test_kind_verbs() {
        assert_eq!(VehicleKind::Car.verb(), "drive");
        assert_eq!(VehicleKind::Motorcycle.verb(), "ride");
    }
}
