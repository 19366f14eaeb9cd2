// src/lib.rs
//! # Automobile
//!
//! Vehicle value types with a scripting-host binding layer.
//!
//! A `Vehicle` is an immutable named value with one behavior: the travel
//! action, which emits a single descriptive line, optionally referencing a
//! road. The `host` module is the binding surface: a registry mapping exposed
//! type and method names onto native operations, with strict marshaling of
//! dynamic arguments.
//!
//! ## Example
//!
//! ```rust
//! use automobile::{bindings, Value};
//!
//! let host = bindings::automobile();
//!
//! let car = host.construct("Car", &[Value::from("Tesla")]).unwrap();
//! assert_eq!(host.invoke(&car, "get_name", &[]).unwrap(), Value::from("Tesla"));
//!
//! // Prints "Zoom Zoom on road: Main St"
//! host.invoke(&car, "drive", &[Value::from("Main St")]).unwrap();
//! ```

pub mod bindings;
pub mod host;
pub mod vehicle;

use thiserror::Error;

pub use host::{Arity, Host, Object, TypeBinding, Value};
pub use vehicle::{Vehicle, VehicleKind};

/// Errors surfaced across the scripting boundary
///
/// All variants are caller-facing and final; there is no recovery path.
#[derive(Error, Debug)]
pub enum BindingError {
    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown method: {type_name}.{method}")]
    UnknownMethod { type_name: String, method: String },

    #[error("{callee}: expected {expected} argument(s), got {got}")]
    ArityMismatch {
        callee: String,
        expected: String,
        got: usize,
    },

    #[error("{callee}: argument {index} must be {expected}, got {actual}")]
    TypeMismatch {
        callee: String,
        index: usize,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_car_round_trip() {
        let host = bindings::automobile();

        let car = host.construct("Car", &[Value::from("Tesla")]).unwrap();
        let name = host.invoke(&car, "get_name", &[]).unwrap();

        assert_eq!(name, Value::String("Tesla".to_string()));
    }

    #[test]
    fn test_scenario_ride_without_road() {
        let host = bindings::automobile();

        let bike = host.construct("Motorcycle", &[Value::from("Harley")]).unwrap();
        let result = host.invoke(&bike, "ride", &[]).unwrap();

        assert_eq!(result, Value::Null);
    }

    #[test]
    fn test_error_messages_name_the_callee() {
        let host = bindings::automobile();

        let err = host.construct("Car", &[Value::Bool(true)]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Car"));
        assert!(message.contains("string"));
        assert!(message.contains("bool"));
    }
}
