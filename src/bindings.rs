// src/bindings.rs
//! The automobile module: vehicle types exposed to the scripting host
//!
//! Pure forwarding. Every bound operation maps one-to-one onto `Vehicle`;
//! the only work done here is marshaling.

use crate::host::{marshal, Arity, Host, NativeCtor, TypeBinding, Value};
use crate::vehicle::{Vehicle, VehicleKind};
use crate::BindingError;

/// Build the host module with `Car` and `Motorcycle` registered
///
/// Each type exposes:
/// - a constructor taking one string argument, `name`;
/// - `get_name`, zero arguments, returning the name;
/// - the travel action (`drive` for Car, `ride` for Motorcycle), taking an
///   optional string argument, `road`.
pub fn automobile() -> Host<Vehicle> {
    let mut host = Host::new();
    host.register(vehicle_binding("Car", VehicleKind::Car));
    host.register(vehicle_binding("Motorcycle", VehicleKind::Motorcycle));
    host
}

fn vehicle_binding(name: &str, kind: VehicleKind) -> TypeBinding<Vehicle> {
    let ctor: NativeCtor<Vehicle> = match kind {
        VehicleKind::Car => construct_car,
        VehicleKind::Motorcycle => construct_motorcycle,
    };

    TypeBinding::new(name, Arity::exactly(1), ctor)
        .method("get_name", Arity::exactly(0), get_name)
        .method(kind.verb(), Arity::optional(0, 1), travel)
}

fn construct_car(args: &[Value]) -> Result<Vehicle, BindingError> {
    Ok(Vehicle::car(marshal::str_arg("Car", args, 0)?))
}

fn construct_motorcycle(args: &[Value]) -> Result<Vehicle, BindingError> {
    Ok(Vehicle::motorcycle(marshal::str_arg("Motorcycle", args, 0)?))
}

fn get_name(vehicle: &Vehicle, _args: &[Value]) -> Result<Value, BindingError> {
    Ok(Value::from(vehicle.name()))
}

fn travel(vehicle: &Vehicle, args: &[Value]) -> Result<Value, BindingError> {
    let road = marshal::opt_str_arg(vehicle.kind().verb(), args, 0)?;
    vehicle.travel(road)?;
    Ok(Value::Null)
}
