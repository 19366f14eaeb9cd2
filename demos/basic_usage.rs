// demos/basic_usage.rs
//! Basic usage of the automobile binding layer

use automobile::{bindings, Value};

fn main() {
    println!("=== Automobile - Basic Usage ===\n");

    // Build the host module, as a scripting runtime would at startup.
    let host = bindings::automobile();
    println!("Registered types: {:?}\n", host.type_names());

    // Construct and use a car through the binding surface.
    let car = host
        .construct("Car", &[Value::from("Tesla")])
        .expect("Failed to construct Car");

    let name = host.invoke(&car, "get_name", &[]).expect("get_name failed");
    println!("Car name: {}", name);

    host.invoke(&car, "drive", &[Value::from("Main St")])
        .expect("drive failed");

    // A motorcycle rides, with or without a road.
    let bike = host
        .construct("Motorcycle", &[Value::from("Harley")])
        .expect("Failed to construct Motorcycle");

    host.invoke(&bike, "ride", &[Value::from("Route 66")])
        .expect("ride failed");
    host.invoke(&bike, "ride", &[]).expect("ride failed");

    // Marshaling failures surface to the caller.
    let err = host.construct("Car", &[Value::Int(42)]).unwrap_err();
    println!("\nExpected marshaling error: {}", err);
}
