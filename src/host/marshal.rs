// src/host/marshal.rs
//! Strict extraction of call arguments
//!
//! Marshaling never coerces: an argument of the wrong type or an unexpected
//! argument count surfaces as a caller-facing error.

use crate::host::binding::Arity;
use crate::host::Value;
use crate::BindingError;

/// Check an argument count against a declared arity
pub fn check_arity(callee: &str, arity: Arity, args: &[Value]) -> Result<(), BindingError> {
    if arity.accepts(args.len()) {
        Ok(())
    } else {
        Err(BindingError::ArityMismatch {
            callee: callee.to_string(),
            expected: arity.to_string(),
            got: args.len(),
        })
    }
}

/// Extract a required string argument
pub fn str_arg<'a>(callee: &str, args: &'a [Value], index: usize) -> Result<&'a str, BindingError> {
    match args.get(index) {
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(BindingError::TypeMismatch {
            callee: callee.to_string(),
            index,
            expected: "string",
            actual: other.type_name(),
        }),
        None => Err(BindingError::ArityMismatch {
            callee: callee.to_string(),
            expected: (index + 1).to_string(),
            got: args.len(),
        }),
    }
}

/// Extract an optional string argument; absent means `None`
pub fn opt_str_arg<'a>(
    callee: &str,
    args: &'a [Value],
    index: usize,
) -> Result<Option<&'a str>, BindingError> {
    match args.get(index) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(BindingError::TypeMismatch {
            callee: callee.to_string(),
            index,
            expected: "string",
            actual: other.type_name(),
        }),
    }
}
