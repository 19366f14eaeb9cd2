// src/host/binding.rs
//! Registration table mapping exposed names to native operations
//!
//! A `TypeBinding` is what the host registers for one scripting-visible type:
//! a constructor plus a method table. It is generic over the native type and
//! performs no transformation beyond arity checks, so the native type stays
//! portable across hosting environments.

use crate::host::marshal;
use crate::host::Value;
use crate::BindingError;
use ahash::HashMap;
use std::fmt;

/// Native constructor exposed to the scripting caller
pub type NativeCtor<T> = fn(&[Value]) -> Result<T, BindingError>;

/// Native method exposed to the scripting caller
pub type NativeMethod<T> = fn(&T, &[Value]) -> Result<Value, BindingError>;

/// Number of arguments a bound operation accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    pub required: usize,
    pub optional: usize,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Self {
            required: n,
            optional: 0,
        }
    }

    pub const fn optional(required: usize, optional: usize) -> Self {
        Self { required, optional }
    }

    pub fn accepts(&self, got: usize) -> bool {
        got >= self.required && got <= self.required + self.optional
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.optional == 0 {
            write!(f, "{}", self.required)
        } else {
            write!(f, "{}..={}", self.required, self.required + self.optional)
        }
    }
}

/// A bound method with its declared arity
pub struct MethodDef<T> {
    pub arity: Arity,
    pub func: NativeMethod<T>,
}

/// Everything registered for one exposed type
pub struct TypeBinding<T> {
    name: String,
    ctor_arity: Arity,
    ctor: NativeCtor<T>,
    methods: HashMap<String, MethodDef<T>>,
}

impl<T> TypeBinding<T> {
    pub fn new(name: impl Into<String>, ctor_arity: Arity, ctor: NativeCtor<T>) -> Self {
        Self {
            name: name.into(),
            ctor_arity,
            ctor,
            methods: HashMap::default(),
        }
    }

    /// Register a method under its exposed name
    pub fn method(mut self, name: impl Into<String>, arity: Arity, func: NativeMethod<T>) -> Self {
        self.methods.insert(name.into(), MethodDef { arity, func });
        self
    }

    /// Exposed type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Exposed method names, unordered
    pub fn method_names(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    pub(crate) fn construct(&self, args: &[Value]) -> Result<T, BindingError> {
        marshal::check_arity(&self.name, self.ctor_arity, args)?;
        (self.ctor)(args)
    }

    pub(crate) fn method_def(&self, method: &str) -> Option<&MethodDef<T>> {
        self.methods.get(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_accepts() {
        assert!(Arity::exactly(1).accepts(1));
        assert!(!Arity::exactly(1).accepts(0));
        assert!(!Arity::exactly(1).accepts(2));

        let opt = Arity::optional(0, 1);
        assert!(opt.accepts(0));
        assert!(opt.accepts(1));
        assert!(!opt.accepts(2));
    }

    #[test]
    fn test_arity_display() {
        assert_eq!(Arity::exactly(2).to_string(), "2");
        assert_eq!(Arity::optional(0, 1).to_string(), "0..=1");
    }
}
