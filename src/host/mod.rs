// src/host/mod.rs
//! Host-side binding layer
//!
//! The registry a scripting runtime talks to: native types are registered
//! under exposed names, then constructed and invoked with dynamic values.

pub mod binding;
pub mod marshal;
pub mod value;

pub use binding::{Arity, NativeCtor, NativeMethod, TypeBinding};
pub use value::Value;

use crate::BindingError;
use ahash::HashMap;

/// Registry of exposed types
pub struct Host<T> {
    types: HashMap<String, TypeBinding<T>>,
}

/// A constructed instance, tagged with the exposed type it was built from
#[derive(Debug, Clone, PartialEq)]
pub struct Object<T> {
    type_name: String,
    inner: T,
}

impl<T> Object<T> {
    /// Exposed name of the type this object was constructed as
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Host<T> {
    pub fn new() -> Self {
        Self {
            types: HashMap::default(),
        }
    }

    /// Register a type binding under its exposed name
    pub fn register(&mut self, binding: TypeBinding<T>) {
        self.types.insert(binding.name().to_string(), binding);
    }

    /// Exposed type names, unordered
    pub fn type_names(&self) -> Vec<&str> {
        self.types.keys().map(String::as_str).collect()
    }

    /// Construct an instance of an exposed type
    pub fn construct(&self, type_name: &str, args: &[Value]) -> Result<Object<T>, BindingError> {
        let binding = self
            .types
            .get(type_name)
            .ok_or_else(|| BindingError::UnknownType(type_name.to_string()))?;

        let inner = binding.construct(args)?;

        Ok(Object {
            type_name: type_name.to_string(),
            inner,
        })
    }

    /// Invoke a bound method on a constructed instance
    pub fn invoke(
        &self,
        object: &Object<T>,
        method: &str,
        args: &[Value],
    ) -> Result<Value, BindingError> {
        let binding = self
            .types
            .get(&object.type_name)
            .ok_or_else(|| BindingError::UnknownType(object.type_name.clone()))?;

        let def = binding
            .method_def(method)
            .ok_or_else(|| BindingError::UnknownMethod {
                type_name: object.type_name.clone(),
                method: method.to_string(),
            })?;

        marshal::check_arity(method, def.arity, args)?;
        (def.func)(&object.inner, args)
    }
}

impl<T> Default for Host<T> {
    fn default() -> Self {
        Self::new()
    }
}
