//! Named schema definitions and a per-interpreter memo cache.
//!
//! A [`Schema`] packages a definition generic over the interpreter, so the
//! same type can hand out its decoder, guard or JSON Schema. Interpreting a
//! definition rebuilds its whole representation; [`SchemaCache`] keeps one
//! interpretation per schema type for callers that ask repeatedly.
//!
//! # Examples
//!
//! ```rust
//! use optica::decoder::{DecoderBrand, Schema, SchemaCache, Schemable};
//! use serde_json::json;
//!
//! struct Point;
//!
//! impl Schema for Point {
//!     type Output = (f64, f64);
//!
//!     fn define<S: Schemable>() -> S::Repr<(f64, f64)> {
//!         S::tuple((S::number(), S::number()))
//!     }
//! }
//!
//! let mut decoders = SchemaCache::<DecoderBrand>::new();
//! let point = decoders.interpret::<Point>();
//! assert_eq!(point.decode(&json!([1, 2])), Ok((1.0, 2.0)));
//! assert_eq!(decoders.len(), 1);
//! ```

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;

use super::schemable::Schemable;

/// A schema definition for [`Output`](Schema::Output).
pub trait Schema: 'static {
    /// The type this schema describes.
    type Output: 'static;

    /// The definition, under any interpreter.
    fn define<S: Schemable>() -> S::Repr<Self::Output>;

    /// Interprets the definition with `S`, without caching.
    fn interpret<S: Schemable>() -> S::Repr<Self::Output> {
        Self::define::<S>()
    }
}

/// Interpretations of schema types under one interpreter, keyed by the
/// schema's `TypeId`.
pub struct SchemaCache<S> {
    entries: HashMap<TypeId, Box<dyn Any>>,
    _interpreter: PhantomData<S>,
}

impl<S> std::fmt::Debug for SchemaCache<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("SchemaCache")
            .field("entries", &self.entries.len())
            .finish()
    }
}

impl<S: Schemable> Default for SchemaCache<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Schemable> SchemaCache<S> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            _interpreter: PhantomData,
        }
    }

    /// Returns the interpretation of `T`, defining it on the first request.
    pub fn interpret<T: Schema>(&mut self) -> S::Repr<T::Output> {
        let id = TypeId::of::<T>();
        if let Some(cached) = self
            .entries
            .get(&id)
            .and_then(|entry| entry.downcast_ref::<S::Repr<T::Output>>())
        {
            return cached.clone();
        }

        tracing::debug!(schema = std::any::type_name::<T>(), "schema cache miss");
        let repr = T::define::<S>();
        self.entries.insert(id, Box::new(repr.clone()));
        repr
    }

    /// Whether `T` has been interpreted already.
    #[must_use]
    pub fn contains<T: Schema>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<T>())
    }

    /// Number of cached interpretations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached interpretation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
