//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the shapepaths library.

use serde_json::Value;
use shapepaths::{expand, PathSet, Resolvable, Resolver, Shape, ShapeValue};

/// Expands a JSON shape document and returns the result as JSON.
///
/// Comparing results as JSON keeps expectations close to the wire form the
/// path sets are consumed in.
#[allow(dead_code)]
pub fn expand_json(shape: &str) -> Value {
    let shape = Shape::from_json_str(shape).unwrap();
    paths_to_value(&expand(&shape).unwrap())
}

/// Converts an expansion result to a JSON value.
#[allow(dead_code)]
pub fn paths_to_value(paths: &[PathSet]) -> Value {
    serde_json::to_value(paths).unwrap()
}

/// A three-level shape describing a person.
#[allow(dead_code)]
pub fn person_shape() -> Shape {
    let name = Shape::new().leaf("first").leaf("last");
    let location = Shape::new().leaf("city").leaf("region").leaf("country");
    let mother = Shape::new()
        .nested("name", name.clone())
        .leaf("age")
        .nested("location", location.clone());

    Shape::new()
        .nested("name", name)
        .nested("mother", mother)
        .nested("location", location)
}

/// One observed resolver invocation.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct ResolverCall {
    /// The key being resolved.
    pub key: String,
    /// The keys of the shape holding that key, in order.
    pub siblings: Vec<String>,
}

/// A resolver that records every invocation before calling the resolvable.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct RecordingResolver {
    /// Invocations in the order they happened.
    pub calls: Vec<ResolverCall>,
}

impl RecordingResolver {
    /// Creates a resolver with no recorded calls.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys resolved so far, in order.
    #[allow(dead_code)]
    pub fn keys(&self) -> Vec<&str> {
        self.calls.iter().map(|call| call.key.as_str()).collect()
    }
}

impl Resolver for RecordingResolver {
    fn resolve(&mut self, resolvable: &Resolvable, parent: &Shape, key: &str) -> ShapeValue {
        self.calls.push(ResolverCall {
            key: key.to_string(),
            siblings: parent.keys().map(str::to_string).collect(),
        });
        resolvable.call()
    }
}
