//! Property-based tests for shape expansion.

use super::{expand, expand_with, PathElement, PathSet};
use crate::shape::{RangeSelector, Resolvable, Shape, ShapeValue, RANGE_KEY};
use proptest::prelude::*;
use std::cell::Cell;

fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn selector_strategy() -> impl Strategy<Value = RangeSelector> {
    prop_oneof![
        (0i64..1000, 0i64..1000).prop_map(|(from, to)| RangeSelector::range(from, to)),
        prop::collection::vec(0i64..100, 0..5).prop_map(RangeSelector::Indices),
    ]
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    let flat = prop::collection::vec(key_strategy(), 0..5)
        .prop_map(|keys| keys.into_iter().map(|k| (k, ShapeValue::True)).collect::<Shape>());

    flat.prop_recursive(4, 64, 5, |inner| {
        (
            prop::collection::vec(
                (key_strategy(), prop::option::of(inner.clone())),
                0..5,
            ),
            prop::option::of((selector_strategy(), inner)),
        )
            .prop_map(|(entries, range)| {
                let mut shape = Shape::new();
                for (key, sub_shape) in entries {
                    shape.insert(key, sub_shape.map_or(ShapeValue::True, ShapeValue::Shape));
                }
                if let Some((selector, sub_shape)) = range {
                    shape.insert(RANGE_KEY, ShapeValue::Range(selector, sub_shape));
                }
                shape
            })
    })
}

fn count_terminals(shape: &Shape) -> usize {
    shape
        .iter()
        .map(|(_, value)| match value {
            ShapeValue::True => 1,
            ShapeValue::Shape(sub_shape) | ShapeValue::Range(_, sub_shape) => {
                count_terminals(sub_shape)
            }
            ShapeValue::Resolvable(_) => 0,
        })
        .sum()
}

// Replaces every terminal with a resolvable that yields the terminal.
fn defer_leaves(shape: &Shape) -> Shape {
    shape
        .iter()
        .map(|(key, value)| {
            let deferred = match value {
                ShapeValue::True => ShapeValue::Resolvable(Resolvable::new(|| ShapeValue::True)),
                ShapeValue::Shape(sub_shape) => ShapeValue::Shape(defer_leaves(sub_shape)),
                ShapeValue::Range(selector, sub_shape) => {
                    ShapeValue::Range(selector.clone(), defer_leaves(sub_shape))
                }
                ShapeValue::Resolvable(resolvable) => ShapeValue::Resolvable(resolvable.clone()),
            };
            (key, deferred)
        })
        .collect()
}

fn prefix_all(head: &PathElement, paths: Vec<PathSet>) -> Vec<PathSet> {
    paths
        .into_iter()
        .map(|path| PathSet::prefixed(head.clone(), path))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Only terminal keys: one single-element path per key, in key order
    #[test]
    fn leaf_law(keys in prop::collection::vec(key_strategy(), 0..10)) {
        let shape: Shape = keys.into_iter().map(|k| (k, ShapeValue::True)).collect();
        let paths = expand(&shape).unwrap();
        let expected: Vec<PathSet> = shape.keys().map(PathSet::leaf).collect();
        prop_assert_eq!(paths, expected);
    }

    // expand({k: S}) == [[k, ...p] for p in expand(S)]
    #[test]
    fn nesting_law(key in key_strategy(), shape in shape_strategy()) {
        let nested = Shape::new().nested(key.as_str(), shape.clone());
        let expected = prefix_all(&PathElement::from(key), expand(&shape).unwrap());
        prop_assert_eq!(expand(&nested).unwrap(), expected);
    }

    // expand({"$": [g, S]}) == [[g, ...p] for p in expand(S)]
    #[test]
    fn range_law(selector in selector_strategy(), shape in shape_strategy()) {
        let ranged = Shape::new().range(selector.clone(), shape.clone());
        let expected = prefix_all(&PathElement::Selector(selector), expand(&shape).unwrap());
        prop_assert_eq!(expand(&ranged).unwrap(), expected);
    }

    // Every path set corresponds to exactly one terminal
    #[test]
    fn one_path_per_terminal(shape in shape_strategy()) {
        let paths = expand(&shape).unwrap();
        prop_assert_eq!(paths.len(), count_terminals(&shape));
        prop_assert!(paths.iter().all(|path| !path.is_empty()));
        prop_assert!(paths
            .iter()
            .flat_map(PathSet::iter)
            .all(|element| element.as_key() != Some(RANGE_KEY)));
    }

    // The resolver runs once per resolvable and never for plain values
    #[test]
    fn resolver_laziness(shape in shape_strategy()) {
        let calls = Cell::new(0usize);
        let mut counting = |resolvable: &Resolvable, _: &Shape, _: &str| {
            calls.set(calls.get() + 1);
            resolvable.call()
        };
        let plain = expand_with(&shape, &mut counting).unwrap();
        prop_assert_eq!(calls.get(), 0);

        let deferred = defer_leaves(&shape);
        let resolved = expand_with(&deferred, &mut counting).unwrap();
        prop_assert_eq!(calls.get(), count_terminals(&shape));
        prop_assert_eq!(resolved, plain);
    }

    // Omitting the resolver equals passing one that just calls the resolvable
    #[test]
    fn default_resolver_calls_resolvable(shape in shape_strategy()) {
        let deferred = defer_leaves(&shape);
        let mut calling = |resolvable: &Resolvable, _: &Shape, _: &str| resolvable.call();
        prop_assert_eq!(
            expand(&deferred).unwrap(),
            expand_with(&deferred, &mut calling).unwrap()
        );
    }
}

#[test]
fn empty_shape_law() {
    let mut never = |_: &Resolvable, _: &Shape, _: &str| -> ShapeValue {
        panic!("resolver must not run for an empty shape")
    };
    assert!(expand(&Shape::new()).unwrap().is_empty());
    assert!(expand_with(&Shape::new(), &mut never).unwrap().is_empty());
}
