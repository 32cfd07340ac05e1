// Copyright 2025 Cowboy AI, LLC.

//! Slice-backed list access
//!
//! Arguments are anything viewable as a slice (`Vec<T>`, `&[T]`, `Arc<[T]>`).
//! Results are fresh vectors; the argument is never reordered in place.

use std::cmp::Ordering;

use crate::errors::FunctorError;
use crate::transform::Transform;
use crate::transforms::{from_fn, lift};

/// Element at `index`; out-of-range indices fail with `ApplicationError`
pub fn get<T, L>(index: usize) -> impl Transform<T, L>
where
    T: Clone,
    L: AsRef<[T]>,
{
    from_fn(format!("get({index})"), move |list: L| {
        let items = list.as_ref();
        items.get(index).cloned().ok_or_else(|| {
            FunctorError::application(format!(
                "index {index} out of range for length {}",
                items.len()
            ))
        })
    })
}

/// Copy into a new vector
pub fn copy<T, L>() -> impl Transform<Vec<T>, L>
where
    T: Clone,
    L: AsRef<[T]>,
{
    lift("copy", |list: L| list.as_ref().to_vec())
}

/// Sorted copy in natural order
pub fn sort<T, L>() -> impl Transform<Vec<T>, L>
where
    T: Clone + Ord,
    L: AsRef<[T]>,
{
    lift("sort", |list: L| {
        let mut copy = list.as_ref().to_vec();
        copy.sort();
        copy
    })
}

/// Sorted copy ordered by `comparator`
pub fn sort_by<T, L, C>(comparator: C) -> impl Transform<Vec<T>, L>
where
    T: Clone,
    L: AsRef<[T]>,
    C: Fn(&T, &T) -> Ordering + Send + Sync,
{
    lift("sort_by", move |list: L| {
        let mut copy = list.as_ref().to_vec();
        copy.sort_by(&comparator);
        copy
    })
}
