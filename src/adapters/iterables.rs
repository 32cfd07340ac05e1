// Copyright 2025 Cowboy AI, LLC.

//! Iteration over any `IntoIterator` argument

use crate::errors::FunctorResult;
use crate::transform::Transform;
use crate::transforms::{from_fn, Curried};

/// Apply `element` to every item, collecting the results in order
///
/// Stops at the first failing item.
pub fn each<D, S, I, E>(element: E) -> impl Transform<Vec<D>, I>
where
    I: IntoIterator<Item = S>,
    E: Transform<D, S>,
{
    let name = format!("each({})", element.description());
    from_fn(name, move |items: I| {
        items
            .into_iter()
            .map(|item| element.apply(item))
            .collect::<FunctorResult<Vec<D>>>()
    })
}

/// Keep the items `predicate` accepts
pub fn only<T, I, P>(predicate: P) -> impl Transform<Vec<T>, I>
where
    I: IntoIterator<Item = T>,
    T: Clone,
    P: Transform<bool, T>,
{
    let name = format!("only({})", predicate.description());
    from_fn(name, move |items: I| {
        let mut kept = Vec::new();
        for item in items {
            if predicate.apply(item.clone())? {
                kept.push(item);
            }
        }
        Ok(kept)
    })
}

/// Left fold: `folder(...folder(folder(left_most)(x0))(x1)...)(xn)`
pub fn fold<T, I>(left_most: T, folder: Curried<T, T, T>) -> impl Transform<T, I>
where
    I: IntoIterator<Item = T>,
    T: Clone + Send + Sync + 'static,
{
    let name = format!("fold({})", folder.description());
    from_fn(name, move |items: I| {
        let mut left = left_most.clone();
        for right in items {
            left = folder.apply_both(left, right)?;
        }
        Ok(left)
    })
}
