// Copyright 2025 Cowboy AI, LLC.

//! Argument-order inversion for curried two-argument transforms
//!
//! A curried transform `S -> (I -> D)` is represented by [`Curried<D, I, S>`].
//! Transposing yields `I -> (S -> D)` with `g(i)(s) == f(s)(i)`. The variant
//! tag records whether a value already is a transposition, so transposing it
//! again hands back the original instead of stacking a second wrapper.

use std::sync::Arc;

use tracing::trace;

use crate::errors::FunctorResult;
use crate::transform::{SharedTransform, Transform};

/// A curried transform `S -> (I -> D)`
pub enum Curried<D, I, S> {
    /// Caller-supplied curried transform
    Direct(SharedTransform<SharedTransform<D, I>, S>),
    /// Argument-order inversion of a `I -> (S -> D)` transform
    Transposed(Arc<Curried<D, S, I>>),
}

impl<D, I, S> Curried<D, I, S>
where
    D: 'static,
    I: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    /// Wrap a caller-supplied curried transform
    pub fn new<F>(function: F) -> Self
    where
        F: Transform<SharedTransform<D, I>, S> + 'static,
    {
        Curried::Direct(Arc::new(function))
    }

    /// Whether this value is the transposition of another curried transform
    pub fn is_transposed(&self) -> bool {
        matches!(self, Curried::Transposed(_))
    }

    /// Apply both arguments at once: `self(s)(i)`
    pub fn apply_both(&self, first: S, second: I) -> FunctorResult<D> {
        self.apply(first)?.apply(second)
    }
}

impl<D, I, S> Clone for Curried<D, I, S> {
    fn clone(&self) -> Self {
        match self {
            Curried::Direct(function) => Curried::Direct(Arc::clone(function)),
            Curried::Transposed(original) => Curried::Transposed(Arc::clone(original)),
        }
    }
}

impl<D, I, S> Transform<SharedTransform<D, I>, S> for Curried<D, I, S>
where
    D: 'static,
    I: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    fn apply(&self, argument: S) -> FunctorResult<SharedTransform<D, I>> {
        match self {
            Curried::Direct(function) => function.apply(argument),
            Curried::Transposed(original) => Ok(Arc::new(Applied {
                original: Arc::clone(original),
                argument,
            })),
        }
    }

    fn description(&self) -> String {
        match self {
            Curried::Direct(function) => function.description(),
            Curried::Transposed(original) => format!("transpose({})", original.description()),
        }
    }
}

/// A transposed curried transform with its first argument fixed
///
/// Applying it to `i` evaluates `original(i)(argument)`.
pub struct Applied<D, I, S> {
    original: Arc<Curried<D, S, I>>,
    argument: S,
}

impl<D, I, S> Transform<D, I> for Applied<D, I, S>
where
    D: 'static,
    I: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    fn apply(&self, argument: I) -> FunctorResult<D> {
        self.original.apply(argument)?.apply(self.argument.clone())
    }

    fn description(&self) -> String {
        format!("transpose({})", self.original.description())
    }
}

/// Invert the argument order of a curried transform
///
/// `transpose(f)(i)(s) == f(s)(i)`. Transposing a transposition returns the
/// transform it was built from.
pub fn transpose<D, I, S>(function: Curried<D, I, S>) -> Curried<D, S, I>
where
    D: 'static,
    I: Clone + Send + Sync + 'static,
    S: Clone + Send + Sync + 'static,
{
    match function {
        Curried::Transposed(original) => {
            trace!("unwrapping transposed transform");
            Arc::unwrap_or_clone(original)
        }
        direct @ Curried::Direct(_) => Curried::Transposed(Arc::new(direct)),
    }
}
