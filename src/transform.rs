// Copyright 2025 Cowboy AI, LLC.

//! The Transform capability
//!
//! A transform maps an argument of type `S` to a result of type `D`. Transforms
//! are immutable once built; combining them never touches the operands and
//! always yields a new composite.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::errors::{require, FunctorResult};
use crate::transforms::Composite;

/// Shared handle to a type-erased transform
pub type SharedTransform<D, S> = Arc<dyn Transform<D, S>>;

/// A function from `S` to `D`
///
/// Composition is contravariant in the argument and covariant in the result:
/// any leaf whose argument and result types line up can be swapped into an
/// existing chain without touching the other links.
pub trait Transform<D, S>: Send + Sync {
    /// Apply the transform to `argument`
    ///
    /// Fails with [`FunctorError::Application`](crate::FunctorError::Application)
    /// when no value can be computed. Failures raised by leaf code pass through
    /// unchanged.
    fn apply(&self, argument: S) -> FunctorResult<D>;

    /// Chain `next` after this transform: `x -> next.apply(self.apply(x))`
    fn and_then<R, N>(self, next: N) -> Composite<N, Self, D>
    where
        Self: Sized,
        N: Transform<R, D>,
    {
        Composite::new(next, self)
    }

    /// Chain an optional `next`, failing with `InvalidArgument` when absent
    fn try_and_then<R, N>(self, next: Option<N>) -> FunctorResult<Composite<N, Self, D>>
    where
        Self: Sized,
        N: Transform<R, D>,
    {
        let next = require(next, "next")?;
        Ok(self.and_then(next))
    }

    /// Get a human-readable description
    fn description(&self) -> String {
        short_type_name::<Self>()
    }
}

impl<D, S, T> Transform<D, S> for Arc<T>
where
    T: Transform<D, S> + ?Sized,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        (**self).apply(argument)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<D, S, T> Transform<D, S> for Box<T>
where
    T: Transform<D, S> + ?Sized,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        (**self).apply(argument)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<D, S, T> Transform<D, S> for &T
where
    T: Transform<D, S> + ?Sized,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        (**self).apply(argument)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Transform backed by a closure
pub struct FnTransform<F, D, S> {
    name: String,
    function: F,
    _phantom: PhantomData<fn(S) -> D>,
}

impl<F, D, S> FnTransform<F, D, S>
where
    F: Fn(S) -> FunctorResult<D> + Send + Sync,
{
    /// Wrap `function` under the given name
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
            _phantom: PhantomData,
        }
    }
}

impl<F, D, S> Transform<D, S> for FnTransform<F, D, S>
where
    F: Fn(S) -> FunctorResult<D> + Send + Sync,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        (self.function)(argument)
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

/// Last path segment of a type name, generics included
pub(crate) fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let start = base.rfind("::").map(|i| i + 2).unwrap_or(0);
    full[start..].to_string()
}
