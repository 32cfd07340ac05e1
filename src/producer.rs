// Copyright 2025 Cowboy AI, LLC.

//! The Producer capability
//!
//! A producer supplies values without taking an argument. It decouples where
//! a value originates from how it is later transformed.

use std::marker::PhantomData;
use std::sync::Arc;

use crate::errors::{require, FunctorResult};
use crate::producers::Filtered;
use crate::transform::{short_type_name, Transform};

/// Shared handle to a type-erased producer
pub type SharedProducer<T> = Arc<dyn Producer<T>>;

/// A zero-argument value supplier
pub trait Producer<T>: Send + Sync {
    /// Produce a value
    ///
    /// Pure producers return the same value on every call; impure ones may
    /// allocate a fresh value each time.
    fn generate(&self) -> FunctorResult<T>;

    /// Feed every produced value through `next`: `() -> next.apply(self.generate())`
    fn and_then<R, N>(self, next: N) -> Filtered<N, Self, T>
    where
        Self: Sized,
        N: Transform<R, T>,
    {
        Filtered::new(next, self)
    }

    /// Chain an optional `next`, failing with `InvalidArgument` when absent
    fn try_and_then<R, N>(self, next: Option<N>) -> FunctorResult<Filtered<N, Self, T>>
    where
        Self: Sized,
        N: Transform<R, T>,
    {
        let next = require(next, "next")?;
        Ok(self.and_then(next))
    }

    /// Get a human-readable description
    fn description(&self) -> String {
        short_type_name::<Self>()
    }
}

impl<T, P> Producer<T> for Arc<P>
where
    P: Producer<T> + ?Sized,
{
    fn generate(&self) -> FunctorResult<T> {
        (**self).generate()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<T, P> Producer<T> for Box<P>
where
    P: Producer<T> + ?Sized,
{
    fn generate(&self) -> FunctorResult<T> {
        (**self).generate()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Producer backed by a closure
pub struct FnProducer<F, T> {
    name: String,
    function: F,
    _phantom: PhantomData<fn() -> T>,
}

impl<F, T> FnProducer<F, T>
where
    F: Fn() -> FunctorResult<T> + Send + Sync,
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

impl<F, T> Producer<T> for FnProducer<F, T>
where
    F: Fn() -> FunctorResult<T> + Send + Sync,
{
    fn generate(&self) -> FunctorResult<T> {
        (self.function)()
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}
