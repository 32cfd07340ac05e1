// Copyright 2025 Cowboy AI, LLC.

//! Free functions building composite producers

use std::marker::PhantomData;

use tracing::trace;

use crate::errors::{require, FunctorResult};
use crate::producer::{FnProducer, Producer};
use crate::transform::Transform;

/// Producer feeding another producer's values through a transform
pub struct Filtered<N, P, I> {
    functor: N,
    source: P,
    _phantom: PhantomData<fn(I) -> I>,
}

impl<N, P, I> Filtered<N, P, I> {
    /// Create a producer applying `functor` to every value of `source`
    pub fn new(functor: N, source: P) -> Self {
        Self {
            functor,
            source,
            _phantom: PhantomData,
        }
    }
}

impl<T, I, N, P> Producer<T> for Filtered<N, P, I>
where
    P: Producer<I>,
    N: Transform<T, I>,
{
    fn generate(&self) -> FunctorResult<T> {
        let intermediate = self.source.generate()?;
        self.functor.apply(intermediate)
    }

    fn description(&self) -> String {
        format!(
            "{} ∘ {}",
            self.functor.description(),
            self.source.description()
        )
    }
}

/// Producer always returning the same stored value
pub struct Constant<T> {
    value: T,
}

impl<T> Producer<T> for Constant<T>
where
    T: Clone + Send + Sync,
{
    fn generate(&self) -> FunctorResult<T> {
        Ok(self.value.clone())
    }

    fn description(&self) -> String {
        "constant".to_string()
    }
}

/// Producer equal to `() -> functor.apply(producer.generate())`
pub fn compose<T, I, N, P>(functor: N, producer: P) -> Filtered<N, P, I>
where
    P: Producer<I>,
    N: Transform<T, I>,
{
    trace!(
        functor = %functor.description(),
        producer = %producer.description(),
        "composing producer"
    );
    Filtered::new(functor, producer)
}

/// [`compose`] over optional operands
pub fn try_compose<T, I, N, P>(
    functor: Option<N>,
    producer: Option<P>,
) -> FunctorResult<Filtered<N, P, I>>
where
    P: Producer<I>,
    N: Transform<T, I>,
{
    let functor = require(functor, "functor")?;
    let producer = require(producer, "producer")?;
    Ok(compose(functor, producer))
}

/// Producer always returning `value`
///
/// `Arc` payloads come back as the same reference on every call.
pub fn constant<T>(value: T) -> Constant<T>
where
    T: Clone + Send + Sync,
{
    Constant { value }
}

/// Named producer from a closure, typically one allocating a fresh value per call
pub fn from_fn<T, F>(name: impl Into<String>, function: F) -> FnProducer<F, T>
where
    F: Fn() -> FunctorResult<T> + Send + Sync,
{
    FnProducer::new(name, function)
}
