// Copyright 2025 Cowboy AI, LLC.

//! Free functions building composite transforms
//!
//! Every function here returns a new value holding its delegates; nothing is
//! mutated and no delegate is invoked at construction time.

use std::marker::PhantomData;

use tracing::trace;

use crate::errors::{require, FunctorError, FunctorResult};
use crate::mutator::Mutator;
use crate::producer::Producer;
use crate::transform::{FnTransform, Transform};

pub use super::transpose::{transpose, Applied, Curried};

/// Sequential composition `g ∘ f`
pub struct Composite<G, F, I> {
    latter: G,
    former: F,
    _phantom: PhantomData<fn(I) -> I>,
}

impl<G, F, I> Composite<G, F, I> {
    /// Create a new composition applying `former` and then `latter`
    pub fn new(latter: G, former: F) -> Self {
        Self {
            latter,
            former,
            _phantom: PhantomData,
        }
    }
}

impl<D, I, S, G, F> Transform<D, S> for Composite<G, F, I>
where
    F: Transform<I, S>,
    G: Transform<D, I>,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        let intermediate = self.former.apply(argument)?;
        self.latter.apply(intermediate)
    }

    fn description(&self) -> String {
        format!(
            "{} ∘ {}",
            self.latter.description(),
            self.former.description()
        )
    }
}

/// Transform returning its argument unchanged
pub struct Identity<T> {
    _phantom: PhantomData<fn(T) -> T>,
}

impl<T> Identity<T> {
    /// Create a new identity transform
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Identity<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Transform<T, T> for Identity<T> {
    fn apply(&self, argument: T) -> FunctorResult<T> {
        Ok(argument)
    }

    fn description(&self) -> String {
        "identity".to_string()
    }
}

/// Transform ignoring its argument and returning a stored value
pub struct Always<T> {
    value: T,
}

impl<T, S> Transform<T, S> for Always<T>
where
    T: Clone + Send + Sync,
{
    fn apply(&self, _argument: S) -> FunctorResult<T> {
        Ok(self.value.clone())
    }

    fn description(&self) -> String {
        "always".to_string()
    }
}

/// Transform that edits a freshly produced target with its argument
pub struct FromMutator<M, P> {
    mutator: M,
    producer: P,
}

impl<D, S, M, P> Transform<D, S> for FromMutator<M, P>
where
    M: Mutator<D, S>,
    P: Producer<D>,
{
    fn apply(&self, argument: S) -> FunctorResult<D> {
        let mut target = self.producer.generate()?;
        self.mutator.edit(Some(&mut target), argument)?;
        Ok(target)
    }

    fn description(&self) -> String {
        format!(
            "from({}, {})",
            self.mutator.description(),
            self.producer.description()
        )
    }
}

/// Transform ignoring its argument and delegating to a producer
pub struct FromProducer<P> {
    producer: P,
}

impl<T, S, P> Transform<T, S> for FromProducer<P>
where
    P: Producer<T>,
{
    fn apply(&self, _argument: S) -> FunctorResult<T> {
        self.producer.generate()
    }

    fn description(&self) -> String {
        format!("from({})", self.producer.description())
    }
}

/// Compose `g` after `f`: `x -> g(f(x))`
pub fn compose<D, I, S, G, F>(g: G, f: F) -> Composite<G, F, I>
where
    F: Transform<I, S>,
    G: Transform<D, I>,
{
    trace!(g = %g.description(), f = %f.description(), "composing transforms");
    Composite::new(g, f)
}

/// Compose optional operands, failing with `InvalidArgument` if either is absent
///
/// Neither operand is invoked when the check fails.
pub fn try_compose<D, I, S, G, F>(g: Option<G>, f: Option<F>) -> FunctorResult<Composite<G, F, I>>
where
    F: Transform<I, S>,
    G: Transform<D, I>,
{
    let f = require(f, "f")?;
    let g = require(g, "g")?;
    Ok(compose(g, f))
}

/// Transform returning its argument unchanged
pub fn id<T>() -> Identity<T> {
    Identity::new()
}

/// Transform ignoring its argument and always returning `value`
///
/// Reference payloads such as `Arc` are handed out as clones of the same
/// handle, and an absent `value` stays absent.
pub fn always<T>(value: T) -> Always<T>
where
    T: Clone + Send + Sync,
{
    Always { value }
}

/// Bridge a mutator into a transform
///
/// Each application produces a fresh target from `producer`, edits it with
/// the argument and returns the edited target.
pub fn from_mutator<D, S, M, P>(mutator: M, producer: P) -> FromMutator<M, P>
where
    M: Mutator<D, S>,
    P: Producer<D>,
{
    trace!(
        mutator = %mutator.description(),
        producer = %producer.description(),
        "bridging mutator into transform"
    );
    FromMutator { mutator, producer }
}

/// [`from_mutator`] over optional operands
pub fn try_from_mutator<D, S, M, P>(
    mutator: Option<M>,
    producer: Option<P>,
) -> FunctorResult<FromMutator<M, P>>
where
    M: Mutator<D, S>,
    P: Producer<D>,
{
    let mutator = require(mutator, "mutator")?;
    let producer = require(producer, "producer")?;
    Ok(from_mutator(mutator, producer))
}

/// Transform ignoring its argument and delegating to `producer`
pub fn from_producer<T, P>(producer: P) -> FromProducer<P>
where
    P: Producer<T>,
{
    FromProducer { producer }
}

/// [`from_producer`] over an optional producer
pub fn try_from_producer<T, P>(producer: Option<P>) -> FunctorResult<FromProducer<P>>
where
    P: Producer<T>,
{
    Ok(from_producer(require(producer, "producer")?))
}

/// Named transform from a fallible closure
pub fn from_fn<D, S, F>(name: impl Into<String>, function: F) -> FnTransform<F, D, S>
where
    F: Fn(S) -> FunctorResult<D> + Send + Sync,
{
    FnTransform::new(name, function)
}

/// Named transform from an infallible closure
pub fn lift<D, S, F>(
    name: impl Into<String>,
    function: F,
) -> FnTransform<impl Fn(S) -> FunctorResult<D> + Send + Sync, D, S>
where
    F: Fn(S) -> D + Send + Sync,
{
    FnTransform::new(name, move |argument: S| Ok(function(argument)))
}

/// Named transform from a closure returning `anyhow::Result`
///
/// Foreign errors become [`FunctorError::Application`]; a `FunctorError`
/// returned through `anyhow` keeps its kind.
pub fn fallible<D, S, F>(
    name: impl Into<String>,
    function: F,
) -> FnTransform<impl Fn(S) -> FunctorResult<D> + Send + Sync, D, S>
where
    F: Fn(S) -> anyhow::Result<D> + Send + Sync,
{
    FnTransform::new(name, move |argument: S| {
        function(argument).map_err(FunctorError::from)
    })
}

/// Lossless conversion through `Into`
pub fn convert<T, S>() -> FnTransform<fn(S) -> FunctorResult<T>, T, S>
where
    S: Into<T>,
{
    let function: fn(S) -> FunctorResult<T> = |argument| Ok(argument.into());
    FnTransform::new("convert", function)
}

/// Checked conversion through `TryInto`
///
/// A rejected value fails with [`FunctorError::Application`] wrapping the
/// conversion error.
pub fn try_convert<T, S>() -> FnTransform<fn(S) -> FunctorResult<T>, T, S>
where
    S: TryInto<T>,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    let function: fn(S) -> FunctorResult<T> = |argument| {
        argument
            .try_into()
            .map_err(FunctorError::application_caused_by)
    };
    FnTransform::new("try_convert", function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutators;
    use crate::producers;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn add(suffix: &'static str) -> impl Transform<String, String> {
        lift(format!("add({suffix})"), move |s: String| s + suffix)
    }

    #[test]
    fn test_compose() {
        let c = compose(add("g"), add("f"));
        assert_eq!(c.apply("a".to_string()).unwrap(), "afg");
        assert_eq!(
            Transform::<String, String>::description(&c),
            "add(g) ∘ add(f)"
        );
    }

    #[test]
    fn test_try_compose_rejects_absent_operands() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = {
            let calls = Arc::clone(&calls);
            move || {
                let calls = Arc::clone(&calls);
                lift("counted", move |x: i32| {
                    calls.fetch_add(1, Ordering::SeqCst);
                    x
                })
            }
        };

        let err = try_compose::<i32, i32, i32, _, _>(Some(counted()), None::<Identity<i32>>)
            .err()
            .unwrap();
        assert!(matches!(err, FunctorError::InvalidArgument { name: "f" }));

        let err = try_compose::<i32, i32, i32, _, _>(None::<Identity<i32>>, Some(counted()))
            .err()
            .unwrap();
        assert!(matches!(err, FunctorError::InvalidArgument { name: "g" }));

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_id_preserves_reference() {
        let value = Arc::new(String::from("value"));
        let result = id().apply(Arc::clone(&value)).unwrap();
        assert!(Arc::ptr_eq(&result, &value));

        let absent: Option<Arc<String>> = id().apply(None).unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn test_always() {
        let value = Arc::new(7u64);
        let always = always(Arc::clone(&value));

        assert!(Arc::ptr_eq(&always.apply(Arc::clone(&value)).unwrap(), &value));
        assert!(Arc::ptr_eq(&always.apply("value").unwrap(), &value));
        assert!(Arc::ptr_eq(&always.apply(None::<()>).unwrap(), &value));
    }

    #[test]
    fn test_always_absent_value() {
        let always = always(None::<Arc<String>>);
        assert!(always.apply(42).unwrap().is_none());
    }

    #[test]
    fn test_from_mutator() {
        let generator = producers::from_fn("new_buffer", || Ok(String::from("-")));
        let append = mutators::from_fn("append", |target: &mut String, argument: &str| {
            target.push_str(argument);
            Ok(())
        });
        let builder = from_mutator(append, generator);

        assert_eq!(builder.apply("A").unwrap(), "-A");
        assert_eq!(builder.apply("Hello").unwrap(), "-Hello");
    }

    #[test]
    fn test_from_producer() {
        let function = from_producer(producers::constant(100));

        assert_eq!(function.apply(1).unwrap(), 100);
        assert_eq!(function.apply("hello").unwrap(), 100);
        assert_eq!(function.apply(None::<i32>).unwrap(), 100);
    }

    #[test]
    fn test_try_from_producer_rejects_absent() {
        let err = try_from_producer::<i32, producers::Constant<i32>>(None)
            .err()
            .unwrap();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_fallible_wraps_foreign_errors() {
        let parse = fallible("parse", |s: &str| Ok(s.parse::<i32>()?));

        assert_eq!(parse.apply("12").unwrap(), 12);
        assert!(parse.apply("twelve").unwrap_err().is_application_error());
    }

    #[test]
    fn test_convert_and_try_convert() {
        let widen = convert::<i64, i32>();
        assert_eq!(widen.apply(-3).unwrap(), -3i64);

        let narrow = try_convert::<u8, i32>();
        assert_eq!(narrow.apply(255).unwrap(), 255u8);
        assert!(narrow.apply(256).unwrap_err().is_application_error());
    }
}
