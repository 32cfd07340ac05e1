// Copyright 2025 Cowboy AI, LLC.

//! The Mutator capability
//!
//! A mutator applies an effect to an existing target, driven by an argument,
//! and hands the very same target back. It never constructs a new target.
//!
//! Sharing one target across threads is the caller's business: mutators take
//! `&mut D`, so concurrent edits need the caller's own lock around the target.

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{FunctorError, FunctorResult};
use crate::producer::Producer;
use crate::transform::short_type_name;
use crate::transforms::{self, FromMutator};

/// Shared handle to a type-erased mutator
pub type SharedMutator<D, S> = Arc<dyn Mutator<D, S>>;

/// An in-place editor of a `D` driven by an `S`
pub trait Mutator<D, S>: Send + Sync {
    /// Apply the effect to `target`
    ///
    /// Fails with [`FunctorError::Edit`] when the effect cannot complete.
    fn edit_in_place(&self, target: &mut D, argument: S) -> FunctorResult<()>;

    /// Edit `target` and return the same reference
    ///
    /// Fails with `InvalidArgument` when `target` is absent, before any effect
    /// is attempted.
    fn edit<'t>(&self, target: Option<&'t mut D>, argument: S) -> FunctorResult<&'t mut D> {
        let Some(target) = target else {
            debug!(mutator = %self.description(), "edit target is absent");
            return Err(FunctorError::invalid_argument("target"));
        };
        self.edit_in_place(target, argument)?;
        Ok(target)
    }

    /// Turn this mutator into a transform editing targets made by `producer`
    fn into_transform<P>(self, producer: P) -> FromMutator<Self, P>
    where
        Self: Sized,
        P: Producer<D>,
    {
        transforms::from_mutator(self, producer)
    }

    /// Get a human-readable description
    fn description(&self) -> String {
        short_type_name::<Self>()
    }
}

impl<D, S, M> Mutator<D, S> for Arc<M>
where
    M: Mutator<D, S> + ?Sized,
{
    fn edit_in_place(&self, target: &mut D, argument: S) -> FunctorResult<()> {
        (**self).edit_in_place(target, argument)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<D, S, M> Mutator<D, S> for Box<M>
where
    M: Mutator<D, S> + ?Sized,
{
    fn edit_in_place(&self, target: &mut D, argument: S) -> FunctorResult<()> {
        (**self).edit_in_place(target, argument)
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

/// Mutator backed by a closure
pub struct FnMutator<F, D, S> {
    name: String,
    function: F,
    _phantom: PhantomData<fn(&mut D, S)>,
}

impl<F, D, S> FnMutator<F, D, S>
where
    F: Fn(&mut D, S) -> FunctorResult<()> + Send + Sync,
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

impl<F, D, S> Mutator<D, S> for FnMutator<F, D, S>
where
    F: Fn(&mut D, S) -> FunctorResult<()> + Send + Sync,
{
    fn edit_in_place(&self, target: &mut D, argument: S) -> FunctorResult<()> {
        (self.function)(target, argument)
    }

    fn description(&self) -> String {
        self.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producers;
    use crate::transform::Transform;

    struct Append;

    impl<'a> Mutator<String, &'a str> for Append {
        fn edit_in_place(&self, target: &mut String, argument: &'a str) -> FunctorResult<()> {
            target.push_str(argument);
            Ok(())
        }
    }

    struct Frozen;

    impl Mutator<Vec<u8>, u8> for Frozen {
        fn edit_in_place(&self, _target: &mut Vec<u8>, _argument: u8) -> FunctorResult<()> {
            Err(FunctorError::edit("target is frozen"))
        }
    }

    #[test]
    fn test_edit_returns_same_target() {
        let mut buf = String::from(">");
        let address = &buf as *const String;

        let edited = Append.edit(Some(&mut buf), "abc").unwrap();
        assert!(std::ptr::eq(&*edited, address));
        assert_eq!(edited, ">abc");
    }

    #[test]
    fn test_edit_rejects_absent_target() {
        let err = Append.edit(None, "abc").unwrap_err();
        assert!(matches!(err, FunctorError::InvalidArgument { name: "target" }));
    }

    #[test]
    fn test_edit_error_propagates() {
        let mut bytes = vec![1, 2];
        let err = Frozen.edit(Some(&mut bytes), 3).unwrap_err();

        assert!(err.is_edit_error());
        assert_eq!(bytes, vec![1, 2]);
    }

    #[test]
    fn test_into_transform() {
        let fresh = producers::from_fn("new_buffer", || Ok(String::from("-")));
        let builder = Append.into_transform(fresh);
        assert_eq!(builder.apply("A").unwrap(), "-A");
        assert_eq!(builder.apply("B").unwrap(), "-B");
    }
}
