// Copyright 2025 Cowboy AI, LLC.

//! # CIM Compose
//!
//! A small algebra of composable functions.
//!
//! Three abstractions carry the algebra:
//! - **Transform**: derives a result of type `D` from an argument of type `S`
//! - **Producer**: creates a value of type `T` on demand, with no input
//! - **Mutator**: edits a target of type `D` in place using an argument of type `S`
//!
//! The [`transforms`], [`producers`] and [`mutators`] modules build new
//! instances out of existing ones (composition, identity, constants,
//! transposition of curried transforms, bridging mutators into transforms).
//! [`cast`] recovers concrete types from dynamically typed [`Value`]s, and the
//! optional `adapters` feature provides ready-made transforms over strings,
//! numbers, collections and general values.
//!
//! ## Conventions
//!
//! 1. **Absence**: a possibly missing value is an `Option`. Operations whose
//!    operands are optional have `try_*` forms that fail with
//!    [`FunctorError::InvalidArgument`] naming the missing operand.
//! 2. **Immutability**: composites never change after construction and may be
//!    shared across threads; every trait requires `Send + Sync`.
//! 3. **Laziness**: building a composite never invokes its delegates.
//! 4. **Propagation**: failures from delegates surface unchanged.
//!
//! ```
//! use cim_compose::{transforms, Transform};
//!
//! let exclaim = transforms::lift("exclaim", |s: String| s + "!");
//! let greet = transforms::lift("greet", |name: &str| format!("Hello, {name}"));
//! let both = transforms::compose(exclaim, greet);
//!
//! assert_eq!(both.apply("world").unwrap(), "Hello, world!");
//! ```

#![warn(missing_docs)]

mod errors;
mod mutator;
mod producer;
mod transform;

pub mod cast;
pub mod composition;

#[cfg(feature = "adapters")]
pub mod adapters;

// Re-export core types
pub use cast::{Object, TypeDescriptor, Value};
pub use composition::{mutators, producers, transforms};
pub use errors::{require, FunctorError, FunctorResult, SharedCause};
pub use mutator::{FnMutator, Mutator, SharedMutator};
pub use producer::{FnProducer, Producer, SharedProducer};
pub use transform::{FnTransform, SharedTransform, Transform};
