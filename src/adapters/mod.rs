// Copyright 2025 Cowboy AI, LLC.

//! Leaf transforms over host primitives
//!
//! Each constructor returns a ready [`Transform`](crate::Transform) wrapping a
//! single call into the standard library. They are plain leaves: they satisfy
//! the capability contract and carry no composition logic of their own.

pub mod iterables;
pub mod lists;
pub mod maps;
pub mod numbers;
pub mod objects;
pub mod strings;
