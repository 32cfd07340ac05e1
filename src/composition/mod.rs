// Copyright 2025 Cowboy AI, LLC.

//! Composition engine
//!
//! Free functions combining transforms, producers and mutators into composite
//! graphs. Composites hold their delegates and are immutable once built; they
//! may be invoked concurrently as long as every leaf they hold allows it. The
//! engine never catches, retries or recovers from leaf failures.

pub mod mutators;
pub mod producers;
pub mod transforms;
mod transpose;
