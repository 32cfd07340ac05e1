// Copyright 2025 Cowboy AI, LLC.

//! Numeric conversions

use std::str::FromStr;

use crate::errors::FunctorError;
use crate::transform::Transform;
use crate::transforms::{self, from_fn};

/// Lossless widening, e.g. `i32 -> i64`
pub fn widen<T, S>() -> impl Transform<T, S>
where
    S: Into<T>,
{
    transforms::convert::<T, S>()
}

/// Checked narrowing, e.g. `i64 -> u8`; out-of-range values fail with `ApplicationError`
pub fn narrow<T, S>() -> impl Transform<T, S>
where
    S: TryInto<T>,
    S::Error: std::error::Error + Send + Sync + 'static,
{
    transforms::try_convert::<T, S>()
}

/// Parse a number from text; malformed text fails with `ApplicationError`
pub fn parse<T, S>() -> impl Transform<T, S>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    S: AsRef<str>,
{
    from_fn(format!("parse<{}>", std::any::type_name::<T>()), |text: S| {
        text.as_ref()
            .trim()
            .parse::<T>()
            .map_err(FunctorError::application_caused_by)
    })
}
