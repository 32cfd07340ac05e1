// Copyright 2025 Cowboy AI, LLC.

//! String access

use crate::errors::{FunctorError, FunctorResult};
use crate::transform::Transform;
use crate::transforms::{from_fn, lift};

fn nth_char(text: &str, index: usize) -> FunctorResult<char> {
    text.chars().nth(index).ok_or_else(|| {
        FunctorError::application(format!(
            "char index {index} out of range for length {}",
            text.chars().count()
        ))
    })
}

/// Character at a fixed position
pub fn char_at<S>(index: usize) -> impl Transform<char, S>
where
    S: AsRef<str>,
{
    from_fn(format!("char_at({index})"), move |text: S| {
        nth_char(text.as_ref(), index)
    })
}

/// Character at the position computed from the string itself
pub fn char_at_with<S, I>(index: I) -> impl Transform<char, S>
where
    S: AsRef<str> + Clone,
    I: Transform<usize, S>,
{
    let name = format!("char_at({})", index.description());
    from_fn(name, move |text: S| {
        let position = index.apply(text.clone())?;
        nth_char(text.as_ref(), position)
    })
}

/// Number of characters
pub fn length<S>() -> impl Transform<usize, S>
where
    S: AsRef<str>,
{
    lift("length", |text: S| text.as_ref().chars().count())
}

/// Concatenate the parts with `delimiter` between them
pub fn join<I>(delimiter: impl Into<String>) -> impl Transform<String, I>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let delimiter = delimiter.into();
    lift(format!("join({delimiter:?})"), move |parts: I| {
        let mut buf = String::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                buf.push_str(&delimiter);
            }
            buf.push_str(part.as_ref());
        }
        buf
    })
}
