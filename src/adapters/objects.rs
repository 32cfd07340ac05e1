// Copyright 2025 Cowboy AI, LLC.

//! General-purpose value transforms
//!
//! Equality here is value equality (`PartialEq`). Shared handles compare by
//! payload unless the caller asks for [`Value::ptr_eq`].

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::cast::{self, Checked, Object, TypeDescriptor, Value};
use crate::transform::Transform;
use crate::transforms::{from_fn, lift};

/// Render the argument through `Display`
pub fn as_string<T: Display>() -> impl Transform<String, T> {
    lift("as_string", |value: T| value.to_string())
}

/// Whether the argument equals `value`
pub fn equal_to<T>(value: T) -> impl Transform<bool, T>
where
    T: PartialEq + Send + Sync,
{
    lift("equal_to", move |argument: T| argument == value)
}

/// Absent-aware equality: two absents are equal, absent never equals present
pub fn is<T>(value: Option<T>) -> impl Transform<bool, Option<T>>
where
    T: PartialEq + Send + Sync,
{
    lift("is", move |argument: Option<T>| argument == value)
}

/// Negate `predicate`
pub fn not<S, P>(predicate: P) -> impl Transform<bool, S>
where
    P: Transform<bool, S>,
{
    let name = format!("not({})", predicate.description());
    from_fn(name, move |argument: S| Ok(!predicate.apply(argument)?))
}

/// Whether a dynamic value is a `T`; absent is never an instance
pub fn instance_of<T: Any>(descriptor: TypeDescriptor<T>) -> impl Transform<bool, Object> {
    lift(
        format!("instance_of<{}>", descriptor.name()),
        move |argument: Object| {
            argument
                .as_ref()
                .is_some_and(|value: &Value| value.conforms_to(&descriptor))
        },
    )
}

/// Checked cast; same as [`cast::to`]
pub fn cast<T: Any + Send + Sync>(descriptor: TypeDescriptor<T>) -> Checked<T> {
    cast::to(descriptor)
}

/// Hash of the argument
///
/// Stable within a process only.
pub fn hash_code<T: Hash>() -> impl Transform<u64, T> {
    lift("hash_code", |value: T| {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    })
}
