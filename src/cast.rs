// Copyright 2025 Cowboy AI, LLC.

//! Type-recovery casts over dynamic values
//!
//! Dynamic values travel as [`Object`], an optional [`Value`] that remembers
//! the concrete type it was built from. A cast recovers the concrete type:
//!
//! - [`to`] checks conformance against a caller-supplied [`TypeDescriptor`] at
//!   the cast site; absent stays absent and a mismatch fails with
//!   `ApplicationError` wrapping the `TypeMismatch`.
//! - [`unchecked`] never fails at the cast site. It yields an [`Unverified`]
//!   handle and any mistyping only surfaces at the first genuine use, when the
//!   handle is resolved. That deferred failure is an accepted risk of choosing
//!   the unchecked form.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use crate::errors::{FunctorError, FunctorResult};
use crate::transform::Transform;

/// Explicit runtime token describing the type `T`
pub struct TypeDescriptor<T> {
    id: TypeId,
    name: &'static str,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Any> TypeDescriptor<T> {
    /// Descriptor for `T`
    pub fn of() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            _phantom: PhantomData,
        }
    }
}

impl<T> TypeDescriptor<T> {
    /// Runtime identity of the described type
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Name of the described type
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for TypeDescriptor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeDescriptor<T> {}

impl<T> fmt::Debug for TypeDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeDescriptor").field(&self.name).finish()
    }
}

/// A shared, dynamically typed value tagged with its concrete type
#[derive(Clone)]
pub struct Value {
    inner: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

/// A possibly absent dynamic value
pub type Object = Option<Value>;

impl Value {
    /// Wrap `value`
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Wrap an already shared value without copying it
    pub fn from_arc<T: Any + Send + Sync>(value: Arc<T>) -> Self {
        Self {
            inner: value,
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Name of the concrete type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the concrete type is the one `descriptor` describes
    pub fn conforms_to<T>(&self, descriptor: &TypeDescriptor<T>) -> bool {
        self.type_id == descriptor.id()
    }

    /// Shared handle to the payload if it is a `T`
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.inner).downcast::<T>().ok()
    }

    /// Whether both values share the same payload
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Value")
            .field("type", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Checked cast to `T`
pub struct Checked<T> {
    descriptor: TypeDescriptor<T>,
}

impl<T: Any + Send + Sync> Checked<T> {
    /// Descriptor values are checked against
    pub fn descriptor(&self) -> TypeDescriptor<T> {
        self.descriptor
    }
}

impl<T> Transform<Option<Arc<T>>, Object> for Checked<T>
where
    T: Any + Send + Sync,
{
    fn apply(&self, argument: Object) -> FunctorResult<Option<Arc<T>>> {
        let Some(value) = argument else {
            return Ok(None);
        };
        if value.conforms_to(&self.descriptor) {
            if let Some(result) = value.downcast::<T>() {
                return Ok(Some(result));
            }
        }
        debug!(
            expected = self.descriptor.name(),
            found = value.type_name(),
            "checked cast rejected value"
        );
        Err(FunctorError::application_caused_by(
            FunctorError::type_mismatch(self.descriptor.name(), value.type_name()),
        ))
    }

    fn description(&self) -> String {
        format!("cast<{}>", self.descriptor.name())
    }
}

/// Unchecked cast to `T`
pub struct Unchecked<T> {
    _phantom: PhantomData<fn() -> T>,
}

impl<T> Transform<Unverified<T>, Object> for Unchecked<T>
where
    T: Any + Send + Sync,
{
    fn apply(&self, argument: Object) -> FunctorResult<Unverified<T>> {
        Ok(Unverified {
            value: argument,
            _phantom: PhantomData,
        })
    }

    fn description(&self) -> String {
        format!("unchecked<{}>", std::any::type_name::<T>())
    }
}

/// A value assumed, but not verified, to be a `T`
pub struct Unverified<T> {
    value: Object,
    _phantom: PhantomData<fn() -> T>,
}

impl<T: Any + Send + Sync> Unverified<T> {
    /// Whether the underlying value is absent
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    /// Use the value as a `T`
    ///
    /// This is where a wrong assumption made at the cast site fails, with
    /// [`FunctorError::TypeMismatch`].
    pub fn resolve(self) -> FunctorResult<Option<Arc<T>>> {
        match self.value {
            None => Ok(None),
            Some(value) => match value.downcast::<T>() {
                Some(result) => Ok(Some(result)),
                None => Err(FunctorError::type_mismatch(
                    std::any::type_name::<T>(),
                    value.type_name(),
                )),
            },
        }
    }

    /// Give the value back without using it
    pub fn into_object(self) -> Object {
        self.value
    }
}

impl<T> fmt::Debug for Unverified<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Unverified").field(&self.value).finish()
    }
}

/// Checked cast to the type `descriptor` describes
pub fn to<T: Any + Send + Sync>(descriptor: TypeDescriptor<T>) -> Checked<T> {
    Checked { descriptor }
}

/// Unchecked cast to `T`
pub fn unchecked<T: Any + Send + Sync>() -> Unchecked<T> {
    Unchecked {
        _phantom: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_reports_its_type() {
        let value = Value::new(42i32);

        assert_eq!(value.type_name(), "i32");
        assert!(value.conforms_to(&TypeDescriptor::<i32>::of()));
        assert!(!value.conforms_to(&TypeDescriptor::<i64>::of()));
        assert!(value.downcast::<i64>().is_none());
    }

    #[test]
    fn test_checked_preserves_reference() {
        let shared = Arc::new(String::from("Hello"));
        let value = Value::from_arc(Arc::clone(&shared));

        let result = to(TypeDescriptor::<String>::of())
            .apply(Some(value))
            .unwrap()
            .unwrap();
        assert!(Arc::ptr_eq(&result, &shared));
    }

    #[test]
    fn test_checked_failure_wraps_mismatch() {
        use std::error::Error;

        let err = to(TypeDescriptor::<String>::of())
            .apply(Some(Value::new(1i32)))
            .unwrap_err();

        assert!(err.is_application_error());
        let source = err.source().unwrap();
        assert_eq!(
            source.to_string(),
            format!(
                "Type mismatch: expected {}, found i32",
                std::any::type_name::<String>()
            )
        );
    }

    #[test]
    fn test_unchecked_defers_failure() {
        let cast = unchecked::<String>();
        let unverified = cast.apply(Some(Value::new(1i32))).unwrap();

        assert!(!unverified.is_absent());
        assert!(unverified.resolve().unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_unverified_into_object() {
        let value = Value::new(3u8);
        let unverified = unchecked::<String>().apply(Some(value.clone())).unwrap();

        let object = unverified.into_object().unwrap();
        assert!(object.ptr_eq(&value));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(to(TypeDescriptor::<u8>::of()).description(), "cast<u8>");
        assert_eq!(unchecked::<u8>().description(), "unchecked<u8>");
    }
}
