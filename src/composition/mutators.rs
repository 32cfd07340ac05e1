// Copyright 2025 Cowboy AI, LLC.

//! Free functions building composite mutators
//!
//! A sequence runs its mutators one after another against the same target
//! reference, in registration order. Ordering is guaranteed; mutual exclusion
//! is not, so a target shared between threads has to be locked by the caller.

use std::marker::PhantomData;

use tracing::trace;

use crate::errors::{require, FunctorError, FunctorResult};
use crate::mutator::{FnMutator, Mutator};
use crate::transform::Transform;

/// Mutator converting its argument before handing it to another mutator
pub struct Filtered<E, F, I> {
    editor: E,
    functor: F,
    _phantom: PhantomData<fn(I) -> I>,
}

impl<D, I, A, E, F> Mutator<D, A> for Filtered<E, F, I>
where
    E: Mutator<D, I>,
    F: Transform<I, A>,
{
    fn edit_in_place(&self, target: &mut D, argument: A) -> FunctorResult<()> {
        let intermediate = self.functor.apply(argument)?;
        self.editor.edit_in_place(target, intermediate)
    }

    fn description(&self) -> String {
        format!(
            "{} ∘ {}",
            self.editor.description(),
            self.functor.description()
        )
    }
}

/// Mutators applied in order to the same target
pub struct Sequence<E> {
    editors: Vec<E>,
}

impl<E> Sequence<E> {
    /// Number of mutators in the sequence
    pub fn len(&self) -> usize {
        self.editors.len()
    }

    /// Whether the sequence holds no mutators
    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl<D, S, E> Mutator<D, S> for Sequence<E>
where
    E: Mutator<D, S>,
    S: Clone,
{
    fn edit_in_place(&self, target: &mut D, argument: S) -> FunctorResult<()> {
        for editor in &self.editors {
            editor.edit_in_place(target, argument.clone())?;
        }
        Ok(())
    }

    fn description(&self) -> String {
        let parts: Vec<String> = self.editors.iter().map(|e| e.description()).collect();
        format!("[{}]", parts.join(", "))
    }
}

/// Mutator leaving its target untouched
pub struct Through<D, S> {
    _phantom: PhantomData<fn(&mut D, S)>,
}

impl<D, S> Mutator<D, S> for Through<D, S> {
    fn edit_in_place(&self, _target: &mut D, _argument: S) -> FunctorResult<()> {
        Ok(())
    }

    fn description(&self) -> String {
        "through".to_string()
    }
}

/// Mutator taking `A`, converting it to `I` with `functor`, then editing with `editor`
pub fn compose<D, I, A, E, F>(editor: E, functor: F) -> Filtered<E, F, I>
where
    E: Mutator<D, I>,
    F: Transform<I, A>,
{
    trace!(
        editor = %editor.description(),
        functor = %functor.description(),
        "composing mutator with transform"
    );
    Filtered {
        editor,
        functor,
        _phantom: PhantomData,
    }
}

/// [`compose`] over optional operands
pub fn try_compose<D, I, A, E, F>(
    editor: Option<E>,
    functor: Option<F>,
) -> FunctorResult<Filtered<E, F, I>>
where
    E: Mutator<D, I>,
    F: Transform<I, A>,
{
    let editor = require(editor, "editor")?;
    let functor = require(functor, "functor")?;
    Ok(compose(editor, functor))
}

/// Mutator applying each of `editors` to the same target, in iteration order
///
/// The editors are collected once, at construction time.
pub fn sequence<D, S, E, It>(editors: It) -> Sequence<E>
where
    It: IntoIterator<Item = E>,
    E: Mutator<D, S>,
    S: Clone,
{
    let editors: Vec<E> = editors.into_iter().collect();
    trace!(count = editors.len(), "composing mutator sequence");
    Sequence { editors }
}

/// No-op mutator; the target must still be present
pub fn through<D, S>() -> Through<D, S> {
    Through {
        _phantom: PhantomData,
    }
}

/// Named mutator from a closure
pub fn from_fn<D, S, F>(name: impl Into<String>, function: F) -> FnMutator<F, D, S>
where
    F: Fn(&mut D, S) -> FunctorResult<()> + Send + Sync,
{
    FnMutator::new(name, function)
}

/// Mutator failing with [`FunctorError::Edit`] when `check` rejects the target
///
/// Useful as the first element of a [`sequence`] to guard the remaining edits.
pub fn guard<D, S, F>(
    name: impl Into<String>,
    check: F,
) -> FnMutator<impl Fn(&mut D, S) -> FunctorResult<()> + Send + Sync, D, S>
where
    F: Fn(&D) -> bool + Send + Sync,
{
    let name = name.into();
    let message = format!("{name} rejected the target");
    FnMutator::new(name, move |target: &mut D, _argument: S| {
        if check(target) {
            Ok(())
        } else {
            Err(FunctorError::edit(message.clone()))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mutator::SharedMutator;
    use crate::transforms::lift;
    use std::sync::Arc;

    fn append<'a>() -> impl Mutator<String, &'a str> {
        from_fn("append", |target: &mut String, argument: &str| {
            target.push_str(argument);
            Ok(())
        })
    }

    fn add(suffix: &'static str) -> impl Transform<String, String> {
        lift(format!("add({suffix})"), move |s: String| s + suffix)
    }

    fn append_owned() -> impl Mutator<String, String> {
        from_fn("append", |target: &mut String, argument: String| {
            target.push_str(&argument);
            Ok(())
        })
    }

    #[test]
    fn test_compose_with_transform() {
        let editor = compose(append_owned(), add(", world!"));
        let mut buf = String::new();

        let edited = editor.edit(Some(&mut buf), "Hello".to_string()).unwrap();
        assert_eq!(edited, "Hello, world!");
    }

    #[test]
    fn test_compose_with_transform_rejects_absent_target() {
        let editor = compose(append_owned(), add(", world!"));
        let err = editor.edit(None, "Hello".to_string()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sequence_shares_target_and_argument() {
        let list: Vec<SharedMutator<String, String>> = vec![
            Arc::new(compose(append_owned(), add("0"))),
            Arc::new(compose(append_owned(), add("1"))),
            Arc::new(compose(append_owned(), add("2"))),
        ];
        let editor = sequence(list);
        let mut buf = String::new();

        let edited = editor.edit(Some(&mut buf), "Hello".to_string()).unwrap();
        assert_eq!(edited, "Hello0Hello1Hello2");
        assert_eq!(editor.len(), 3);
    }

    #[test]
    fn test_sequence_rejects_absent_target() {
        let editor = sequence(vec![append(), append()]);
        let err = editor.edit(None, "Hello").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_sequence_stops_at_first_failure() {
        let list: Vec<SharedMutator<String, &str>> = vec![
            Arc::new(append()),
            Arc::new(guard::<String, &str, _>("short", |s: &String| s.len() < 3)),
            Arc::new(append()),
        ];
        let editor = sequence(list);
        let mut buf = String::new();

        let err = editor.edit(Some(&mut buf), "abc").unwrap_err();
        assert!(err.is_edit_error());
        assert_eq!(buf, "abc");
    }

    #[test]
    fn test_empty_sequence_is_through() {
        let editor = sequence(Vec::<SharedMutator<String, &str>>::new());
        let mut buf = String::from("kept");

        assert!(editor.is_empty());
        assert_eq!(editor.edit(Some(&mut buf), "ignored").unwrap(), "kept");
    }

    #[test]
    fn test_through() {
        let editor = through::<String, &str>();
        let mut buf = String::new();
        let address = &buf as *const String;

        let edited = editor.edit(Some(&mut buf), "Hello").unwrap();
        assert_eq!(edited.len(), 0);
        assert!(std::ptr::eq(&*edited, address));
    }

    #[test]
    fn test_through_rejects_absent_target() {
        let err = through::<String, &str>().edit(None, "Hello").unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
