// Copyright 2025 Cowboy AI, LLC.

//! Shared composites invoked from many tasks at once

use std::sync::{Arc, Mutex};

use cim_compose::transforms::{compose, lift, transpose, Curried};
use cim_compose::{mutators, SharedMutator, SharedTransform, Transform};

fn pipeline() -> SharedTransform<i64, i64> {
    Arc::new(compose(
        lift("double", |x: i64| x * 2),
        lift("increment", |x: i64| x + 1),
    ))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_composite_serves_concurrent_callers() {
    let shared = pipeline();

    let handles: Vec<_> = (0..64i64)
        .map(|i| {
            let shared = Arc::clone(&shared);
            tokio::spawn(async move { (i, shared.apply(i)) })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        assert_eq!(result.unwrap(), (i + 1) * 2);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn transposed_transform_is_shareable() {
    let concat: Curried<String, String, String> =
        Curried::new(lift("concat", |left: String| -> SharedTransform<String, String> {
            Arc::new(lift("append", move |right: String| format!("{left}{right}")))
        }));
    let flipped = Arc::new(transpose(concat));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let flipped = Arc::clone(&flipped);
            tokio::spawn(async move { flipped.apply_both(i.to_string(), "x".to_string()) })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.await.unwrap().unwrap(), format!("x{i}"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_target_needs_caller_lock() {
    let push: SharedMutator<Vec<u32>, u32> =
        Arc::new(mutators::from_fn("push", |v: &mut Vec<u32>, x: u32| {
            v.push(x);
            Ok(())
        }));
    let target = Arc::new(Mutex::new(Vec::new()));

    let handles: Vec<_> = (0..32u32)
        .map(|x| {
            let push = Arc::clone(&push);
            let target = Arc::clone(&target);
            tokio::spawn(async move {
                let mut guard = target.lock().unwrap();
                let edited = push.edit(Some(&mut *guard), x).map(|_| ());
                edited
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let mut collected = target.lock().unwrap().clone();
    collected.sort();
    assert_eq!(collected, (0..32).collect::<Vec<u32>>());
}
