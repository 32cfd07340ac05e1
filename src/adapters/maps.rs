// Copyright 2025 Cowboy AI, LLC.

//! Hash map access
//!
//! Map arguments are anything that borrows as a `HashMap` (owned, `&`, `Arc`).

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::transform::Transform;
use crate::transforms::lift;

/// Value stored under `key`, absent when missing
pub fn get<K, V, M>(key: K) -> impl Transform<Option<V>, M>
where
    K: Eq + Hash + Send + Sync,
    V: Clone,
    M: Borrow<HashMap<K, V>>,
{
    lift("get", move |map: M| {
        let map: &HashMap<K, V> = map.borrow();
        map.get(&key).cloned()
    })
}

/// Look the argument up in a fixed map, absent when missing
pub fn of<K, V>(map: HashMap<K, V>) -> impl Transform<Option<V>, K>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    lift("of", move |key: K| map.get(&key).cloned())
}

/// All keys, in the map's iteration order
pub fn keys<K, V, M>() -> impl Transform<Vec<K>, M>
where
    K: Clone,
    M: Borrow<HashMap<K, V>>,
{
    lift("keys", |map: M| {
        let map: &HashMap<K, V> = map.borrow();
        map.keys().cloned().collect()
    })
}

/// All values, in the map's iteration order
pub fn values<K, V, M>() -> impl Transform<Vec<V>, M>
where
    V: Clone,
    M: Borrow<HashMap<K, V>>,
{
    lift("values", |map: M| {
        let map: &HashMap<K, V> = map.borrow();
        map.values().cloned().collect()
    })
}

/// All entries, in the map's iteration order
pub fn entries<K, V, M>() -> impl Transform<Vec<(K, V)>, M>
where
    K: Clone,
    V: Clone,
    M: Borrow<HashMap<K, V>>,
{
    lift("entries", |map: M| {
        let map: &HashMap<K, V> = map.borrow();
        map.iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    })
}
