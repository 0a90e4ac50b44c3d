//! Injected key behaviors for [`OpenAddressTable`](super::OpenAddressTable)
//!
//! A table never calls `Hash`, `Eq` or `Debug` directly. Hashing, key
//! equality and entry printing go through a [`TableBehavior`] value stored in
//! the table, so keys that have no std trait impls (or that need a
//! reproducible hash) can still be stored.
//!
//! - [`DefaultBehavior`]: std traits, hashed with `ahash`
//! - [`FnBehavior`]: three closures, as passed to
//!   [`OpenAddressTable::create`](super::OpenAddressTable::create)
//! - [`StringBehavior`]: `String` keys with the deterministic [`str_hash`]

use super::hash_functions::str_hash;
use std::fmt;
use std::hash::{BuildHasher, Hash, Hasher};

/// Capability set a table needs from its keys and values
pub trait TableBehavior<K, V> {
    /// Hash a key. Equal keys must hash equally.
    fn hash(&self, key: &K) -> u64;

    /// Key equality predicate
    fn equals(&self, a: &K, b: &K) -> bool;

    /// Write a human-readable form of one entry, used by verbose dumps
    fn print(&self, out: &mut dyn fmt::Write, key: &K, value: &V) -> fmt::Result;
}

/// Behavior backed by the std `Hash`, `Eq` and `Debug` traits
#[derive(Debug, Clone, Default)]
pub struct DefaultBehavior<S = ahash::RandomState> {
    hash_builder: S,
}

impl<S> DefaultBehavior<S> {
    /// Use a specific hash builder, e.g. a fixed-seed `ahash::RandomState`
    pub fn with_hasher(hash_builder: S) -> Self {
        Self { hash_builder }
    }

    /// The hash builder in use
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }
}

impl<K, V, S> TableBehavior<K, V> for DefaultBehavior<S>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn hash(&self, key: &K) -> u64 {
        let mut hasher = self.hash_builder.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }

    fn equals(&self, a: &K, b: &K) -> bool {
        a == b
    }

    fn print(&self, out: &mut dyn fmt::Write, key: &K, value: &V) -> fmt::Result {
        write!(out, "{:?}, {:?}", key, value)
    }
}

/// Behavior assembled from three closures
pub struct FnBehavior<H, E, P> {
    hash: H,
    equals: E,
    print: P,
}

impl<H, E, P> FnBehavior<H, E, P> {
    /// Bundle a hash function, an equality predicate and a print function
    pub fn new(hash: H, equals: E, print: P) -> Self {
        Self { hash, equals, print }
    }
}

impl<H, E, P> fmt::Debug for FnBehavior<H, E, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnBehavior").finish_non_exhaustive()
    }
}

impl<K, V, H, E, P> TableBehavior<K, V> for FnBehavior<H, E, P>
where
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
    P: Fn(&mut dyn fmt::Write, &K, &V) -> fmt::Result,
{
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn equals(&self, a: &K, b: &K) -> bool {
        (self.equals)(a, b)
    }

    fn print(&self, out: &mut dyn fmt::Write, key: &K, value: &V) -> fmt::Result {
        (self.print)(out, key, value)
    }
}

/// `String` keys hashed with [`str_hash`], entries printed as `key, value`
#[derive(Debug, Clone, Copy, Default)]
pub struct StringBehavior;

impl<V: fmt::Display> TableBehavior<String, V> for StringBehavior {
    fn hash(&self, key: &String) -> u64 {
        str_hash(key)
    }

    fn equals(&self, a: &String, b: &String) -> bool {
        a == b
    }

    fn print(&self, out: &mut dyn fmt::Write, key: &String, value: &V) -> fmt::Result {
        write!(out, "{}, {}", key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<K, V, B: TableBehavior<K, V>>(behavior: &B, key: &K, value: &V) -> String {
        let mut out = String::new();
        behavior.print(&mut out, key, value).unwrap();
        out
    }

    #[test]
    fn test_default_behavior() {
        let behavior = DefaultBehavior::with_hasher(ahash::RandomState::with_seeds(1, 2, 3, 4));
        let a = String::from("alpha");

        assert_eq!(
            TableBehavior::<String, i32>::hash(&behavior, &a),
            TableBehavior::<String, i32>::hash(&behavior, &a.clone())
        );
        assert!(TableBehavior::<String, i32>::equals(&behavior, &a, &"alpha".to_string()));
        assert_eq!(render(&behavior, &a, &7), "\"alpha\", 7");
    }

    #[test]
    fn test_fn_behavior() {
        let behavior = FnBehavior::new(
            |k: &u32| *k as u64,
            |a: &u32, b: &u32| a == b,
            |out: &mut dyn fmt::Write, k: &u32, v: &char| write!(out, "{}={}", k, v),
        );

        assert_eq!(TableBehavior::<u32, char>::hash(&behavior, &9), 9);
        assert!(TableBehavior::<u32, char>::equals(&behavior, &3, &3));
        assert!(!TableBehavior::<u32, char>::equals(&behavior, &3, &4));
        assert_eq!(render(&behavior, &5u32, &'x'), "5=x");
    }

    #[test]
    fn test_string_behavior() {
        let key = String::from("Jane Doe");
        assert_eq!(TableBehavior::<String, &str>::hash(&StringBehavior, &key), str_hash("Jane Doe"));
        assert_eq!(render(&StringBehavior, &key, &"01/02/2000"), "Jane Doe, 01/02/2000");
    }
}
