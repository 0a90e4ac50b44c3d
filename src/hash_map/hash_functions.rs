//! Deterministic hash functions for injected table behaviors
//!
//! Unlike `ahash::RandomState`, these functions produce the same value for
//! the same input in every process, which keeps slot placement and collision
//! counts reproducible across runs.
//!
//! ```rust
//! use linprobe::hash_map::{str_hash, fabo_hash_combine_u64};
//!
//! assert_eq!(str_hash("Jane Doe"), str_hash("Jane Doe"));
//! assert_ne!(str_hash("Jane Doe"), str_hash("John Doe"));
//!
//! let combined = fabo_hash_combine_u64(str_hash("Jane"), str_hash("Doe"));
//! assert_ne!(combined, str_hash("Jane"));
//! ```

/// Starting value for byte-wise string hashing
pub const STR_HASH_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

/// FaboHashCombine: rotate the running hash and add the next value
#[inline]
pub fn fabo_hash_combine_u64(hash: u64, value: u64) -> u64 {
    hash.rotate_left(5).wrapping_add(value)
}

/// Final avalanche so that nearby inputs land in distant slots
#[inline]
pub fn avalanche_u64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Hash a string by folding its bytes through FaboHashCombine
pub fn str_hash(s: &str) -> u64 {
    let folded = s
        .bytes()
        .fold(STR_HASH_SEED, |hash, byte| fabo_hash_combine_u64(hash, byte as u64));
    avalanche_u64(folded ^ s.len() as u64)
}

/// Hash a signed integer by its bit pattern
#[inline]
pub fn long_hash(value: i64) -> u64 {
    avalanche_u64(value as u64)
}
