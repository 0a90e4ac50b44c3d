//! # Linprobe: Open-Addressing Hash Table
//!
//! A generic hash table that resolves collisions by linear probing and grows
//! eagerly once its load factor reaches a configurable threshold. Hashing,
//! key equality and entry printing are injected per table, and the table
//! keeps collision and rehash counters for diagnostics.
//!
//! ## Key Features
//!
//! - **Linear Probing**: one contiguous slot array, probes wrap around the end
//! - **Injected Behavior**: closures or a [`TableBehavior`] impl supply hash, equals and print
//! - **Diagnostics**: size, capacity, collision and rehash counters plus a slot dump
//! - **AmigoNet Simulator**: a line-oriented command driver built on the table
//!
//! ## Quick Start
//!
//! ```rust
//! use linprobe::{OpenAddressTable, TableConfig};
//!
//! let mut table = OpenAddressTable::with_config(TableConfig::with_capacity(4)).unwrap();
//! table.put("one", 1).unwrap();
//! table.put("two", 2).unwrap();
//! table.put("three", 3).unwrap();
//!
//! assert_eq!(table.get(&"two"), Some(&2));
//! assert_eq!(table.capacity(), 8);
//! assert_eq!(table.rehashes(), 1);
//! ```

#![warn(missing_docs)]

pub mod amigonet;
pub mod config;
pub mod error;
pub mod hash_map;
pub mod logger;

pub use config::{Config, TableConfig};
pub use error::{ProbeTableError, Result};
pub use hash_map::{
    DefaultBehavior, FnBehavior, OpenAddressTable, StringBehavior, TableBehavior, TableStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library: installs the log backend once per process
pub fn init() {
    logger::initialize_logger();
    log::debug!("Initializing linprobe v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        let mut table = OpenAddressTable::new();
        table.put(1u32, "one").unwrap();
        assert_eq!(table.get(&1), Some(&"one"));
    }

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }
}
