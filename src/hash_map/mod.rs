//! Open-addressing hash table
//!
//! - `OpenAddressTable`: linear-probing table with eager, threshold-driven growth
//! - `TableBehavior`: the injected hash / equals / print capability set
//! - `TableStats`: size, capacity, collision and rehash diagnostics
//! - hash functions with run-to-run stable output

mod behavior;
mod hash_functions;
mod open_address_table;
mod stats;

pub use behavior::{DefaultBehavior, FnBehavior, StringBehavior, TableBehavior};
pub use open_address_table::{Iter, Keys, OpenAddressTable, Values};
pub use stats::TableStats;

pub use hash_functions::{
    avalanche_u64, fabo_hash_combine_u64, long_hash, str_hash,
    STR_HASH_SEED,
};
