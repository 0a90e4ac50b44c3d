//! Diagnostic snapshot of a table

use serde::{Deserialize, Serialize};
use std::fmt;

/// Size, capacity and probing statistics of an
/// [`OpenAddressTable`](super::OpenAddressTable)
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    /// Occupied slots
    pub size: usize,
    /// Total slots
    pub capacity: usize,
    /// Non-matching occupied slots visited by probes over the table's lifetime
    pub collisions: u64,
    /// Growth events
    pub rehashes: usize,
    /// `size / capacity`
    pub load_factor: f64,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.size)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Collisions: {}", self.collisions)?;
        writeln!(f, "Rehashes: {}", self.rehashes)
    }
}
