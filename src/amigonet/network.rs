//! User registry backed by an [`OpenAddressTable`]

use crate::config::TableConfig;
use crate::error::Result;
use crate::hash_map::{OpenAddressTable, StringBehavior, TableStats};
use std::io;

/// Registered users, keyed by full name with the birthdate as value
#[derive(Debug)]
pub struct AmigoNet {
    users: OpenAddressTable<String, String, StringBehavior>,
}

impl AmigoNet {
    /// Create an empty network with the default table configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TableConfig::default())
    }

    /// Create an empty network with a custom table configuration
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Ok(Self {
            users: OpenAddressTable::with_behavior(StringBehavior, config)?,
        })
    }

    /// Join first and last name with a single space
    pub fn full_name(first: &str, last: &str) -> String {
        format!("{} {}", first, last)
    }

    /// Register a user, returning the birthdate it replaced if the name was
    /// already registered
    pub fn add_user(&mut self, first: &str, last: &str, birthdate: &str) -> Result<Option<String>> {
        let name = Self::full_name(first, last);
        let previous = self.users.put(name, birthdate.to_string())?;
        if let Some(ref old) = previous {
            log::warn!(
                "User '{} {}' registered again, birthdate {} replaced by {}",
                first,
                last,
                old,
                birthdate
            );
        }
        Ok(previous)
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Birthdate registered for a full name
    pub fn birthdate_of(&self, name: &str) -> Option<&str> {
        self.users.get(&name.to_string()).map(String::as_str)
    }

    /// Check whether a full name is registered
    pub fn has_user(&self, name: &str) -> bool {
        self.users.has(&name.to_string())
    }

    /// Diagnostics of the underlying table
    pub fn stats(&self) -> TableStats {
        self.users.stats()
    }

    /// The underlying table
    pub fn users(&self) -> &OpenAddressTable<String, String, StringBehavior> {
        &self.users
    }

    /// Write the table's diagnostic report
    pub fn dump<W: io::Write>(&self, out: &mut W, verbose: bool) -> Result<()> {
        self.users.dump(out, verbose)
    }

    /// Release the network
    pub fn destroy(self) {
        self.users.destroy();
    }
}
