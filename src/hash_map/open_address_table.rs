//! OpenAddressTable - open addressing with linear probing
//!
//! A flat slot array where every slot is either empty or holds one entry.
//! Collisions are resolved by stepping to the next slot (wrapping at the
//! end), and the array grows by an integer factor as soon as an insert
//! makes the load factor reach the configured threshold.
//!
//! Hashing, key equality and entry printing are injected through a
//! [`TableBehavior`], so the table itself places no trait bounds on keys.
//! There is no removal: once a key is present it stays present, which keeps
//! every probe chain free of tombstones.
//!
//! The table counts every probe step that lands on an occupied slot holding
//! a different key. The counter covers `put`, `get` and `has`, accumulates
//! over the table's lifetime and is not reset by growth.
//!
//! # Examples
//!
//! ```rust
//! use linprobe::hash_map::OpenAddressTable;
//!
//! let mut table = OpenAddressTable::<String, i32>::new();
//! assert_eq!(table.put("hello".to_string(), 42).unwrap(), None);
//! assert_eq!(table.put("hello".to_string(), 43).unwrap(), Some(42));
//! assert_eq!(table.get(&"hello".to_string()), Some(&43));
//! assert!(!table.has(&"world".to_string()));
//! ```

use super::behavior::{DefaultBehavior, FnBehavior, TableBehavior};
use super::stats::TableStats;
use crate::config::{Config, TableConfig};
use crate::error::{ProbeTableError, Result};
use std::cell::Cell;
use std::fmt;
use std::hash::Hash;
use std::io;
use std::iter::FusedIterator;
use std::mem;

/// One position of the slot array
enum Slot<K, V> {
    Empty,
    Occupied { key: K, value: V },
}

impl<K, V> Slot<K, V> {
    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    #[inline]
    fn entry(&self) -> Option<(&K, &V)> {
        match self {
            Slot::Empty => None,
            Slot::Occupied { key, value } => Some((key, value)),
        }
    }
}

/// Allocate `capacity` empty slots, reporting failure instead of aborting
fn empty_slots<K, V>(capacity: usize) -> Result<Vec<Slot<K, V>>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(capacity)
        .map_err(|_| ProbeTableError::out_of_memory(capacity))?;
    slots.resize_with(capacity, || Slot::Empty);
    Ok(slots)
}

/// Open-addressing hash table with linear probing
///
/// Generic over key type K, value type V and the injected behavior B.
pub struct OpenAddressTable<K, V, B = DefaultBehavior> {
    /// Slot array, its length is the capacity
    slots: Vec<Slot<K, V>>,
    /// Number of occupied slots
    size: usize,
    /// Lifetime probe collision count, bumped by read-only lookups too
    collisions: Cell<u64>,
    /// Number of growth events
    rehashes: usize,
    load_threshold: f64,
    resize_factor: usize,
    behavior: B,
}

impl<K, V> OpenAddressTable<K, V, DefaultBehavior>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    /// Create a table with the default behavior and configuration
    pub fn new() -> Self {
        let config = TableConfig::default();
        let slots = (0..config.initial_capacity).map(|_| Slot::Empty).collect();
        Self::from_parts(slots, &config, DefaultBehavior::default())
    }

    /// Create a table with the default behavior and `initial_capacity` slots
    pub fn with_capacity(initial_capacity: usize) -> Result<Self> {
        Self::with_config(TableConfig::with_capacity(initial_capacity))
    }

    /// Create a table with the default behavior and a custom configuration
    pub fn with_config(config: TableConfig) -> Result<Self> {
        Self::with_behavior(DefaultBehavior::default(), config)
    }
}

impl<K, V> Default for OpenAddressTable<K, V, DefaultBehavior>
where
    K: Hash + Eq + fmt::Debug,
    V: fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H, E, P> OpenAddressTable<K, V, FnBehavior<H, E, P>>
where
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
    P: Fn(&mut dyn fmt::Write, &K, &V) -> fmt::Result,
{
    /// Create a table from a hash function, an equality predicate and a
    /// print function
    ///
    /// Uses the default load threshold and resize factor.
    ///
    /// ```rust
    /// use linprobe::hash_map::OpenAddressTable;
    /// use std::fmt;
    ///
    /// let mut table = OpenAddressTable::create(
    ///     |k: &u32| *k as u64,
    ///     |a: &u32, b: &u32| a == b,
    ///     |out: &mut dyn fmt::Write, k: &u32, v: &String| write!(out, "{}, {}", k, v),
    ///     4,
    /// )
    /// .unwrap();
    /// table.put(1, "one".to_string()).unwrap();
    /// assert_eq!(table.capacity(), 4);
    /// ```
    pub fn create(hash: H, equals: E, print: P, initial_capacity: usize) -> Result<Self> {
        Self::with_behavior(
            FnBehavior::new(hash, equals, print),
            TableConfig::with_capacity(initial_capacity),
        )
    }
}

impl<K, V, B> OpenAddressTable<K, V, B> {
    fn from_parts(slots: Vec<Slot<K, V>>, config: &TableConfig, behavior: B) -> Self {
        Self {
            slots,
            size: 0,
            collisions: Cell::new(0),
            rehashes: 0,
            load_threshold: config.load_threshold,
            resize_factor: config.resize_factor,
            behavior,
        }
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Current `size / capacity`
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.slots.len() as f64
    }

    /// Load factor at which the table grows
    pub fn load_threshold(&self) -> f64 {
        self.load_threshold
    }

    /// Growth multiplier
    pub fn resize_factor(&self) -> usize {
        self.resize_factor
    }

    /// Lifetime collision count
    pub fn collisions(&self) -> u64 {
        self.collisions.get()
    }

    /// Number of growth events so far
    pub fn rehashes(&self) -> usize {
        self.rehashes
    }

    /// The injected behavior
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    /// Snapshot of the diagnostic counters
    pub fn stats(&self) -> TableStats {
        TableStats {
            size: self.size,
            capacity: self.slots.len(),
            collisions: self.collisions.get(),
            rehashes: self.rehashes,
            load_factor: self.load_factor(),
        }
    }

    /// Entries in physical slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.size,
        }
    }

    /// Keys in physical slot order
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Values in physical slot order, aligned with [`keys`](Self::keys)
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Release the table and every entry it owns
    pub fn destroy(self) {
        log::debug!(
            "Releasing table: {} entries in {} slots",
            self.size,
            self.slots.len()
        );
    }

    #[inline]
    fn record_collision(&self) {
        self.collisions.set(self.collisions.get().saturating_add(1));
    }
}

impl<K, V, B> OpenAddressTable<K, V, B>
where
    B: TableBehavior<K, V>,
{
    /// Create a table with an explicit behavior and configuration
    pub fn with_behavior(behavior: B, config: TableConfig) -> Result<Self> {
        config.validate()?;
        let slots = empty_slots(config.initial_capacity)?;
        log::debug!(
            "Creating table: capacity={}, load_threshold={}, resize_factor={}",
            config.initial_capacity,
            config.load_threshold,
            config.resize_factor
        );
        Ok(Self::from_parts(slots, &config, behavior))
    }

    /// Insert or update an entry
    ///
    /// Returns the previous value when the key was already present, `None`
    /// on a fresh insert. A fresh insert that brings the load factor to the
    /// threshold grows the table before returning. If that growth fails the
    /// entry is taken back out, so an `Err` always leaves the table unchanged.
    pub fn put(&mut self, key: K, value: V) -> Result<Option<V>> {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(&key);
        let mut vacant = None;

        for _ in 0..capacity {
            match &mut self.slots[idx] {
                Slot::Empty => {
                    vacant = Some(idx);
                    break;
                }
                Slot::Occupied { key: existing, value: current } => {
                    if self.behavior.equals(existing, &key) {
                        return Ok(Some(mem::replace(current, value)));
                    }
                }
            }
            self.record_collision();
            idx = (idx + 1) % capacity;
        }

        let idx = vacant.ok_or_else(|| {
            ProbeTableError::invalid_data(format!("no empty slot among {} slots", capacity))
        })?;
        self.slots[idx] = Slot::Occupied { key, value };
        self.size += 1;

        if self.load_factor() >= self.load_threshold {
            // grow() fails before touching the slot array
            if let Err(e) = self.grow() {
                self.slots[idx] = Slot::Empty;
                self.size -= 1;
                return Err(e);
            }
        }
        Ok(None)
    }

    /// Get reference to value by key
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find_slot(key)?;
        self.slots[idx].entry().map(|(_, value)| value)
    }

    /// Like [`get`](Self::get), but a miss is a [`ProbeTableError::KeyNotFound`]
    pub fn try_get(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(ProbeTableError::KeyNotFound)
    }

    /// Get mutable reference to value by key
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_slot(key)?;
        match &mut self.slots[idx] {
            Slot::Occupied { value, .. } => Some(value),
            Slot::Empty => None,
        }
    }

    /// Check if the table contains key
    pub fn has(&self, key: &K) -> bool {
        self.find_slot(key).is_some()
    }

    /// Alias of [`has`](Self::has)
    pub fn contains_key(&self, key: &K) -> bool {
        self.has(key)
    }

    /// Write the diagnostic report to `out`
    ///
    /// The header lists size, capacity, collisions and rehashes. A verbose
    /// report adds one line per slot: `<idx>: null` or `<idx>: (<entry>)`
    /// with the entry formatted by the behavior's print function.
    pub fn dump<W: io::Write>(&self, out: &mut W, verbose: bool) -> Result<()> {
        out.write_all(self.dump_string(verbose)?.as_bytes())?;
        Ok(())
    }

    /// The diagnostic report of [`dump`](Self::dump) as a string
    pub fn dump_string(&self, verbose: bool) -> Result<String> {
        let mut report = String::new();
        self.write_report(&mut report, verbose)
            .map_err(|_| ProbeTableError::invalid_data("entry print function failed"))?;
        Ok(report)
    }

    /// Check size bookkeeping, key uniqueness and probe contiguity
    ///
    /// Does not touch the collision counter.
    pub fn verify_integrity(&self) -> Result<()> {
        let capacity = self.slots.len();
        let occupied = self.slots.iter().filter(|slot| !slot.is_empty()).count();
        if occupied != self.size {
            return Err(ProbeTableError::invalid_data(format!(
                "size is {} but {} slots are occupied",
                self.size, occupied
            )));
        }

        for (idx, slot) in self.slots.iter().enumerate() {
            let Some((key, _)) = slot.entry() else {
                continue;
            };

            let home = self.home_slot(key);
            let mut probe = home;
            while probe != idx {
                if self.slots[probe].is_empty() {
                    return Err(ProbeTableError::invalid_data(format!(
                        "slot {} is cut off from its home slot {} by empty slot {}",
                        idx, home, probe
                    )));
                }
                probe = (probe + 1) % capacity;
            }

            for (other_idx, other) in self.slots.iter().enumerate().skip(idx + 1) {
                if let Some((other_key, _)) = other.entry() {
                    if self.behavior.equals(key, other_key) {
                        return Err(ProbeTableError::invalid_data(format!(
                            "slots {} and {} hold equal keys",
                            idx, other_idx
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn home_slot(&self, key: &K) -> usize {
        (self.behavior.hash(key) % self.slots.len() as u64) as usize
    }

    // Walks the probe chain from the key's home slot. Stops at an empty slot
    // or after one full cycle.
    fn find_slot(&self, key: &K) -> Option<usize> {
        let capacity = self.slots.len();
        let mut idx = self.home_slot(key);

        for _ in 0..capacity {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied { key: existing, .. } => {
                    if self.behavior.equals(existing, key) {
                        return Some(idx);
                    }
                    self.record_collision();
                }
            }
            idx = (idx + 1) % capacity;
        }
        None
    }

    fn grow(&mut self) -> Result<()> {
        let old_capacity = self.slots.len();
        let mut new_capacity = self.scaled(old_capacity)?;
        while self.size as f64 / new_capacity as f64 >= self.load_threshold {
            new_capacity = self.scaled(new_capacity)?;
        }

        let fresh = empty_slots(new_capacity)?;
        let old = mem::replace(&mut self.slots, fresh);

        // Old physical order decides who wins a contested slot
        for slot in old {
            if let Slot::Occupied { key, value } = slot {
                let mut idx = self.home_slot(&key);
                while !self.slots[idx].is_empty() {
                    idx = (idx + 1) % new_capacity;
                }
                self.slots[idx] = Slot::Occupied { key, value };
            }
        }

        self.rehashes += 1;
        log::debug!(
            "Table grew from {} to {} slots: size={}, rehashes={}",
            old_capacity,
            new_capacity,
            self.size,
            self.rehashes
        );
        Ok(())
    }

    fn scaled(&self, capacity: usize) -> Result<usize> {
        capacity
            .checked_mul(self.resize_factor)
            .ok_or_else(|| ProbeTableError::out_of_memory(usize::MAX))
    }

    fn write_report(&self, out: &mut dyn fmt::Write, verbose: bool) -> fmt::Result {
        write!(out, "{}", self.stats())?;
        if verbose {
            for (idx, slot) in self.slots.iter().enumerate() {
                match slot {
                    Slot::Empty => writeln!(out, "{}: null", idx)?,
                    Slot::Occupied { key, value } => {
                        write!(out, "{}: (", idx)?;
                        self.behavior.print(&mut *out, key, value)?;
                        writeln!(out, ")")?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl<K, V, B> fmt::Debug for OpenAddressTable<K, V, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAddressTable")
            .field("size", &self.size)
            .field("capacity", &self.slots.len())
            .field("collisions", &self.collisions.get())
            .field("rehashes", &self.rehashes)
            .field("load_threshold", &self.load_threshold)
            .field("resize_factor", &self.resize_factor)
            .finish()
    }
}

impl<'a, K, V, B> IntoIterator for &'a OpenAddressTable<K, V, B> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the entries of an [`OpenAddressTable`]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot.entry() {
                self.remaining -= 1;
                return Some(entry);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Iterator over the keys of an [`OpenAddressTable`]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Iterator over the values of an [`OpenAddressTable`]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
