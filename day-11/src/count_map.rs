//! Open-addressing table from stone value to the number of stones carrying it.
//!
//! Slots are probed linearly from `key & mask`. A slot whose count is zero is
//! empty; nothing is ever removed, so there are no tombstones.

use itertools::Itertools;
use tracing::trace;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Entry {
    pub key: u64,
    pub count: u64,
}

impl Entry {
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[derive(Debug, Clone)]
pub struct CountMap {
    entries: Box<[Entry]>,
    /// Number of insert calls since the last rebuild, updates included.
    /// Only drives growth, so it may overcount occupied slots.
    size: usize,
}

impl Default for CountMap {
    fn default() -> Self {
        Self::new()
    }
}

impl CountMap {
    pub const INITIAL_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self::with_capacity(Self::INITIAL_CAPACITY)
    }

    /// Capacity is rounded up to a power of two, never below
    /// [`CountMap::INITIAL_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(Self::INITIAL_CAPACITY).next_power_of_two();
        Self {
            entries: empty_entries(capacity),
            size: 0,
        }
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    fn mask(&self) -> usize {
        self.capacity() - 1
    }

    /// Index of the slot holding `key`, or of the empty slot where it belongs.
    ///
    /// Terminates because growth keeps at least a quarter of the slots empty.
    fn find(&self, key: u64) -> usize {
        let mask = self.mask();
        let mut index = key as usize & mask;
        loop {
            let entry = &self.entries[index];
            if entry.is_empty() || entry.key == key {
                return index;
            }
            index = (index + 1) & mask;
        }
    }

    fn insert_no_grow(&mut self, key: u64, delta: u64) {
        let index = self.find(key);
        let entry = &mut self.entries[index];
        if entry.is_empty() {
            entry.key = key;
            entry.count = 0;
        }
        entry.count = entry.count.wrapping_add(delta);
        self.size += 1;
    }

    /// Adds `delta` stones of value `key`, merging with any already present.
    pub fn insert(&mut self, key: u64, delta: u64) {
        if self.size * 4 >= self.capacity() * 3 {
            self.grow();
        }
        self.insert_no_grow(key, delta);
    }

    fn grow(&mut self) {
        let capacity = self.capacity() * 2;
        trace!(from = self.capacity(), to = capacity, size = self.size, "growing count map");

        let old = std::mem::replace(&mut self.entries, empty_entries(capacity));
        self.size = 0;
        for entry in old.iter().filter(|entry| !entry.is_empty()) {
            self.insert_no_grow(entry.key, entry.count);
        }
    }

    pub fn get(&self, key: u64) -> Option<u64> {
        let entry = &self.entries[self.find(key)];
        (!entry.is_empty()).then_some(entry.count)
    }

    /// Total population: the sum of every slot's count.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |total, entry| total.wrapping_add(entry.count))
    }

    /// Number of distinct stone values held.
    pub fn occupied(&self) -> usize {
        self.iter().count()
    }

    /// Live entries in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries.iter().copied().filter(|entry| !entry.is_empty())
    }

    pub fn sorted_entries(&self) -> Vec<Entry> {
        self.iter().sorted_unstable_by_key(|entry| entry.key).collect()
    }
}

impl FromIterator<u64> for CountMap {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        let mut map = CountMap::new();
        for key in iter {
            map.insert(key, 1);
        }
        map
    }
}

fn empty_entries(capacity: usize) -> Box<[Entry]> {
    vec![Entry::default(); capacity].into_boxed_slice()
}
