//! Transposition table for caching search results
//!
//! Direct-mapped, fixed-capacity table: each hash maps to one slot, and
//! collisions are resolved by a depth-preferred replacement policy. The
//! bounded capacity keeps long sessions from growing the cache without
//! limit.
//!
//! # Example
//!
//! ```
//! use boop::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new(1); // 1 MB
//! let hash = 0x123456789ABCDEF0;
//!
//! tt.store(hash, 3, 120, EntryType::Exact);
//!
//! let entry = tt.probe(hash, 3).unwrap();
//! assert_eq!(entry.score, 120);
//! ```

/// How a stored score bounds the true node value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// The search completed with the full window
    Exact,
    /// True value >= stored score (a beta cutoff occurred)
    LowerBound,
    /// True value <= stored score (no move improved alpha)
    UpperBound,
}

/// One cached search result
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Node hash of the position
    pub hash: u64,
    /// Remaining search depth when the entry was stored
    pub depth: u8,
    /// Node score
    pub score: i32,
    /// How `score` bounds the true value
    pub entry_type: EntryType,
}

/// Direct-mapped transposition table sized in megabytes.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
    size: usize,
    used: usize,
}

impl TranspositionTable {
    /// Create a table with the given size in megabytes (at least 1024
    /// slots regardless of the argument).
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<Option<TTEntry>>();
        let size = ((size_mb * 1024 * 1024) / entry_size).max(1024);

        Self {
            entries: vec![None; size],
            size,
            used: 0,
        }
    }

    /// Look up a position. Returns the entry only when the slot holds this
    /// exact hash and was searched at least `depth` deep — shallower
    /// entries cannot answer for a deeper search.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8) -> Option<TTEntry> {
        let idx = (hash as usize) % self.size;
        let entry = self.entries[idx]?;

        if entry.hash != hash || entry.depth < depth {
            return None;
        }

        Some(entry)
    }

    /// Store a search result. An occupied slot is replaced when it holds
    /// the same position or when the new result is at least as deep.
    pub fn store(&mut self, hash: u64, depth: u8, score: i32, entry_type: EntryType) {
        let idx = (hash as usize) % self.size;

        let should_replace = match &self.entries[idx] {
            None => {
                self.used += 1;
                true
            }
            Some(existing) => existing.hash == hash || existing.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
            });
        }
    }

    /// Number of occupied slots
    #[must_use]
    pub fn len(&self) -> usize {
        self.used
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Total slot capacity
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.size
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.fill(None);
        self.used = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_probe_roundtrip() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 4, 250, EntryType::Exact);

        let entry = tt.probe(hash, 4).unwrap();
        assert_eq!(entry.score, 250);
        assert_eq!(entry.depth, 4);
        assert_eq!(entry.entry_type, EntryType::Exact);
    }

    #[test]
    fn test_probe_requires_sufficient_depth() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 2, 100, EntryType::Exact);

        // A deeper search cannot use the shallow entry
        assert!(tt.probe(hash, 4).is_none());
        // A shallower or equal search can
        assert!(tt.probe(hash, 2).is_some());
        assert!(tt.probe(hash, 1).is_some());
    }

    #[test]
    fn test_probe_rejects_hash_mismatch() {
        let mut tt = TranspositionTable::new(1);
        tt.store(0x1111, 3, 50, EntryType::LowerBound);

        // Same slot or not, a different hash never matches
        assert!(tt.probe(0x2222, 0).is_none());
    }

    #[test]
    fn test_deeper_entry_replaces() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 2, 100, EntryType::Exact);
        tt.store(hash, 5, 300, EntryType::Exact);

        let entry = tt.probe(hash, 5).unwrap();
        assert_eq!(entry.score, 300);
    }

    #[test]
    fn test_same_hash_always_replaces() {
        let mut tt = TranspositionTable::new(1);
        let hash = 0x123456789ABCDEF0;

        tt.store(hash, 5, 300, EntryType::Exact);
        tt.store(hash, 2, 100, EntryType::UpperBound);

        // Same position: the newer, shallower result wins the slot
        assert!(tt.probe(hash, 5).is_none());
        let entry = tt.probe(hash, 2).unwrap();
        assert_eq!(entry.score, 100);
    }

    #[test]
    fn test_len_and_clear() {
        let mut tt = TranspositionTable::new(1);
        assert!(tt.is_empty());

        tt.store(0x111, 3, 10, EntryType::Exact);
        tt.store(0x222, 3, 20, EntryType::Exact);
        assert_eq!(tt.len(), 2);

        // Restoring the same position does not grow the count
        tt.store(0x111, 4, 15, EntryType::Exact);
        assert_eq!(tt.len(), 2);

        tt.clear();
        assert_eq!(tt.len(), 0);
        assert!(tt.probe(0x111, 0).is_none());
    }

    #[test]
    fn test_minimum_capacity() {
        let tt = TranspositionTable::new(0);
        assert!(tt.capacity() >= 1024);
    }
}
