//! Sequential accession key allocation.

/// Issues a strictly increasing, contiguous run of integer keys.
///
/// Seeded with the next free accession key (max existing key + 1, resolved
/// by the association-source collaborator). The load is a strictly
/// sequential batch pass, so a plain counter is enough; no atomics.
#[derive(Debug)]
pub struct KeyAllocator {
    next: i64,
}

impl KeyAllocator {
    pub fn new(seed: i64) -> Self {
        Self { next: seed }
    }

    /// Return the next free key and advance the counter.
    pub fn allocate(&mut self) -> i64 {
        let key = self.next;
        self.next += 1;
        key
    }

    /// The key the next call to [`allocate`](Self::allocate) will return.
    pub fn peek(&self) -> i64 {
        self.next
    }
}
