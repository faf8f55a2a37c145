use arrayvec::ArrayVec;

use crate::L_MAX;

/// An input word, stored as a stack-allocated byte buffer of at most `L_MAX` bytes.
///
/// Elements are opaque: the core never assumes they are printable or satisfy any
/// character-set invariant.
pub type Element = ArrayVec<u8, { L_MAX as usize }>;

/// Partitions input words by length into per-length bags.
///
/// Duplicates are preserved as-is; a bag's iteration order is its insertion order,
/// and `bag(len)` gives O(1) indexed access into it.
#[derive(Clone, Debug, Default)]
pub struct ElementStore {
    bags: Vec<Vec<Element>>,
}

impl ElementStore {
    /// Creates an empty store with a bag for every length in `1..=L_MAX`.
    pub fn new() -> Self {
        Self {
            bags: vec![Vec::new(); L_MAX as usize + 1],
        }
    }

    /// Inserts a word into its length-indexed bag.
    ///
    /// Words outside `[1, L_MAX]` are silently dropped, per the word-length contract.
    pub fn insert(&mut self, word: &[u8]) {
        let len = word.len();
        if len == 0 || len > L_MAX as usize {
            return;
        }

        self.bags[len].push(Element::try_from(word).expect("length already checked against L_MAX"));
    }

    /// Returns a read-only view of the bag of elements of exact length `len`.
    ///
    /// `len` must be in `[1, L_MAX]`; out-of-range lengths return an empty slice.
    pub fn bag(&self, len: u8) -> &[Element] {
        self.bags
            .get(len as usize)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of elements of exact length `len`.
    pub fn bag_len(&self, len: u8) -> usize {
        self.bag(len).len()
    }
}
