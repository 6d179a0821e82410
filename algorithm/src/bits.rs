//! Word-packed reachability set over subset sums.
//!
//! One bit per candidate sum in `0..=capacity`. Folding a weight in is a
//! single pass of shift-and-OR over the backing words, which keeps the
//! 0/1 semantics: every source bit read during a fold predates that fold,
//! so a stone can never stack on a sum it created itself.

const BITS_PER_WORD: usize = 64;

/// Set of subset sums reachable so far. Sum 0 (the empty subset) is set on
/// construction and stays set.
pub struct ReachableSums {
    words: Vec<u64>,
    capacity: usize,
}

impl ReachableSums {
    /// Creates a set able to represent sums `0..=capacity`, containing
    /// only sum 0.
    pub fn new(capacity: usize) -> Self {
        let blocks = capacity / BITS_PER_WORD + 1;
        let mut words = vec![0u64; blocks];
        words[0] = 1;
        Self { words, capacity }
    }

    /// Whether `sum` has been reached by some subset folded in so far.
    pub fn contains(&self, sum: usize) -> bool {
        if sum > self.capacity {
            return false;
        }
        let (block, mask) = Self::block_and_mask(sum);
        self.words[block] & mask != 0
    }

    /// Folds one stone of the given weight into the set: every reachable
    /// sum `s` also makes `s + weight` reachable, truncated at capacity.
    ///
    /// The shifted copy is built from the pre-fold words only, so the
    /// stone contributes to at most one inclusion per candidate sum.
    pub fn insert_shifted(&mut self, weight: usize) {
        if weight == 0 || weight > self.capacity {
            // A zero weight adds no new sums; an oversized one shifts
            // every bit past the capacity mask.
            return;
        }

        let block_shift = weight / BITS_PER_WORD;
        let bit_shift = weight % BITS_PER_WORD;

        // Top-down so each source word is read before it can be clobbered.
        for i in (block_shift..self.words.len()).rev() {
            let mut shifted = self.words[i - block_shift] << bit_shift;
            if bit_shift > 0 && i > block_shift {
                shifted |= self.words[i - block_shift - 1] >> (BITS_PER_WORD - bit_shift);
            }
            self.words[i] |= shifted;
        }

        self.truncate_tail();
    }

    /// Largest reachable sum. At minimum 0, which is always present.
    pub fn max_reachable(&self) -> usize {
        for (block, &word) in self.words.iter().enumerate().rev() {
            if word != 0 {
                let top_bit = BITS_PER_WORD - 1 - word.leading_zeros() as usize;
                return block * BITS_PER_WORD + top_bit;
            }
        }
        0
    }

    // Clears bits above `capacity` in the last word so they can never
    // carry back into range through a later fold.
    fn truncate_tail(&mut self) {
        let used = self.capacity % BITS_PER_WORD + 1;
        if used < BITS_PER_WORD {
            let last = self.words.len() - 1;
            self.words[last] &= (1u64 << used) - 1;
        }
    }

    const fn block_and_mask(sum: usize) -> (usize, u64) {
        (sum / BITS_PER_WORD, 1u64 << (sum % BITS_PER_WORD))
    }
}
