//! Word engine - shuffled word bag with no-immediate-repeat draws
//!
//! Words for the active categories are concatenated into a bag, shuffled with
//! Fisher-Yates, and drawn in order. When the bag is exhausted it is
//! reshuffled and drawing starts over, so repeats are expected across full
//! passes but never back to back.
//!
//! Also provides a simple LCG so shuffles stay deterministic under a fixed
//! seed (used heavily by tests).

use charades_types::{Category, CategorySet, Language};

use crate::bank;

/// Placeholder entry used when the category filter yields zero words.
pub const NO_WORDS: &str = "(no words selected)";

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Shuffled word bag for the active categories.
#[derive(Debug, Clone)]
pub struct WordSelector {
    /// Working set of words, reshuffled on each full pass.
    bag: Vec<&'static str>,
    /// Cursor into the bag. Never exceeds `bag.len()`.
    cursor: usize,
    /// Last word returned, for the no-immediate-repeat rule.
    last: Option<&'static str>,
    rng: SimpleRng,
}

impl WordSelector {
    /// Create a selector over all categories of the given language.
    pub fn new(seed: u32, language: Language) -> Self {
        let mut selector = Self {
            bag: Vec::new(),
            cursor: 0,
            last: None,
            rng: SimpleRng::new(seed),
        };
        selector.rebuild(language, CategorySet::empty());
        selector
    }

    /// Rebuild the bag from the given category filter.
    ///
    /// The bag becomes the concatenation of the selected categories' words
    /// (all categories while the filter is empty), shuffled. An empty union
    /// falls back to a single placeholder entry so gameplay stays functional.
    /// Resets the cursor and the repeat tracker.
    pub fn rebuild(&mut self, language: Language, categories: CategorySet) {
        let pools: Vec<&'static [&'static str]> = categories
            .active()
            .map(|cat| bank::words(language, cat))
            .collect();
        self.rebuild_from(&pools);
    }

    /// Rebuild the bag from raw word pools. Split out from [`Self::rebuild`]
    /// so the empty-union fallback can be exercised directly.
    fn rebuild_from(&mut self, pools: &[&'static [&'static str]]) {
        self.bag.clear();
        for pool in pools {
            self.bag.extend_from_slice(pool);
        }
        if self.bag.is_empty() {
            self.bag.push(NO_WORDS);
        }
        self.rng.shuffle(&mut self.bag);
        self.cursor = 0;
        self.last = None;
    }

    /// Draw the next word.
    ///
    /// Reshuffles and restarts when the bag is exhausted. If the word about
    /// to be returned equals the previous one and the bag has more than one
    /// slot, it is swapped with the following slot (wrapping) and that word
    /// is drawn instead.
    pub fn next_word(&mut self) -> &'static str {
        if self.cursor >= self.bag.len() {
            self.rng.shuffle(&mut self.bag);
            self.cursor = 0;
        }

        if self.bag.len() > 1 && Some(self.bag[self.cursor]) == self.last {
            let next = (self.cursor + 1) % self.bag.len();
            self.bag.swap(self.cursor, next);
        }

        let word = self.bag[self.cursor];
        self.cursor += 1;
        self.last = Some(word);
        word
    }

    /// Number of words in the current bag.
    pub fn bag_len(&self) -> usize {
        self.bag.len()
    }

    #[cfg(test)]
    pub fn bag(&self) -> &[&'static str] {
        &self.bag
    }
}
