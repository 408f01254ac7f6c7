//! The word catalog for Undercover.
//!
//! A [`WordBank`] is a static collection of categories, each holding word
//! entries with English and Spanish renderings plus the vaguer "impostor
//! clue" shown to players who must bluff without knowing the word.
//!
//! The bank is immutable and infallible: it is built once at startup from a
//! `'static` catalog, and the only operations are uniform random picks.
//! Non-emptiness (at least one category, every category at least one word)
//! is a load-time invariant; the pick path never re-checks it.
//!
//! Randomness is always supplied by the caller as `&mut impl Rng`, so tests
//! can drive selection with a seeded [`rand::rngs::StdRng`] and production
//! code passes [`rand::rng()`].

use rand::Rng;

mod catalog;

pub use catalog::CATALOG;

/// One guessable word: the text players must describe, and the clue an
/// impostor gets instead.
///
/// The Spanish renderings are optional so custom catalogs can be
/// monolingual; the built-in catalog provides both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordEntry {
    /// The secret word, shown to every normal player.
    pub text: &'static str,
    /// Spanish rendering of the word.
    pub text_es: Option<&'static str>,
    /// The hint an impostor sees instead of the word.
    pub clue: &'static str,
    /// Spanish rendering of the clue.
    pub clue_es: Option<&'static str>,
}

/// A named group of words. Every player, impostors included, learns the
/// category at game start; only normals learn which word was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub words: &'static [WordEntry],
}

/// A read-only catalog of categories with uniform random selection.
///
/// Cheap to copy: it is a pair of pointers into static data.
#[derive(Debug, Clone, Copy)]
pub struct WordBank {
    categories: &'static [Category],
}

impl WordBank {
    /// The built-in catalog: 10 categories, 7 words each, bilingual.
    pub fn builtin() -> Self {
        Self::from_catalog(catalog::CATALOG)
    }

    /// Wraps a custom static catalog.
    ///
    /// The catalog must contain at least one category and every category at
    /// least one word. This is asserted at construction, not on every pick.
    pub fn from_catalog(categories: &'static [Category]) -> Self {
        debug_assert!(
            !categories.is_empty(),
            "word catalog must contain at least one category"
        );
        debug_assert!(
            categories.iter().all(|c| !c.words.is_empty()),
            "every category must contain at least one word"
        );
        Self { categories }
    }

    /// All categories in the bank.
    pub fn categories(&self) -> &'static [Category] {
        self.categories
    }

    /// Picks a category uniformly at random.
    pub fn pick_category(&self, rng: &mut impl Rng) -> Category {
        self.categories[rng.random_range(0..self.categories.len())]
    }

    /// Picks a word uniformly at random from the given category.
    pub fn pick_word(&self, category: &Category, rng: &mut impl Rng) -> WordEntry {
        category.words[rng.random_range(0..category.words.len())]
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::builtin()
    }
}

// =========================================================================
// Tests
// =========================================================================
