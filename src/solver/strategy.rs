//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::GuessEngine;
use crate::core::{LetterSet, Mask};
use crate::lexicon::Lexicon;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Select a letter for `mask` given the letters already tried
    ///
    /// Returns `None` when the strategy cannot name a letter. Implementations
    /// must never return a letter in `excluded`.
    fn select_letter(
        &self,
        lexicon: &Lexicon,
        mask: &Mask,
        excluded: LetterSet,
        rng: &mut dyn RngCore,
    ) -> Option<char>;
}

impl<T: Strategy + ?Sized> Strategy for &T {
    fn select_letter(
        &self,
        lexicon: &Lexicon,
        mask: &Mask,
        excluded: LetterSet,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        (**self).select_letter(lexicon, mask, excluded, rng)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Frequency-driven guessing (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random untried letters
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(
        &self,
        lexicon: &Lexicon,
        mask: &Mask,
        excluded: LetterSet,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(lexicon, mask, excluded, rng),
            Self::Random(s) => s.select_letter(lexicon, mask, excluded, rng),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy)
    }
}

/// Frequency-driven strategy
///
/// Delegates to [`GuessEngine::best_guess`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(
        &self,
        lexicon: &Lexicon,
        mask: &Mask,
        excluded: LetterSet,
        _rng: &mut dyn RngCore,
    ) -> Option<char> {
        GuessEngine::new(lexicon).best_guess(mask, excluded)
    }
}

/// Random strategy
///
/// Picks uniformly among letters that are neither excluded nor revealed.
/// Useful as a baseline for benchmarks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(
        &self,
        _lexicon: &Lexicon,
        mask: &Mask,
        excluded: LetterSet,
        rng: &mut dyn RngCore,
    ) -> Option<char> {
        random_letter(excluded.union(mask.revealed_letters()), rng)
    }
}

/// Uniformly random letter outside `used`, or `None` if all are used
pub fn random_letter(used: LetterSet, rng: &mut dyn RngCore) -> Option<char> {
    let unused: Vec<char> = used.complement().iter().collect();
    unused.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn setup_lexicon() -> Lexicon {
        Lexicon::from_lines(&["cat", "car", "can", "bat"]).unwrap()
    }

    #[test]
    fn frequency_strategy_matches_engine() {
        let lexicon = setup_lexicon();
        let mut rng = StdRng::seed_from_u64(1);
        let mask = Mask::parse("_a_").unwrap();
        let excluded: LetterSet = "t".chars().collect();

        let letter = FrequencyStrategy.select_letter(&lexicon, &mask, excluded, &mut rng);
        assert_eq!(letter, GuessEngine::new(&lexicon).best_guess(&mask, excluded));
        assert_eq!(letter, Some('c'));
    }

    #[test]
    fn random_strategy_avoids_used_letters() {
        let lexicon = setup_lexicon();
        let mut rng = StdRng::seed_from_u64(42);
        let mask = Mask::parse("_a_").unwrap();
        let excluded: LetterSet = "tc".chars().collect();

        for _ in 0..100 {
            let letter = RandomStrategy
                .select_letter(&lexicon, &mask, excluded, &mut rng)
                .unwrap();
            assert!(!excluded.contains(letter));
            assert_ne!(letter, 'a');
        }
    }

    #[test]
    fn random_letter_exhausted() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(random_letter(LetterSet::ALL, &mut rng), None);

        let all_but_q = LetterSet::ALL
            .iter()
            .filter(|&l| l != 'q')
            .collect::<LetterSet>();
        assert_eq!(random_letter(all_but_q, &mut rng), Some('q'));
    }

    #[test]
    fn strategy_from_name() {
        assert_eq!(StrategyType::from_name("random").name(), "random");
        assert_eq!(StrategyType::from_name("frequency").name(), "frequency");
        assert_eq!(StrategyType::from_name("unknown"), StrategyType::default());
    }
}
