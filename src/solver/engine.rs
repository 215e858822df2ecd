//! Main letter guessing interface

use super::tally::tally_letters;
use crate::core::{Cell, LetterSet, Mask, Word};
use crate::lexicon::Lexicon;

/// Letter guessing engine
///
/// Holds only a shared reference to the lexicon. Every call derives its
/// answer from the mask and excluded letters it is given, so repeated calls
/// with the same input return the same result.
#[derive(Debug, Clone, Copy)]
pub struct GuessEngine<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> GuessEngine<'a> {
    #[must_use]
    pub const fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    #[must_use]
    pub const fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    /// Pick the best next letter for a mask
    ///
    /// With nothing excluded yet, this is the most frequent letter among all
    /// words of the mask's length. Otherwise it is the letter found in the
    /// most remaining candidates, ignoring letters that are excluded or
    /// already revealed, with ties going to the alphabetically first letter.
    ///
    /// Returns `None` if no word fits the constraints or no untried letter is
    /// left among the candidates.
    ///
    /// # Examples
    /// ```
    /// use hangman_solver::core::{LetterSet, Mask};
    /// use hangman_solver::lexicon::Lexicon;
    /// use hangman_solver::solver::GuessEngine;
    ///
    /// let lexicon = Lexicon::from_lines(&["cat", "car", "can", "bat"]).unwrap();
    /// let engine = GuessEngine::new(&lexicon);
    /// let mask = Mask::parse("_a_").unwrap();
    ///
    /// assert_eq!(engine.best_guess(&mask, LetterSet::EMPTY), Some('a'));
    ///
    /// let excluded: LetterSet = "t".chars().collect();
    /// assert_eq!(engine.best_guess(&mask, excluded), Some('c'));
    /// ```
    #[must_use]
    pub fn best_guess(&self, mask: &Mask, excluded: LetterSet) -> Option<char> {
        if excluded.is_empty() {
            return self
                .lexicon
                .frequency_ranking(mask.len())
                .first()
                .map(|&(letter, _)| letter);
        }

        self.tally(mask, excluded)
            .first()
            .map(|&(letter, _)| letter)
    }

    /// Per-letter candidate counts behind [`GuessEngine::best_guess`]
    ///
    /// Sorted by count (highest first), then alphabetically. Excluded and
    /// revealed letters never appear.
    #[must_use]
    pub fn tally(&self, mask: &Mask, excluded: LetterSet) -> Vec<(char, usize)> {
        let candidates = self.candidates(mask, excluded);
        tally_letters(&candidates, excluded.union(mask.revealed_letters()))
    }

    /// Words consistent with the mask and excluded letters
    ///
    /// A word qualifies when it has the mask's length, matches every revealed
    /// letter and space in place, and has a letter outside `excluded` at
    /// every hidden position.
    #[must_use]
    pub fn candidates(&self, mask: &Mask, excluded: LetterSet) -> Vec<&'a Word> {
        self.lexicon
            .words_of_length(mask.len())
            .into_iter()
            .filter(|word| is_consistent(mask, word, excluded))
            .collect()
    }

    /// Count how many words fit the mask and excluded letters
    #[must_use]
    pub fn count_candidates(&self, mask: &Mask, excluded: LetterSet) -> usize {
        self.lexicon
            .words_of_length(mask.len())
            .into_iter()
            .filter(|word| is_consistent(mask, word, excluded))
            .count()
    }
}

/// Position-wise check of a word against a mask
fn is_consistent(mask: &Mask, word: &Word, excluded: LetterSet) -> bool {
    word.len() == mask.len()
        && mask
            .cells()
            .iter()
            .zip(word.as_bytes())
            .all(|(cell, &byte)| {
                let actual = char::from(byte);
                match *cell {
                    Cell::Revealed(letter) => actual == letter,
                    Cell::Space => actual == ' ',
                    // A hidden position never holds a space
                    Cell::Hidden => actual != ' ' && !excluded.contains(actual),
                }
            })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_lexicon() -> Lexicon {
        Lexicon::from_lines(&["cat", "car", "can", "bat", "hot dog", "sea lion", "apple"])
            .unwrap()
    }

    fn letters(text: &str) -> LetterSet {
        text.chars().collect()
    }

    fn texts<'w>(words: &[&'w Word]) -> Vec<&'w str> {
        words.iter().map(|&w| w.text()).collect()
    }

    #[test]
    fn first_guess_uses_frequency_ranking() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("_____").unwrap();
        assert_eq!(
            engine.best_guess(&mask, LetterSet::EMPTY),
            Some(lexicon.frequency_ranking(5)[0].0)
        );
        assert_eq!(engine.best_guess(&mask, LetterSet::EMPTY), Some('p'));
    }

    #[test]
    fn first_guess_for_unknown_length_is_none() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("____").unwrap();
        assert_eq!(engine.best_guess(&mask, LetterSet::EMPTY), None);
    }

    #[test]
    fn excluded_letter_removes_conflicting_words() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("_a_").unwrap();
        let candidates = engine.candidates(&mask, letters("t"));
        assert_eq!(texts(&candidates), vec!["car", "can"]);
        assert_eq!(engine.best_guess(&mask, letters("t")), Some('c'));
    }

    #[test]
    fn excluded_letter_at_any_hidden_position_drops_word() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("___").unwrap();
        assert_eq!(texts(&engine.candidates(&mask, letters("c"))), vec!["bat"]);
        assert_eq!(texts(&engine.candidates(&mask, letters("r"))), vec!["cat", "can", "bat"]);
    }

    #[test]
    fn tally_skips_revealed_and_excluded_letters() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("_a_").unwrap();
        let tally = engine.tally(&mask, letters("t"));
        assert_eq!(tally, vec![('c', 2), ('n', 1), ('r', 1)]);
    }

    #[test]
    fn revealed_space_must_match_space() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("___ ___").unwrap();
        let candidates = engine.candidates(&mask, LetterSet::EMPTY);
        assert_eq!(texts(&candidates), vec!["hot dog"]);

        let no_space = Mask::parse("_______").unwrap();
        assert!(engine.candidates(&no_space, LetterSet::EMPTY).is_empty());
    }

    #[test]
    fn fully_revealed_mask_matches_itself() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("car").unwrap();
        let candidates = engine.candidates(&mask, letters("cart"));
        assert_eq!(texts(&candidates), vec!["car"]);
        assert_eq!(engine.best_guess(&mask, letters("cart")), None);
    }

    #[test]
    fn contradictory_constraints_give_none() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("_a_").unwrap();
        let excluded = letters("cbrnt");
        assert_eq!(engine.count_candidates(&mask, excluded), 0);
        assert_eq!(engine.best_guess(&mask, excluded), None);
    }

    #[test]
    fn best_guess_is_idempotent() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("_a_").unwrap();
        let first = engine.best_guess(&mask, letters("e"));
        let second = engine.best_guess(&mask, letters("e"));
        assert_eq!(first, second);
        assert_eq!(first, Some('c'));
    }

    #[test]
    fn count_matches_candidates() {
        let lexicon = setup_lexicon();
        let engine = GuessEngine::new(&lexicon);

        let mask = Mask::parse("__t").unwrap();
        let excluded = letters("e");
        assert_eq!(
            engine.count_candidates(&mask, excluded),
            engine.candidates(&mask, excluded).len()
        );
        assert_eq!(engine.count_candidates(&mask, excluded), 2);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        /// Secret plus a mask that reveals some of its letters
        fn partial_game(index: usize, revealed: &str) -> (Lexicon, usize, Mask) {
            let lexicon = Lexicon::embedded().unwrap();
            let index = index % lexicon.len();
            let secret = &lexicon.words()[index];
            let mut mask = Mask::hidden_for(secret);
            for letter in revealed.chars() {
                mask.reveal(secret, letter);
            }
            (lexicon, index, mask)
        }

        proptest! {
            #[test]
            fn candidates_fit_mask_and_keep_secret(
                index in 0usize..1000,
                revealed in "[a-z]{0,6}",
                wrong in "[a-z]{0,8}",
            ) {
                let (lexicon, index, mask) = partial_game(index, &revealed);
                let secret = &lexicon.words()[index];
                let engine = GuessEngine::new(&lexicon);

                // Any letters, so exclusions can rule out other words
                let excluded: LetterSet = wrong.chars().collect();
                let candidates = engine.candidates(&mask, excluded);
                for word in &candidates {
                    prop_assert_eq!(word.len(), mask.len());
                    for (position, cell) in mask.cells().iter().enumerate() {
                        let actual = word.char_at(position);
                        match *cell {
                            Cell::Revealed(letter) => prop_assert_eq!(actual, letter),
                            Cell::Space => prop_assert_eq!(actual, ' '),
                            Cell::Hidden => {
                                prop_assert_ne!(actual, ' ');
                                prop_assert!(!excluded.contains(actual));
                            }
                        }
                    }
                }

                // No fitting word of the right length is left out
                let fitting = lexicon
                    .words_of_length(mask.len())
                    .into_iter()
                    .filter(|word| {
                        mask.cells().iter().enumerate().all(|(position, cell)| {
                            let actual = word.char_at(position);
                            match *cell {
                                Cell::Revealed(letter) => actual == letter,
                                Cell::Space => actual == ' ',
                                Cell::Hidden => actual != ' ' && !excluded.contains(actual),
                            }
                        })
                    })
                    .count();
                prop_assert_eq!(candidates.len(), fitting);

                // Wrong letters the secret lacks never rule the secret out
                let misses: LetterSet =
                    wrong.chars().filter(|&l| !secret.has_letter(l)).collect();
                prop_assert!(engine.candidates(&mask, misses).contains(&secret));
            }

            #[test]
            fn best_guess_is_new_and_stable(
                index in 0usize..1000,
                revealed in "[a-z]{0,6}",
                wrong in "[a-z]{1,6}",
            ) {
                let (lexicon, _, mask) = partial_game(index, &revealed);
                let excluded: LetterSet = wrong.chars().chain(revealed.chars()).collect();
                let engine = GuessEngine::new(&lexicon);

                let guess = engine.best_guess(&mask, excluded);
                prop_assert_eq!(guess, engine.best_guess(&mask, excluded));
                if let Some(letter) = guess {
                    prop_assert!(!excluded.contains(letter));
                    prop_assert!(!mask.revealed_letters().contains(letter));
                }
            }

            #[test]
            fn more_exclusions_never_add_candidates(
                index in 0usize..1000,
                revealed in "[a-z]{0,4}",
                first in "[a-z]{0,4}",
                more in "[a-z]{0,4}",
            ) {
                let (lexicon, _, mask) = partial_game(index, &revealed);
                let engine = GuessEngine::new(&lexicon);
                let narrow: LetterSet = first.chars().collect();
                let wide: LetterSet = narrow.union(more.chars().collect());

                let before = engine.candidates(&mask, narrow);
                for word in engine.candidates(&mask, wide) {
                    prop_assert!(before.contains(&word));
                }
            }

            #[test]
            fn first_guess_tops_the_ranking(index in 0usize..1000) {
                let (lexicon, _, mask) = partial_game(index, "");
                let engine = GuessEngine::new(&lexicon);

                let top = lexicon.frequency_ranking(mask.len()).first().map(|&(l, _)| l);
                prop_assert_eq!(engine.best_guess(&mask, LetterSet::EMPTY), top);
            }
        }
    }
}
