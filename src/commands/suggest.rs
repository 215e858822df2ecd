//! Letter suggestion command
//!
//! Explains what the guess engine would do for a given mask.

use crate::core::{LetterSet, Mask};
use crate::lexicon::Lexicon;
use crate::solver::GuessEngine;
use anyhow::{Result, bail};

/// How many candidates to keep for display
const SAMPLE_SIZE: usize = 10;

/// Result of asking the engine about a mask
pub struct Suggestion {
    pub mask: Mask,
    pub tried: LetterSet,
    pub best_guess: Option<char>,
    pub total_candidates: usize,
    pub sample: Vec<String>,
    /// Global ranking when nothing is tried yet, local tally otherwise
    pub ranking: Vec<(char, usize)>,
    pub uses_global_ranking: bool,
}

/// Suggest the next letter for `mask` after the letters in `tried`
///
/// # Errors
///
/// Returns an error if the mask cannot be parsed or `tried` contains
/// anything other than letters.
pub fn suggest_letter(mask: &str, tried: &str, lexicon: &Lexicon) -> Result<Suggestion> {
    let mask = Mask::parse(mask)?;

    if let Some(bad) = tried.chars().find(|c| !c.is_ascii_alphabetic()) {
        bail!("tried letters must be letters only, found {bad:?}");
    }
    let tried: LetterSet = tried.chars().collect();

    let engine = GuessEngine::new(lexicon);
    let candidates = engine.candidates(&mask, tried);
    let uses_global_ranking = tried.is_empty();

    let ranking = if uses_global_ranking {
        lexicon.frequency_ranking(mask.len()).to_vec()
    } else {
        engine.tally(&mask, tried)
    };

    Ok(Suggestion {
        best_guess: engine.best_guess(&mask, tried),
        total_candidates: candidates.len(),
        sample: candidates
            .iter()
            .take(SAMPLE_SIZE)
            .map(|w| w.text().to_string())
            .collect(),
        mask,
        tried,
        ranking,
        uses_global_ranking,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_lexicon() -> Lexicon {
        Lexicon::from_lines(&["cat", "car", "can", "bat"]).unwrap()
    }

    #[test]
    fn suggest_first_letter_uses_ranking() {
        let lexicon = setup_lexicon();
        let suggestion = suggest_letter("___", "", &lexicon).unwrap();

        assert!(suggestion.uses_global_ranking);
        assert_eq!(suggestion.best_guess, Some('a'));
        assert_eq!(suggestion.total_candidates, 4);
        assert_eq!(suggestion.ranking[0], ('a', 4));
    }

    #[test]
    fn suggest_after_tried_letters() {
        let lexicon = setup_lexicon();
        let suggestion = suggest_letter("_a_", "T", &lexicon).unwrap();

        assert!(!suggestion.uses_global_ranking);
        assert_eq!(suggestion.best_guess, Some('c'));
        assert_eq!(suggestion.total_candidates, 2);
        assert_eq!(suggestion.sample, vec!["car", "can"]);
        assert_eq!(suggestion.ranking, vec![('c', 2), ('n', 1), ('r', 1)]);
    }

    #[test]
    fn suggest_with_no_candidates() {
        let lexicon = setup_lexicon();
        let suggestion = suggest_letter("_o_", "x", &lexicon).unwrap();

        assert_eq!(suggestion.best_guess, None);
        assert_eq!(suggestion.total_candidates, 0);
        assert!(suggestion.ranking.is_empty());
    }

    #[test]
    fn suggest_rejects_bad_input() {
        let lexicon = setup_lexicon();
        assert!(suggest_letter("_a?", "", &lexicon).is_err());
        assert!(suggest_letter("_a_", "t1", &lexicon).is_err());
    }
}
