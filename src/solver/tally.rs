//! Local letter tallies over a candidate set
//!
//! Unlike the global frequency ranking, each word votes at most once per
//! letter: "letter" adds one to `t`, not two.

use crate::core::{ALPHABET_LEN, LetterSet, Word};

/// Count, for every letter not in `skip`, how many candidates contain it
///
/// The result holds only letters with a non-zero count, sorted by count
/// (highest first) and then alphabetically, so the first entry is the
/// deterministic best guess.
///
/// # Examples
/// ```
/// use hangman_solver::core::{LetterSet, Word};
/// use hangman_solver::solver::tally_letters;
///
/// let car = Word::new("car").unwrap();
/// let can = Word::new("can").unwrap();
/// let skip: LetterSet = "at".chars().collect();
///
/// let tally = tally_letters(&[&car, &can], skip);
/// assert_eq!(tally, vec![('c', 2), ('n', 1), ('r', 1)]);
/// ```
#[must_use]
pub fn tally_letters(candidates: &[&Word], skip: LetterSet) -> Vec<(char, usize)> {
    let mut counts = [0usize; ALPHABET_LEN];

    for word in candidates {
        for letter in word.distinct_letters().iter() {
            if !skip.contains(letter) {
                if let Some(index) = LetterSet::index_of(letter) {
                    counts[index] += 1;
                }
            }
        }
    }

    let mut tally: Vec<(char, usize)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(index, &count)| (LetterSet::letter_at(index), count))
        .collect();

    // Already alphabetical, so a stable sort by count gives the tie-break
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::loader::words_from_slice;

    #[test]
    fn repeats_count_once_per_word() {
        let words = words_from_slice(&["letter", "tee"]);
        let refs: Vec<&Word> = words.iter().collect();

        let tally = tally_letters(&refs, LetterSet::EMPTY);
        assert_eq!(tally[0], ('e', 2));
        assert_eq!(tally[1], ('t', 2));
        assert!(tally.contains(&('l', 1)));
        assert!(tally.contains(&('r', 1)));
    }

    #[test]
    fn skipped_letters_are_absent() {
        let words = words_from_slice(&["bat", "cat"]);
        let refs: Vec<&Word> = words.iter().collect();

        let skip: LetterSet = "at".chars().collect();
        let tally = tally_letters(&refs, skip);
        assert_eq!(tally, vec![('b', 1), ('c', 1)]);
    }

    #[test]
    fn ties_break_alphabetically() {
        let words = words_from_slice(&["zy", "yz", "ab"]);
        let refs: Vec<&Word> = words.iter().collect();

        let tally = tally_letters(&refs, LetterSet::EMPTY);
        let letters: String = tally.iter().map(|&(l, _)| l).collect();
        assert_eq!(letters, "yzab");
    }

    #[test]
    fn empty_candidates_give_empty_tally() {
        assert!(tally_letters(&[], LetterSet::EMPTY).is_empty());
    }

    #[test]
    fn everything_skipped_gives_empty_tally() {
        let words = words_from_slice(&["cat"]);
        let refs: Vec<&Word> = words.iter().collect();
        assert!(tally_letters(&refs, LetterSet::ALL).is_empty());
    }
}
