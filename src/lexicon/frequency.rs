//! Global letter frequency rankings
//!
//! Counts every letter occurrence across a group of words, repeats
//! included, so "letter" contributes two to both `t` and `e`.

use crate::core::{ALPHABET_LEN, LetterSet, Word};

/// Rank letters by total occurrences across `words`
///
/// The result is sorted by count, highest first. Letters with equal counts
/// keep the order in which they were first seen, which makes the ranking
/// reproducible for a given word order. Spaces are not counted.
///
/// # Examples
/// ```
/// use hangman_solver::core::Word;
/// use hangman_solver::lexicon::rank_letters;
///
/// let words = [Word::new("cat").unwrap(), Word::new("bat").unwrap()];
/// let ranking = rank_letters(&words);
/// assert_eq!(ranking, vec![('a', 2), ('t', 2), ('c', 1), ('b', 1)]);
/// ```
pub fn rank_letters<'a, I>(words: I) -> Vec<(char, usize)>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut counts = [0usize; ALPHABET_LEN];
    let mut first_seen: Vec<usize> = Vec::with_capacity(ALPHABET_LEN);

    for word in words {
        for letter in word.letters() {
            if let Some(index) = LetterSet::index_of(letter) {
                if counts[index] == 0 {
                    first_seen.push(index);
                }
                counts[index] += 1;
            }
        }
    }

    let mut ranking: Vec<(char, usize)> = first_seen
        .into_iter()
        .map(|index| (LetterSet::letter_at(index), counts[index]))
        .collect();

    // Stable sort keeps first-seen order among equal counts
    ranking.sort_by(|a, b| b.1.cmp(&a.1));
    ranking
}
