use std::collections::HashMap;

/// Returns the anagram key of `text`: its characters uppercased and sorted.
///
/// A word and every permutation of its letters share the same key.
pub fn anagram_key(text: &str) -> String {
    let mut letters: Vec<char> = text.to_uppercase().chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Words of one fixed length grouped by anagram key.
///
/// Each bucket keeps its words in the order they were first seen, including
/// repeats.
#[derive(Clone, Debug, Default)]
pub struct AnagramIndex {
    word_length: usize,
    word_count: usize,
    buckets: HashMap<String, Vec<String>>,
}

impl AnagramIndex {
    /// Indexes every word whose trimmed, uppercased form is exactly
    /// `word_length` ASCII letters. Everything else is skipped silently.
    pub fn build<I, S>(words: I, word_length: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self {
            word_length,
            ..Self::default()
        };

        for line in words {
            let word = line.as_ref().trim().to_uppercase();
            // Cheap length check first; most dictionary lines fail it.
            if word.len() != word_length || !word.bytes().all(|b| b.is_ascii_uppercase()) {
                continue;
            }
            index
                .buckets
                .entry(anagram_key(&word))
                .or_default()
                .push(word);
            index.word_count += 1;
        }

        index
    }

    /// Words sharing `code`'s anagram key, or an empty slice.
    pub fn lookup(&self, code: &str) -> &[String] {
        self.buckets
            .get(&anagram_key(code))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The length every indexed word has.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of indexed words, repeats included.
    pub fn len(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Number of distinct anagram classes.
    pub fn key_count(&self) -> usize {
        self.buckets.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_is_permutation_invariant() {
        assert_eq!(anagram_key("listen"), "EILNST");
        assert_eq!(anagram_key("Silent"), anagram_key("ENLIST"));
        assert_eq!(anagram_key("OHIN"), anagram_key("NIHO"));
        assert_eq!(anagram_key(""), "");
    }

    #[test]
    fn lookup_round_trips_any_permutation() {
        let index = AnagramIndex::build(["ALBANIA"], 7);
        assert_eq!(index.lookup("NAALIAB"), ["ALBANIA".to_string()]);
        assert_eq!(index.lookup("albania"), ["ALBANIA".to_string()]);
        assert!(index.lookup("ALBANIX").is_empty());
    }

    #[test]
    fn length_filter_excludes_other_lengths() {
        let index = AnagramIndex::build(["dog"], 4);
        assert!(index.is_empty());
        assert!(index.lookup("DOG").is_empty());

        let index = AnagramIndex::build(["dog"], 2);
        assert!(index.is_empty());
    }

    #[test]
    fn non_letters_are_skipped() {
        let index = AnagramIndex::build(["ab-c", "a bc", "ab1c", "Ábcd", "abcd"], 4);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("DCBA"), ["ABCD".to_string()]);
    }

    #[test]
    fn buckets_keep_first_seen_order_and_repeats() {
        let index = AnagramIndex::build(["stop", "pots", "Tops", "pots"], 4);
        assert_eq!(index.len(), 4);
        assert_eq!(index.key_count(), 1);
        assert_eq!(
            index.lookup("OPTS"),
            ["STOP", "POTS", "TOPS", "POTS"].map(String::from)
        );
        assert_eq!(index.word_length(), 4);
    }

    #[test]
    fn words_are_trimmed_and_uppercased() {
        let index = AnagramIndex::build(["  ohio\r", "\tIowa "], 4);
        assert_eq!(index.lookup("oohi"), ["OHIO".to_string()]);
        assert_eq!(index.lookup("AWOI"), ["IOWA".to_string()]);
    }
}
