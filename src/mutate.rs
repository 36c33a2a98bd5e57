//! Text mutation stages
//!
//! Each stage is a pure function from one word to a set of variants. Stages
//! never fail on well-formed string input; composition happens in the
//! generator module.

use ahash::RandomState;
use hashbrown::HashSet;

use crate::rules::{self, END_SYMBOLS, LEET_MAP, NUM_PAD, TEXT_PAD, VOWEL_MUTATE};

/// Set of unique variants. Internal ordering never affects correctness;
/// output is sorted once at write time.
pub type VariantSet = HashSet<String, RandomState>;

/// Minimum final length enforced by the padding stage.
pub const MIN_PAD_LENGTH: usize = 8;

/// Character count with fast path for ASCII-only strings.
#[inline]
fn char_len(word: &str) -> usize {
    if word.is_ascii() {
        word.len()
    } else {
        word.chars().count()
    }
}

/// Replace the character starting at byte offset `start` with `rep`.
#[inline]
fn splice(word: &str, start: usize, c: char, rep: &str) -> String {
    let mut out = String::with_capacity(word.len() + rep.len());
    out.push_str(&word[..start]);
    out.push_str(rep);
    out.push_str(&word[start + c.len_utf8()..]);
    out
}

/// Guarantee that both an uppercase-bearing and a lowercase-bearing form exist.
///
/// Mixed-case input is returned as a singleton. Otherwise the first character
/// is uppercased and/or lowercased to supply whichever case is missing, and
/// the unmodified input is always included.
pub fn ensure_case(word: &str) -> VariantSet {
    let mut variants = VariantSet::default();

    let has_upper = word.chars().any(char::is_uppercase);
    let has_lower = word.chars().any(char::is_lowercase);

    if has_upper && has_lower {
        variants.insert(word.to_string());
        return variants;
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        let rest = chars.as_str();

        if !has_upper {
            let mut v = String::with_capacity(word.len());
            v.extend(first.to_uppercase());
            v.push_str(rest);
            variants.insert(v);
        }

        if !has_lower {
            let mut v = String::with_capacity(word.len());
            v.extend(first.to_lowercase());
            v.push_str(rest);
            variants.insert(v);
        }
    }

    variants.insert(word.to_string());
    variants
}

/// Single-substitution leetspeak variants.
///
/// One output per (position, replacement) pair for every character present in
/// the leet table; the unmodified input is not included.
pub fn apply_leetspeak(word: &str) -> VariantSet {
    substitute_by_table(word, LEET_MAP)
}

/// Single-substitution vowel mutations, driven by the vowel table.
pub fn mutate_vowels(word: &str) -> VariantSet {
    substitute_by_table(word, VOWEL_MUTATE)
}

fn substitute_by_table(word: &str, table: &'static [(char, &'static [&'static str])]) -> VariantSet {
    let mut variants = VariantSet::default();

    for (i, c) in word.char_indices() {
        if let Some(reps) = rules::lookup(table, c) {
            for rep in reps {
                variants.insert(splice(word, i, c, rep));
            }
        }
    }

    variants
}

/// Pad a word up to the minimum length of 8 characters.
///
/// Purely numeric words pad from `TEXT_PAD` to diversify character classes;
/// everything else pads from `NUM_PAD`. Concatenations that still fall short
/// of 8 characters are discarded rather than padded further. The input itself
/// is included only when already at least 8 characters long.
pub fn pad_password(word: &str) -> VariantSet {
    let is_numeric = !word.is_empty() && word.chars().all(|c| c.is_ascii_digit());
    let pads = if is_numeric { TEXT_PAD } else { NUM_PAD };

    let mut variants = VariantSet::default();

    if char_len(word) >= MIN_PAD_LENGTH {
        variants.insert(word.to_string());
    }

    for pad in pads {
        let padded = format!("{}{}", word, pad);
        if char_len(&padded) >= MIN_PAD_LENGTH {
            variants.insert(padded);
        }
    }

    variants
}

/// Append each symbol from the end-symbol list.
pub fn end_with_symbol(word: &str) -> VariantSet {
    END_SYMBOLS
        .iter()
        .map(|sym| format!("{}{}", word, sym))
        .collect()
}

/// Replace exactly one case-insensitive "a" occurrence with "@" per variant.
///
/// Returns the empty set when the word contains no "a".
pub fn substitute_at(word: &str) -> VariantSet {
    let mut variants = VariantSet::default();

    for (i, c) in word.char_indices() {
        if c.to_ascii_lowercase() == 'a' {
            variants.insert(splice(word, i, c, "@"));
        }
    }

    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(set: &VariantSet) -> Vec<&str> {
        let mut v: Vec<&str> = set.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_ensure_case_all_lowercase() {
        let variants = ensure_case("cat");
        assert_eq!(sorted(&variants), vec!["Cat", "cat"]);
    }

    #[test]
    fn test_ensure_case_all_uppercase() {
        let variants = ensure_case("CAT");
        assert_eq!(sorted(&variants), vec!["CAT", "cAT"]);
    }

    #[test]
    fn test_ensure_case_mixed_is_singleton() {
        let variants = ensure_case("Cat");
        assert_eq!(sorted(&variants), vec!["Cat"]);
    }

    #[test]
    fn test_ensure_case_no_letters() {
        // Neither case exists, but both first-char transforms are identity
        let variants = ensure_case("1234");
        assert_eq!(sorted(&variants), vec!["1234"]);
    }

    #[test]
    fn test_ensure_case_always_contains_input() {
        for word in ["cat", "CAT", "Cat", "c", "9lives"] {
            assert!(ensure_case(word).contains(word));
        }
    }

    #[test]
    fn test_leetspeak_single_substitution() {
        let variants = apply_leetspeak("cat");
        assert_eq!(sorted(&variants), vec!["c4t", "c@t", "ca7"]);
    }

    #[test]
    fn test_leetspeak_case_insensitive_match() {
        let variants = apply_leetspeak("CAT");
        assert_eq!(sorted(&variants), vec!["C4T", "C@T", "CA7"]);
    }

    #[test]
    fn test_leetspeak_all_pairs() {
        // "is" hits i->{1,!} and s->{5}
        let variants = apply_leetspeak("is");
        assert_eq!(sorted(&variants), vec!["!s", "1s", "i5"]);
    }

    #[test]
    fn test_leetspeak_no_eligible_chars() {
        assert!(apply_leetspeak("xyz").is_empty());
        assert!(apply_leetspeak("123").is_empty());
    }

    #[test]
    fn test_vowel_mutation() {
        let variants = mutate_vowels("up");
        assert_eq!(sorted(&variants), vec!["vp"]);

        let variants = mutate_vowels("cat");
        assert_eq!(sorted(&variants), vec!["c4t", "c@t"]);
    }

    #[test]
    fn test_vowel_table_excludes_consonants() {
        // "s" and "t" are leet-eligible but not vowels
        assert!(mutate_vowels("st").is_empty());
    }

    #[test]
    fn test_pad_short_word_discards_short_pads() {
        // 3 chars + pad must reach 8; only the 5-char pad qualifies
        let variants = pad_password("cat");
        assert_eq!(sorted(&variants), vec!["cat42069"]);
    }

    #[test]
    fn test_pad_long_word_keeps_original() {
        let variants = pad_password("password");
        assert!(variants.contains("password"));
        assert_eq!(variants.len(), 1 + NUM_PAD.len());
        for v in &variants {
            assert!(v.chars().count() >= MIN_PAD_LENGTH);
        }
    }

    #[test]
    fn test_pad_numeric_uses_text_pads() {
        let variants = pad_password("1234");
        assert_eq!(sorted(&variants), vec!["1234asdf", "1234qwerty", "1234xoxo"]);
    }

    #[test]
    fn test_pad_minimum_length_property() {
        for word in ["a", "cat", "1234", "password", "verylongpassword"] {
            for v in &pad_password(word) {
                assert!(v.chars().count() >= MIN_PAD_LENGTH, "too short: {}", v);
            }
        }
    }

    #[test]
    fn test_end_with_symbol() {
        let variants = end_with_symbol("pass");
        assert_eq!(sorted(&variants), vec!["pass!", "pass#"]);
        assert_eq!(variants.len(), END_SYMBOLS.len());
    }

    #[test]
    fn test_substitute_at_per_occurrence() {
        let variants = substitute_at("banana");
        assert_eq!(sorted(&variants), vec!["b@nana", "ban@na", "banan@"]);
    }

    #[test]
    fn test_substitute_at_uppercase() {
        let variants = substitute_at("Apple");
        assert_eq!(sorted(&variants), vec!["@pple"]);
    }

    #[test]
    fn test_substitute_at_absent() {
        assert!(substitute_at("xyz").is_empty());
    }

    #[test]
    fn test_splice_multibyte_safe() {
        // Mutating around a multibyte char must not split its encoding
        let variants = apply_leetspeak("héllo");
        assert!(variants.contains("héll0"));
    }
}
