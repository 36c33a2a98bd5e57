//! Static mutation rule tables
//!
//! All tables are process-wide constants; lookups fold the source character to
//! ASCII lowercase before matching.

/// Numeric-style pad tokens, appended to non-numeric words.
pub static NUM_PAD: &[&str] = &[
    "123", "999", "777", "666", "333", "111", "420", "69", "42069", "6969", "321",
];

/// Alphabetic-style pad tokens, appended to purely numeric words.
pub static TEXT_PAD: &[&str] = &["asdf", "qwerty", "xoxo", "xo", "xox"];

/// Symbols appended by the trailing-symbol stage.
pub static END_SYMBOLS: &[&str] = &["!", "#"];

/// Leetspeak mapping (multiple possible replacements per letter).
pub static LEET_MAP: &[(char, &[&str])] = &[
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1", "!"]),
    ('o', &["0"]),
    ('s', &["5"]),
    ('t', &["7"]),
];

/// Vowel mutation mapping ("v" for "u" is a popular obfuscation).
pub static VOWEL_MUTATE: &[(char, &[&str])] = &[
    ('a', &["4", "@"]),
    ('e', &["3"]),
    ('i', &["1"]),
    ('o', &["0"]),
    ('u', &["v"]),
];

/// Look up the replacements for a character in a rule table, case-insensitively.
#[inline]
pub fn lookup(
    table: &'static [(char, &'static [&'static str])],
    c: char,
) -> Option<&'static [&'static str]> {
    let folded = c.to_ascii_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == folded)
        .map(|(_, reps)| *reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup(LEET_MAP, 'a'), Some(["4", "@"].as_slice()));
        assert_eq!(lookup(LEET_MAP, 'A'), Some(["4", "@"].as_slice()));
        assert_eq!(lookup(LEET_MAP, 'T'), Some(["7"].as_slice()));
    }

    #[test]
    fn test_lookup_miss() {
        assert_eq!(lookup(LEET_MAP, 'c'), None);
        assert_eq!(lookup(LEET_MAP, '4'), None);
        assert_eq!(lookup(VOWEL_MUTATE, 's'), None);
    }

    #[test]
    fn test_pad_lists_disjoint() {
        for pad in NUM_PAD {
            assert!(!TEXT_PAD.contains(pad));
        }
    }
}
