//! Variant generation pipeline
//!
//! Chains the mutation stages for a single seed word: case enforcement,
//! leetspeak, vowel mutation, padding, trailing symbols, "@" substitution, and
//! a final per-position case-repair pass.

use crate::mutate::{
    apply_leetspeak, end_with_symbol, ensure_case, mutate_vowels, pad_password, substitute_at,
    VariantSet,
};

/// Expand one seed word into its full variant set.
///
/// The input is trimmed first; empty or whitespace-only input yields an empty
/// set. The case-repair pass deliberately re-scans the entire accumulated set
/// on every case-variant iteration, with the repairs landing in a snapshot
/// that is rebuilt per iteration. This mirrors the reference mutation order
/// exactly, so identical seeds always expand to identical sets.
pub fn generate_all_variants(word: &str) -> VariantSet {
    let base = word.trim();
    if base.is_empty() {
        return VariantSet::default();
    }

    let mut results = VariantSet::default();
    let mut finalized = VariantSet::default();

    for cv in ensure_case(base) {
        // Leetspeak, plus the case variant itself
        let mut leet_vars = apply_leetspeak(&cv);
        leet_vars.insert(cv.clone());

        // Vowel mutations over every leet variant
        let mut vowel_vars = VariantSet::default();
        for lv in &leet_vars {
            vowel_vars.extend(mutate_vowels(lv));
        }
        vowel_vars.extend(leet_vars);

        // Pad everything up to the minimum length
        let mut padded_vars = VariantSet::default();
        for vv in &vowel_vars {
            padded_vars.extend(pad_password(vv));
        }

        // Trailing symbols, for both the padded forms and their "@" siblings
        for pv in &padded_vars {
            results.extend(end_with_symbol(pv));

            for av in substitute_at(pv) {
                results.extend(end_with_symbol(&av));
            }
        }

        // Case repair over the whole accumulator so far
        finalized = results.clone();
        for w in &results {
            repair_case(w, &mut finalized);
        }
    }

    finalized
}

/// Add single-position case-repaired siblings of `w` to `out`.
///
/// Strings without any alphabetic character are skipped. When `w` lacks an
/// uppercase letter, one variant per alphabetic position is added with only
/// that position uppercased; symmetrically for a missing lowercase letter.
fn repair_case(w: &str, out: &mut VariantSet) {
    if !w.chars().any(char::is_alphabetic) {
        return;
    }

    if !w.chars().any(char::is_uppercase) {
        for (i, c) in w.char_indices() {
            if c.is_alphabetic() {
                let mut v = String::with_capacity(w.len());
                v.push_str(&w[..i]);
                v.extend(c.to_uppercase());
                v.push_str(&w[i + c.len_utf8()..]);
                out.insert(v);
            }
        }
    }

    if !w.chars().any(char::is_lowercase) {
        for (i, c) in w.char_indices() {
            if c.is_alphabetic() {
                let mut v = String::with_capacity(w.len());
                v.push_str(&w[..i]);
                v.extend(c.to_lowercase());
                v.push_str(&w[i + c.len_utf8()..]);
                out.insert(v);
            }
        }
    }
}

/// Truncate a variant set to its lexicographically-first `limit` members.
///
/// Off by default; this is the safety valve for combinatorial blow-up on long
/// seed words, at the cost of dropping variants.
pub fn cap_variants(variants: VariantSet, limit: usize) -> VariantSet {
    if variants.len() <= limit {
        return variants;
    }

    let mut sorted: Vec<String> = variants.into_iter().collect();
    sorted.sort_unstable();
    sorted.truncate(limit);
    sorted.into_iter().collect()
}
