//! Alphabet predicates for sequence and quality text.
//!
//! All checks are case-insensitive (input is uppercased first) and an
//! empty string is never a valid sequence or quality line.

use std::sync::LazyLock;

use regex::Regex;

static DNA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ATGCN]+$").unwrap());
static RNA: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[AUGCN]+$").unwrap());
static PROTEIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ACDEFGHIKLMNPQRSTVWY]+$").unwrap());
/// Phred+33 printable range, `!` (33) to `~` (126).
static QUALITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[!-~]+$").unwrap());

/// Minimum length (exclusive) before a string may be read as protein.
///
/// Short nucleotide fragments are also valid amino-acid strings, so they
/// must never be classified as protein.
pub const MIN_PROTEIN_LEN: usize = 10;

// The matchers below expect already-uppercased input.

fn upper_is_protein(upper: &str) -> bool {
    upper.chars().count() > MIN_PROTEIN_LEN && PROTEIN.is_match(upper)
}

/// Returns true if every character is one of `A T G C N`.
pub fn is_dna(s: &str) -> bool {
    DNA.is_match(&s.to_uppercase())
}

/// Returns true if every character is one of `A U G C N`.
pub fn is_rna(s: &str) -> bool {
    RNA.is_match(&s.to_uppercase())
}

/// Returns true for strings longer than [`MIN_PROTEIN_LEN`] made only of
/// the 20 standard amino-acid letters.
pub fn is_protein(s: &str) -> bool {
    upper_is_protein(&s.to_uppercase())
}

/// Returns true if the string looks like DNA, RNA or protein.
pub fn is_sequence_line(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let upper = s.to_uppercase();
    DNA.is_match(&upper) || RNA.is_match(&upper) || upper_is_protein(&upper)
}

/// Returns true if the string is made only of Phred+33 printable characters.
///
/// This overlaps the sequence alphabets, so callers decide by position in
/// the record, never by this check alone.
pub fn is_quality_line(s: &str) -> bool {
    QUALITY.is_match(s)
}
