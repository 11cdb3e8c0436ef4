//! FASTQ line classification.
//!
//! ```text
//! @read_identifier
//! ACGTACGT
//! +
//! IIIIHHH#
//! ```
//!
//! Lines are classified on their own, without tracking the position in the
//! four-line record: header markers first, then the sequence test, then the
//! quality test.

use crate::alphabet::{is_quality_line, is_sequence_line};
use crate::classify::{Classification, LineRole};

/// Classifies a non-empty FASTQ line.
pub fn classify(line: &str) -> Classification {
    let role = if line.starts_with('@') || line.starts_with('+') {
        LineRole::Header
    } else if is_sequence_line(line) {
        LineRole::Sequence
    } else if is_quality_line(line) {
        LineRole::Quality
    } else {
        LineRole::Passthrough
    };
    Classification::new(role)
}

/// One record per `@` line.
pub fn is_countable(line: &str) -> bool {
    line.starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("@r1 extra").role, LineRole::Header);
        assert_eq!(classify("+").role, LineRole::Header);
        assert_eq!(classify("+r1").role, LineRole::Header);
        assert_eq!(classify("ACGTN").role, LineRole::Sequence);
        assert_eq!(classify("!!#5:?").role, LineRole::Quality);
        assert_eq!(classify("not quality").role, LineRole::Passthrough);
    }

    #[test]
    fn test_short_letter_quality_is_sequence() {
        // Quality strings made of nucleotide letters are read as sequence
        assert_eq!(classify("GGCC").role, LineRole::Sequence);
        assert_eq!(classify("IIII").role, LineRole::Quality);
    }

    #[test]
    fn test_is_countable() {
        assert!(is_countable("@r1"));
        assert!(!is_countable("+r1"));
        assert!(!is_countable("ACGT"));
    }
}
