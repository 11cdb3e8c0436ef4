//! SAM line classification.
//!
//! Header lines start with `@`. Alignment lines carry at least 11
//! tab-separated mandatory fields; SEQ (index 9) and QUAL (index 10) are
//! the payloads. `*` marks an unavailable field.

use crate::alphabet::{is_quality_line, is_sequence_line};
use crate::classify::{Classification, FieldPayload, LineRole, PayloadKind};

/// Mandatory fields of an alignment line.
pub const MIN_FIELDS: usize = 11;
/// Tabs separating the mandatory fields.
pub const MIN_DATA_TABS: usize = MIN_FIELDS - 1;

const SEQ_FIELD: usize = 9;
const QUAL_FIELD: usize = 10;

/// Classifies a non-empty SAM line.
pub fn classify(line: &str) -> Classification {
    if line.starts_with('@') {
        return Classification::new(LineRole::Header);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Classification::new(LineRole::Passthrough);
    }

    let mut payloads = Vec::with_capacity(2);
    let seq = fields[SEQ_FIELD];
    if seq != "*" && is_sequence_line(seq) {
        payloads.push(FieldPayload {
            index: SEQ_FIELD,
            kind: PayloadKind::Sequence,
        });
    }
    let qual = fields[QUAL_FIELD];
    if qual != "*" && is_quality_line(qual) {
        payloads.push(FieldPayload {
            index: QUAL_FIELD,
            kind: PayloadKind::Quality,
        });
    }
    Classification::tabular(payloads)
}

/// One record per alignment line.
pub fn is_countable(line: &str) -> bool {
    !line.starts_with('@') && line.matches('\t').count() >= MIN_DATA_TABS
}

#[cfg(test)]
mod tests {
    use super::*;

    const READ: &str = "r1\t0\tchr1\t100\t60\t5M\t*\t0\t0\tACGTN\t!!!!!";

    #[test]
    fn test_header() {
        assert_eq!(classify("@HD\tVN:1.6").role, LineRole::Header);
        assert_eq!(classify("@SQ\tSN:chr1\tLN:100").role, LineRole::Header);
    }

    #[test]
    fn test_alignment_payloads() {
        let classification = classify(READ);
        assert_eq!(classification.role, LineRole::TabularData);
        assert_eq!(
            classification.payloads,
            vec![
                FieldPayload {
                    index: 9,
                    kind: PayloadKind::Sequence
                },
                FieldPayload {
                    index: 10,
                    kind: PayloadKind::Quality
                },
            ]
        );
    }

    #[test]
    fn test_star_fields_are_not_payloads() {
        let classification = classify("r1\t4\t*\t0\t0\t*\t*\t0\t0\t*\t*");
        assert_eq!(classification.role, LineRole::TabularData);
        assert!(classification.payloads.is_empty());
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(classify("r1\t0\tchr1\t100").role, LineRole::Passthrough);
    }

    #[test]
    fn test_is_countable() {
        assert!(is_countable(READ));
        assert!(!is_countable("@SQ\tSN:chr1\tLN:100"));
        assert!(!is_countable("r1\t0\tchr1"));
    }
}
