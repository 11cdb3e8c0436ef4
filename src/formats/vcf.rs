//! VCF line classification.
//!
//! Meta-information and the column header start with `#`. Data lines have
//! at least five tab-separated fields; REF (index 3) and ALT (index 4) are
//! the payloads. ALT may hold several comma-separated alleles, which are
//! checked one by one when styled.

use crate::alphabet::is_sequence_line;
use crate::classify::{Classification, FieldPayload, LineRole, PayloadKind};

/// CHROM, POS, ID, REF, ALT.
pub const MIN_FIELDS: usize = 5;

const REF_FIELD: usize = 3;
const ALT_FIELD: usize = 4;

/// Classifies a non-empty VCF line.
pub fn classify(line: &str) -> Classification {
    if line.starts_with('#') {
        return Classification::new(LineRole::Header);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return Classification::new(LineRole::Passthrough);
    }

    let mut payloads = Vec::with_capacity(2);
    let reference = fields[REF_FIELD];
    if reference != "." && is_sequence_line(reference) {
        payloads.push(FieldPayload {
            index: REF_FIELD,
            kind: PayloadKind::Sequence,
        });
    }
    if fields[ALT_FIELD].split(',').any(is_sequence_line) {
        payloads.push(FieldPayload {
            index: ALT_FIELD,
            kind: PayloadKind::Alleles,
        });
    }
    Classification::tabular(payloads)
}

/// One record per data line.
pub fn is_countable(line: &str) -> bool {
    !line.starts_with('#')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header() {
        assert_eq!(classify("##fileformat=VCFv4.2").role, LineRole::Header);
        assert_eq!(classify("#CHROM\tPOS\tID\tREF\tALT").role, LineRole::Header);
    }

    #[test]
    fn test_ref_and_alt() {
        let classification = classify("chr1\t100\t.\tA\tT,G\t50\tPASS\t.");
        assert_eq!(classification.role, LineRole::TabularData);
        let kinds: Vec<(usize, PayloadKind)> = classification
            .payloads
            .iter()
            .map(|p| (p.index, p.kind))
            .collect();
        assert_eq!(
            kinds,
            [(3, PayloadKind::Sequence), (4, PayloadKind::Alleles)]
        );
    }

    #[test]
    fn test_missing_alleles() {
        let classification = classify("chr1\t100\t.\t.\t.");
        assert_eq!(classification.role, LineRole::TabularData);
        assert!(classification.payloads.is_empty());

        let symbolic = classify("chr1\t100\t.\tN\t<DEL>");
        assert_eq!(symbolic.payloads.len(), 1);
        assert_eq!(symbolic.payloads[0].index, 3);
    }

    #[test]
    fn test_too_few_fields() {
        assert_eq!(classify("chr1\t100\t.\tA").role, LineRole::Passthrough);
    }

    #[test]
    fn test_is_countable() {
        assert!(is_countable("chr1\t100\t.\tA\tT"));
        assert!(!is_countable("#CHROM"));
    }
}
