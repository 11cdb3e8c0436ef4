//! FASTA line classification.
//!
//! ```text
//! >sequence_identifier optional description
//! ACGTACGTACGT...
//! ```
//!
//! Every non-header line is sequence data, whatever its alphabet.

use crate::classify::{Classification, LineRole};

/// Classifies a non-empty FASTA line.
pub fn classify(line: &str) -> Classification {
    if line.starts_with('>') {
        Classification::new(LineRole::Header)
    } else {
        Classification::new(LineRole::Sequence)
    }
}

/// One record per header line.
pub fn is_countable(line: &str) -> bool {
    line.starts_with('>')
}
