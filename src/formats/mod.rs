//! Format detection and per-format line classification.
//!
//! Supports:
//! - FASTA (.fasta, .fa, .fna, .ffn, .faa, .frn)
//! - FASTQ (.fastq, .fq)
//! - SAM (.sam)
//! - VCF (.vcf)
//!
//! Format detection priority:
//! 1. Explicit format specification (-f option)
//! 2. File extension
//! 3. Content of the first [`LOOKAHEAD_LINES`] lines

pub mod fasta;
pub mod fastq;
pub mod sam;
pub mod vcf;

use std::ffi::OsStr;
use std::path::Path;

use crate::alphabet::{is_quality_line, is_sequence_line};

/// Number of leading lines sampled for content detection.
pub const LOOKAHEAD_LINES: usize = 10;

/// Input format of a stream. Decided once per stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Unknown,
    Fasta,
    Fastq,
    Sam,
    Vcf,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Unknown => write!(f, "Unknown"),
            Format::Fasta => write!(f, "FASTA"),
            Format::Fastq => write!(f, "FASTQ"),
            Format::Sam => write!(f, "SAM"),
            Format::Vcf => write!(f, "VCF"),
        }
    }
}

/// Detects format from file extension.
pub fn detect_format_from_extension<P: AsRef<Path>>(path: P) -> Format {
    let Some(ext) = path.as_ref().extension().and_then(OsStr::to_str) else {
        return Format::Unknown;
    };
    match ext.to_lowercase().as_str() {
        "fasta" | "fa" | "fna" | "ffn" | "faa" | "frn" => Format::Fasta,
        "fastq" | "fq" => Format::Fastq,
        "sam" => Format::Sam,
        "vcf" => Format::Vcf,
        _ => Format::Unknown,
    }
}

/// Detects the format from a sample of leading lines.
///
/// Rules are tried in order and the first that fires wins:
/// VCF file-format marker, then SAM header tags or SAM-shaped data lines,
/// then FASTQ records, then FASTA headers.
pub fn detect_format_from_content<S: AsRef<str>>(lines: &[S]) -> Format {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();

    if lines.iter().any(|line| line.starts_with("##fileformat=VCF")) {
        return Format::Vcf;
    }

    if lines.iter().any(|line| is_sam_evidence(line)) {
        return Format::Sam;
    }

    let mut fasta_headers = 0;
    let mut fastq_headers = 0;
    for (i, line) in lines.iter().enumerate() {
        if line.starts_with('>') {
            fasta_headers += 1;
        } else if line.starts_with('@') && is_fastq_record(&lines[i + 1..]) {
            fastq_headers += 1;
        }
    }

    if fastq_headers > 0 {
        Format::Fastq
    } else if fasta_headers > 0 {
        Format::Fasta
    } else {
        Format::Unknown
    }
}

fn is_sam_evidence(line: &str) -> bool {
    if ["@HD", "@SQ", "@RG"].iter().any(|tag| line.starts_with(tag)) {
        return true;
    }
    !line.starts_with('@') && line.matches('\t').count() >= sam::MIN_DATA_TABS
}

/// Checks the three lines following a `@` header: sequence, `+`, quality
/// of the same length. All three must be inside the sample.
fn is_fastq_record(rest: &[&str]) -> bool {
    let [seq, plus, qual, ..] = rest else {
        return false;
    };
    plus.starts_with('+')
        && is_sequence_line(seq)
        && is_quality_line(qual)
        && seq.len() == qual.len()
}

/// Decides the format of a stream: filename first, then content.
///
/// Returns [`Format::Unknown`] when neither source is conclusive; the
/// caller decides what an undecidable stream means.
pub fn detect_format<S: AsRef<str>>(filename: Option<&Path>, sample: &[S]) -> Format {
    let from_name = filename.map_or(Format::Unknown, detect_format_from_extension);
    if from_name != Format::Unknown {
        return from_name;
    }
    detect_format_from_content(sample)
}
