//! Per-line classification and styling dispatch.
//!
//! A line of a known format is classified into a [`LineRole`]. Tabular
//! lines also report which fields carry sequence or quality payloads.
//! Styling then rewrites only those payloads; everything else is emitted
//! byte-identical, with tab and comma separators preserved.

use std::borrow::Cow;

use crate::alphabet::is_sequence_line;
use crate::formats::{fasta, fastq, sam, vcf, Format};
use crate::scheme::ColorScheme;
use crate::style::{style_quality, style_sequence};

/// Logical role of a line within its format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// Header or metadata line, emitted verbatim.
    Header,
    /// Whole line is sequence data.
    Sequence,
    /// Whole line is quality data.
    Quality,
    /// Tab-separated record with payload fields.
    TabularData,
    /// Anything else, emitted verbatim.
    Passthrough,
}

/// Kind of payload carried by a tabular field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    Sequence,
    Quality,
    /// Comma-separated alleles, each styled only if it is a sequence.
    Alleles,
}

/// A payload field of a tabular line, by zero-based index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPayload {
    pub index: usize,
    pub kind: PayloadKind,
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub role: LineRole,
    /// Payload fields, only for [`LineRole::TabularData`].
    pub payloads: Vec<FieldPayload>,
}

impl Classification {
    pub fn new(role: LineRole) -> Self {
        Self {
            role,
            payloads: Vec::new(),
        }
    }

    pub fn tabular(payloads: Vec<FieldPayload>) -> Self {
        Self {
            role: LineRole::TabularData,
            payloads,
        }
    }
}

/// Classifies a line according to its stream's format.
pub fn classify_line(line: &str, format: Format) -> Classification {
    if line.is_empty() {
        return Classification::new(LineRole::Passthrough);
    }
    match format {
        Format::Fasta => fasta::classify(line),
        Format::Fastq => fastq::classify(line),
        Format::Sam => sam::classify(line),
        Format::Vcf => vcf::classify(line),
        Format::Unknown => Classification::new(LineRole::Passthrough),
    }
}

/// Returns true if the line starts one logical record. Used for summary
/// counts only.
pub fn is_countable(line: &str, format: Format) -> bool {
    match format {
        Format::Fasta => fasta::is_countable(line),
        Format::Fastq => fastq::is_countable(line),
        Format::Sam => sam::is_countable(line),
        Format::Vcf => vcf::is_countable(line),
        Format::Unknown => false,
    }
}

/// Classifies a line and styles its payloads.
pub fn classify_and_style<'a>(line: &'a str, format: Format, scheme: &ColorScheme) -> Cow<'a, str> {
    let classification = classify_line(line, format);
    match classification.role {
        LineRole::Header | LineRole::Passthrough => Cow::Borrowed(line),
        LineRole::Sequence => Cow::Owned(style_sequence(line, scheme)),
        LineRole::Quality => Cow::Owned(style_quality(line, scheme)),
        LineRole::TabularData if classification.payloads.is_empty() => Cow::Borrowed(line),
        LineRole::TabularData => Cow::Owned(style_fields(line, &classification.payloads, scheme)),
    }
}

fn style_fields(line: &str, payloads: &[FieldPayload], scheme: &ColorScheme) -> String {
    let mut fields: Vec<Cow<'_, str>> = line.split('\t').map(Cow::Borrowed).collect();
    for payload in payloads {
        let Some(field) = fields.get_mut(payload.index) else {
            continue;
        };
        let styled = match payload.kind {
            PayloadKind::Sequence => style_sequence(field, scheme),
            PayloadKind::Quality => style_quality(field, scheme),
            PayloadKind::Alleles => style_alleles(field, scheme),
        };
        *field = Cow::Owned(styled);
    }
    fields.join("\t")
}

fn style_alleles(field: &str, scheme: &ColorScheme) -> String {
    field
        .split(',')
        .map(|allele| {
            if is_sequence_line(allele) {
                Cow::Owned(style_sequence(allele, scheme))
            } else {
                Cow::Borrowed(allele)
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}
