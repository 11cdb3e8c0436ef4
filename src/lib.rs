//! # colordna - Terminal colors for sequence files
//!
//! Colorizes nucleotide sequences and quality scores in FASTA, FASTQ, SAM
//! and VCF text without altering their content.
//!
//! ## Architecture
//!
//! The pipeline is a single pass over each input stream:
//! - `formats`: format detection (filename, then a 10-line content sample)
//!   and one line classification strategy per format
//! - `alphabet`: DNA/RNA/protein/quality predicates
//! - `classify`: line roles, payload fields and styling dispatch
//! - `style`: per-character styling with a color scheme
//! - `stream`: lookahead buffering, replay and summary counts
//! - `scheme` / `config`: color schemes and the TOML configuration file

pub mod alphabet;
pub mod classify;
pub mod config;
pub mod formats;
pub mod scheme;
pub mod stream;
pub mod style;
