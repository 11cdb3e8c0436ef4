//! Color schemes.
//!
//! A scheme maps each nucleotide symbol to an opaque styling directive
//! (usually an ANSI escape sequence) and selects how quality strings are
//! rendered. Schemes are read-only values shared by every styling call of
//! a run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Name of the scheme used when none is requested.
pub const DEFAULT_SCHEME: &str = "bright";

/// How quality strings are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityMode {
    /// Five-band color gradient, red (poor) to bright green (excellent).
    Gradient,
    /// Three tiers of text emphasis: bold, normal, dim.
    Mono,
    /// Quality strings are left as they are. Unrecognized values land here.
    #[default]
    #[serde(other)]
    None,
}

/// Styling directives for one scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Adenine
    pub a: String,
    /// Thymine
    pub t: String,
    /// Guanine
    pub g: String,
    /// Cytosine
    pub c: String,
    /// Uracil (RNA)
    pub u: String,
    /// Unknown or ambiguous nucleotide, also used for any other symbol
    pub n: String,
    pub quality: QualityMode,
    /// Whether the directives paint backgrounds. Advisory only.
    pub background: bool,
}

impl ColorScheme {
    /// Returns the directive for a symbol, falling back to `N` for symbols
    /// outside `A T G C U N`. An empty string means "no styling".
    pub fn directive(&self, symbol: char) -> &str {
        match symbol.to_ascii_uppercase() {
            'A' => &self.a,
            'T' => &self.t,
            'G' => &self.g,
            'C' => &self.c,
            'U' => &self.u,
            _ => &self.n,
        }
    }

    fn from_directives(directives: [&str; 6], quality: QualityMode, background: bool) -> Self {
        let [a, t, g, c, u, n] = directives.map(String::from);
        Self {
            a,
            t,
            g,
            c,
            u,
            n,
            quality,
            background,
        }
    }
}

/// Returns the built-in schemes, keyed by name.
pub fn builtin_schemes() -> BTreeMap<String, ColorScheme> {
    let mut schemes = BTreeMap::new();

    // Font colors only
    schemes.insert(
        "bright".to_string(),
        ColorScheme::from_directives(
            [
                "\x1b[91m", "\x1b[92m", "\x1b[93m", "\x1b[94m", "\x1b[95m", "\x1b[90m",
            ],
            QualityMode::Gradient,
            false,
        ),
    );
    schemes.insert(
        "classic".to_string(),
        ColorScheme::from_directives(
            [
                "\x1b[41m\x1b[97m",
                "\x1b[42m\x1b[30m",
                "\x1b[43m\x1b[30m",
                "\x1b[44m\x1b[97m",
                "\x1b[45m\x1b[97m",
                "\x1b[100m\x1b[97m",
            ],
            QualityMode::Gradient,
            true,
        ),
    );
    schemes.insert(
        "pastel".to_string(),
        ColorScheme::from_directives(
            [
                "\x1b[101m\x1b[30m",
                "\x1b[102m\x1b[30m",
                "\x1b[103m\x1b[30m",
                "\x1b[104m\x1b[30m",
                "\x1b[105m\x1b[30m",
                "\x1b[47m\x1b[30m",
            ],
            QualityMode::Gradient,
            true,
        ),
    );
    // Bold, underline, italic, dim, strikethrough, dark gray
    schemes.insert(
        "monochrome".to_string(),
        ColorScheme::from_directives(
            ["\x1b[1m", "\x1b[4m", "\x1b[3m", "\x1b[2m", "\x1b[9m", "\x1b[90m"],
            QualityMode::Mono,
            false,
        ),
    );

    schemes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_schemes() {
        let schemes = builtin_schemes();
        let names: Vec<&str> = schemes.keys().map(String::as_str).collect();
        assert_eq!(names, ["bright", "classic", "monochrome", "pastel"]);
        assert!(schemes.contains_key(DEFAULT_SCHEME));
        assert_eq!(schemes["bright"].quality, QualityMode::Gradient);
        assert_eq!(schemes["monochrome"].quality, QualityMode::Mono);
        assert!(schemes["classic"].background);
        assert!(!schemes["bright"].background);
    }

    #[test]
    fn test_directive_lookup() {
        let scheme = &builtin_schemes()["bright"];
        assert_eq!(scheme.directive('A'), "\x1b[91m");
        assert_eq!(scheme.directive('u'), "\x1b[95m");
        // Ambiguity codes use the N directive
        assert_eq!(scheme.directive('R'), scheme.directive('N'));
    }
}
