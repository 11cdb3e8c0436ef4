//! Styling engine.
//!
//! Renders sequence and quality text with per-character styling. Every
//! styled character is followed by a reset so styles never bleed into
//! their neighbours. Both entry points are total: empty input gives empty
//! output and a missing directive simply leaves the character bare.

use std::fmt::Write;

use crate::scheme::{ColorScheme, QualityMode};

/// Terminates every styled character.
pub const RESET: &str = "\x1b[0m";

/// Gradient bands, highest first: (minimum Phred score, directive).
const GRADIENT_BANDS: [(i32, &str); 4] = [
    (40, "\x1b[92m"), // bright green, excellent
    (30, "\x1b[32m"), // green, good
    (20, "\x1b[93m"), // yellow, acceptable
    (10, "\x1b[91m"), // red, poor
];
const GRADIENT_FLOOR: &str = "\x1b[31m"; // dark red, very poor

const MONO_HIGH: &str = "\x1b[1m";
const MONO_MEDIUM: &str = "\x1b[0m";
const MONO_LOW: &str = "\x1b[2m";

/// Phred+33 score of a quality character.
pub fn phred_score(symbol: char) -> i32 {
    symbol as i32 - 33
}

/// Gradient directive for a Phred score.
pub fn gradient_directive(phred: i32) -> &'static str {
    GRADIENT_BANDS
        .iter()
        .find(|(min, _)| phred >= *min)
        .map_or(GRADIENT_FLOOR, |(_, directive)| *directive)
}

/// Monochrome directive for a Phred score.
pub fn mono_directive(phred: i32) -> &'static str {
    if phred >= 30 {
        MONO_HIGH
    } else if phred >= 20 {
        MONO_MEDIUM
    } else {
        MONO_LOW
    }
}

fn push_styled(out: &mut String, directive: &str, symbol: char) {
    if directive.is_empty() {
        out.push(symbol);
    } else {
        out.push_str(directive);
        out.push(symbol);
        out.push_str(RESET);
    }
}

/// Styles a sequence one character at a time.
///
/// The text is uppercased first. Symbols outside `A T G C U N` use the
/// `N` directive.
pub fn style_sequence(text: &str, scheme: &ColorScheme) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() * 10);
    for symbol in text.to_uppercase().chars() {
        push_styled(&mut out, scheme.directive(symbol), symbol);
    }
    out
}

/// Styles a quality string according to the scheme's quality mode.
pub fn style_quality(text: &str, scheme: &ColorScheme) -> String {
    let directive_for: fn(i32) -> &'static str = match scheme.quality {
        QualityMode::Gradient => gradient_directive,
        QualityMode::Mono => mono_directive,
        QualityMode::None => return text.to_string(),
    };

    let mut out = String::with_capacity(text.len() * 10);
    for symbol in text.chars() {
        push_styled(&mut out, directive_for(phred_score(symbol)), symbol);
    }
    out
}

const PREVIEW_DNA: &str = "ATGCGATCGATCGTAG";
const PREVIEW_RNA: &str = "AUGCGAUCGAUCGUAG";
const PREVIEW_QUALITY: &str = "!\"#)*+./:9?EFIJK";

/// Sample rendering of a scheme, as shown by `colordna preview`.
pub fn preview(scheme: &ColorScheme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "DNA:     {}", style_sequence(PREVIEW_DNA, scheme));
    let _ = writeln!(out, "RNA:     {}", style_sequence(PREVIEW_RNA, scheme));

    let legend = match scheme.quality {
        QualityMode::Gradient => "Poor -> Good Quality",
        QualityMode::Mono => "Dim -> Bold Quality",
        QualityMode::None => return out,
    };
    let _ = writeln!(out, "Quality: {}", style_quality(PREVIEW_QUALITY, scheme));
    let _ = writeln!(out, "         {}", legend);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::builtin_schemes;

    fn bright() -> ColorScheme {
        builtin_schemes()["bright"].clone()
    }

    #[test]
    fn test_style_sequence_per_character() {
        let scheme = bright();
        let styled = style_sequence("ACGT", &scheme);
        let expected = format!(
            "{a}A{r}{c}C{r}{g}G{r}{t}T{r}",
            a = scheme.a,
            c = scheme.c,
            g = scheme.g,
            t = scheme.t,
            r = RESET
        );
        assert_eq!(styled, expected);
    }

    #[test]
    fn test_style_sequence_uppercases() {
        let scheme = bright();
        assert_eq!(style_sequence("acgt", &scheme), style_sequence("ACGT", &scheme));
    }

    #[test]
    fn test_style_sequence_fallback_to_n() {
        let scheme = bright();
        assert_eq!(style_sequence("R", &scheme), format!("{}R{}", scheme.n, RESET));

        let no_n = ColorScheme {
            n: String::new(),
            ..bright()
        };
        assert_eq!(style_sequence("R", &no_n), "R");
    }

    #[test]
    fn test_reset_count_matches_styled_characters() {
        let scheme = ColorScheme {
            a: "\x1b[91m".to_string(),
            c: "\x1b[94m".to_string(),
            ..ColorScheme::default()
        };
        let styled = style_sequence("AACGTNX", &scheme);
        // Only A, A and C carry a directive
        assert_eq!(styled.matches(RESET).count(), 3);
        assert!(styled.ends_with("GTNX"));
    }

    #[test]
    fn test_empty_input() {
        for scheme in builtin_schemes().values() {
            assert_eq!(style_sequence("", scheme), "");
            assert_eq!(style_quality("", scheme), "");
        }
        assert_eq!(style_quality("", &ColorScheme::default()), "");
    }

    #[test]
    fn test_gradient_bands() {
        let scheme = bright();
        assert_eq!(style_quality("!", &scheme), format!("\x1b[31m!{}", RESET));
        assert_eq!(style_quality("I", &scheme), format!("\x1b[92mI{}", RESET));
        assert_eq!(gradient_directive(35), "\x1b[32m");
        assert_eq!(gradient_directive(20), "\x1b[93m");
        assert_eq!(gradient_directive(10), "\x1b[91m");
        assert_eq!(gradient_directive(9), "\x1b[31m");
        assert_eq!(gradient_directive(-1), "\x1b[31m");
    }

    #[test]
    fn test_mono_tiers() {
        let scheme = builtin_schemes()["monochrome"].clone();
        assert_eq!(style_quality("?", &scheme), format!("\x1b[1m?{}", RESET));
        assert_eq!(style_quality("5", &scheme), format!("\x1b[0m5{}", RESET));
        assert_eq!(style_quality("#", &scheme), format!("\x1b[2m#{}", RESET));
    }

    #[test]
    fn test_quality_mode_none_is_identity() {
        let scheme = ColorScheme::default();
        assert_eq!(style_quality("II!!#", &scheme), "II!!#");
    }

    #[test]
    fn test_preview() {
        let schemes = builtin_schemes();
        let gradient = preview(&schemes["bright"]);
        assert!(gradient.contains("Poor -> Good Quality"));
        assert_eq!(gradient.lines().count(), 4);

        let mono = preview(&schemes["monochrome"]);
        assert!(mono.contains("Dim -> Bold Quality"));

        let plain = preview(&ColorScheme::default());
        assert_eq!(plain, format!("DNA:     {}\nRNA:     {}\n", PREVIEW_DNA, PREVIEW_RNA));
    }
}
