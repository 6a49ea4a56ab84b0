//! Dialect-specific cleanup of raw transcription text.
//!
//! None of these functions fail. Voynich-101 glyphs outside the canonical
//! alphabet degrade to [`UNKNOWN_GLYPH`]; natural-language text has no escape
//! character and passes through apart from case and punctuation.

/// The canonical 64-glyph alphabet used for statistics.
pub const BASE_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789?!*";

/// Stand-in for a glyph that has no canonical equivalent.
pub const UNKNOWN_GLYPH: char = '?';

/// Whether `c` is one of the [`BASE_ALPHABET`] glyphs.
pub fn is_base_glyph(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '?' | '!' | '*')
}

/// Regularise a line of natural-language text.
///
/// Lowercases, turns commas, periods, colons and line breaks into blanks and
/// collapses every whitespace run to a single space.
pub fn normalize_natural(text: &str) -> String {
    let lowered = text.to_lowercase();
    let blanked = lowered.replace([',', '.', ':', '\n', '\r'], " ");
    blanked.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Map a line of Voynich-101 onto the canonical alphabet.
///
/// Rare and variant glyphs are replaced by their likely common forms in a
/// single pass (replacements are never themselves rewritten); anything still
/// outside [`BASE_ALPHABET`] becomes [`UNKNOWN_GLYPH`]. Word separators (`.`)
/// become blanks and commas are dropped. The result is stable under a second
/// application.
pub fn normalize_v101(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.trim_matches(|c| matches!(c, ' ' | '\r' | '\n')).chars() {
        match v101_substitute(c) {
            Some(replacement) => out.push_str(replacement),
            None if c == ' ' || is_base_glyph(c) => out.push(c),
            None => out.push(UNKNOWN_GLYPH),
        }
    }
    out.trim_matches(' ').to_string()
}

fn v101_substitute(c: char) -> Option<&'static str> {
    let replacement = match c {
        '.' => " ",
        ',' => "",
        '3' | '5' | '+' | '%' | '#' | '!' => "2",
        '6' | '7' | '&' => "8",
        ')' => "9",
        'A' => "a",
        'X' | 'Y' | 'b' | 'x' => "y",
        'I' => "ii",
        'C' => "cc",
        'z' => "iy",
        'Z' => "iiy",
        'j' | 'u' | 'W' | 'w' => "g",
        'd' => "ccc",
        'U' | 'J' | 'V' => "G",
        'P' => "ip",
        '$' | 't' | 'T' => "s",
        'S' => "cs",
        'q' => "iip",
        'm' => "iiN",
        'M' => "iiiN",
        'n' => "iN",
        '*' | 'Q' => "p",
        'E' => "c",
        'B' => "cccN",
        'D' => "ccN",
        _ => return None,
    };
    Some(replacement)
}

/// First EVA pass: trim the line and fold `!` into the `.` separator.
///
/// Runs before paragraph-end detection, so a trailing `!=` still counts as a
/// paragraph end.
pub fn fold_eva(text: &str) -> String {
    text.trim().replace('!', ".")
}

/// Final EVA pass: `.` and `-` separate words, `=` marks a paragraph end.
pub fn normalize_eva(text: &str) -> String {
    text.replace(['.', '-'], " ").replace('=', "")
}
