//! LaTeX reserved-character escaping
//!
//! This module maps the characters LaTeX treats specially inside table cells
//! to their backslash-escaped form. The map is a compile-time `phf` table and
//! escaping is a single left-to-right pass over the input.

use phf::phf_map;

/// Reserved character to escaped replacement
pub static RESERVED_CHARS: phf::Map<char, &'static str> = phf_map! {
    '#' => r"\#",
    '$' => r"\$",
    '%' => r"\%",
    '&' => r"\&",
    '_' => r"\_",
    '{' => r"\{",
    '}' => r"\}",
};

/// Check whether a character needs escaping
pub fn is_reserved(c: char) -> bool {
    RESERVED_CHARS.contains_key(&c)
}

/// Escape every reserved character in `input`.
///
/// Backslashes are left alone, so escaping an already escaped string escapes
/// it a second time (`\&` becomes `\\&`).
pub fn escape_latex(input: &str) -> String {
    // Fast path: nothing to escape
    if !input.chars().any(is_reserved) {
        return input.to_string();
    }

    let mut output = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match RESERVED_CHARS.get(&c) {
            Some(escaped) => output.push_str(escaped),
            None => output.push(c),
        }
    }
    output
}
