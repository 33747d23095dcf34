//! Display-string cleanup for terminal output.
//!
//! Characters that break column alignment in a terminal grid are dropped:
//! zero-width joiners and spaces, emoji variation selectors, combining
//! diacritical marks, and anything outside the Basic Multilingual Plane.

fn is_unrenderable(c: char) -> bool {
    matches!(c, '\u{200B}'..='\u{200D}' | '\u{2060}' | '\u{FE0E}' | '\u{FE0F}')
        || ('\u{0300}'..='\u{036F}').contains(&c)
        || (c as u32) > 0xFFFF
}

pub fn sanitize(input: &str) -> String {
    input.chars().filter(|c| !is_unrenderable(*c)).collect()
}
