/// ISBN input handling
///
/// ISBNs arrive as free text ("978-0-441-01359-3", with spaces, dots or
/// stray words around them). Only the digits and the X check character
/// matter, so everything else is stripped before the value is stored.

/// Strip everything but digits and X from `raw`, uppercasing the check
/// character. Returns None when no usable characters remain.
pub fn normalize(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == 'X' || *c == 'x')
        .map(|c| c.to_ascii_uppercase())
        .collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
