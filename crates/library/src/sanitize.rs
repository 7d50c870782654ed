//! Filesystem-safe name sanitization
//!
//! Pure, total, and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
//! Output never contains a path separator or whitespace and is never
//! empty.

/// Longest sanitized name, in bytes. Well under common 255-byte
/// filesystem limits so the planner can still append `_author.epub`.
const MAX_NAME_BYTES: usize = 200;

/// Returned for input that sanitizes down to nothing
const FALLBACK_NAME: &str = "Unnamed";

/// Windows reserved device names; also reserved with any extension
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Maps an arbitrary string to a safe filesystem name component.
///
/// Drops path separators, control characters, and Windows-reserved
/// punctuation; turns each whitespace run into a single underscore
/// (`Frank Herbert` becomes `Frank_Herbert`); trims trailing dots;
/// escapes reserved device names with a leading underscore; caps the
/// length on a char boundary.
pub fn sanitize(input: &str) -> String {
    let mut cleaned = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '/' | '\\' | '<' | '>' | ':' | '"' | '|' | '?' | '*' => {}
            c if c.is_control() => {}
            c => cleaned.push(c),
        }
    }

    let mut name = String::with_capacity(cleaned.len());
    let mut in_whitespace = false;
    for c in cleaned.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                name.push('_');
                in_whitespace = true;
            }
        } else {
            name.push(c);
            in_whitespace = false;
        }
    }

    // Windows rejects names ending in a dot
    let mut name = name.trim_end_matches('.').to_string();

    if is_reserved(&name) {
        name.insert(0, '_');
    }

    if name.len() > MAX_NAME_BYTES {
        let mut end = MAX_NAME_BYTES;
        while !name.is_char_boundary(end) {
            end -= 1;
        }
        name.truncate(end);
        name = name.trim_end_matches('.').to_string();
    }

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name
    }
}

/// Checks the base name (up to the first dot) against the reserved list,
/// case-insensitively, matching Windows semantics where `CON.epub` is as
/// unusable as `CON`.
fn is_reserved(name: &str) -> bool {
    let base = name.split('.').next().unwrap_or(name);
    RESERVED_NAMES
        .iter()
        .any(|reserved| base.eq_ignore_ascii_case(reserved))
}
