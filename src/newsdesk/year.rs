//! Publication-year extraction.
//!
//! Dates arrive as free-form text, nominally "YYYY-MM-DD". The year is the
//! integer formed by the first four characters, and 0 is the sentinel for
//! anything that does not start with four ASCII digits. The sentinel takes
//! part in ordering (malformed dates sort first) and in search equality
//! (they never match a real year query).

/// Parse the leading 4-digit year from a date string, or return 0.
pub fn extract(date: &str) -> i32 {
    let bytes = date.as_bytes();
    if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return 0;
    }
    date[..4].parse().unwrap_or(0)
}
