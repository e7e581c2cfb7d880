//! Free-text walk-duration parsing.
//!
//! Dog records carry the preferred walk length as operator-entered free
//! text: "45 min", "30", "1 ora", "circa 40 minuti". This module isolates
//! the parsing rule so the scheduler never touches raw text.
//!
//! # Rule
//!
//! The first integer in the text is taken as the value. If it is smaller
//! than 10 and followed by an hour unit ("ora", "ore", "hour", "hours",
//! "h"), it is read as hours; otherwise as minutes. Text with no number
//! falls back to the default of 30 minutes.

/// Fallback when no number can be found in the text.
pub const DEFAULT_MINUTES: u32 = 30;

/// Values below this followed by an hour unit are treated as hours.
const HOUR_VALUE_LIMIT: u32 = 10;

/// Parses a free-text duration into minutes.
///
/// # Examples
///
/// ```
/// use kennel_rota::duration::parse_duration;
///
/// assert_eq!(parse_duration("45 min"), 45);
/// assert_eq!(parse_duration("1 ora"), 60);
/// assert_eq!(parse_duration("whatever"), 30);
/// ```
pub fn parse_duration(text: &str) -> u32 {
    let mut chars = text.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if !c.is_ascii_digit() {
            continue;
        }
        let mut end = start + c.len_utf8();
        while let Some(&(i, d)) = chars.peek() {
            if d.is_ascii_digit() {
                end = i + d.len_utf8();
                chars.next();
            } else {
                break;
            }
        }
        // Number too large to be meaningful: fall back
        let Ok(value) = text[start..end].parse::<u32>() else {
            return DEFAULT_MINUTES;
        };
        if value < HOUR_VALUE_LIMIT && followed_by_hour_unit(&text[end..]) {
            return value * 60;
        }
        return value;
    }

    DEFAULT_MINUTES
}

/// Whether the text after the number starts with an hour unit.
fn followed_by_hour_unit(rest: &str) -> bool {
    let word: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_alphabetic())
        .collect::<String>()
        .to_lowercase();
    matches!(word.as_str(), "h" | "ora" | "ore" | "hour" | "hours")
}
