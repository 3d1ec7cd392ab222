/// Text helpers: word counting, integer coercion and bullet filtering

/// Count the words in a piece of free text
///
/// A word is a maximal run of non-whitespace characters, so leading,
/// trailing and repeated whitespace never change the count.
///
/// Examples:
/// - "" → 0
/// - "   " → 0
/// - "a b   c" → 3
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Coerce numeric form text into an integer, falling back to 0
///
/// Algorithm:
/// 1. Skip leading whitespace
/// 2. Accept one optional '+' or '-'
/// 3. Take the leading run of ASCII digits and ignore whatever follows
/// 4. No digits at all → 0
/// 5. Values that do not fit in an i64 saturate
///
/// Examples:
/// - "7" → 7
/// - "  42 visits" → 42
/// - "7.5" → 7
/// - "abc" → 0
/// - "" → 0
pub fn parse_int_prefix(text: &str) -> i64 {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits_len == 0 {
        return 0;
    }

    rest[..digits_len].bytes().fold(0i64, |acc, digit| {
        let value = i64::from(digit - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(value)
        } else {
            acc.saturating_mul(10).saturating_add(value)
        }
    })
}

/// Keep the entries that still contain something after trimming
///
/// Order is preserved and kept entries are returned exactly as typed.
pub fn non_blank(slots: &[String]) -> Vec<String> {
    slots
        .iter()
        .filter(|slot| !slot.trim().is_empty())
        .cloned()
        .collect()
}

/// Whether a required value is missing
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Extension of a file name, without the dot
///
/// Dotfiles such as ".env" and names ending in a dot have no extension.
pub fn file_extension(file_name: &str) -> Option<&str> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        None
    } else {
        Some(ext)
    }
}
