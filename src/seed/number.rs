/// Decode a numeric literal as written inside seed names.
///
/// Accepts `<digits>` and `<digits>p<digits>` where `p` stands for the decimal
/// point (`6p5` is 6.5). Stray `_` separators are ignored and a plain `.` is
/// tolerated. Anything else yields `None`.
pub fn decode_number(literal: &str) -> Option<f64> {
    let cleaned: String = literal
        .chars()
        .filter(|c| *c != '_')
        .map(|c| if c == 'p' { '.' } else { c })
        .collect();

    let (integer, fraction) = match cleaned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (cleaned.as_str(), None),
    };

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integer) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    cleaned.parse().ok()
}
