/// Days per month, February fixed at 29 whatever the year.
pub const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

fn parse_digits(part: &str, len: usize) -> Option<u32> {
    if part.len() != len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Checks a `YYYY-MM-DD` string against [`DAYS_IN_MONTH`].
pub fn is_valid_date(date: &str) -> bool {
    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return false;
    };

    if parse_digits(year, 4).is_none() {
        return false;
    }
    let (Some(month), Some(day)) = (parse_digits(month, 2), parse_digits(day, 2)) else {
        return false;
    };
    if !(1..=12).contains(&month) {
        return false;
    }

    (1..=DAYS_IN_MONTH[month as usize - 1]).contains(&day)
}
