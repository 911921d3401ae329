use chrono::NaiveDateTime;

/// Whether the timestamps never get newer when read in listing order.
/// Equal adjacent timestamps are accepted.
pub fn is_descending<S: AsRef<str>>(timestamps: &[S]) -> bool {
    first_ascent(timestamps).is_none()
}

/// Index `i` of the first adjacent pair where `timestamps[i]` is strictly
/// earlier than `timestamps[i + 1]`, or `None` if the sequence is
/// non-strictly descending throughout. A timestamp that cannot be parsed is
/// reported as a violation at its pair index.
pub fn first_ascent<S: AsRef<str>>(timestamps: &[S]) -> Option<usize> {
    for i in 0..timestamps.len().saturating_sub(1) {
        let current = parse_timestamp(timestamps[i].as_ref());
        let next = parse_timestamp(timestamps[i + 1].as_ref());
        match (current, next) {
            (Some(current), Some(next)) if current >= next => {}
            _ => return Some(i),
        }
    }
    None
}

/// Parse a listing timestamp. Hacker News renders these as an ISO-ish local
/// date-time in the `title` attribute, sometimes followed by an epoch-seconds
/// token; only the first token is significant.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let token = raw.split_whitespace().next()?;
    NaiveDateTime::parse_from_str(token, "%Y-%m-%dT%H:%M:%S").ok()
}
