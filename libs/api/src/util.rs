/// Current Unix time in whole seconds (UTC).
pub fn now_secs() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

/// Current Unix time in seconds, rendered the way records carry it:
/// a plain decimal string, e.g. `"1700000000"`.
pub fn epoch_timestamp() -> String {
    now_secs().to_string()
}
