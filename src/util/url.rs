pub fn url_encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for b in value.bytes() {
        if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push_str(&format!("{:02X}", b));
        }
    }
    out
}

/// Percent-encodes each `/`-separated segment, keeping the separators.
pub fn encode_path_segments(value: &str) -> String {
    value
        .split('/')
        .map(url_encode_component)
        .collect::<Vec<_>>()
        .join("/")
}

/// Reduces a configured forge value such as `https://github.com/` to its bare host.
pub fn bare_host(value: &str) -> String {
    let trimmed = value.trim();
    let without_scheme = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    without_scheme.trim_end_matches('/').to_string()
}
