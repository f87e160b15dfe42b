const MAX_VISIBLE_CHARS: usize = 200;

/// Prepares an upstream response body for logging: trims, truncates on a char
/// boundary and redacts credentials.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let sanitized = if total_chars > MAX_VISIBLE_CHARS {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", visible, total_chars)
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
        ("\"token\":\"", "\"token\":\"[REDACTED]"),
        ("\"token\": \"", "\"token\": \"[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut cursor = 0;
        while let Some(offset) = result[cursor..].find(pattern) {
            let idx = cursor + offset;
            let start = idx + pattern.len();
            let end = result[start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| start + i)
                .unwrap_or(result.len());
            result.replace_range(idx..end, replacement);
            // Resume after the replacement, which itself contains the pattern.
            cursor = idx + replacement.len();
        }
    }

    result
}
