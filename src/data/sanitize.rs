// ---------------------------------------------------------------------------
// Column header sanitization
// ---------------------------------------------------------------------------

/// Normalize a raw column header into a safe identifier.
///
/// Strips leading/trailing spaces and square brackets, then removes every
/// character outside `[A-Za-z0-9_]`. Never fails; a header with no valid
/// characters sanitizes to the empty string, which is kept as-is.
pub fn sanitize_column_name(raw: &str) -> String {
    raw.trim_matches(|c: char| c == ' ' || c == '[' || c == ']')
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
