//! Helper utility functions

/// Reduce an extension name to a filename-safe archive stem
pub fn sanitize_stem(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    for c in name.trim().to_lowercase().chars() {
        if c.is_alphanumeric() {
            stem.push(c);
        } else if !stem.is_empty() && !stem.ends_with('-') {
            stem.push('-');
        }
    }
    stem.trim_end_matches('-').to_string()
}
