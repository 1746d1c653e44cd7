/// Ensures the path starts with `/`. Empty input becomes `/`.
pub fn normalize(raw: &str) -> String {
    if raw.starts_with('/') {
        raw.to_owned()
    } else {
        format!("/{raw}")
    }
}

/// A valid route path is `/seg(/seg)*` where every segment is one or more
/// ASCII word characters (`[A-Za-z0-9_]`).
pub fn is_valid(path: &str) -> bool {
    if path.is_empty() || path == "/" {
        return false;
    }

    let Some(rest) = path.strip_prefix('/') else {
        return false;
    };

    rest.split('/').all(is_word_segment)
}

fn is_word_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
