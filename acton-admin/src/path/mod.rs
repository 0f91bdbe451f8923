//! Field path helpers
//!
//! A path is a dot-delimited attribute path such as `author.profile.name`.
//! Its HTML field name is the first segment followed by every other
//! segment wrapped in brackets: `author[profile][name]`.

/// Split a dotted path into its segments
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    path.split('.').collect()
}

/// Compose an HTML field name from path segments: `first[second][third]`
#[must_use]
pub fn compose_name(segments: &[&str]) -> String {
    let Some((first, rest)) = segments.split_first() else {
        return String::new();
    };

    let mut name = String::with_capacity(segments.iter().map(|s| s.len() + 2).sum());
    name.push_str(first);
    for part in rest {
        name.push('[');
        name.push_str(part);
        name.push(']');
    }
    name
}

/// Compose the HTML field name of a dotted path
#[must_use]
pub fn field_name(path: &str) -> String {
    compose_name(&segments(path))
}

/// Split an HTML field name (`a[b][c]`, `tags[]`) into segments
///
/// An empty segment denotes an array append (`[]`).
#[must_use]
pub fn name_segments(name: &str) -> Vec<String> {
    let Some(open) = name.find('[') else {
        return vec![name.to_string()];
    };

    let mut parts = vec![name[..open].to_string()];
    let mut rest = &name[open..];
    while let Some(stripped) = rest.strip_prefix('[') {
        let Some(close) = stripped.find(']') else {
            // unbalanced bracket: keep the remainder verbatim
            parts.push(stripped.to_string());
            break;
        };
        parts.push(stripped[..close].to_string());
        rest = &stripped[close + 1..];
    }
    parts
}

/// Normalize a dotted path or a bracketed name into lookup segments
#[must_use]
pub fn lookup_segments(path: &str) -> Vec<String> {
    if path.contains('[') {
        name_segments(path)
    } else {
        path.split('.').map(ToString::to_string).collect()
    }
}
