use serde::{Deserialize, Serialize};

/// One generated meta candidate.
///
/// Fields default to empty strings so an element missing a key still
/// passes through instead of failing the whole array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaVariant {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl MetaVariant {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Parse raw model output into meta variants. Never fails: anything that
/// cannot be read as an array of objects collapses to a single fallback
/// variant.
pub fn normalize(raw: &str) -> Vec<MetaVariant> {
    let parsed = find_json_array(raw)
        .and_then(|span| serde_json::from_str::<Vec<MetaVariant>>(span).ok());

    match parsed {
        Some(variants) => variants,
        None => {
            log::error!("Invalid AI response format: {}", raw);
            vec![MetaVariant::new("Error", "Failed to parse AI response.")]
        }
    }
}

/// Locate the first `[...]` span whose first element is an object. Models
/// wrap the array in prose or code fences often enough that this scans
/// the whole text, honoring nesting, string literals and escapes.
pub fn find_json_array(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    let mut from = 0;

    while let Some(open) = raw[from..].find('[').map(|i| i + from) {
        let opens_an_object = raw[open + 1..]
            .chars()
            .find(|c| !c.is_whitespace())
            == Some('{');
        if opens_an_object {
            if let Some(end) = balanced_end(bytes, open) {
                return Some(&raw[open..=end]);
            }
        }
        from = open + 1;
    }

    None
}

/// Index of the `]` that balances the `[` at `open`, or `None` if the
/// span never closes cleanly.
fn balanced_end(bytes: &[u8], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(open) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }

        match b {
            b'"' => in_string = true,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    // A `}` landing on depth zero means the span is mismatched.
                    return if b == b']' { Some(i) } else { None };
                }
            }
            _ => {}
        }
    }

    None
}
