/// Convert a data-file feature name to its enumerator spelling.
///
/// Plain camelCase names only get their first letter capitalised, so inner
/// acronyms survive (`allowES3OnFL100` → `AllowES3OnFL100`). Names with `_`,
/// `-` or `.` separators are joined into PascalCase, capitalising the first
/// letter of every word and leaving the rest of each word untouched.
///
/// # Examples
/// ```
/// use featreg_core::utils::to_feature_ident;
/// assert_eq!(to_feature_ident("allowAstcFormats"), "AllowAstcFormats");
/// assert_eq!(to_feature_ident("zero_max_lod"), "ZeroMaxLod");
/// assert_eq!(to_feature_ident("AllowAstcFormats"), "AllowAstcFormats");  // idempotent
/// ```
pub fn to_feature_ident(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Whether `s` is acceptable as a feature name in a data file.
///
/// Must start with an ASCII letter and contain only ASCII alphanumerics and
/// word separators. A trailing or doubled separator is rejected because it
/// would collapse into the same identifier as the clean spelling.
pub fn is_valid_feature_name(s: &str) -> bool {
    let Some(first) = s.chars().next() else {
        return false;
    };
    if !first.is_ascii_alphabetic() {
        return false;
    }
    if s.ends_with(is_separator) {
        return false;
    }
    let mut prev_separator = false;
    for c in s.chars() {
        if is_separator(c) {
            if prev_separator {
                return false;
            }
            prev_separator = true;
        } else if c.is_ascii_alphanumeric() {
            prev_separator = false;
        } else {
            return false;
        }
    }
    true
}

/// Whether `s` is a valid Rust identifier in enumerator position.
pub fn is_valid_ident(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_') && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Ordering key used for the registry: ASCII case-insensitive.
pub fn sort_key(s: &str) -> String {
    s.to_ascii_lowercase()
}

fn is_separator(c: char) -> bool {
    matches!(c, '_' | '-' | '.')
}
