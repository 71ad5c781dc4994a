//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "user_profile" -> "UserProfile")
///
/// Already-capitalized runs are kept as-is, so "APIKey" stays "APIKey".
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-', ' '])
        .map(capitalize_first)
        .collect()
}

/// Convert a string to kebab-case (e.g., "UserProfile" -> "user-profile")
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Split an identifier into lowercase words on separators and case boundaries.
fn split_words(s: &str) -> Vec<String> {
    let chars: Vec<char> = s.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if matches!(c, '_' | '-' | ' ') {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "userId" splits before 'I'; "APIKey" splits before 'K' only
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                words.push(std::mem::take(&mut current));
            }
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("user_profile"), "UserProfile");
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
        assert_eq!(to_pascal_case("APIKey"), "APIKey");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("User"), "user");
        assert_eq!(to_kebab_case("UserProfile"), "user-profile");
        assert_eq!(to_kebab_case("APIKey"), "api-key");
        assert_eq!(to_kebab_case("post_tag"), "post-tag");
        assert_eq!(to_kebab_case("Oauth2Token"), "oauth2-token");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("number"), "Number");
        assert_eq!(capitalize_first("bigint"), "Bigint");
        assert_eq!(capitalize_first("Date"), "Date");
    }
}
