//! Keyword-search helpers for project listings.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the API and repository layers. Search requests carry a compact
//! field-flag string (`"t"` = title, `"d"` = description, `"td"` = both)
//! plus a free-text keyword matched with a case-insensitive LIKE.

// ---------------------------------------------------------------------------
// Search fields
// ---------------------------------------------------------------------------

/// Which project columns a keyword search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFields {
    pub title: bool,
    pub description: bool,
}

impl SearchFields {
    /// Match both title and description.
    pub const ALL: SearchFields = SearchFields {
        title: true,
        description: true,
    };

    /// Parse a field-flag string.
    ///
    /// Unknown characters are ignored; an empty, absent, or fully-unknown
    /// flag string falls back to matching all fields.
    ///
    /// # Examples
    ///
    /// ```
    /// use moim_core::search::SearchFields;
    /// assert!(SearchFields::parse(Some("t")).title);
    /// assert!(!SearchFields::parse(Some("t")).description);
    /// assert_eq!(SearchFields::parse(Some("td")), SearchFields::ALL);
    /// assert_eq!(SearchFields::parse(None), SearchFields::ALL);
    /// ```
    pub fn parse(flags: Option<&str>) -> Self {
        let mut fields = SearchFields {
            title: false,
            description: false,
        };
        for c in flags.unwrap_or_default().chars() {
            match c {
                't' => fields.title = true,
                'd' => fields.description = true,
                _ => {}
            }
        }
        if !fields.title && !fields.description {
            return SearchFields::ALL;
        }
        fields
    }
}

// ---------------------------------------------------------------------------
// LIKE pattern construction
// ---------------------------------------------------------------------------

/// Turn a raw keyword into a `%keyword%` LIKE pattern.
///
/// Escapes `\`, `%`, and `_` in the keyword so user input matches
/// literally instead of acting as LIKE metacharacters. Whitespace is
/// trimmed; a blank keyword yields `None` (no filter).
///
/// # Examples
///
/// ```
/// use moim_core::search::like_pattern;
/// assert_eq!(like_pattern("cleanup"), Some("%cleanup%".to_string()));
/// assert_eq!(like_pattern("50%"), Some("%50\\%%".to_string()));
/// assert_eq!(like_pattern("   "), None);
/// ```
pub fn like_pattern(keyword: &str) -> Option<String> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return None;
    }
    let mut escaped = String::with_capacity(keyword.len() + 2);
    escaped.push('%');
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    Some(escaped)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
