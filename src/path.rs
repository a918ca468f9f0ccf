//! Path segment validation.
//!
//! Identifiers are interpolated into request paths, so every one of them
//! goes through [`safe_id`] before a path is built.

use crate::error::{Result, SuperthreadError};

/// Sanitize an identifier for use as a single URL path segment.
///
/// Surrounding whitespace is stripped and every character outside
/// `[A-Za-z0-9_-]` is removed. Fails if nothing usable remains.
///
/// # Example
///
/// ```
/// use superthread::safe_id;
///
/// assert_eq!(safe_id("card_id", "  crd_abc-1  ").unwrap(), "crd_abc-1");
/// assert_eq!(safe_id("card_id", "../etc/passwd").unwrap(), "etcpasswd");
/// assert!(safe_id("card_id", "///").is_err());
/// ```
pub fn safe_id(name: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SuperthreadError::PathValidation(format!(
            "{name} must be a non-empty string"
        )));
    }

    let cleaned: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();

    if cleaned.is_empty() {
        return Err(SuperthreadError::PathValidation(format!(
            "{name} must contain only letters, numbers, hyphen, or underscore"
        )));
    }

    Ok(cleaned)
}

/// Build a workspace-scoped path such as `ws_1/cards`.
///
/// `suffix` is appended verbatim and must already be safe.
pub fn workspace_path(workspace_id: &str, suffix: &str) -> Result<String> {
    let ws = safe_id("workspace_id", workspace_id)?;
    Ok(format!("{ws}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_id_unchanged() {
        assert_eq!(safe_id("card_id", "crd_abc123").unwrap(), "crd_abc123");
    }

    #[test]
    fn test_strips_whitespace() {
        assert_eq!(safe_id("card_id", "  crd_abc-1  ").unwrap(), "crd_abc-1");
    }

    #[test]
    fn test_sanitizes_traversal() {
        assert_eq!(safe_id("card_id", "../etc/passwd").unwrap(), "etcpasswd");
        assert_eq!(safe_id("card_id", "crd/abc").unwrap(), "crdabc");
        assert_eq!(safe_id("card_id", "crd\\abc").unwrap(), "crdabc");
        assert_eq!(safe_id("card_id", "crd?x=1#frag").unwrap(), "crdx1frag");
    }

    #[test]
    fn test_empty_rejected() {
        let err = safe_id("card_id", "").unwrap_err();
        assert!(matches!(err, SuperthreadError::PathValidation(_)));
        assert!(err.to_string().contains("card_id must be a non-empty string"));

        let err = safe_id("card_id", "   ").unwrap_err();
        assert!(err.to_string().contains("must be a non-empty string"));
    }

    #[test]
    fn test_only_invalid_characters_rejected() {
        let err = safe_id("card_id", "///").unwrap_err();
        assert!(matches!(err, SuperthreadError::PathValidation(_)));
        assert!(err.to_string().contains("must contain only letters"));
    }

    #[test]
    fn test_non_ascii_removed() {
        assert_eq!(safe_id("tag_id", "tag_é1").unwrap(), "tag_1");
    }

    #[test]
    fn test_workspace_path() {
        assert_eq!(workspace_path(" ws 1 ", "/cards").unwrap(), "ws1/cards");
        assert_eq!(workspace_path("ws_1", "").unwrap(), "ws_1");
        assert!(workspace_path("..", "/cards").is_err());
    }
}
