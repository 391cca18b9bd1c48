// Mon Feb 9 2026 - Alex

use crate::model::Field;

/// Decides whether a field carries the configured export marker.
///
/// The match is a case-sensitive exact comparison and never mutates the
/// field; dedup is the registry's job, not the matcher's.
#[derive(Debug, Clone)]
pub struct AttributeMatcher {
    attribute: String,
}

impl AttributeMatcher {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }

    pub fn matches(&self, field: &Field) -> bool {
        field.attributes().iter().any(|a| a == &self.attribute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BitOffset, TypeRef};

    fn field_with(attributes: Vec<String>) -> Field {
        Field::new(
            Some("f".to_string()),
            BitOffset::zero(),
            TypeRef::Scalar("int".to_string()),
        )
        .with_attributes(attributes)
    }

    #[test]
    fn test_exact_match() {
        let matcher = AttributeMatcher::new("extract_offset");
        let field = field_with(vec!["packed".to_string(), "extract_offset".to_string()]);
        assert!(matcher.matches(&field));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let matcher = AttributeMatcher::new("extract_offset");
        let field = field_with(vec!["Extract_Offset".to_string()]);
        assert!(!matcher.matches(&field));
    }

    #[test]
    fn test_no_attributes_is_no_match() {
        let matcher = AttributeMatcher::new("extract_offset");
        let field = field_with(Vec::new());
        assert!(!matcher.matches(&field));
    }

    #[test]
    fn test_repeated_query_stays_true() {
        let matcher = AttributeMatcher::new("extract_offset");
        let field = field_with(vec!["extract_offset".to_string()]);
        assert!(matcher.matches(&field));
        assert!(matcher.matches(&field));
    }
}
