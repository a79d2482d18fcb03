//! Text matching utilities for AST assertions

/// Text matching strategies for assertions
#[derive(Debug, Clone)]
pub enum TextMatch {
    Exact(String),
    StartsWith(String),
    Contains(String),
}

impl TextMatch {
    pub fn matches(&self, actual: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => actual == expected,
            TextMatch::StartsWith(prefix) => actual.starts_with(prefix),
            TextMatch::Contains(substring) => actual.contains(substring),
        }
    }

    /// Assert that the actual text matches this pattern
    pub fn assert(&self, actual: &str, context: &str) {
        let expectation = match self {
            TextMatch::Exact(expected) => format!("to be {:?}", expected),
            TextMatch::StartsWith(prefix) => format!("to start with {:?}", prefix),
            TextMatch::Contains(substring) => format!("to contain {:?}", substring),
        };
        assert!(
            self.matches(actual),
            "{}: Expected text {}, but got {:?}",
            context,
            expectation,
            actual
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        assert!(TextMatch::Exact("abc".into()).matches("abc"));
        assert!(TextMatch::StartsWith("ab".into()).matches("abc"));
        assert!(TextMatch::Contains("bc".into()).matches("abc"));
        assert!(!TextMatch::Exact("ab".into()).matches("abc"));
    }

    #[test]
    #[should_panic(expected = "to start with")]
    fn test_assert_failure_message() {
        TextMatch::StartsWith("x".into()).assert("abc", "blocks[0]");
    }
}
