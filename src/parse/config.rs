/// Limits applied while parsing a role expression.
///
/// ```
/// use rolerule::{ParserConfig, RuleParser};
///
/// let config = ParserConfig::default().with_max_depth(2);
/// assert!(RuleParser::new("a AND (b OR c)").with_config(config).parse().is_ok());
/// assert!(RuleParser::new("a AND (b OR NOT (c))").with_config(config).parse().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// Maximum number of nested groups and `NOT` operators.
    pub max_depth: usize,
    /// Maximum expression length in bytes. `None` means unbounded.
    pub max_len: Option<usize>,
}

pub const DEFAULT_MAX_DEPTH: usize = 64;

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            max_len: None,
        }
    }
}

impl ParserConfig {
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.max_len, None);
    }

    #[test]
    fn setters_chain() {
        let config = ParserConfig::default().with_max_depth(3).with_max_len(100);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_len, Some(100));
    }
}
