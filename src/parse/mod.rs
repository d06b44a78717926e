mod config;
mod error;
mod grammar;
mod lexer;

pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use error::{ParseError, ParseErrorKind};

use crate::types::RuleNode;

/// Parser for a single role expression.
///
/// Holds the source text and limits; no work happens until
/// [`parse()`](Self::parse), which consumes the parser.
///
/// ```
/// use rolerule::RuleParser;
///
/// let node = RuleParser::new("accounting AND (finance OR admin)").parse().unwrap();
/// assert_eq!(node.all_roles().len(), 3);
/// assert!(node.evaluate(&["accounting", "finance"]));
/// ```
#[derive(Debug, Clone)]
#[must_use]
pub struct RuleParser<'a> {
    source: &'a str,
    config: ParserConfig,
}

impl<'a> RuleParser<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// Tokenize and parse the expression.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if the expression is empty, unbalanced, has an
    /// operator without an operand, has two operands without an operator
    /// between them, or exceeds the configured limits.
    pub fn parse(self) -> Result<RuleNode, ParseError> {
        let result = self.run();
        match &result {
            Ok(node) => tracing::debug!(
                roles = node.all_roles().len(),
                depth = node.depth(),
                "parsed role rule"
            ),
            Err(err) => tracing::debug!(
                len = self.source.len(),
                offset = err.offset(),
                error = %err.kind(),
                "rejected role rule"
            ),
        }
        result
    }

    fn run(&self) -> Result<RuleNode, ParseError> {
        if let Some(limit) = self.config.max_len {
            if self.source.len() > limit {
                return Err(ParseError::new(
                    ParseErrorKind::TooLong {
                        len: self.source.len(),
                        limit,
                    },
                    limit,
                ));
            }
        }

        let tokens = lexer::tokenize(self.source);
        grammar::Grammar::new(&tokens, self.source.len(), self.config.max_depth).parse()
    }
}

/// Parse a role expression with the default [`ParserConfig`].
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a valid role expression.
pub fn parse(source: &str) -> Result<RuleNode, ParseError> {
    RuleParser::new(source).parse()
}
