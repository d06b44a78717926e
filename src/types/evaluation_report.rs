use std::fmt;
use std::time::Duration;

/// Detailed evaluation report returned by
/// [`RuleNode::evaluate_detailed()`](super::RuleNode::evaluate_detailed).
///
/// Lists the referenced roles that were present and absent in the supplied
/// role set, together with the wall-clock duration of the evaluation.
#[derive(Debug, Clone)]
#[must_use]
pub struct EvaluationReport {
    result: bool,
    granted: Vec<String>,
    missing: Vec<String>,
    duration: Duration,
}

impl EvaluationReport {
    pub(crate) fn new(
        result: bool,
        granted: Vec<String>,
        missing: Vec<String>,
        duration: Duration,
    ) -> Self {
        Self {
            result,
            granted,
            missing,
            duration,
        }
    }

    /// The evaluation result, same as [`RuleNode::evaluate()`](super::RuleNode::evaluate).
    #[must_use]
    pub fn result(&self) -> bool {
        self.result
    }

    /// Referenced roles found in the role set, sorted.
    #[must_use]
    pub fn granted(&self) -> &[String] {
        &self.granted
    }

    /// Referenced roles absent from the role set, sorted.
    #[must_use]
    pub fn missing(&self) -> &[String] {
        &self.missing
    }

    /// Wall-clock duration of the evaluation.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl fmt::Display for EvaluationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (granted: [{}], missing: [{}], {:?})",
            if self.result { "allow" } else { "deny" },
            self.granted.join(", "),
            self.missing.join(", "),
            self.duration,
        )
    }
}
