//! Append-only step sequence produced by exactly one algorithm invocation.

use serde::Serialize;

use crate::action::Lifecycle;
use crate::step::{Action, Step};

/// Ordered, append-only sequence of [`Step`]s.
///
/// A trace either ends on its algorithm's terminal step (`complete` for most,
/// `found`/`not_found` for searches, `final_state` for the XOR swap) or
/// consists of exactly one `error` step. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new() -> Self {
        Trace::default()
    }

    /// A trace holding a single precondition-failure step.
    pub fn error(message: impl Into<String>) -> Self {
        Trace {
            steps: vec![Step::new(Lifecycle::Error, message)],
        }
    }

    /// Appends one step.
    pub fn emit(&mut self, action: impl Into<Action>, message: impl Into<String>) {
        self.steps.push(Step::new(action, message));
    }

    /// Appends the plain `complete` step and returns the finished trace.
    pub fn complete(mut self, message: impl Into<String>) -> Self {
        self.emit(Lifecycle::Complete, message);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// True when the trace is the single-step precondition failure.
    pub fn is_error(&self) -> bool {
        self.steps.len() == 1 && self.steps[0].is_error()
    }

    /// Tags of every step, in order.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::name).collect()
    }

    /// Number of steps tagged `name`.
    pub fn count(&self, name: &str) -> usize {
        self.steps.iter().filter(|s| s.name() == name).count()
    }

    /// Iterates steps whose tag is `name`.
    pub fn with_name<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Step> + 'a {
        self.steps.iter().filter(move |s| s.name() == name)
    }
}

impl IntoIterator for Trace {
    type Item = Step;
    type IntoIter = std::vec::IntoIter<Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::SortAction;
    use smallvec::smallvec;

    #[test]
    fn error_trace_is_single_step() {
        let trace = Trace::error("Start node \"Z\" not in graph.");
        assert!(trace.is_error());
        assert_eq!(trace.action_names(), vec!["error"]);
    }

    #[test]
    fn complete_appends_terminal_step() {
        let mut trace = Trace::new();
        trace.emit(
            SortAction::Compare {
                indices: smallvec![0, 1],
            },
            "Comparing 2 and 1.",
        );
        let trace = trace.complete("Array is fully sorted.");
        assert_eq!(trace.len(), 2);
        assert!(trace.last().unwrap().is_complete());
        assert!(!trace.is_error());
        assert_eq!(trace.count("compare"), 1);
    }

    #[test]
    fn serializes_as_array() {
        let trace = Trace::new().complete("done");
        assert_eq!(
            serde_json::to_string(&trace).unwrap(),
            r#"[{"action":"complete","message":"done"}]"#
        );
    }
}
