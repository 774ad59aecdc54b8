//! Validation outcome for a request model.
//!
//! Rules never short-circuit: every applicable rule runs and its message is
//! appended, so the report is the same whatever order the rules run in.

/// Errors and warnings collected from one `validate()` pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when nothing blocks submission. Warnings do not count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Append a nested model's findings, each prefixed with `prefix`.
    pub fn merge_prefixed(&mut self, prefix: &str, child: ValidationReport) {
        self.errors
            .extend(child.errors.into_iter().map(|e| format!("{prefix}{e}")));
        self.warnings
            .extend(child.warnings.into_iter().map(|w| format!("{prefix}{w}")));
    }
}

// ---------------------------------------------------------------------------
// Field state helpers
// ---------------------------------------------------------------------------

/// Unset, or set to an empty string.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Explicitly set, but to an empty string.
pub fn is_specified_empty(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(str::is_empty)
}

/// Set to a non-empty string.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
