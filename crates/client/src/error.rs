use gridiron_domain::contract::FieldViolation;

/// A specialized error enum for request construction.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// One or more identity fields failed the pre-send contract check.
    ///
    /// Range fields never appear here: out-of-range values are clamped, not
    /// rejected. Identity fields (team codes) are rejected, never repaired.
    #[error("Request validation error: {}", format_violations(.violations))]
    Validation { violations: Vec<FieldViolation> },
}

impl BuildError {
    /// Violations collected by this error, for per-field form messages.
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation { violations } => violations,
        }
    }
}

fn format_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
