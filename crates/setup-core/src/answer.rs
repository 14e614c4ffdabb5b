//! Normalization of raw prompt answers into yes/no decisions

/// A raw answer as produced by a question/answer transport.
///
/// Interactive widgets hand back a boolean directly; line-based transports
/// hand back whatever the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Flag(bool),
    Text(String),
}

impl Answer {
    /// Whether this answer counts as a "yes".
    ///
    /// Booleans pass through unchanged. Text answers select only on an
    /// exact `y` after lowercasing - `yes`, `n`, and anything else are
    /// treated as "no". Total over the input domain, never errors.
    pub fn is_selected(&self) -> bool {
        match self {
            Answer::Flag(flag) => *flag,
            Answer::Text(text) => text.to_lowercase() == "y",
        }
    }
}

impl From<bool> for Answer {
    fn from(flag: bool) -> Self {
        Answer::Flag(flag)
    }
}

impl From<&str> for Answer {
    fn from(text: &str) -> Self {
        Answer::Text(text.to_string())
    }
}
