//! Deterministic graph naming.
//!
//! A catalogue entry is addressed by a label of the form
//! `identifier(pos1, pos2, ..., key1=val1, ...)`, derived from the
//! generator identifier and its arguments. The label doubles as the
//! benchmark parameter key, so rendering must be stable: the same inputs
//! always produce the same string.

use std::fmt;

/// Builder for a deterministic graph label.
///
/// Positional arguments render before keyword arguments; an empty argument
/// list renders as `identifier()`. Values are rendered via their `Display`
/// representation.
///
/// # Examples
///
/// ```
/// use sssp_benches::naming::GraphName;
///
/// let name = GraphName::new("erdos_renyi_graph").arg(100).arg(0.1);
/// assert_eq!(name.to_string(), "erdos_renyi_graph(100, 0.1)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphName {
    func: String,
    args: Vec<String>,
    kwargs: Vec<(String, String)>,
}

impl GraphName {
    /// Creates a label for the given generator identifier with no arguments.
    #[must_use]
    pub fn new(func: impl Into<String>) -> Self {
        Self {
            func: func.into(),
            args: Vec::new(),
            kwargs: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl fmt::Display) -> Self {
        self.args.push(value.to_string());
        self
    }

    /// Appends a keyword argument.
    ///
    /// Keyword arguments always render after positional arguments, in the
    /// order they were appended.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl fmt::Display) -> Self {
        self.kwargs.push((key.into(), value.to_string()));
        self
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .args
            .iter()
            .cloned()
            .chain(self.kwargs.iter().map(|(key, value)| format!("{key}={value}")))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({rendered})", self.func)
    }
}
