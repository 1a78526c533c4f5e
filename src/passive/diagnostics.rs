use std::fmt;

use tracing::{error, trace, warn};

/// How serious a construction diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Step-by-step description of the construction.
    Verbose,
    /// The geometry was built but does not match its nominal description.
    Warning,
    /// The geometry was built but is physically inconsistent.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verbose => "verbose",
            Self::Warning => "warning",
            Self::Error => "error",
        })
    }
}

/// A message produced while building the passive volumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    #[must_use]
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    /// Forwards the diagnostic to `tracing` at the matching level.
    pub fn emit(&self) {
        match self.severity {
            Severity::Verbose => trace!(target: "passive_partial", "{}", self.message),
            Severity::Warning => warn!(target: "passive_partial", "{}", self.message),
            Severity::Error => error!(target: "passive_partial", "{}", self.message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

/// Appends diagnostics to a report during a build, dropping verbose ones
/// unless enabled.
#[derive(Debug)]
pub(crate) struct DiagnosticLog<'r> {
    verbose: bool,
    entries: &'r mut Vec<Diagnostic>,
}

impl<'r> DiagnosticLog<'r> {
    pub(crate) fn new(verbose: bool, entries: &'r mut Vec<Diagnostic>) -> Self {
        Self { verbose, entries }
    }

    /// Records a verbose message; `message` is only evaluated when enabled.
    pub(crate) fn verbose(&mut self, message: impl FnOnce() -> String) {
        if self.verbose {
            self.entries.push(Diagnostic::new(Severity::Verbose, message()));
        }
    }

    pub(crate) fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_messages_are_gated() {
        let mut entries = Vec::new();
        let mut quiet = DiagnosticLog::new(false, &mut entries);
        quiet.verbose(|| unreachable!("message must not be formatted"));
        quiet.push(Diagnostic::new(Severity::Warning, "kept"));
        assert_eq!(entries, vec![Diagnostic::new(Severity::Warning, "kept")]);

        let mut chatty = DiagnosticLog::new(true, &mut entries);
        chatty.verbose(|| "step".to_owned());
        assert_eq!(entries[1].severity, Severity::Verbose);
    }

    #[test]
    fn display_includes_severity() {
        let diagnostic = Diagnostic::new(Severity::Error, "overflow");
        assert_eq!(diagnostic.to_string(), "[error] overflow");
    }
}
