use super::diagnostics::{Diagnostic, Severity};
use crate::math::THICKNESS_TOLERANCE;

/// Compares the summed layer thickness of one variant with the nominal
/// module thickness.
///
/// A difference below [`THICKNESS_TOLERANCE`] passes silently. A larger
/// overflow yields an error diagnostic and a larger underfill a warning.
#[must_use]
pub fn check_thickness(nominal: f64, accumulated: f64) -> Option<Diagnostic> {
    if (accumulated - nominal).abs() < THICKNESS_TOLERANCE {
        return None;
    }
    Some(if accumulated > nominal {
        Diagnostic::new(
            Severity::Error,
            format!("thickness of the partition {nominal} is smaller than {accumulated}: thickness of all its components"),
        )
    } else {
        Diagnostic::new(
            Severity::Warning,
            format!("thickness of the partition {nominal} does not match with {accumulated} of the components"),
        )
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_silent() {
        assert_eq!(check_thickness(1.0, 1.0), None);
    }

    #[test]
    fn within_tolerance_is_silent() {
        assert_eq!(check_thickness(1.0, 1.0 + 0.5e-5), None);
        assert_eq!(check_thickness(1.0, 1.0 - 0.5e-5), None);
        assert_eq!(check_thickness(0.0, 0.9e-5), None);
    }

    #[test]
    fn overflow_is_an_error() {
        let diagnostic = check_thickness(1.0, 1.2).unwrap();
        assert_eq!(diagnostic.severity, Severity::Error);
        assert!(diagnostic.message.contains("smaller than 1.2"));
    }

    #[test]
    fn underfill_is_a_warning() {
        let diagnostic = check_thickness(1.0, 0.6).unwrap();
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert!(diagnostic.message.contains("does not match with 0.6"));
    }

    #[test]
    fn difference_equal_to_tolerance_is_reported() {
        // 0.0 and 1e-5 differ by exactly the tolerance.
        assert_eq!(check_thickness(0.0, THICKNESS_TOLERANCE).unwrap().severity, Severity::Error);
        assert_eq!(check_thickness(THICKNESS_TOLERANCE, 0.0).unwrap().severity, Severity::Warning);
    }
}
