//! Shared math helpers for reported metrics.

/// Round to two decimal places, half away from zero.
///
/// Reported metrics (speaking pace, overall score) are two-decimal values.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
