// ── Set-point rules ──
//
// The hub accepts room targets between TEMP_MINIMUM and TEMP_MAXIMUM.
// TEMP_OFF is the value the hub reports for a room switched off.

/// Lowest accepted room target (°C).
pub const TEMP_MINIMUM: f64 = 0.5;
/// Highest accepted room target (°C).
pub const TEMP_MAXIMUM: f64 = 35.0;
/// Off sentinel reported by the hub.
pub const TEMP_OFF: f64 = -20.0;

/// `true` for the off sentinel or any value within the accepted range.
#[allow(clippy::float_cmp)]
pub fn is_valid_temperature(value: f64) -> bool {
    value == TEMP_OFF || (TEMP_MINIMUM..=TEMP_MAXIMUM).contains(&value)
}

/// Clamp a requested target into the accepted range.
///
/// The off sentinel is not special-cased: it clamps to `TEMP_MINIMUM`.
pub fn clamp_temperature(value: f64) -> f64 {
    value.clamp(TEMP_MINIMUM, TEMP_MAXIMUM)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn validity() {
        assert!(is_valid_temperature(TEMP_OFF));
        assert!(is_valid_temperature(0.5));
        assert!(is_valid_temperature(21.0));
        assert!(is_valid_temperature(35.0));
        assert!(!is_valid_temperature(0.4));
        assert!(!is_valid_temperature(35.5));
        assert!(!is_valid_temperature(-19.0));
    }

    #[test]
    fn clamping() {
        assert_eq!(clamp_temperature(50.0), 35.0);
        assert_eq!(clamp_temperature(0.0), 0.5);
        assert_eq!(clamp_temperature(TEMP_OFF), 0.5);
        assert_eq!(clamp_temperature(21.5), 21.5);
    }
}
