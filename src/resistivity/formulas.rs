//! Apparent-resistivity formulas for the supported electrode arrays.
//!
//! Pure arithmetic over the measured potential difference and injected
//! current; geometry violations are reported, never silently corrected.

use std::f64::consts::PI;

use crate::error::ApiError;

fn require_current(current: f64) -> Result<(), ApiError> {
    if current == 0.0 {
        return Err(ApiError::InvalidInput("current must be non-zero".into()));
    }
    Ok(())
}

/// Wenner array: four equally spaced electrodes.
pub fn wenner(
    potential_difference: f64,
    current: f64,
    spacing: f64,
    number_of_electrodes: i32,
) -> Result<f64, ApiError> {
    if number_of_electrodes != 4 {
        return Err(ApiError::InvalidInput(
            "Wenner configuration requires exactly 4 electrodes".into(),
        ));
    }
    require_current(current)?;
    Ok(2.0 * PI * spacing * (potential_difference / current))
}

/// Schlumberger array: current electrodes at half-distance L, potential
/// electrodes at half-distance l.
pub fn schlumberger(
    potential_difference: f64,
    current: f64,
    half_distance_current: f64,
    half_distance_potential: f64,
    number_of_electrodes: i32,
) -> Result<f64, ApiError> {
    if number_of_electrodes != 4 {
        return Err(ApiError::InvalidInput(
            "Schlumberger configuration requires exactly 4 electrodes".into(),
        ));
    }
    if half_distance_potential == 0.0 {
        return Err(ApiError::InvalidInput(
            "potential half-distance must be non-zero".into(),
        ));
    }
    require_current(current)?;
    Ok(
        (PI * half_distance_current.powi(2) / (2.0 * half_distance_potential))
            * (potential_difference / current),
    )
}

/// Dipole-dipole array with dipole separation factor n.
pub fn dipole_dipole(
    potential_difference: f64,
    current: f64,
    spacing_between_dipoles: i32,
    spacing: f64,
    total_electrodes: i32,
) -> Result<f64, ApiError> {
    if total_electrodes < 4 {
        return Err(ApiError::InvalidInput(
            "Dipole-dipole configuration requires at least 4 electrodes".into(),
        ));
    }
    require_current(current)?;
    let n = f64::from(spacing_between_dipoles);
    Ok(PI * n * (n + 1.0) * spacing * (potential_difference / current))
}

/// Pole-pole array.
pub fn pole_pole(
    potential_difference: f64,
    current: f64,
    spacing: f64,
    number_of_electrodes: i32,
) -> Result<f64, ApiError> {
    if number_of_electrodes != 4 {
        return Err(ApiError::InvalidInput(
            "Pole-Pole configuration requires exactly 4 electrodes".into(),
        ));
    }
    require_current(current)?;
    Ok(2.0 * PI * spacing * (potential_difference / current) * f64::from(number_of_electrodes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn wenner_matches_hand_computation() {
        // 2 * pi * 3.0 * (1.0 / 2.0) = 3 * pi
        let rho = wenner(1.0, 2.0, 3.0, 4).unwrap();
        assert!(close(rho, 3.0 * PI));
    }

    #[test]
    fn wenner_rejects_wrong_electrode_count() {
        let err = wenner(1.0, 2.0, 3.0, 3).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn schlumberger_matches_hand_computation() {
        // pi * 4^2 / (2 * 1) * (2 / 1) = 16 * pi
        let rho = schlumberger(2.0, 1.0, 4.0, 1.0, 4).unwrap();
        assert!(close(rho, 16.0 * PI));
    }

    #[test]
    fn schlumberger_rejects_zero_potential_half_distance() {
        let err = schlumberger(2.0, 1.0, 4.0, 0.0, 4).unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }

    #[test]
    fn dipole_dipole_matches_hand_computation() {
        // pi * 2 * 3 * 3.0 * (1 / 1) = 18 * pi
        let rho = dipole_dipole(1.0, 1.0, 2, 3.0, 5).unwrap();
        assert!(close(rho, 18.0 * PI));
    }

    #[test]
    fn dipole_dipole_accepts_four_electrodes_but_not_three() {
        assert!(dipole_dipole(1.0, 1.0, 1, 1.0, 4).is_ok());
        assert!(dipole_dipole(1.0, 1.0, 1, 1.0, 3).is_err());
    }

    #[test]
    fn pole_pole_matches_hand_computation() {
        // 2 * pi * 1.0 * (1 / 1) * 4 = 8 * pi
        let rho = pole_pole(1.0, 1.0, 1.0, 4).unwrap();
        assert!(close(rho, 8.0 * PI));
    }

    #[test]
    fn zero_current_is_rejected_everywhere() {
        assert!(wenner(1.0, 0.0, 1.0, 4).is_err());
        assert!(schlumberger(1.0, 0.0, 1.0, 1.0, 4).is_err());
        assert!(dipole_dipole(1.0, 0.0, 1, 1.0, 4).is_err());
        assert!(pole_pole(1.0, 0.0, 1.0, 4).is_err());
    }
}
