use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct WennerRequest {
    pub potential_difference: f64,
    pub current: f64,
    pub spacing: f64,
    pub number_of_electrodes: i32,
}

#[derive(Debug, Deserialize)]
pub struct SchlumbergerRequest {
    pub potential_difference: f64,
    pub current: f64,
    pub half_distance_current: f64,
    pub half_distance_potential: f64,
    pub number_of_electrodes: i32,
}

#[derive(Debug, Deserialize)]
pub struct DipoleDipoleRequest {
    pub potential_difference: f64,
    pub current: f64,
    pub spacing_between_dipoles: i32,
    pub spacing: f64,
    pub total_electrodes: i32,
}

#[derive(Debug, Deserialize)]
pub struct PolePoleRequest {
    pub potential_difference: f64,
    pub current: f64,
    pub spacing: f64,
    pub number_of_electrodes: i32,
}

/// Apparent resistivity in ohm-metres.
#[derive(Debug, Serialize)]
pub struct ResistivityResponse {
    pub resistivity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wenner_request_deserializes() {
        let body: WennerRequest = serde_json::from_str(
            r#"{"potential_difference":1.5,"current":0.5,"spacing":10.0,"number_of_electrodes":4}"#,
        )
        .unwrap();
        assert_eq!(body.number_of_electrodes, 4);
        assert!((body.spacing - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn response_serializes_resistivity_field() {
        let json = serde_json::to_string(&ResistivityResponse { resistivity: 42.0 }).unwrap();
        assert!(json.contains("\"resistivity\":42.0"));
    }
}
