use serde::{Deserialize, Serialize};

/// Local wall-clock time of one instant in one timezone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalTimeInZone {
    /// Canonical IANA timezone name
    pub time_zone: String,
    /// Local time in `HH:MM:SS` format
    pub local_time: String,
}

/// Request body for `POST /time/zones`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeInZonesRequest {
    /// IANA timezone names, answered in the same order
    pub time_zones: Vec<String>,
}

/// Response body for `POST /time/zones`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInZonesResponse {
    pub times: Vec<LocalTimeInZone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_time_in_zone_serialization() {
        let entry = LocalTimeInZone {
            time_zone: "Europe/London".to_string(),
            local_time: "22:45:00".to_string(),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"timeZone": "Europe/London", "localTime": "22:45:00"})
        );
    }

    #[test]
    fn test_request_deserialization() {
        let json = r#"{"timeZones": ["Europe/London", "UTC", "UTC"]}"#;
        let request: TimeInZonesRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.time_zones, vec!["Europe/London", "UTC", "UTC"]);
    }

    #[test]
    fn test_request_keeps_identifiers_verbatim() {
        let json = r#"{"timeZones": ["  UTC  "]}"#;
        let request: TimeInZonesRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.time_zones, vec!["  UTC  "]);
    }

    #[test]
    fn test_request_requires_time_zones() {
        let result = serde_json::from_str::<TimeInZonesRequest>("{}");
        assert!(result.is_err());
    }
}
