use serde::{Deserialize, Serialize};
use std::fmt;

/// Validation failures raised while loading asset data. Loading fails loudly:
/// an unrecognized categorical value is a data-entry defect, not something to
/// paper over at filter or render time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("asset has an empty id")]
    EmptyId,
    #[error("duplicate asset id {0}")]
    DuplicateId(String),
    #[error("unknown status {0:?}")]
    UnknownStatus(String),
    #[error("unknown risk level {0:?}")]
    UnknownRisk(String),
    #[error("unknown region {0:?}")]
    UnknownRegion(String),
    #[error("asset {id}: health score {health} out of range")]
    HealthOutOfRange { id: String, health: u8 },
    #[error("asset {id}: non-fault asset is missing a health score")]
    HealthMissing { id: String },
    #[error("asset {id}: active fault must report the unknown-health sentinel")]
    HealthOnActiveFault { id: String },
    #[error("asset {id}: failure probability must not be empty")]
    EmptyFailureProbability { id: String },
}

/// Operational state of a monitored asset. Drives badge coloring and filter
/// matching, so it is a closed set rather than free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetStatus {
    Healthy,
    Warning,
    Critical,
    ActiveFault,
}

impl AssetStatus {
    pub const ALL: [AssetStatus; 4] = [
        AssetStatus::Healthy,
        AssetStatus::Warning,
        AssetStatus::Critical,
        AssetStatus::ActiveFault,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AssetStatus::Healthy => "Healthy",
            AssetStatus::Warning => "Warning",
            AssetStatus::Critical => "Critical",
            AssetStatus::ActiveFault => "Active Fault",
        }
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Work-order status carried by fault records on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultStatus {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "ON_HOLD")]
    OnHold,
    #[serde(rename = "COMPLETED")]
    Completed,
}

impl FaultStatus {
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "NEW" => Ok(FaultStatus::New),
            "IN_PROGRESS" => Ok(FaultStatus::InProgress),
            "ON_HOLD" => Ok(FaultStatus::OnHold),
            "COMPLETED" => Ok(FaultStatus::Completed),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaultStatus::New => "New",
            FaultStatus::InProgress => "In Progress",
            FaultStatus::OnHold => "On Hold",
            FaultStatus::Completed => "Completed",
        }
    }

    /// Badge color name used by the upstream dashboard payloads.
    pub fn badge(self) -> &'static str {
        match self {
            FaultStatus::New => "info",
            FaultStatus::InProgress => "warning",
            FaultStatus::OnHold => "secondary",
            FaultStatus::Completed => "success",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FaultStatus::New => "plus-circle-fill",
            FaultStatus::InProgress => "hourglass-split",
            FaultStatus::OnHold => "pause-circle-fill",
            FaultStatus::Completed => "check-circle-fill",
        }
    }
}

/// Area risk classification from the service's plant configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Secure,
    Medium,
    High,
    Extreme,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Secure,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Extreme,
    ];

    /// Upstream data uses both "Secure" and "Very Secure"; the latter is
    /// collapsed on load, matching the server's own cleanup.
    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "Secure" | "Very Secure" => Ok(RiskLevel::Secure),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            "Extreme" => Ok(RiskLevel::Extreme),
            other => Err(ModelError::UnknownRisk(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskLevel::Secure => "Secure",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::Extreme => "Extreme",
        }
    }
}

/// Karachi sub-regions covered by the dashboard. The filter dropdown is
/// populated from this same set, so an asset can never carry a tag the filter
/// UI does not offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Johar,
    Dha,
    Gulshan,
    Korangi,
    Surjani,
    Nazimabad,
    Clifton,
}

impl Region {
    pub const ALL: [Region; 7] = [
        Region::Johar,
        Region::Dha,
        Region::Gulshan,
        Region::Korangi,
        Region::Surjani,
        Region::Nazimabad,
        Region::Clifton,
    ];

    pub fn parse(s: &str) -> Result<Self, ModelError> {
        match s {
            "Johar" | "Gulistan-e-Johar" => Ok(Region::Johar),
            "DHA" | "Dha" => Ok(Region::Dha),
            "Gulshan" | "Gulshan-e-Iqbal" => Ok(Region::Gulshan),
            "Korangi" => Ok(Region::Korangi),
            "Surjani" => Ok(Region::Surjani),
            "Nazimabad" => Ok(Region::Nazimabad),
            "Clifton" => Ok(Region::Clifton),
            other => Err(ModelError::UnknownRegion(other.to_string())),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Region::Johar => "Johar",
            Region::Dha => "DHA",
            Region::Gulshan => "Gulshan",
            Region::Korangi => "Korangi",
            Region::Surjani => "Surjani",
            Region::Nazimabad => "Nazimabad",
            Region::Clifton => "Clifton",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Imperative maintenance action plus the reason it is recommended. The
/// pairing is structural: a reason cannot exist without its action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub date: String,
    pub action: String,
    pub technician: String,
    pub notes: String,
}

/// A monitored grid asset: transformer, plant station, or active fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub name: String,
    pub location: String,
    pub region: Region,
    pub risk: RiskLevel,
    pub status: AssetStatus,
    /// 0..=100; `None` is the unknown sentinel reserved for active faults.
    pub health: Option<u8>,
    pub recommendation: Option<Recommendation>,
    pub failure_probability: String,
    /// Metric name to formatted value, in display order. "N/A" marks
    /// telemetry that is unavailable for the asset.
    pub metrics: Vec<(String, String)>,
    pub coordinates: Option<Coordinates>,
    /// Backing plant for prediction requests; absent for assets with no
    /// plant linkage.
    #[serde(default)]
    pub plant_id: Option<String>,
    #[serde(default)]
    pub history: Vec<MaintenanceRecord>,
}

impl Asset {
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.id.trim().is_empty() {
            return Err(ModelError::EmptyId);
        }
        match (self.status, self.health) {
            (AssetStatus::ActiveFault, Some(_)) => {
                return Err(ModelError::HealthOnActiveFault { id: self.id.clone() });
            }
            (AssetStatus::ActiveFault, None) => {}
            (_, None) => {
                return Err(ModelError::HealthMissing { id: self.id.clone() });
            }
            (_, Some(h)) if h > 100 => {
                return Err(ModelError::HealthOutOfRange { id: self.id.clone(), health: h });
            }
            _ => {}
        }
        if self.failure_probability.trim().is_empty() {
            return Err(ModelError::EmptyFailureProbability { id: self.id.clone() });
        }
        Ok(())
    }

    pub fn health_label(&self) -> String {
        match self.health {
            Some(h) => format!("{h}"),
            None => "N/A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(status: AssetStatus, health: Option<u8>) -> Asset {
        Asset {
            id: "TX-1".into(),
            name: "Test Transformer".into(),
            location: "Block 4".into(),
            region: Region::Johar,
            risk: RiskLevel::Medium,
            status,
            health,
            recommendation: None,
            failure_probability: "Low (<10%)".into(),
            metrics: Vec::new(),
            coordinates: None,
            plant_id: None,
            history: Vec::new(),
        }
    }

    #[test]
    fn risk_parse_collapses_very_secure() {
        assert_eq!(RiskLevel::parse("Very Secure").unwrap(), RiskLevel::Secure);
        assert_eq!(RiskLevel::parse("Extreme").unwrap(), RiskLevel::Extreme);
        assert!(matches!(
            RiskLevel::parse("Catastrophic"),
            Err(ModelError::UnknownRisk(_))
        ));
    }

    #[test]
    fn region_parse_rejects_unknown() {
        assert_eq!(Region::parse("DHA").unwrap(), Region::Dha);
        assert!(matches!(
            Region::parse("Atlantis"),
            Err(ModelError::UnknownRegion(_))
        ));
    }

    #[test]
    fn fault_status_parse_matches_wire_values() {
        assert_eq!(FaultStatus::parse("IN_PROGRESS").unwrap(), FaultStatus::InProgress);
        assert!(FaultStatus::parse("in_progress").is_err());
    }

    #[test]
    fn health_sentinel_is_tied_to_active_fault() {
        assert!(asset(AssetStatus::Healthy, Some(91)).validate().is_ok());
        assert!(asset(AssetStatus::ActiveFault, None).validate().is_ok());
        assert!(matches!(
            asset(AssetStatus::ActiveFault, Some(10)).validate(),
            Err(ModelError::HealthOnActiveFault { .. })
        ));
        assert!(matches!(
            asset(AssetStatus::Critical, None).validate(),
            Err(ModelError::HealthMissing { .. })
        ));
        assert!(matches!(
            asset(AssetStatus::Healthy, Some(101)).validate(),
            Err(ModelError::HealthOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_failure_probability_is_rejected() {
        let mut a = asset(AssetStatus::Healthy, Some(80));
        a.failure_probability = "  ".into();
        assert!(matches!(
            a.validate(),
            Err(ModelError::EmptyFailureProbability { .. })
        ));
    }
}
