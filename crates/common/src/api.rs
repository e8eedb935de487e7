use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::format::{fault_recommendation, format_duration};
use crate::model::{
    Asset, AssetStatus, Coordinates, FaultStatus, ModelError, Recommendation, Region, RiskLevel,
};

// ===================== Wire payloads =====================
//
// Exact response shapes of the prediction service. Kept stringly-typed at the
// boundary; normalization below converts into the closed model enums and
// fails loudly on anything unrecognized.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub area: String,
    pub risk_level: String,
    pub coordinates: Coordinates,
    pub color: String,
    pub total_faults: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub label: String,
    pub count: u64,
    pub color: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_faults: u64,
    pub statuses: Vec<StatusCount>,
    #[serde(default)]
    pub by_area: BTreeMap<String, u64>,
    #[serde(default)]
    pub by_fault_type: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FaultWeather {
    pub temp: f64,
    pub wind: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultRecord {
    pub id: String,
    pub plant_id: String,
    pub plant_name: String,
    pub area: String,
    pub fault_type: String,
    pub fault_icon: String,
    pub status: String,
    pub risk_level: String,
    pub duration: String,
    pub duration_hours: Option<f64>,
    pub weather: FaultWeather,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapMarker {
    pub plant_id: String,
    pub plant_name: String,
    pub area: String,
    pub lat: f64,
    pub lng: f64,
    pub color: String,
    pub risk_level: String,
    pub fault_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub summary: Summary,
    pub recent_faults: Vec<FaultRecord>,
    pub map_markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRef {
    pub id: String,
    pub name: String,
    pub area: String,
    pub risk_level: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: f64,
    pub wind_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionDetails {
    pub fault_type: String,
    pub fault_icon: String,
    pub restoration_hours: f64,
    pub restoration_formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseEstimate {
    pub nearest_center: String,
    pub distance_km: f64,
    pub travel_time_min: f64,
    pub total_eta_formatted: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub plant: PlantRef,
    pub conditions: Conditions,
    pub predictions: PredictionDetails,
    pub response: ResponseEstimate,
}

// ===================== Normalization =====================

fn status_for_risk(risk: RiskLevel) -> AssetStatus {
    match risk {
        RiskLevel::Secure => AssetStatus::Healthy,
        RiskLevel::Medium | RiskLevel::High => AssetStatus::Warning,
        RiskLevel::Extreme => AssetStatus::Critical,
    }
}

// Plants carry no health telemetry; derive a stable score from the risk band
// and the fault count so the health invariant holds for every non-fault asset.
fn health_for_plant(risk: RiskLevel, total_faults: u64) -> u8 {
    let base: u8 = match risk {
        RiskLevel::Secure => 94,
        RiskLevel::Medium => 78,
        RiskLevel::High => 62,
        RiskLevel::Extreme => 35,
    };
    base.saturating_sub(total_faults.min(15) as u8).max(5)
}

fn probability_for_risk(risk: RiskLevel) -> &'static str {
    match risk {
        RiskLevel::Secure => "Low (<10%)",
        RiskLevel::Medium => "Medium (~25%)",
        RiskLevel::High => "High (~55%)",
        RiskLevel::Extreme => "Very High (>80%)",
    }
}

fn plant_recommendation(risk: RiskLevel) -> Option<Recommendation> {
    match risk {
        RiskLevel::Extreme => Some(Recommendation {
            action: "Schedule preventive inspection".into(),
            reason: "Extreme-risk area; faults cluster around this station".into(),
        }),
        RiskLevel::High => Some(Recommendation {
            action: "Increase patrol frequency".into(),
            reason: "High kunda-risk area drives repeat faults".into(),
        }),
        _ => None,
    }
}

fn asset_from_plant(plant: &Plant) -> Result<Asset, ModelError> {
    let region = Region::parse(&plant.area)?;
    let risk = RiskLevel::parse(&plant.risk_level)?;
    let status = status_for_risk(risk);
    Ok(Asset {
        id: plant.id.clone(),
        name: plant.name.clone(),
        location: format!("{}, Karachi", region.label()),
        region,
        risk,
        status,
        health: Some(health_for_plant(risk, plant.total_faults)),
        recommendation: plant_recommendation(risk),
        failure_probability: probability_for_risk(risk).to_string(),
        metrics: vec![
            ("Recorded Faults".into(), plant.total_faults.to_string()),
            ("Load".into(), "N/A".into()),
            ("Temperature".into(), "N/A".into()),
            ("Oil Level".into(), "N/A".into()),
        ],
        coordinates: Some(plant.coordinates),
        plant_id: Some(plant.id.clone()),
        history: Vec::new(),
    })
}

fn asset_from_fault(fault: &FaultRecord) -> Result<Asset, ModelError> {
    let region = Region::parse(&fault.area)?;
    let risk = RiskLevel::parse(&fault.risk_level)?;
    let work_status = FaultStatus::parse(&fault.status)?;
    let restored = work_status == FaultStatus::Completed;

    let (status, health) = if restored {
        (AssetStatus::Healthy, Some(100))
    } else {
        (AssetStatus::ActiveFault, None)
    };
    let failure_probability = if restored {
        "Low (restored)".to_string()
    } else if fault.duration == "N/A" {
        "Very High (ETA pending)".to_string()
    } else {
        format!("Very High (ETA {})", fault.duration)
    };
    let recommendation = if restored {
        None
    } else {
        fault_recommendation(&fault.fault_type).map(|(action, reason)| Recommendation {
            action: action.into(),
            reason: reason.into(),
        })
    };

    Ok(Asset {
        id: fault.id.clone(),
        name: format!("{} at {}", fault.fault_type, fault.plant_name),
        location: format!("{}, Karachi", region.label()),
        region,
        risk,
        status,
        health,
        recommendation,
        failure_probability,
        metrics: vec![
            ("Fault Type".into(), fault.fault_type.clone()),
            ("Load".into(), "N/A".into()),
            ("Oil Level".into(), "N/A".into()),
            ("Ambient".into(), format!("{:.1} \u{00b0}C", fault.weather.temp)),
            ("Wind".into(), format!("{:.1} km/h", fault.weather.wind)),
            (
                "Outage Duration".into(),
                fault
                    .duration_hours
                    .map(format_duration)
                    .unwrap_or_else(|| fault.duration.clone()),
            ),
        ],
        coordinates: None,
        plant_id: Some(fault.plant_id.clone()),
        history: Vec::new(),
    })
}

/// Normalizes the remote payloads into repository shape: plants first in
/// listed order, then fault records. Any unrecognized categorical value
/// aborts the whole batch.
pub fn assets_from_remote(
    plants: &[Plant],
    dashboard: &DashboardPayload,
) -> Result<Vec<Asset>, ModelError> {
    let mut assets = Vec::with_capacity(plants.len() + dashboard.recent_faults.len());
    for plant in plants {
        assets.push(asset_from_plant(plant)?);
    }
    for fault in &dashboard.recent_faults {
        assets.push(asset_from_fault(fault)?);
    }
    Ok(assets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plants_json() -> &'static str {
        r##"[
            {"id": "PLANT_01", "name": "Korangi Grid Station", "area": "Korangi",
             "risk_level": "Extreme", "coordinates": {"lat": 24.831, "lng": 67.132},
             "color": "#dc3545", "total_faults": 12},
            {"id": "MAINT_01", "name": "Clifton Maintenance Hub", "area": "Clifton",
             "risk_level": "Very Secure", "coordinates": {"lat": 24.815, "lng": 67.028},
             "color": "#28a745", "total_faults": 1}
        ]"##
    }

    fn sample_dashboard_json() -> &'static str {
        r##"{
            "summary": {
                "total_faults": 2,
                "statuses": [
                    {"status": "IN_PROGRESS", "label": "In Progress", "count": 1,
                     "color": "warning", "icon": "hourglass-split"},
                    {"status": "COMPLETED", "label": "Completed", "count": 1,
                     "color": "success", "icon": "check-circle-fill"}
                ],
                "by_area": {"Korangi": 2},
                "by_fault_type": {"Leak": 1, "Short Circuit": 1}
            },
            "recent_faults": [
                {"id": "10001", "plant_id": "PLANT_01", "plant_name": "Korangi Grid Station",
                 "area": "Korangi", "fault_type": "Leak", "fault_icon": "droplet-fill",
                 "status": "IN_PROGRESS",
                 "status_info": {"label": "In Progress", "color": "warning", "icon": "hourglass-split"},
                 "risk_level": "Extreme", "duration": "N/A", "duration_hours": null,
                 "weather": {"temp": 34.2, "wind": 12.0}, "color": "#dc3545"},
                {"id": "10002", "plant_id": "PLANT_01", "plant_name": "Korangi Grid Station",
                 "area": "Korangi", "fault_type": "Short Circuit",
                 "fault_icon": "lightning-charge-fill", "status": "COMPLETED",
                 "status_info": {"label": "Completed", "color": "success", "icon": "check-circle-fill"},
                 "risk_level": "Extreme", "duration": "3h 20m", "duration_hours": 3.3,
                 "weather": {"temp": 31.0, "wind": 18.5}, "color": "#dc3545"}
            ],
            "map_markers": [
                {"plant_id": "PLANT_01", "plant_name": "Korangi Grid Station", "area": "Korangi",
                 "lat": 24.831, "lng": 67.132, "color": "#dc3545", "risk_level": "Extreme",
                 "fault_count": 12}
            ]
        }"##
    }

    #[test]
    fn payloads_deserialize_from_service_shapes() {
        let plants: Vec<Plant> = serde_json::from_str(sample_plants_json()).unwrap();
        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].id, "PLANT_01");

        let dashboard: DashboardPayload = serde_json::from_str(sample_dashboard_json()).unwrap();
        assert_eq!(dashboard.summary.total_faults, 2);
        assert_eq!(dashboard.recent_faults.len(), 2);
        assert_eq!(dashboard.recent_faults[0].duration_hours, None);
        assert_eq!(dashboard.map_markers[0].fault_count, 12);
    }

    #[test]
    fn prediction_deserializes_from_service_shape() {
        let json = r##"{
            "plant": {"id": "PLANT_01", "name": "Korangi Grid Station",
                      "area": "Korangi", "risk_level": "Extreme"},
            "conditions": {"temperature": 32.5, "wind_speed": 15.0},
            "predictions": {"fault_type": "Short Circuit",
                            "fault_icon": "lightning-charge-fill",
                            "restoration_hours": 4.2,
                            "restoration_formatted": "4h 12m"},
            "response": {"nearest_center": "Korangi Service Center",
                         "distance_km": 3.4, "travel_time_min": 14,
                         "total_eta_formatted": "4h 26m"}
        }"##;
        let p: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(p.predictions.fault_type, "Short Circuit");
        assert_eq!(p.response.travel_time_min, 14.0);
    }

    #[test]
    fn normalization_keeps_plants_then_faults_order() {
        let plants: Vec<Plant> = serde_json::from_str(sample_plants_json()).unwrap();
        let dashboard: DashboardPayload = serde_json::from_str(sample_dashboard_json()).unwrap();
        let assets = assets_from_remote(&plants, &dashboard).unwrap();
        let ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["PLANT_01", "MAINT_01", "10001", "10002"]);
        for a in &assets {
            a.validate().unwrap();
        }
    }

    #[test]
    fn active_fault_normalizes_to_unknown_health() {
        let plants: Vec<Plant> = serde_json::from_str(sample_plants_json()).unwrap();
        let dashboard: DashboardPayload = serde_json::from_str(sample_dashboard_json()).unwrap();
        let assets = assets_from_remote(&plants, &dashboard).unwrap();

        let active = assets.iter().find(|a| a.id == "10001").unwrap();
        assert_eq!(active.status, AssetStatus::ActiveFault);
        assert_eq!(active.health, None);
        assert!(active.recommendation.is_some());

        let restored = assets.iter().find(|a| a.id == "10002").unwrap();
        assert_eq!(restored.status, AssetStatus::Healthy);
        assert_eq!(restored.health, Some(100));
        assert!(restored.recommendation.is_none());
    }

    #[test]
    fn very_secure_plant_collapses_to_secure() {
        let plants: Vec<Plant> = serde_json::from_str(sample_plants_json()).unwrap();
        let asset = asset_from_plant(&plants[1]).unwrap();
        assert_eq!(asset.risk, RiskLevel::Secure);
        assert_eq!(asset.status, AssetStatus::Healthy);
    }

    #[test]
    fn unknown_categories_fail_loudly_at_load() {
        let mut plants: Vec<Plant> = serde_json::from_str(sample_plants_json()).unwrap();
        plants[0].risk_level = "Apocalyptic".into();
        let dashboard: DashboardPayload = serde_json::from_str(sample_dashboard_json()).unwrap();
        assert!(matches!(
            assets_from_remote(&plants, &dashboard),
            Err(ModelError::UnknownRisk(_))
        ));
    }
}
