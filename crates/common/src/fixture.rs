//! Built-in dataset for offline operation and tests. Covers every region and
//! status the filter UI offers, so filters and data cannot diverge.

use crate::model::{
    Asset, AssetStatus, Coordinates, MaintenanceRecord, Recommendation, Region, RiskLevel,
};

fn metrics(load: &str, temp: &str, ambient: &str, oil: &str) -> Vec<(String, String)> {
    vec![
        ("Load".into(), load.into()),
        ("Temperature".into(), temp.into()),
        ("Ambient".into(), ambient.into()),
        ("Oil Level".into(), oil.into()),
    ]
}

fn record(date: &str, action: &str, technician: &str, notes: &str) -> MaintenanceRecord {
    MaintenanceRecord {
        date: date.into(),
        action: action.into(),
        technician: technician.into(),
        notes: notes.into(),
    }
}

/// The offline asset set: distribution transformers across the monitored
/// regions plus the four plant stations.
pub fn assets() -> Vec<Asset> {
    vec![
        Asset {
            id: "TX-101".into(),
            name: "Johar Block 4 Transformer".into(),
            location: "Block 4, Gulistan-e-Johar".into(),
            region: Region::Johar,
            risk: RiskLevel::Medium,
            status: AssetStatus::Healthy,
            health: Some(91),
            recommendation: None,
            failure_probability: "Low (4%)".into(),
            metrics: metrics("61%", "54 \u{00b0}C", "33 \u{00b0}C", "96%"),
            coordinates: Some(Coordinates { lat: 24.906, lng: 67.118 }),
            plant_id: None,
            history: vec![record(
                "2026-02-11",
                "Routine oil sampling",
                "S. Baig",
                "Dielectric strength nominal",
            )],
        },
        Asset {
            id: "TX-102".into(),
            name: "Johar Morr Transformer".into(),
            location: "Johar Morr, Gulistan-e-Johar".into(),
            region: Region::Johar,
            risk: RiskLevel::High,
            status: AssetStatus::Critical,
            health: Some(34),
            recommendation: Some(Recommendation {
                action: "Replace degraded bushing within 72 hours".into(),
                reason: "Partial discharge trending up across the last three inspections".into(),
            }),
            failure_probability: "Very High (81%)".into(),
            metrics: metrics("94%", "88 \u{00b0}C", "34 \u{00b0}C", "71%"),
            coordinates: Some(Coordinates { lat: 24.912, lng: 67.125 }),
            plant_id: None,
            history: vec![
                record("2026-05-02", "Bushing inspection", "A. Rehman", "Discharge above limit"),
                record("2026-03-19", "Load balancing", "A. Rehman", "Phase B overloaded"),
            ],
        },
        Asset {
            id: "TX-103".into(),
            name: "Johar University Road Transformer".into(),
            location: "University Road, Gulistan-e-Johar".into(),
            region: Region::Johar,
            risk: RiskLevel::Medium,
            status: AssetStatus::Warning,
            health: Some(68),
            recommendation: Some(Recommendation {
                action: "Top up insulating oil at next visit".into(),
                reason: "Oil level fell 6 points since the spring survey".into(),
            }),
            failure_probability: "Medium (28%)".into(),
            metrics: metrics("78%", "71 \u{00b0}C", "33 \u{00b0}C", "82%"),
            coordinates: Some(Coordinates { lat: 24.921, lng: 67.109 }),
            plant_id: None,
            history: Vec::new(),
        },
        Asset {
            id: "TX-201".into(),
            name: "DHA Phase 5 Transformer".into(),
            location: "Khayaban-e-Shahbaz, DHA Phase 5".into(),
            region: Region::Dha,
            risk: RiskLevel::Medium,
            status: AssetStatus::Critical,
            health: Some(41),
            recommendation: Some(Recommendation {
                action: "Derate feeder until cooling fans are replaced".into(),
                reason: "Two of four cooling fans failed during the heat wave".into(),
            }),
            failure_probability: "High (64%)".into(),
            metrics: metrics("89%", "86 \u{00b0}C", "35 \u{00b0}C", "88%"),
            coordinates: Some(Coordinates { lat: 24.803, lng: 67.056 }),
            plant_id: None,
            history: vec![record(
                "2026-06-27",
                "Cooling fan diagnosis",
                "M. Qureshi",
                "Replacement parts on order",
            )],
        },
        Asset {
            id: "TX-202".into(),
            name: "DHA Seaview Transformer".into(),
            location: "Beach Avenue, DHA Phase 8".into(),
            region: Region::Dha,
            risk: RiskLevel::Secure,
            status: AssetStatus::Healthy,
            health: Some(95),
            recommendation: None,
            failure_probability: "Low (2%)".into(),
            metrics: metrics("48%", "49 \u{00b0}C", "31 \u{00b0}C", "97%"),
            coordinates: Some(Coordinates { lat: 24.794, lng: 67.041 }),
            plant_id: None,
            history: Vec::new(),
        },
        Asset {
            id: "TX-301".into(),
            name: "Gulshan Block 13 Transformer".into(),
            location: "Block 13-D, Gulshan-e-Iqbal".into(),
            region: Region::Gulshan,
            risk: RiskLevel::High,
            status: AssetStatus::Warning,
            health: Some(59),
            recommendation: Some(Recommendation {
                action: "Audit service connections on this feeder".into(),
                reason: "Load pattern suggests unmetered taps after 6 pm".into(),
            }),
            failure_probability: "High (52%)".into(),
            metrics: metrics("83%", "74 \u{00b0}C", "34 \u{00b0}C", "90%"),
            coordinates: Some(Coordinates { lat: 24.917, lng: 67.093 }),
            plant_id: None,
            history: Vec::new(),
        },
        Asset {
            id: "FLT-4811".into(),
            name: "Short Circuit at Gulshan Block 2".into(),
            location: "Block 2, Gulshan-e-Iqbal".into(),
            region: Region::Gulshan,
            risk: RiskLevel::High,
            status: AssetStatus::ActiveFault,
            health: None,
            recommendation: Some(Recommendation {
                action: "Isolate the feeder and inspect insulation".into(),
                reason: "Re-energizing over a live short risks cascading trips".into(),
            }),
            failure_probability: "Very High (ETA 2h 30m)".into(),
            metrics: metrics("N/A", "N/A", "34 \u{00b0}C", "N/A"),
            coordinates: Some(Coordinates { lat: 24.927, lng: 67.081 }),
            plant_id: None,
            history: Vec::new(),
        },
        Asset {
            id: "PLANT_01".into(),
            name: "Korangi Grid Station".into(),
            location: "Korangi Industrial Area".into(),
            region: Region::Korangi,
            risk: RiskLevel::Extreme,
            status: AssetStatus::Critical,
            health: Some(30),
            recommendation: Some(Recommendation {
                action: "Schedule preventive inspection".into(),
                reason: "Extreme-risk area; faults cluster around this station".into(),
            }),
            failure_probability: "Very High (>80%)".into(),
            metrics: metrics("91%", "82 \u{00b0}C", "36 \u{00b0}C", "79%"),
            coordinates: Some(Coordinates { lat: 24.831, lng: 67.132 }),
            plant_id: Some("PLANT_01".into()),
            history: vec![record(
                "2026-04-08",
                "Breaker overhaul",
                "K. Saeed",
                "11kV breaker contacts replaced",
            )],
        },
        Asset {
            id: "PLANT_02".into(),
            name: "Surjani Substation".into(),
            location: "Sector 7, Surjani Town".into(),
            region: Region::Surjani,
            risk: RiskLevel::High,
            status: AssetStatus::Warning,
            health: Some(57),
            recommendation: Some(Recommendation {
                action: "Increase patrol frequency".into(),
                reason: "High kunda-risk area drives repeat faults".into(),
            }),
            failure_probability: "High (~55%)".into(),
            metrics: metrics("76%", "69 \u{00b0}C", "35 \u{00b0}C", "85%"),
            coordinates: Some(Coordinates { lat: 25.002, lng: 67.062 }),
            plant_id: Some("PLANT_02".into()),
            history: Vec::new(),
        },
        Asset {
            id: "PLANT_03".into(),
            name: "Nazimabad Substation".into(),
            location: "Nazimabad No. 3".into(),
            region: Region::Nazimabad,
            risk: RiskLevel::Medium,
            status: AssetStatus::Healthy,
            health: Some(77),
            recommendation: None,
            failure_probability: "Medium (~25%)".into(),
            metrics: metrics("64%", "58 \u{00b0}C", "33 \u{00b0}C", "93%"),
            coordinates: Some(Coordinates { lat: 24.912, lng: 67.042 }),
            plant_id: Some("PLANT_03".into()),
            history: Vec::new(),
        },
        Asset {
            id: "MAINT_01".into(),
            name: "Clifton Maintenance Hub".into(),
            location: "Boat Basin, Clifton".into(),
            region: Region::Clifton,
            risk: RiskLevel::Secure,
            status: AssetStatus::Healthy,
            health: Some(93),
            recommendation: None,
            failure_probability: "Low (<10%)".into(),
            metrics: metrics("37%", "45 \u{00b0}C", "32 \u{00b0}C", "98%"),
            coordinates: Some(Coordinates { lat: 24.815, lng: 67.028 }),
            plant_id: Some("MAINT_01".into()),
            history: Vec::new(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixture_assets_all_validate() {
        for a in assets() {
            a.validate().unwrap();
        }
    }

    #[test]
    fn fixture_covers_every_filter_option() {
        let data = assets();
        for region in Region::ALL {
            assert!(
                data.iter().any(|a| a.region == region),
                "no fixture asset in {}",
                region.label()
            );
        }
        for status in AssetStatus::ALL {
            assert!(
                data.iter().any(|a| a.status == status),
                "no fixture asset with status {}",
                status.label()
            );
        }
    }

    #[test]
    fn fixture_ids_are_unique() {
        let data = assets();
        let mut ids: Vec<&str> = data.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), data.len());
    }
}
