/// Formats a fractional hour count the way the prediction service does:
/// "3h 20m", "3h", "45m", or "N/A" for non-positive values.
pub fn format_duration(hours: f64) -> String {
    if !(hours > 0.0) {
        return "N/A".to_string();
    }
    let h = hours.trunc() as u64;
    let m = ((hours - hours.trunc()) * 60.0) as u64;
    if h > 0 && m > 0 {
        format!("{h}h {m}m")
    } else if h > 0 {
        format!("{h}h")
    } else {
        format!("{m}m")
    }
}

/// Icon name for a fault type, mirroring the service's icon table.
pub fn fault_icon(fault_type: &str) -> &'static str {
    match fault_type {
        "Motor Failure" => "gear-fill",
        "Short Circuit" => "lightning-charge-fill",
        "Leak" => "droplet-fill",
        "Sensor Fault" => "cpu-fill",
        _ => "exclamation-triangle",
    }
}

/// Crew guidance shown for an active fault of the given type.
pub fn fault_recommendation(fault_type: &str) -> Option<(&'static str, &'static str)> {
    match fault_type {
        "Motor Failure" => Some((
            "Dispatch rotating-machinery crew",
            "Motor faults escalate to winding damage if the unit keeps running",
        )),
        "Short Circuit" => Some((
            "Isolate the feeder and inspect insulation",
            "Re-energizing over a live short risks cascading trips",
        )),
        "Leak" => Some((
            "Seal and top up insulating oil",
            "Falling oil level degrades cooling and dielectric strength",
        )),
        "Sensor Fault" => Some((
            "Replace the telemetry sensor package",
            "Blind spots hide developing faults on this asset",
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting_matches_service() {
        assert_eq!(format_duration(3.34), "3h 20m");
        assert_eq!(format_duration(3.0), "3h");
        assert_eq!(format_duration(0.75), "45m");
        assert_eq!(format_duration(0.0), "N/A");
        assert_eq!(format_duration(-1.5), "N/A");
        assert_eq!(format_duration(f64::NAN), "N/A");
    }

    #[test]
    fn unknown_fault_type_gets_generic_icon() {
        assert_eq!(fault_icon("Leak"), "droplet-fill");
        assert_eq!(fault_icon("Gremlins"), "exclamation-triangle");
        assert!(fault_recommendation("Gremlins").is_none());
    }
}
