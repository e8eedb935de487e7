use crate::api::ApiClient;

pub async fn predict(
    api_url: &str,
    plant: &str,
    temp: Option<f64>,
    wind: Option<f64>,
) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url.to_string())?;
    let p = client.predict(plant, temp, wind).await?;

    println!(
        "{} ({}, {} risk)",
        p.plant.name, p.plant.area, p.plant.risk_level
    );
    println!(
        "conditions: {:.1} C, wind {:.1} km/h",
        p.conditions.temperature, p.conditions.wind_speed
    );
    println!(
        "predicted fault: {} (restoration {})",
        p.predictions.fault_type, p.predictions.restoration_formatted
    );
    println!(
        "response: {} at {:.1} km, travel {:.0} min, total ETA {}",
        p.response.nearest_center,
        p.response.distance_km,
        p.response.travel_time_min,
        p.response.total_eta_formatted
    );
    Ok(())
}
