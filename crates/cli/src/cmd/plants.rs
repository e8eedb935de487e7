use crate::api::ApiClient;

pub async fn plants(api_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url.to_string())?;
    let plants = client.load_plants().await?;

    println!(
        "{:<10} {:<26} {:<10} {:<8} {:<6}",
        "ID", "NAME", "AREA", "RISK", "FAULTS"
    );
    for p in &plants {
        println!(
            "{:<10} {:<26} {:<10} {:<8} {:<6}",
            p.id, p.name, p.area, p.risk_level, p.total_faults
        );
    }
    Ok(())
}
