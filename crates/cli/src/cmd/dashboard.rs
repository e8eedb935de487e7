use crate::api::ApiClient;

pub async fn dashboard(api_url: &str) -> anyhow::Result<()> {
    let client = ApiClient::new(api_url.to_string())?;
    let payload = client.load_dashboard().await?;

    println!("faults on record: {}", payload.summary.total_faults);
    for s in &payload.summary.statuses {
        println!("  {:<12} {}", s.label, s.count);
    }

    println!();
    println!(
        "{:<8} {:<26} {:<14} {:<12} {:<8}",
        "ID", "PLANT", "FAULT", "STATUS", "DURATION"
    );
    for f in &payload.recent_faults {
        println!(
            "{:<8} {:<26} {:<14} {:<12} {:<8}",
            f.id, f.plant_name, f.fault_type, f.status, f.duration
        );
    }
    Ok(())
}
