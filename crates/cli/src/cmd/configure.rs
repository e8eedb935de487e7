use anyhow::anyhow;

use crate::config::{store, AppConfig};

pub async fn configure(api: String) -> anyhow::Result<()> {
    if api.trim().is_empty() {
        return Err(anyhow!("api url required"));
    }
    store(&AppConfig { api_url: api }).await?;
    println!("configuration written");
    Ok(())
}
