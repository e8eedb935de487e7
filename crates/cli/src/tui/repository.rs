use std::collections::HashMap;

use common::{Asset, ModelError};

/// In-memory, read-mostly store of monitored assets; the single source of
/// truth for every screen. Insertion order is the display order everywhere.
#[derive(Default)]
pub struct AssetRepository {
    assets: Vec<Asset>,
    index: HashMap<String, usize>,
}

impl AssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    pub fn all(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// The designated fallback entity when a requested id is unknown.
    pub fn default_asset(&self) -> Option<&Asset> {
        self.assets.first()
    }

    /// Replaces the entire contents. Every record is validated before the
    /// swap, so a bad batch leaves the previous contents readable.
    pub fn load(&mut self, batch: Vec<Asset>) -> Result<(), ModelError> {
        let mut index = HashMap::with_capacity(batch.len());
        for (i, asset) in batch.iter().enumerate() {
            asset.validate()?;
            if index.insert(asset.id.clone(), i).is_some() {
                return Err(ModelError::DuplicateId(asset.id.clone()));
            }
        }
        self.assets = batch;
        self.index = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::fixture;

    #[test]
    fn load_preserves_insertion_order() {
        let mut repo = AssetRepository::new();
        let batch = fixture::assets();
        let ids: Vec<String> = batch.iter().map(|a| a.id.clone()).collect();
        repo.load(batch).unwrap();
        let got: Vec<&str> = repo.all().iter().map(|a| a.id.as_str()).collect();
        assert_eq!(got, ids.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(repo.default_asset().unwrap().id, ids[0]);
    }

    #[test]
    fn get_finds_loaded_assets_only() {
        let mut repo = AssetRepository::new();
        repo.load(fixture::assets()).unwrap();
        assert_eq!(repo.get("TX-102").unwrap().name, "Johar Morr Transformer");
        assert!(repo.get("T-9999").is_none());
    }

    #[test]
    fn invalid_batch_leaves_previous_contents_readable() {
        let mut repo = AssetRepository::new();
        repo.load(fixture::assets()).unwrap();
        let before = repo.len();

        let mut bad = fixture::assets();
        bad[1].health = None; // Critical without a score fails validation
        assert!(repo.load(bad).is_err());
        assert_eq!(repo.len(), before);
        assert!(repo.get("TX-101").is_some());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut repo = AssetRepository::new();
        let mut batch = fixture::assets();
        let dup = batch[0].clone();
        batch.push(dup);
        assert!(matches!(
            repo.load(batch),
            Err(ModelError::DuplicateId(id)) if id == "TX-101"
        ));
        assert!(repo.is_empty());
    }
}
