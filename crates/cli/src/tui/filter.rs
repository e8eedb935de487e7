use common::{Asset, AssetStatus, Region};

/// The single source of truth for filter state. The filter bar renders from
/// this; it is never read back out of rendered text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub region: Option<Region>,
    pub status: Option<AssetStatus>,
    pub search: String,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.region.is_none() && self.status.is_none() && self.search.is_empty()
    }

    pub fn clear(&mut self) {
        *self = FilterCriteria::default();
    }

    /// Advances the region criterion through All -> each region -> All.
    pub fn cycle_region(&mut self) {
        self.region = match self.region {
            None => Some(Region::ALL[0]),
            Some(current) => Region::ALL
                .iter()
                .position(|r| *r == current)
                .and_then(|i| Region::ALL.get(i + 1))
                .copied(),
        };
    }

    pub fn cycle_status(&mut self) {
        self.status = match self.status {
            None => Some(AssetStatus::ALL[0]),
            Some(current) => AssetStatus::ALL
                .iter()
                .position(|s| *s == current)
                .and_then(|i| AssetStatus::ALL.get(i + 1))
                .copied(),
        };
    }
}

/// The text a table row displays for this asset. Search matches against this
/// exact concatenation, so whatever the user can see is searchable.
pub fn row_text(asset: &Asset) -> String {
    let mut parts = vec![
        asset.id.as_str(),
        asset.name.as_str(),
        asset.location.as_str(),
        asset.region.label(),
        asset.status.label(),
        asset.risk.label(),
    ];
    if let Some(rec) = &asset.recommendation {
        parts.push(rec.action.as_str());
    }
    parts.join(" ")
}

/// Pure AND-composition over the criteria. Preserves input order; empty
/// criteria is the identity.
pub fn apply<'a>(assets: &'a [Asset], criteria: &FilterCriteria) -> Vec<&'a Asset> {
    let needle = criteria.search.to_lowercase();
    assets
        .iter()
        .filter(|a| {
            if let Some(region) = criteria.region {
                if a.region != region {
                    return false;
                }
            }
            if let Some(status) = criteria.status {
                if a.status != status {
                    return false;
                }
            }
            if !needle.is_empty() && !row_text(a).to_lowercase().contains(&needle) {
                return false;
            }
            true
        })
        .collect()
}
