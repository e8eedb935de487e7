use common::{Asset, AssetStatus, RiskLevel};

/// A marker placed on the canvas for one geolocated asset.
#[derive(Debug, Clone)]
pub struct Marker {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub status: AssetStatus,
    pub risk: RiskLevel,
}

/// Wraps the canvas widget behind the narrow interface the controller needs:
/// markers in, one view-details callback out. Activating a marker only opens
/// its popup; navigation happens solely through the confirm action, via the
/// callback registered at construction time.
pub struct MapAdapter {
    markers: Vec<Marker>,
    selected: usize,
    popup_open: bool,
    on_view_details: Box<dyn Fn(String) + Send>,
}

impl MapAdapter {
    pub fn new(on_view_details: Box<dyn Fn(String) + Send>) -> Self {
        Self {
            markers: Vec::new(),
            selected: 0,
            popup_open: false,
            on_view_details,
        }
    }

    /// Rebuilds the marker set from scratch. Previously placed markers are
    /// cleared first, so re-rendering on every Dashboard revisit yields the
    /// same single set instead of accumulating duplicates.
    pub fn render(&mut self, assets: &[Asset]) {
        self.markers.clear();
        self.popup_open = false;
        for asset in assets {
            if let Some(coords) = asset.coordinates {
                self.markers.push(Marker {
                    id: asset.id.clone(),
                    name: asset.name.clone(),
                    lat: coords.lat,
                    lng: coords.lng,
                    status: asset.status,
                    risk: asset.risk,
                });
            }
        }
        if self.selected >= self.markers.len() {
            self.selected = 0;
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn selected(&self) -> Option<&Marker> {
        self.markers.get(self.selected)
    }

    pub fn popup_open(&self) -> bool {
        self.popup_open
    }

    pub fn next_marker(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.markers.len();
        self.popup_open = false;
    }

    pub fn prev_marker(&mut self) {
        if self.markers.is_empty() {
            return;
        }
        self.selected = (self.selected + self.markers.len() - 1) % self.markers.len();
        self.popup_open = false;
    }

    /// Marker activation: reveals the info popup and nothing more.
    pub fn open_popup(&mut self) {
        if !self.markers.is_empty() {
            self.popup_open = true;
        }
    }

    pub fn close_popup(&mut self) {
        self.popup_open = false;
    }

    /// The explicit confirmation step inside the popup; the only path from
    /// the map into Detail.
    pub fn confirm_view_details(&mut self) {
        if !self.popup_open {
            return;
        }
        if let Some(marker) = self.markers.get(self.selected) {
            (self.on_view_details)(marker.id.clone());
        }
        self.popup_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::fixture;
    use std::sync::{Arc, Mutex};

    fn adapter_with_sink() -> (MapAdapter, Arc<Mutex<Vec<String>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let adapter = MapAdapter::new(Box::new(move |id| {
            sink.lock().unwrap().push(id);
        }));
        (adapter, seen)
    }

    #[test]
    fn rerender_is_idempotent() {
        let (mut map, _) = adapter_with_sink();
        let assets = fixture::assets();
        map.render(&assets);
        let first = map.markers().len();
        assert!(first > 0);
        map.render(&assets);
        assert_eq!(map.markers().len(), first);
    }

    #[test]
    fn only_geolocated_assets_get_markers() {
        let (mut map, _) = adapter_with_sink();
        let mut assets = fixture::assets();
        assets[0].coordinates = None;
        map.render(&assets);
        assert_eq!(map.markers().len(), assets.len() - 1);
        assert!(map.markers().iter().all(|m| m.id != assets[0].id));
    }

    #[test]
    fn marker_activation_opens_popup_without_navigating() {
        let (mut map, seen) = adapter_with_sink();
        map.render(&fixture::assets());
        map.open_popup();
        assert!(map.popup_open());
        assert!(seen.lock().unwrap().is_empty(), "popup alone must not navigate");
    }

    #[test]
    fn confirm_fires_the_registered_callback_once() {
        let (mut map, seen) = adapter_with_sink();
        map.render(&fixture::assets());
        map.next_marker();
        let expected = map.selected().unwrap().id.clone();

        map.confirm_view_details();
        assert!(seen.lock().unwrap().is_empty(), "confirm requires an open popup");

        map.open_popup();
        map.confirm_view_details();
        assert_eq!(*seen.lock().unwrap(), vec![expected]);
        assert!(!map.popup_open());
    }

    #[test]
    fn selection_survives_rerender_when_in_range() {
        let (mut map, _) = adapter_with_sink();
        let assets = fixture::assets();
        map.render(&assets);
        map.next_marker();
        map.next_marker();
        let id = map.selected().unwrap().id.clone();
        map.render(&assets);
        assert_eq!(map.selected().unwrap().id, id);

        // shrinking the marker set resets an out-of-range selection
        map.render(&assets[..1]);
        assert_eq!(map.selected().unwrap().id, assets[0].id);
    }
}
