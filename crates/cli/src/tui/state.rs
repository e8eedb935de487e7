use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::widgets::TableState;
use tokio::sync::mpsc;

use common::{Asset, AssetStatus, Prediction, Summary};

use crate::api::{ApiClient, ApiError, LoadedData};

use super::controller::ViewController;
use super::draw::ThemeKind;
use super::filter::FilterCriteria;
use super::map::MapAdapter;
use super::repository::AssetRepository;

/// How long a transient overlay message stays on screen.
pub const OVERLAY_TTL_MS: u128 = 2_500;

#[derive(Debug)]
pub enum AppEvent {
    Tick,
    Key(KeyEvent),
    DataLoaded(Result<LoadedData, ApiError>),
    PredictionReady(Result<Prediction, ApiError>),
    /// Emitted by the map adapter's view-details confirmation.
    ViewDetails(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Normal,
    Urgent,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Normal => "Normal",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Normal,
            Priority::Normal => Priority::Urgent,
            Priority::Urgent => Priority::Low,
        }
    }
}

/// Transient work-order form. Lives only while the form screen is open;
/// submitting produces a confirmation message, never a repository write.
#[derive(Debug, Clone)]
pub struct MaintenanceForm {
    /// 0 technician, 1 date, 2 priority, 3 notes.
    pub field: usize,
    pub technician: String,
    pub date: String,
    pub priority: Priority,
    pub notes: String,
}

impl MaintenanceForm {
    pub const FIELDS: usize = 4;

    pub fn prefill(asset: &Asset) -> Self {
        Self {
            field: 0,
            technician: String::new(),
            date: chrono::Local::now().format("%Y-%m-%d").to_string(),
            priority: match asset.status {
                AssetStatus::Critical | AssetStatus::ActiveFault => Priority::Urgent,
                AssetStatus::Warning => Priority::Normal,
                AssetStatus::Healthy => Priority::Low,
            },
            notes: asset
                .recommendation
                .as_ref()
                .map(|r| r.action.clone())
                .unwrap_or_default(),
        }
    }

    /// Required-field check; failures block submission and never reach the
    /// network or the repository.
    pub fn validate(&self) -> Result<(), String> {
        if self.technician.trim().is_empty() {
            return Err("technician is required".into());
        }
        if self.date.trim().is_empty() {
            return Err("date is required".into());
        }
        Ok(())
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % Self::FIELDS;
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + Self::FIELDS - 1) % Self::FIELDS;
    }

    pub fn active_buffer(&mut self) -> Option<&mut String> {
        match self.field {
            0 => Some(&mut self.technician),
            1 => Some(&mut self.date),
            3 => Some(&mut self.notes),
            _ => None,
        }
    }
}

pub struct AppState {
    pub theme: ThemeKind,
    pub controller: ViewController,
    pub repo: AssetRepository,
    pub criteria: FilterCriteria,
    /// Fleet-wide summary from the remote dashboard; absent offline.
    pub summary: Option<Summary>,
    pub map: MapAdapter,
    pub form: Option<MaintenanceForm>,
    pub form_error: Option<String>,
    pub prediction: Option<Prediction>,
    pub predict_error: Option<String>,
    pub predict_pending: bool,
    /// True while the initial or a retried load is in flight; data-dependent
    /// controls are disabled until it settles.
    pub loading: bool,
    pub last_error: Option<String>,
    pub overlay_msg: Option<(Instant, String)>,
    /// '/' puts the Transformers screen into search entry; keystrokes edit
    /// the criteria directly so results update as the user types.
    pub search_input: bool,
    pub assets_table: TableState,
    pub faults_table: TableState,
    pub offline: bool,
    pub api: Option<ApiClient>,
    pub tx: mpsc::UnboundedSender<AppEvent>,
}

impl AppState {
    pub fn new(tx: mpsc::UnboundedSender<AppEvent>, offline: bool, api: Option<ApiClient>) -> Self {
        let map = MapAdapter::new(Box::new({
            let tx = tx.clone();
            move |id| {
                let _ = tx.send(AppEvent::ViewDetails(id));
            }
        }));
        Self {
            theme: ThemeKind::Dark,
            controller: ViewController::new(),
            repo: AssetRepository::new(),
            criteria: FilterCriteria::default(),
            summary: None,
            map,
            form: None,
            form_error: None,
            prediction: None,
            predict_error: None,
            predict_pending: false,
            loading: false,
            last_error: None,
            overlay_msg: None,
            search_input: false,
            assets_table: TableState::default(),
            faults_table: TableState::default(),
            offline,
            api,
            tx,
        }
    }

    pub fn notify(&mut self, msg: impl Into<String>) {
        self.overlay_msg = Some((Instant::now(), msg.into()));
    }

    pub fn focused_asset(&self) -> Option<&Asset> {
        self.controller.focused().and_then(|id| self.repo.get(id))
    }

    /// Assets currently in fault, in repository order.
    pub fn active_faults(&self) -> Vec<&Asset> {
        let criteria = FilterCriteria {
            status: Some(AssetStatus::ActiveFault),
            ..FilterCriteria::default()
        };
        super::filter::apply(self.repo.all(), &criteria)
    }
}
