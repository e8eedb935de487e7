pub mod api;
pub mod fixture;
pub mod format;
pub mod model;

pub use api::{
    assets_from_remote, Conditions, DashboardPayload, FaultRecord, FaultWeather, MapMarker,
    Plant, PlantRef, Prediction, PredictionDetails, ResponseEstimate, StatusCount, Summary,
};
pub use format::{fault_icon, fault_recommendation, format_duration};
pub use model::{
    Asset, AssetStatus, Coordinates, FaultStatus, MaintenanceRecord, ModelError, Recommendation,
    Region, RiskLevel,
};
