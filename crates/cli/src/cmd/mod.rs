pub mod configure;
pub mod dashboard;
pub mod plants;
pub mod predict;

pub use configure::configure;
pub use dashboard::dashboard;
pub use plants::plants;
pub use predict::predict;
