// Layout fitting: density profiles, the fitting state machine, a reference
// height estimator and page-fill reporting.

pub mod density;
pub mod estimator;
pub mod fitting;
pub mod font_metrics;
pub mod handlers;
pub mod page_fill;

pub use density::DensityProfile;
pub use estimator::HeightEstimator;
pub use fitting::{FitDecision, FitMode, FittingEngine, PageGeometry};
pub use page_fill::{analyze_page_fill, recommend_fill_action, FillAction, PageFillAnalysis};
