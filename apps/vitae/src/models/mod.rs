pub mod document;
pub mod settings;

pub use document::Document;
pub use settings::LayoutSettings;
