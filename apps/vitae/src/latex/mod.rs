// LaTeX export: escaping codec, per-entity template pieces, whole-document
// serialization and the export handler.

pub mod escape;
pub mod export;
pub mod handlers;
pub mod template;

pub use export::{render_latex, serialize};
