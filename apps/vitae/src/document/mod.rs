// Document editing: copy-on-write patches over the résumé model, the starter
// document, and the HTTP handlers that expose them.

pub mod handlers;
pub mod patch;
pub mod sample;

pub use patch::{DocumentPatch, PatchError};
