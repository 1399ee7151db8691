// Document layout engine: cursor tracking, pagination, block renderers.
// Pure CPU-bound code — callers on the async side run renders inside
// tokio::task::spawn_blocking.

pub mod blocks;
pub mod canvas;
pub mod cursor;
pub mod error;
pub mod fonts;
pub mod geometry;
pub mod script;

// Re-export the public API consumed by other modules (render backend, routes).
pub use blocks::{BulletItem, ContactField, ContentBlock};
pub use canvas::{Canvas, Color, TextStyle};
pub use cursor::Cursor;
pub use error::LayoutError;
pub use geometry::{Margins, PageGeometry};
pub use script::{render_script, DocumentScript};
