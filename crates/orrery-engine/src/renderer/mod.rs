pub mod config;
pub mod record;

pub use config::{Margins, SceneConfig};
pub use record::{PrimitiveRecord, Vertex};
