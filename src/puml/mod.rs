//! PlantUML rendering
//!
//! - `body` - one block per descriptor
//! - `writer` - document header/footer and file output
//! - `config` - rendering options

mod body;
mod config;
mod writer;

pub use body::{PumlBodyGenerator, visibility_sign};
pub use config::DiagramConfig;
pub use writer::{PumlError, render_document, write_puml};
