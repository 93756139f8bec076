mod units;
pub use units::*;

mod rect;
pub use rect::*;

mod colour;
pub use colour::*;

pub mod pagesize;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod info;
pub use info::*;

pub(crate) mod refs;

mod content;
mod document;
mod page;

/// Line wrapping, inline links and page margins
pub mod layout;

mod canvas;
pub use canvas::*;

mod engine;
pub use engine::*;

mod block;
pub use block::*;

mod resume;
pub use resume::*;

mod config;
pub use config::*;

mod sections;
pub use sections::*;

mod fancy;
pub use fancy::*;

#[cfg(test)]
mod testing;
