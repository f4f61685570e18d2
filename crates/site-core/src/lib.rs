pub mod constants;
pub mod cursor;
pub mod engine;
pub mod header;
pub mod parallax;
pub mod reveal;
pub mod trace;

pub use constants::*;
pub use cursor::*;
pub use engine::*;
pub use header::*;
pub use parallax::*;
pub use reveal::*;
