pub mod metadata;
pub mod verify;

pub use metadata::*;
pub use verify::*;
