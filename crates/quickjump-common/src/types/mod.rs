mod color;
mod tab;

pub use color::*;
pub use tab::*;
