pub mod color;
pub mod effect;
pub mod registry;
pub mod sweep;

pub use color::*;
pub use effect::*;
pub use registry::*;
pub use sweep::*;
