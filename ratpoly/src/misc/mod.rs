mod error;
mod tex;

pub use error::*;

#[cfg(feature = "tex")]
pub use tex::*;
