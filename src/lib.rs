pub mod compass;
pub mod error;
pub mod layout;
pub mod math;
pub mod shaper;
pub mod space;

pub use error::{ArealisError, Result};
