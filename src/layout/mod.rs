mod corridor;
mod floor;

pub use corridor::{Corridor, CorridorShape};
pub use floor::{Floor, LayoutParams};
