pub mod anchor;
pub mod mat23;
pub mod utils;
pub mod vec2;

pub use anchor::{Anchor, AxisDirs};
pub use mat23::Mat23;
pub use utils::{deg_to_rad, rad_to_deg};
pub use vec2::Vec2;
