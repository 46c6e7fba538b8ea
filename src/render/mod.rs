pub mod context;
pub mod kit;
pub mod recording;
pub mod style;
pub mod window;

pub use context::DrawContext;
pub use kit::{RenderConfig, Veckit, deg_to_rad, rad_to_deg};
pub use recording::{DrawCommand, RecordingContext};
pub use style::{Color, Stroke, StyleStack, StyleState, parse_hex_color};
pub use window::MacroquadContext;
