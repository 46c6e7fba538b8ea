//! 2D vector algebra, affine transforms and anchored vectors that can draw
//! themselves onto a canvas-like surface.

pub mod error;
pub mod geom;
pub mod math;
pub mod render;

pub use error::{Result, VeckitError};
pub use geom::AnchoredVec2;
pub use math::{Anchor, AxisDirs, Mat23, Vec2};
pub use render::{Color, DrawContext, RecordingContext, RenderConfig, Stroke, Veckit};
