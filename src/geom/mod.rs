pub mod anchored;

pub use anchored::AnchoredVec2;
