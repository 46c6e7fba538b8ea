use crate::math::Vec2;

/// Where the origin of a coordinate system sits on a drawing surface.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    #[default]
    Center,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 7] = [
        Anchor::TopLeft,
        Anchor::TopCenter,
        Anchor::TopRight,
        Anchor::Center,
        Anchor::BottomLeft,
        Anchor::BottomCenter,
        Anchor::BottomRight,
    ];

    /// Pixel position of the anchor on a `width × height` surface whose own
    /// origin is the top-left corner with y pointing down.
    pub fn position(self, width: f64, height: f64) -> Vec2 {
        let x = match self {
            Anchor::TopLeft | Anchor::BottomLeft => 0.0,
            Anchor::TopCenter | Anchor::Center | Anchor::BottomCenter => width * 0.5,
            Anchor::TopRight | Anchor::BottomRight => width,
        };
        let y = match self {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => 0.0,
            Anchor::Center => height * 0.5,
            Anchor::BottomLeft | Anchor::BottomCenter | Anchor::BottomRight => height,
        };
        Vec2::new(x, y)
    }
}

/// Axis orientation of a coordinate system relative to the screen.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AxisDirs {
    pub x_right: bool,
    pub y_down: bool,
}

impl AxisDirs {
    /// Screen convention: x right, y down.
    pub const SCREEN: Self = Self {
        x_right: true,
        y_down: true,
    };

    /// Math convention: x right, y up.
    pub const MATH: Self = Self {
        x_right: true,
        y_down: false,
    };

    pub const fn flip_x(self) -> Self {
        Self {
            x_right: !self.x_right,
            ..self
        }
    }

    pub const fn flip_y(self) -> Self {
        Self {
            y_down: !self.y_down,
            ..self
        }
    }

    #[inline]
    pub(crate) fn x_sign(self) -> f64 {
        if self.x_right { 1.0 } else { -1.0 }
    }

    #[inline]
    pub(crate) fn y_sign(self) -> f64 {
        if self.y_down { 1.0 } else { -1.0 }
    }
}

impl Default for AxisDirs {
    fn default() -> Self {
        Self::MATH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_positions() {
        assert_eq!(Anchor::TopLeft.position(200.0, 100.0), Vec2::new(0.0, 0.0));
        assert_eq!(Anchor::TopRight.position(200.0, 100.0), Vec2::new(200.0, 0.0));
        assert_eq!(Anchor::BottomLeft.position(200.0, 100.0), Vec2::new(0.0, 100.0));
        assert_eq!(Anchor::BottomRight.position(200.0, 100.0), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn edge_and_center_positions() {
        assert_eq!(Anchor::TopCenter.position(200.0, 100.0), Vec2::new(100.0, 0.0));
        assert_eq!(Anchor::BottomCenter.position(200.0, 100.0), Vec2::new(100.0, 100.0));
        assert_eq!(Anchor::Center.position(200.0, 100.0), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn axis_presets() {
        assert_eq!(AxisDirs::default(), AxisDirs::MATH);
        assert!(AxisDirs::SCREEN.y_down);
        assert!(AxisDirs::SCREEN.x_right);
        assert_eq!(AxisDirs::MATH.flip_x().x_sign(), -1.0);
        assert_eq!(AxisDirs::MATH.y_sign(), -1.0);
        assert_eq!(AxisDirs::SCREEN.y_sign(), 1.0);
    }
}
