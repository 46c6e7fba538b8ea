use core::ops::Mul;

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::math::{Anchor, AxisDirs, Vec2};

/// 2×3 affine transform, column-major:
///
/// ```text
/// | a  c  tx |
/// | b  d  ty |
/// ```
///
/// No invertibility is enforced; degenerate matrices simply map onto a line
/// or a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat23 {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Mat23 {
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self { a, b, c, d, tx, ty }
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn rotation(rad: f64) -> Self {
        let (s, c) = rad.sin_cos();
        Self::new(c, s, -s, c, 0.0, 0.0)
    }

    #[inline]
    pub const fn scale(v: Vec2) -> Self {
        Self::new(v.x, 0.0, 0.0, v.y, 0.0, 0.0)
    }

    #[inline]
    pub const fn shear_x(s: f64) -> Self {
        Self::new(1.0, 0.0, s, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn shear_y(s: f64) -> Self {
        Self::new(1.0, s, 0.0, 1.0, 0.0, 0.0)
    }

    /// Mirror across the x axis (negates y).
    #[inline]
    pub const fn reflect_x() -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, 0.0, 0.0)
    }

    /// Mirror across the y axis (negates x).
    #[inline]
    pub const fn reflect_y() -> Self {
        Self::new(-1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn translation(v: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, v.x, v.y)
    }

    /// Flips y so it points up, with the origin at the bottom-left corner.
    #[inline]
    pub const fn canvas_y_up(height: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, -1.0, 0.0, height)
    }

    /// Flips y so it points up, with the origin at the center of the surface.
    #[inline]
    pub fn canvas_y_up_centered(width: f64, height: f64) -> Self {
        Self::coordinate_system(Anchor::Center, AxisDirs::MATH, width, height)
    }

    /// Maps a coordinate system whose origin sits at `anchor` and whose axes
    /// follow `axes` onto a top-left-origin, y-down pixel surface.
    pub fn coordinate_system(anchor: Anchor, axes: AxisDirs, width: f64, height: f64) -> Self {
        let t = anchor.position(width, height);
        Self::new(axes.x_sign(), 0.0, 0.0, axes.y_sign(), t.x, t.y)
    }

    /// Linear columns `(a, b)` and `(c, d)`.
    #[inline]
    pub const fn columns(self) -> (Vec2, Vec2) {
        (Vec2::new(self.a, self.b), Vec2::new(self.c, self.d))
    }

    #[inline]
    pub const fn translation_part(self) -> Vec2 {
        Vec2::new(self.tx, self.ty)
    }

    #[inline]
    pub fn determinant(self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Full affine application `L·v + t`, for points.
    #[inline]
    pub fn transform(self, v: Vec2) -> Vec2 {
        self.transform_linear(v) + self.translation_part()
    }

    /// Linear-only application `L·v`, for directions.
    #[inline]
    pub fn transform_linear(self, v: Vec2) -> Vec2 {
        Vec2::new(self.a * v.x + self.c * v.y, self.b * v.x + self.d * v.y)
    }

    /// `(a, b, c, d, tx, ty)`, the argument order of a canvas `setTransform`.
    #[inline]
    pub const fn to_canvas_tuple(self) -> (f64, f64, f64, f64, f64, f64) {
        (self.a, self.b, self.c, self.d, self.tx, self.ty)
    }
}

impl Default for Mat23 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<(f64, f64, f64, f64, f64, f64)> for Mat23 {
    #[inline]
    fn from((a, b, c, d, tx, ty): (f64, f64, f64, f64, f64, f64)) -> Self {
        Self::new(a, b, c, d, tx, ty)
    }
}

/// `(lhs * rhs).transform(p) == lhs.transform(rhs.transform(p))`
impl Mul for Mat23 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let (col1, col2) = rhs.columns();
        let col1 = self.transform_linear(col1);
        let col2 = self.transform_linear(col2);
        let t = self.transform(rhs.translation_part());
        Self::new(col1.x, col1.y, col2.x, col2.y, t.x, t.y)
    }
}

impl Mul<Vec2> for Mat23 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: Vec2) -> Vec2 {
        self.transform(rhs)
    }
}

impl AbsDiffEq for Mat23 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        let lhs: [f64; 6] = (*self).into();
        let rhs: [f64; 6] = (*other).into();
        lhs.iter().zip(rhs.iter()).all(|(l, r)| l.abs_diff_eq(r, epsilon))
    }
}

impl RelativeEq for Mat23 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        let lhs: [f64; 6] = (*self).into();
        let rhs: [f64; 6] = (*other).into();
        lhs.iter()
            .zip(rhs.iter())
            .all(|(l, r)| l.relative_eq(r, epsilon, max_relative))
    }
}

impl UlpsEq for Mat23 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        let lhs: [f64; 6] = (*self).into();
        let rhs: [f64; 6] = (*other).into();
        lhs.iter().zip(rhs.iter()).all(|(l, r)| l.ulps_eq(r, epsilon, max_ulps))
    }
}

impl From<Mat23> for [f64; 6] {
    #[inline]
    fn from(m: Mat23) -> Self {
        [m.a, m.b, m.c, m.d, m.tx, m.ty]
    }
}
