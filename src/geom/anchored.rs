use core::f64::consts::TAU;

use tracing::trace;

use crate::error::Result;
use crate::math::{Mat23, Vec2};
use crate::render::{Color, DrawContext, Stroke, Veckit};

/// A direction anchored at a point: the segment from `origin` to
/// `origin + dir`.
///
/// Transforms return new values. Draw calls go through a [`Veckit`] and
/// return `&self` so several can be chained with `?`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnchoredVec2 {
    pub origin: Vec2,
    pub dir: Vec2,
}

impl AnchoredVec2 {
    #[inline]
    pub const fn new(origin: Vec2, dir: Vec2) -> Self {
        Self { origin, dir }
    }

    #[inline]
    pub fn from_points(start: Vec2, end: Vec2) -> Self {
        Self::new(start, end - start)
    }

    #[inline]
    pub fn from_angle(origin: Vec2, angle: f64, length: f64) -> Self {
        Self::new(origin, Vec2::from_angle(angle) * length)
    }

    #[inline]
    pub fn head(&self) -> Vec2 {
        self.origin + self.dir
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dir.length()
    }

    #[inline]
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.origin + offset, self.dir)
    }

    /// Rotates the direction about the tail; the origin stays put.
    #[inline]
    pub fn rotate_in_place(&self, rad: f64) -> Self {
        Self::new(self.origin, self.dir.rotate(rad))
    }

    /// Rotates the whole segment rigidly about `pivot`.
    pub fn rotate_around(&self, rad: f64, pivot: Vec2) -> Self {
        let r = Mat23::rotation(rad);
        let origin = r.transform_linear(self.origin - pivot) + pivot;
        // Directions only see the linear part.
        let dir = r.transform_linear(self.dir);
        Self::new(origin, dir)
    }

    #[inline]
    pub fn rotate_about_origin(&self, rad: f64) -> Self {
        self.rotate_around(rad, Vec2::ZERO)
    }

    /// Scales the direction about the tail; the origin stays put.
    #[inline]
    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.origin, self.dir * s)
    }

    #[inline]
    pub fn transform(&self, m: Mat23) -> Self {
        Self::new(m.transform(self.origin), m.transform_linear(self.dir))
    }

    /// Arrowhead triangle `[tip, left, right]` for a head of `size`.
    pub fn arrowhead(&self, size: f64) -> [Vec2; 3] {
        let tip = self.head();
        let u = self.dir.normalize();
        let p = u.perp() * (size * 0.5);
        let base = tip - u * size;
        [tip, base + p, base - p]
    }

    pub fn draw_line<C: DrawContext>(&self, kit: &mut Veckit<C>, stroke: Stroke) -> Result<&Self> {
        trace!(origin = ?self.origin, head = ?self.head(), "draw_line");
        kit.scoped(stroke, |ctx| self.stroke_segment(ctx))?;
        Ok(self)
    }

    /// Draws the segment plus a filled arrowhead at the head. `head_size`
    /// defaults to the kit's [`RenderConfig::head_size`](crate::render::RenderConfig).
    pub fn draw_arrow<C: DrawContext>(
        &self,
        kit: &mut Veckit<C>,
        stroke: Stroke,
        head_size: Option<f64>,
    ) -> Result<&Self> {
        let size = head_size.unwrap_or(kit.config.head_size);
        trace!(origin = ?self.origin, head = ?self.head(), size, "draw_arrow");

        let [tip, left, right] = self.arrowhead(size);
        kit.scoped(stroke, |ctx| {
            self.stroke_segment(ctx);

            ctx.begin_path();
            ctx.move_to(tip);
            ctx.line_to(left);
            ctx.line_to(right);
            ctx.close_path();
            if let Some(color) = stroke.color {
                ctx.set_fill_color(color);
            }
            ctx.fill();
        })?;
        Ok(self)
    }

    /// Filled disc at the origin.
    pub fn draw_point<C: DrawContext>(
        &self,
        kit: &mut Veckit<C>,
        radius: Option<f64>,
        color: Option<Color>,
    ) -> Result<&Self> {
        let radius = radius.unwrap_or(kit.config.point_radius);
        trace!(origin = ?self.origin, radius, "draw_point");

        kit.scoped(Stroke::INHERIT, |ctx| {
            if let Some(color) = color {
                ctx.set_fill_color(color);
            }
            ctx.begin_path();
            ctx.arc(self.origin, radius, 0.0, TAU);
            ctx.fill();
        })?;
        Ok(self)
    }

    /// Stroked circle around the origin.
    pub fn draw_circle<C: DrawContext>(
        &self,
        kit: &mut Veckit<C>,
        radius: f64,
        stroke: Stroke,
    ) -> Result<&Self> {
        trace!(origin = ?self.origin, radius, "draw_circle");

        kit.scoped(stroke, |ctx| {
            ctx.begin_path();
            ctx.arc(self.origin, radius, 0.0, TAU);
            ctx.stroke();
        })?;
        Ok(self)
    }

    /// Diagonal cross centered on the origin.
    pub fn draw_x<C: DrawContext>(
        &self,
        kit: &mut Veckit<C>,
        length: Option<f64>,
        stroke: Stroke,
    ) -> Result<&Self> {
        let half = length.unwrap_or(kit.config.mark_length) * 0.5;
        trace!(origin = ?self.origin, half, "draw_x");

        let o = self.origin;
        kit.scoped(stroke, |ctx| {
            ctx.begin_path();
            ctx.move_to(o + Vec2::new(-half, -half));
            ctx.line_to(o + Vec2::new(half, half));
            ctx.move_to(o + Vec2::new(half, -half));
            ctx.line_to(o + Vec2::new(-half, half));
            ctx.stroke();
        })?;
        Ok(self)
    }

    /// Axis-aligned cross centered on the origin.
    pub fn draw_plus<C: DrawContext>(
        &self,
        kit: &mut Veckit<C>,
        length: Option<f64>,
        stroke: Stroke,
    ) -> Result<&Self> {
        let half = length.unwrap_or(kit.config.mark_length) * 0.5;
        trace!(origin = ?self.origin, half, "draw_plus");

        let o = self.origin;
        kit.scoped(stroke, |ctx| {
            ctx.begin_path();
            ctx.move_to(o + Vec2::new(0.0, -half));
            ctx.line_to(o + Vec2::new(0.0, half));
            ctx.move_to(o + Vec2::new(-half, 0.0));
            ctx.line_to(o + Vec2::new(half, 0.0));
            ctx.stroke();
        })?;
        Ok(self)
    }

    fn stroke_segment<C: DrawContext>(&self, ctx: &mut C) {
        ctx.begin_path();
        ctx.move_to(self.origin);
        ctx.line_to(self.head());
        ctx.stroke();
    }
}
