use crate::math::Vec2;
use crate::render::Color;

/// The drawing surface veckit renders onto.
///
/// The method set mirrors an HTML canvas 2D context: path construction,
/// stroke/fill, style state with `save`/`restore`, and an affine transform
/// setter taking `(a, b, c, d, tx, ty)` as produced by
/// [`Mat23::to_canvas_tuple`](crate::math::Mat23::to_canvas_tuple).
pub trait DrawContext {
    /// Push stroke color, fill color, line width and transform.
    fn save(&mut self);

    /// Pop the state pushed by the matching [`save`](DrawContext::save).
    fn restore(&mut self);

    fn set_stroke_color(&mut self, color: Color);

    fn set_fill_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);

    fn move_to(&mut self, p: Vec2);

    fn line_to(&mut self, p: Vec2);

    /// Circular arc from `start` to `end` radians, counter-clockwise in
    /// the context's own coordinates.
    fn arc(&mut self, center: Vec2, radius: f64, start: f64, end: f64);

    fn close_path(&mut self);

    fn stroke(&mut self);

    fn fill(&mut self);

    fn set_transform(&mut self, m: (f64, f64, f64, f64, f64, f64));

    /// Surface width in pixels.
    fn width(&self) -> f64;

    /// Surface height in pixels.
    fn height(&self) -> f64;
}

impl<C: DrawContext + ?Sized> DrawContext for Box<C> {
    fn save(&mut self) {
        (**self).save()
    }

    fn restore(&mut self) {
        (**self).restore()
    }

    fn set_stroke_color(&mut self, color: Color) {
        (**self).set_stroke_color(color)
    }

    fn set_fill_color(&mut self, color: Color) {
        (**self).set_fill_color(color)
    }

    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width)
    }

    fn begin_path(&mut self) {
        (**self).begin_path()
    }

    fn move_to(&mut self, p: Vec2) {
        (**self).move_to(p)
    }

    fn line_to(&mut self, p: Vec2) {
        (**self).line_to(p)
    }

    fn arc(&mut self, center: Vec2, radius: f64, start: f64, end: f64) {
        (**self).arc(center, radius, start, end)
    }

    fn close_path(&mut self) {
        (**self).close_path()
    }

    fn stroke(&mut self) {
        (**self).stroke()
    }

    fn fill(&mut self) {
        (**self).fill()
    }

    fn set_transform(&mut self, m: (f64, f64, f64, f64, f64, f64)) {
        (**self).set_transform(m)
    }

    fn width(&self) -> f64 {
        (**self).width()
    }

    fn height(&self) -> f64 {
        (**self).height()
    }
}
