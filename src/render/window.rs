use core::f64::consts::TAU;

use macroquad::math::vec2;
use macroquad::shapes::{draw_line, draw_triangle};
use macroquad::window::{screen_height, screen_width};

use crate::math::{Mat23, Vec2};
use crate::render::{Color, DrawContext, StyleStack, StyleState};

const ARC_SEGMENTS_PER_TURN: f64 = 64.0;
const MAX_ARC_SEGMENTS: usize = 512;

#[derive(Clone, Debug, Default)]
struct SubPath {
    points: Vec<Vec2>,
    closed: bool,
}

/// [`DrawContext`] that draws into the current macroquad window.
///
/// Paths are buffered in user space and pushed through the current transform
/// when stroked or filled. Fills use a triangle fan, which is exact for the
/// convex shapes veckit emits (discs and arrowheads).
#[derive(Clone, Debug, Default)]
pub struct MacroquadContext {
    styles: StyleStack,
    path: Vec<SubPath>,
}

impl MacroquadContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: StyleState) -> Self {
        Self {
            styles: StyleStack::new(style),
            path: Vec::new(),
        }
    }

    pub fn style(&self) -> &StyleState {
        self.styles.current()
    }

    fn transform(&self) -> Mat23 {
        self.styles.current().transform
    }

    fn to_screen(&self, p: Vec2) -> macroquad::math::Vec2 {
        let p = self.transform().transform(p);
        vec2(p.x as f32, p.y as f32)
    }

    fn last_point(&self) -> Option<Vec2> {
        self.path.last().and_then(|s| s.points.last().copied())
    }
}

/// Points along a circular arc, both endpoints included.
pub fn tessellate_arc(center: Vec2, radius: f64, start: f64, end: f64) -> Vec<Vec2> {
    let sweep = end - start;
    if !(radius.is_finite() && sweep.is_finite()) {
        return Vec::new();
    }

    let segments = ((sweep.abs() / TAU) * ARC_SEGMENTS_PER_TURN).ceil() as usize;
    let segments = segments.clamp(1, MAX_ARC_SEGMENTS);

    (0..=segments)
        .map(|i| {
            let angle = start + sweep * (i as f64 / segments as f64);
            center + Vec2::from_angle(angle) * radius
        })
        .collect()
}

/// Segments of a polyline, plus the edge back to the start when `closed`.
pub fn polyline_segments(points: &[Vec2], closed: bool) -> Vec<(Vec2, Vec2)> {
    let mut segments: Vec<_> = points.windows(2).map(|w| (w[0], w[1])).collect();
    if closed && points.len() > 1 {
        if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
            segments.push((last, first));
        }
    }
    segments
}

/// Triangle fan pivoting on the first point. Exact for convex polygons.
pub fn fan_triangles(points: &[Vec2]) -> Vec<[Vec2; 3]> {
    let Some((&first, rest)) = points.split_first() else {
        return Vec::new();
    };
    rest.windows(2).map(|w| [first, w[0], w[1]]).collect()
}

impl DrawContext for MacroquadContext {
    fn save(&mut self) {
        self.styles.save();
    }

    fn restore(&mut self) {
        self.styles.restore();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.styles.current_mut().stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.styles.current_mut().fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.styles.current_mut().line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, p: Vec2) {
        self.path.push(SubPath {
            points: vec![p],
            closed: false,
        });
    }

    fn line_to(&mut self, p: Vec2) {
        match self.path.last_mut() {
            Some(sub) if !sub.points.is_empty() => sub.points.push(p),
            _ => self.move_to(p),
        }
    }

    fn arc(&mut self, center: Vec2, radius: f64, start: f64, end: f64) {
        let points = tessellate_arc(center, radius, start, end);
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return;
        };

        // A canvas arc connects to the current point with a straight line.
        if self.last_point().is_some() {
            self.line_to(first);
        } else {
            self.move_to(first);
        }
        for p in points {
            self.line_to(p);
        }
    }

    fn close_path(&mut self) {
        let Some(sub) = self.path.last_mut() else {
            return;
        };
        sub.closed = true;
        if let Some(&first) = sub.points.first() {
            self.move_to(first);
        }
    }

    fn stroke(&mut self) {
        let style = *self.styles.current();
        let thickness = (style.line_width * style.transform.determinant().abs().sqrt()) as f32;

        for sub in &self.path {
            for (a, b) in polyline_segments(&sub.points, sub.closed) {
                let a = self.to_screen(a);
                let b = self.to_screen(b);
                draw_line(a.x, a.y, b.x, b.y, thickness, style.stroke_color);
            }
        }
    }

    fn fill(&mut self) {
        let color = self.styles.current().fill_color;

        for sub in &self.path {
            for [a, b, c] in fan_triangles(&sub.points) {
                draw_triangle(self.to_screen(a), self.to_screen(b), self.to_screen(c), color);
            }
        }
    }

    fn set_transform(&mut self, m: (f64, f64, f64, f64, f64, f64)) {
        self.styles.current_mut().transform = Mat23::from(m);
    }

    fn width(&self) -> f64 {
        screen_width() as f64
    }

    fn height(&self) -> f64 {
        screen_height() as f64
    }
}
