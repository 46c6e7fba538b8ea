use crate::math::{Mat23, Vec2};
use crate::render::{Color, DrawContext, StyleStack, StyleState};

/// One call made against a [`RecordingContext`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Save,
    Restore,
    SetStrokeColor(Color),
    SetFillColor(Color),
    SetLineWidth(f64),
    BeginPath,
    MoveTo(Vec2),
    LineTo(Vec2),
    Arc {
        center: Vec2,
        radius: f64,
        start: f64,
        end: f64,
    },
    ClosePath,
    /// Stroke with the style that was active at the time.
    Stroke(StyleState),
    /// Fill with the style that was active at the time.
    Fill(StyleState),
    SetTransform(Mat23),
}

/// Headless context that records every call instead of drawing.
#[derive(Clone, Debug)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    styles: StyleStack,
    width: f64,
    height: f64,
}

impl RecordingContext {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_style(width, height, StyleState::default())
    }

    pub fn with_style(width: f64, height: f64, style: StyleState) -> Self {
        Self {
            commands: Vec::new(),
            styles: StyleStack::new(style),
            width,
            height,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Style currently in effect.
    pub fn style(&self) -> &StyleState {
        self.styles.current()
    }

    /// Number of unmatched `save` calls.
    pub fn save_depth(&self) -> usize {
        self.styles.depth()
    }

    pub fn strokes(&self) -> impl Iterator<Item = &StyleState> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke(s) => Some(s),
            _ => None,
        })
    }

    pub fn fills(&self) -> impl Iterator<Item = &StyleState> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(s) => Some(s),
            _ => None,
        })
    }

    /// Every point passed to `move_to`/`line_to`, in call order.
    pub fn path_points(&self) -> Vec<Vec2> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::MoveTo(p) | DrawCommand::LineTo(p) => Some(*p),
                _ => None,
            })
            .collect()
    }
}

impl DrawContext for RecordingContext {
    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
        self.styles.save();
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
        self.styles.restore();
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
        self.styles.current_mut().stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetFillColor(color));
        self.styles.current_mut().fill_color = color;
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
        self.styles.current_mut().line_width = width;
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, p: Vec2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2) {
        self.commands.push(DrawCommand::LineTo(p));
    }

    fn arc(&mut self, center: Vec2, radius: f64, start: f64, end: f64) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke(*self.styles.current()));
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill(*self.styles.current()));
    }

    fn set_transform(&mut self, m: (f64, f64, f64, f64, f64, f64)) {
        let m = Mat23::from(m);
        self.commands.push(DrawCommand::SetTransform(m));
        self.styles.current_mut().transform = m;
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{BLUE, RED};

    #[test]
    fn records_calls_in_order() {
        let mut ctx = RecordingContext::new(100.0, 50.0);
        ctx.begin_path();
        ctx.move_to(Vec2::new(1.0, 2.0));
        ctx.line_to(Vec2::new(3.0, 4.0));
        ctx.stroke();

        assert_eq!(
            ctx.commands(),
            &[
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Vec2::new(1.0, 2.0)),
                DrawCommand::LineTo(Vec2::new(3.0, 4.0)),
                DrawCommand::Stroke(StyleState::default()),
            ]
        );
        assert_eq!(ctx.path_points(), vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
    }

    #[test]
    fn stroke_and_fill_capture_active_style() {
        let mut ctx = RecordingContext::new(100.0, 50.0);
        ctx.save();
        ctx.set_stroke_color(RED);
        ctx.set_fill_color(BLUE);
        ctx.set_line_width(3.0);
        ctx.stroke();
        ctx.fill();
        ctx.restore();

        let stroke = ctx.strokes().next().copied();
        assert_eq!(stroke.map(|s| s.stroke_color), Some(RED));
        assert_eq!(stroke.map(|s| s.line_width), Some(3.0));
        assert_eq!(ctx.fills().next().map(|s| s.fill_color), Some(BLUE));

        assert_eq!(ctx.style(), &StyleState::default());
        assert_eq!(ctx.save_depth(), 0);
    }

    #[test]
    fn set_transform_is_saved_and_restored() {
        let mut ctx = RecordingContext::new(100.0, 50.0);
        ctx.save();
        ctx.set_transform(Mat23::canvas_y_up(50.0).to_canvas_tuple());
        assert_eq!(ctx.style().transform, Mat23::canvas_y_up(50.0));
        ctx.restore();
        assert_eq!(ctx.style().transform, Mat23::IDENTITY);
    }

    #[test]
    fn take_commands_drains() {
        let mut ctx = RecordingContext::new(10.0, 10.0);
        ctx.begin_path();
        assert_eq!(ctx.take_commands(), vec![DrawCommand::BeginPath]);
        assert!(ctx.commands().is_empty());
        assert_eq!((ctx.width(), ctx.height()), (10.0, 10.0));
    }
}
