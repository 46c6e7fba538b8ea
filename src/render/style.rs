pub use macroquad::color::Color;
use macroquad::color::BLACK;

use crate::error::{Result, VeckitError};
use crate::math::Mat23;
use crate::render::DrawContext;

/// Optional stroke overrides for a single draw call.
///
/// Fields left as `None` keep whatever the context currently uses.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Stroke {
    pub color: Option<Color>,
    pub width: Option<f64>,
}

impl Stroke {
    pub const INHERIT: Self = Self {
        color: None,
        width: None,
    };

    #[inline]
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color: Some(color),
            width: Some(width),
        }
    }

    #[inline]
    pub const fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            width: None,
        }
    }

    #[inline]
    pub const fn width(width: f64) -> Self {
        Self {
            color: None,
            width: Some(width),
        }
    }

    #[inline]
    pub const fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[inline]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Width to apply, if any. Zero, negative and non-finite widths are
    /// ignored the same way a canvas ignores them.
    #[inline]
    pub fn effective_width(&self) -> Option<f64> {
        self.width.filter(|w| w.is_finite() && *w > 0.0)
    }

    pub(crate) fn apply<C: DrawContext>(&self, ctx: &mut C) {
        if let Some(color) = self.color {
            ctx.set_stroke_color(color);
        }
        if let Some(width) = self.effective_width() {
            ctx.set_line_width(width);
        }
    }
}

impl From<Color> for Stroke {
    fn from(color: Color) -> Self {
        Self::color(color)
    }
}

/// The part of a context's state covered by `save`/`restore`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub line_width: f64,
    pub transform: Mat23,
}

impl Default for StyleState {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            fill_color: BLACK,
            line_width: 1.0,
            transform: Mat23::IDENTITY,
        }
    }
}

/// Canvas-style save/restore stack. Restoring with nothing saved is a no-op.
#[derive(Clone, Debug, Default)]
pub struct StyleStack {
    current: StyleState,
    saved: Vec<StyleState>,
}

impl StyleStack {
    pub fn new(initial: StyleState) -> Self {
        Self {
            current: initial,
            saved: Vec::new(),
        }
    }

    #[inline]
    pub fn current(&self) -> &StyleState {
        &self.current
    }

    #[inline]
    pub fn current_mut(&mut self) -> &mut StyleState {
        &mut self.current
    }

    pub fn save(&mut self) {
        self.saved.push(self.current);
    }

    pub fn restore(&mut self) {
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.saved.len()
    }
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` (the leading `#` is optional).
pub fn parse_hex_color(literal: &str) -> Result<Color> {
    let invalid = || VeckitError::InvalidColor(literal.to_owned());

    let hex = literal.strip_prefix('#').unwrap_or(literal);
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());
    let (r, g, b, a) = match hex.len() {
        3 => {
            // #abc == #aabbcc
            let nib = |i: usize| channel(&hex[i..=i]).map(|v| v * 17);
            (nib(0)?, nib(1)?, nib(2)?, 255)
        }
        6 => (channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?, 255),
        8 => (
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        ),
        _ => return Err(invalid()),
    };

    Ok(Color::new(
        r as f32 / 255.0,
        g as f32 / 255.0,
        b as f32 / 255.0,
        a as f32 / 255.0,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{RED, WHITE};

    #[test]
    fn stack_restores_saved_state() {
        let mut stack = StyleStack::default();
        stack.save();
        stack.current_mut().stroke_color = RED;
        stack.current_mut().line_width = 4.0;
        assert_eq!(stack.depth(), 1);

        stack.restore();
        assert_eq!(stack.current(), &StyleState::default());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn restore_without_save_is_noop() {
        let mut stack = StyleStack::new(StyleState {
            fill_color: WHITE,
            ..Default::default()
        });
        stack.restore();
        assert_eq!(stack.current().fill_color, WHITE);
    }

    #[test]
    fn stroke_builders() {
        assert_eq!(Stroke::default(), Stroke::INHERIT);
        assert_eq!(Stroke::color(RED).with_width(2.0), Stroke::new(RED, 2.0));
        assert_eq!(Stroke::width(3.0).with_color(RED), Stroke::new(RED, 3.0));
        assert_eq!(Stroke::from(RED).width, None);
    }

    #[test]
    fn invalid_widths_are_ignored() {
        assert_eq!(Stroke::width(0.0).effective_width(), None);
        assert_eq!(Stroke::width(-1.0).effective_width(), None);
        assert_eq!(Stroke::width(f64::NAN).effective_width(), None);
        assert_eq!(Stroke::width(2.5).effective_width(), Some(2.5));
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#ff0000"), Ok(Color::new(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::new(0.0, 1.0, 0.0, 1.0)));
        assert_eq!(parse_hex_color("#fff"), Ok(Color::new(1.0, 1.0, 1.0, 1.0)));
        assert_eq!(parse_hex_color("#0000ff00"), Ok(Color::new(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn rejects_bad_hex_colors() {
        for bad in ["", "#", "#ff00", "#gg0000", "#ff00000", "red", "#ñ00", "##fff", " #fff", "#fff "] {
            assert_eq!(
                parse_hex_color(bad),
                Err(VeckitError::InvalidColor(bad.to_owned())),
                "accepted {bad:?}"
            );
        }
    }
}
