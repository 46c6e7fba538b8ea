use tracing::{debug, warn};

use crate::error::{Result, VeckitError};
use crate::math::{Anchor, AxisDirs, Mat23};
use crate::render::{DrawContext, Stroke};

/// Angle unit helpers, usable without a bound context.
pub use crate::math::utils::{deg_to_rad, rad_to_deg};

/// Defaults used when a draw call leaves a size unspecified.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    pub head_size: f64,
    pub point_radius: f64,
    pub mark_length: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            head_size: 10.0,
            point_radius: 4.0,
            mark_length: 8.0,
        }
    }
}

/// Holds the bound drawing context. Bind once, render many times.
pub struct Veckit<C> {
    ctx: Option<C>,
    pub config: RenderConfig,
}

impl<C> Default for Veckit<C> {
    fn default() -> Self {
        Self {
            ctx: None,
            config: RenderConfig::default(),
        }
    }
}

impl<C: DrawContext> Veckit<C> {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Shorthand for `new()` followed by `bind(ctx)`.
    pub fn bound(ctx: C) -> Self {
        let mut kit = Self::new();
        kit.bind(ctx);
        kit
    }

    /// Binds `ctx`, handing back the previously bound context if there was one.
    pub fn bind(&mut self, ctx: C) -> Option<C> {
        debug!(
            width = ctx.width(),
            height = ctx.height(),
            rebind = self.ctx.is_some(),
            "binding drawing context"
        );
        self.ctx.replace(ctx)
    }

    pub fn unbind(&mut self) -> Option<C> {
        debug!(was_bound = self.ctx.is_some(), "unbinding drawing context");
        self.ctx.take()
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.ctx.is_some()
    }

    #[inline]
    pub fn context(&self) -> Option<&C> {
        self.ctx.as_ref()
    }

    #[inline]
    pub fn context_mut(&mut self) -> Option<&mut C> {
        self.ctx.as_mut()
    }

    pub fn context_or_err(&mut self) -> Result<&mut C> {
        self.ctx.as_mut().ok_or_else(|| {
            warn!("drawing attempted without a bound context");
            VeckitError::Unbound
        })
    }

    /// Applies the coordinate system described by `anchor` and `axes` to the
    /// bound context and returns the matrix that was applied.
    pub fn set_coordinate_system(&mut self, anchor: Anchor, axes: AxisDirs) -> Result<Mat23> {
        let ctx = self.context_or_err()?;
        let m = Mat23::coordinate_system(anchor, axes, ctx.width(), ctx.height());
        debug!(?anchor, ?axes, ?m, "setting coordinate system");
        ctx.set_transform(m.to_canvas_tuple());
        Ok(m)
    }

    pub fn reset_coordinate_system(&mut self) -> Result<()> {
        let ctx = self.context_or_err()?;
        debug!("resetting coordinate system");
        ctx.set_transform(Mat23::IDENTITY.to_canvas_tuple());
        Ok(())
    }

    /// Runs `f` between `save` and `restore`, with `stroke` applied first.
    pub(crate) fn scoped<F>(&mut self, stroke: Stroke, f: F) -> Result<()>
    where
        F: FnOnce(&mut C),
    {
        let ctx = self.context_or_err()?;
        ctx.save();
        stroke.apply(ctx);
        f(ctx);
        ctx.restore();
        Ok(())
    }
}
