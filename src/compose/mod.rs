//! Compositing primitives
//!
//! The scene draws through the [`Painter`] trait, so it never touches SDL
//! directly. Drawables are addressed by [`DrawableId`], the key under which
//! the painter caches them.

#[cfg(test)]
pub mod recording;

use crate::error::LauncherResult;

/// Axis-aligned rectangle in screen or target pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Grow by `by` pixels on every side
    pub fn expand(&self, by: u32) -> Self {
        Self {
            x: self.x - by as i32,
            y: self.y - by as i32,
            w: self.w + 2 * by,
            h: self.h + 2 * by,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Black at `opacity` in [0, 1]
    pub fn shade(opacity: f32) -> Self {
        Self::new(0, 0, 0, (255.0 * opacity.clamp(0.0, 1.0)) as u8)
    }
}

/// Cache key of a drawable owned by the painter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawableId(String);

impl DrawableId {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn image(path: &str) -> Self {
        Self::new(path)
    }

    pub fn text(content: &str, color: Rgba) -> Self {
        Self(format!(
            "text:{}#{:02x}{:02x}{:02x}{:02x}",
            content, color.r, color.g, color.b, color.a
        ))
    }

    pub fn target(name: &str) -> Self {
        Self(format!("target:{}", name))
    }

    pub fn key(&self) -> &str {
        &self.0
    }
}

/// Off-screen target handle. `fresh` is set the first time it is allocated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: DrawableId,
    pub fresh: bool,
}

/// Drawing capability the scene renders through.
///
/// `image`, `text` and `target` are memoized by key: the first call builds
/// the drawable, later calls return the same id without rebuilding. Failures
/// are reported as `AssetUnavailable` and are not cached.
pub trait Painter {
    fn image(&mut self, path: &str) -> LauncherResult<DrawableId>;
    fn text(&mut self, content: &str, color: Rgba) -> LauncherResult<DrawableId>;
    fn target(&mut self, name: &str, width: u32, height: u32) -> LauncherResult<Target>;

    /// Natural size of a drawable
    fn size_of(&self, id: &DrawableId) -> LauncherResult<(u32, u32)>;

    /// Run `draw` with `target` as the destination, then return to the
    /// previous destination.
    fn paint_into(
        &mut self,
        target: &DrawableId,
        draw: &mut dyn FnMut(&mut dyn Painter) -> LauncherResult<()>,
    ) -> LauncherResult<()>;

    fn set_color(&mut self, color: Rgba);
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect) -> LauncherResult<()>;
    fn draw_rect(&mut self, rect: Rect) -> LauncherResult<()>;
    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) -> LauncherResult<()>;

    /// Copy `src` of a drawable (whole drawable if `None`) to `dst` (whole
    /// destination if `None`), rotated clockwise by `angle` degrees about the
    /// center of `dst`.
    fn copy(
        &mut self,
        id: &DrawableId,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
    ) -> LauncherResult<()>;
}

/// Which point of the drawable `(x, y)` designates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    // The scene only anchors centered or left-middle
    #[cfg_attr(not(test), allow(dead_code))]
    TopLeft,
    Centered,
    LeftMiddle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    /// Draw at the drawable's own size
    Natural,
    /// Scale uniformly until it fits inside `w` x `h`
    Fit { w: u32, h: u32 },
    /// Fill exactly `w` x `h`, cropping the source to the box's aspect ratio
    Contain { w: u32, h: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub src: Rect,
    pub dst: Rect,
}

/// Resolve source and destination rectangles for a drawable of `natural`
/// size anchored at `(x, y)`.
pub fn place(natural: (u32, u32), x: i32, y: i32, size: Size, align: Align) -> Placement {
    let (nw, nh) = natural;
    let mut src = Rect::new(0, 0, nw, nh);
    let (w, h) = if nw == 0 || nh == 0 {
        (nw, nh)
    } else {
        match size {
            Size::Natural => (nw, nh),
            Size::Fit { w, h } => {
                let mut scale = w as f32 / nw as f32;
                if nh as f32 * scale > h as f32 {
                    scale = h as f32 / nh as f32;
                }
                ((nw as f32 * scale) as u32, (nh as f32 * scale) as u32)
            },
            Size::Contain { w, h } => {
                if h > 0 {
                    src.w = (nh as f32 * (w as f32 / h as f32)) as u32;
                }
                (w, h)
            },
        }
    };

    let (dx, dy) = match align {
        Align::TopLeft => (x, y),
        Align::Centered => (
            (x as f32 - w as f32 * 0.5) as i32,
            (y as f32 - h as f32 * 0.5) as i32,
        ),
        Align::LeftMiddle => (x, (y as f32 - h as f32 * 0.5) as i32),
    };

    Placement {
        src,
        dst: Rect::new(dx, dy, w, h),
    }
}

/// Draw a drawable at `(x, y)` with the given sizing, alignment and rotation
pub fn blit<P: Painter + ?Sized>(
    painter: &mut P,
    id: &DrawableId,
    x: i32,
    y: i32,
    size: Size,
    align: Align,
    rotation: f64,
) -> LauncherResult<()> {
    let natural = painter.size_of(id)?;
    let placement = place(natural, x, y, size, align);
    painter.copy(id, Some(placement.src), Some(placement.dst), rotation)
}

const SHADOW_RINGS: u32 = 6;

/// 1px black border around `rect`, optionally over a fading drop shadow
pub fn outline<P: Painter + ?Sized>(painter: &mut P, rect: Rect, shadow: bool) -> LauncherResult<()> {
    if shadow {
        for i in 0..SHADOW_RINGS {
            painter.set_color(Rgba::new(0, 0, 0, (96 - 16 * i) as u8));
            painter.draw_rect(rect.expand(i + 2))?;
        }
    }

    painter.set_color(Rgba::BLACK);
    painter.draw_rect(rect.expand(1))
}
