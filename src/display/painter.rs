use super::TextureStore;
use crate::compose::{DrawableId, Painter, Rect, Rgba, Target};
use crate::error::{LauncherError, LauncherResult};
use sdl2::pixels::Color;
use sdl2::rect::{Point as SdlPoint, Rect as SdlRect};
use sdl2::render::Canvas;
use sdl2::video::Window;

impl From<Rect> for SdlRect {
    fn from(rect: Rect) -> Self {
        SdlRect::new(rect.x, rect.y, rect.w, rect.h)
    }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::RGBA(c.r, c.g, c.b, c.a)
    }
}

/// [`Painter`] over an SDL canvas, drawing with textures from a [`TextureStore`]
pub struct SdlPainter<'f, 'a> {
    canvas: &'f mut Canvas<Window>,
    store: &'f mut TextureStore<'a>,
}

impl<'f, 'a> SdlPainter<'f, 'a> {
    pub fn new(canvas: &'f mut Canvas<Window>, store: &'f mut TextureStore<'a>) -> Self {
        Self { canvas, store }
    }
}

impl Painter for SdlPainter<'_, '_> {
    fn image(&mut self, path: &str) -> LauncherResult<DrawableId> {
        self.store.image(path)
    }

    fn text(&mut self, content: &str, color: Rgba) -> LauncherResult<DrawableId> {
        self.store.text(content, color)
    }

    fn target(&mut self, name: &str, width: u32, height: u32) -> LauncherResult<Target> {
        self.store.target(name, width, height)
    }

    fn size_of(&self, id: &DrawableId) -> LauncherResult<(u32, u32)> {
        self.store.size_of(id)
    }

    fn paint_into(
        &mut self,
        target: &DrawableId,
        draw: &mut dyn FnMut(&mut dyn Painter) -> LauncherResult<()>,
    ) -> LauncherResult<()> {
        // The target leaves the store while bound so the closure can still
        // read every other texture.
        let mut texture = self.store.take(target)?;
        let store = &mut *self.store;
        let mut outcome = Ok(());
        let bound = self.canvas.with_texture_canvas(&mut texture, |canvas| {
            let mut inner = SdlPainter { canvas, store };
            outcome = draw(&mut inner);
        });
        self.store.restore(target, texture);

        bound.map_err(LauncherError::render)?;
        outcome
    }

    fn set_color(&mut self, color: Rgba) {
        self.canvas.set_draw_color(color);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Rect) -> LauncherResult<()> {
        self.canvas
            .fill_rect(SdlRect::from(rect))
            .map_err(LauncherError::render)
    }

    fn draw_rect(&mut self, rect: Rect) -> LauncherResult<()> {
        self.canvas
            .draw_rect(SdlRect::from(rect))
            .map_err(LauncherError::render)
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) -> LauncherResult<()> {
        self.canvas
            .draw_line(SdlPoint::from(from), SdlPoint::from(to))
            .map_err(LauncherError::render)
    }

    fn copy(
        &mut self,
        id: &DrawableId,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
    ) -> LauncherResult<()> {
        let texture = self.store.get(id)?;
        self.canvas
            .copy_ex(
                texture,
                src.map(SdlRect::from),
                dst.map(SdlRect::from),
                angle,
                None::<SdlPoint>,
                false,
                false,
            )
            .map_err(LauncherError::render)
    }
}
