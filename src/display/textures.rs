//! SDL texture store: every texture the scene uses, built on demand and
//! owned until the store is dropped.

use crate::cache::DrawableCache;
use crate::compose::{DrawableId, Rgba, Target};
use crate::error::{LauncherError, LauncherResult};
use sdl2::image::LoadTexture;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Texture, TextureCreator};
use sdl2::ttf::Font;
use sdl2::video::WindowContext;
use std::path::PathBuf;
use tracing::debug;

pub struct TextureStore<'a> {
    creator: &'a TextureCreator<WindowContext>,
    font: Option<Font<'a, 'static>>,
    root: PathBuf,
    textures: DrawableCache<Texture<'a>>,
}

impl<'a> TextureStore<'a> {
    pub fn new(
        creator: &'a TextureCreator<WindowContext>,
        font: Option<Font<'a, 'static>>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            creator,
            font,
            root: root.into(),
            textures: DrawableCache::new(),
        }
    }

    /// Decode an image relative to the asset root
    pub fn image(&mut self, path: &str) -> LauncherResult<DrawableId> {
        let id = DrawableId::image(path);
        let creator = self.creator;
        let file = self.root.join(path);
        self.textures.resolve(id.key(), || {
            debug!(path = %file.display(), "loading image");
            creator
                .load_texture(&file)
                .map_err(|e| LauncherError::asset(path, e))
        })?;
        Ok(id)
    }

    /// Rasterize `content` with the label font
    pub fn text(&mut self, content: &str, color: Rgba) -> LauncherResult<DrawableId> {
        let id = DrawableId::text(content, color);
        let Some(font) = &self.font else {
            return Err(LauncherError::asset(id.key(), "font unavailable"));
        };
        let creator = self.creator;
        self.textures.resolve(id.key(), || {
            let surface = font
                .render(content)
                .blended(Color::RGBA(color.r, color.g, color.b, color.a))
                .map_err(|e| LauncherError::asset(id.key(), e))?;
            creator
                .create_texture_from_surface(&surface)
                .map_err(|e| LauncherError::asset(id.key(), e))
        })?;
        Ok(id)
    }

    /// Allocate a transparent-blending render target
    pub fn target(&mut self, name: &str, width: u32, height: u32) -> LauncherResult<Target> {
        let id = DrawableId::target(name);
        let fresh = !self.textures.contains(id.key());
        let creator = self.creator;
        self.textures.resolve(id.key(), || {
            debug!(name, width, height, "allocating target");
            let mut texture = creator
                .create_texture_target(PixelFormatEnum::RGBA8888, width, height)
                .map_err(|e| LauncherError::asset(id.key(), e))?;
            texture.set_blend_mode(BlendMode::Blend);
            Ok(texture)
        })?;
        Ok(Target { id, fresh })
    }

    pub fn get(&self, id: &DrawableId) -> LauncherResult<&Texture<'a>> {
        self.textures
            .get(id.key())
            .ok_or_else(|| LauncherError::asset(id.key(), "not loaded"))
    }

    pub fn size_of(&self, id: &DrawableId) -> LauncherResult<(u32, u32)> {
        let query = self.get(id)?.query();
        Ok((query.width, query.height))
    }

    /// Lend a texture out while it is bound as the render target
    pub(super) fn take(&mut self, id: &DrawableId) -> LauncherResult<Texture<'a>> {
        self.textures
            .take(id.key())
            .ok_or_else(|| LauncherError::asset(id.key(), "not allocated"))
    }

    pub(super) fn restore(&mut self, id: &DrawableId, texture: Texture<'a>) {
        self.textures.restore(id.key(), texture);
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }
}
