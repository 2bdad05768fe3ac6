//! Painter test double that records draw calls instead of rasterizing them.

use super::{DrawableId, Painter, Rect, Rgba, Target};
use crate::cache::DrawableCache;
use crate::error::{LauncherError, LauncherResult};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Clear {
        color: Rgba,
    },
    Fill {
        rect: Rect,
        color: Rgba,
    },
    Stroke {
        rect: Rect,
        color: Rgba,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        color: Rgba,
    },
    Copy {
        id: DrawableId,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
    },
    Enter(DrawableId),
    Leave,
}

pub struct RecordingPainter {
    image_sizes: HashMap<String, (u32, u32)>,
    missing: HashSet<String>,
    font: bool,
    drawables: DrawableCache<(u32, u32)>,
    productions: usize,
    color: Rgba,
    ops: Vec<Op>,
}

const DEFAULT_IMAGE_SIZE: (u32, u32) = (64, 64);
const GLYPH_SIZE: (u32, u32) = (16, 32);

impl RecordingPainter {
    pub fn new() -> Self {
        Self {
            image_sizes: HashMap::new(),
            missing: HashSet::new(),
            font: true,
            drawables: DrawableCache::new(),
            productions: 0,
            color: Rgba::BLACK,
            ops: Vec::new(),
        }
    }

    pub fn with_image(mut self, path: &str, width: u32, height: u32) -> Self {
        self.image_sizes.insert(path.to_owned(), (width, height));
        self
    }

    /// Make `path` fail to load
    pub fn without_image(mut self, path: &str) -> Self {
        self.missing.insert(path.to_owned());
        self
    }

    /// Make every text request fail as if the label font never loaded
    pub fn without_font(mut self) -> Self {
        self.font = false;
        self
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// How many drawables were built (cache misses)
    pub fn productions(&self) -> usize {
        self.productions
    }

    /// Ops issued directly to the screen, outside any `paint_into`
    pub fn screen_ops(&self) -> Vec<&Op> {
        let mut depth = 0usize;
        let mut out = Vec::new();
        for op in &self.ops {
            match op {
                Op::Enter(_) => depth += 1,
                Op::Leave => depth = depth.saturating_sub(1),
                _ if depth == 0 => out.push(op),
                _ => {},
            }
        }
        out
    }

    /// Every `Enter` recorded, in order
    pub fn entered(&self) -> Vec<&DrawableId> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Enter(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn produce(&mut self, id: &DrawableId, size: (u32, u32)) -> bool {
        let fresh = !self.drawables.contains(id.key());
        let productions = &mut self.productions;
        let _ = self.drawables.resolve(id.key(), || {
            *productions += 1;
            Ok::<_, LauncherError>(size)
        });
        fresh
    }
}

impl Default for RecordingPainter {
    fn default() -> Self {
        Self::new()
    }
}

impl Painter for RecordingPainter {
    fn image(&mut self, path: &str) -> LauncherResult<DrawableId> {
        if self.missing.contains(path) {
            return Err(LauncherError::asset(path, "not found"));
        }
        let id = DrawableId::image(path);
        let size = self
            .image_sizes
            .get(path)
            .copied()
            .unwrap_or(DEFAULT_IMAGE_SIZE);
        self.produce(&id, size);
        Ok(id)
    }

    fn text(&mut self, content: &str, color: Rgba) -> LauncherResult<DrawableId> {
        let id = DrawableId::text(content, color);
        if !self.font {
            return Err(LauncherError::asset(id.key(), "font unavailable"));
        }
        let size = (GLYPH_SIZE.0 * content.chars().count() as u32, GLYPH_SIZE.1);
        self.produce(&id, size);
        Ok(id)
    }

    fn target(&mut self, name: &str, width: u32, height: u32) -> LauncherResult<Target> {
        let id = DrawableId::target(name);
        let fresh = self.produce(&id, (width, height));
        Ok(Target { id, fresh })
    }

    fn size_of(&self, id: &DrawableId) -> LauncherResult<(u32, u32)> {
        self.drawables
            .get(id.key())
            .copied()
            .ok_or_else(|| LauncherError::asset(id.key(), "never produced"))
    }

    fn paint_into(
        &mut self,
        target: &DrawableId,
        draw: &mut dyn FnMut(&mut dyn Painter) -> LauncherResult<()>,
    ) -> LauncherResult<()> {
        self.ops.push(Op::Enter(target.clone()));
        let result = draw(self);
        self.ops.push(Op::Leave);
        result
    }

    fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear { color: self.color });
    }

    fn fill_rect(&mut self, rect: Rect) -> LauncherResult<()> {
        self.ops.push(Op::Fill {
            rect,
            color: self.color,
        });
        Ok(())
    }

    fn draw_rect(&mut self, rect: Rect) -> LauncherResult<()> {
        self.ops.push(Op::Stroke {
            rect,
            color: self.color,
        });
        Ok(())
    }

    fn draw_line(&mut self, from: (i32, i32), to: (i32, i32)) -> LauncherResult<()> {
        self.ops.push(Op::Line {
            from,
            to,
            color: self.color,
        });
        Ok(())
    }

    fn copy(
        &mut self,
        id: &DrawableId,
        src: Option<Rect>,
        dst: Option<Rect>,
        angle: f64,
    ) -> LauncherResult<()> {
        self.size_of(id)?;
        self.ops.push(Op::Copy {
            id: id.clone(),
            src,
            dst,
            angle,
        });
        Ok(())
    }
}
