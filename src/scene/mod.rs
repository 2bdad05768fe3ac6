//! Scene renderer
//!
//! Draws one frame from a `(phase, progress)` snapshot: the background
//! picture, the game conveyor, then the system overlay for the phase.

pub mod conveyor;
pub mod overlay;

use crate::compose::{Painter, Rgba};
use crate::error::{LauncherError, LauncherResult};
use crate::systems::SystemRing;
use crate::transition::{Frame, Phase};
use overlay::SlideDirection;
use std::collections::HashSet;
use tracing::warn;

/// Logical canvas size; the display scales it to the window
pub const SCREEN_WIDTH: u32 = 1280;
pub const SCREEN_HEIGHT: u32 = 1024;

pub const BACKGROUND: &str = "snap.png";
pub const COVER: &str = "flyer.png";

pub struct SceneRenderer {
    /// Asset keys already reported as unavailable
    reported: HashSet<String>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self {
            reported: HashSet::new(),
        }
    }

    /// Render one frame. Elements whose assets are unavailable are skipped;
    /// any other failure aborts the frame.
    pub fn render_frame<P: Painter + ?Sized>(
        &mut self,
        painter: &mut P,
        systems: &SystemRing,
        frame: Frame,
    ) -> LauncherResult<()> {
        painter.set_color(Rgba::BLACK);
        painter.clear();

        let background = draw_background(painter);
        self.tolerate(background)?;

        let band = conveyor::draw_band(painter, systems.current());
        self.tolerate(band)?;
        for hint in &conveyor::HINTS {
            let drawn = conveyor::draw_hint(painter, hint);
            self.tolerate(drawn)?;
        }
        let game_progress = frame.game_progress();
        for slot in conveyor::SLOT_ORDER {
            let drawn = conveyor::draw_thumb(painter, slot, game_progress);
            self.tolerate(drawn)?;
        }

        let overlay = match frame.phase {
            Phase::NextSystem => {
                overlay::draw_slide(painter, systems, frame.progress, SlideDirection::Forward)
            },
            Phase::PreviousSystem => {
                overlay::draw_slide(painter, systems, frame.progress, SlideDirection::Backward)
            },
            Phase::ShowSystem => overlay::draw_slide(painter, systems, 0.0, SlideDirection::Forward),
            Phase::FadeIn => overlay::draw_corner(painter, systems, frame.progress),
            Phase::FadeOut => overlay::draw_corner(painter, systems, 1.0 - frame.progress),
            Phase::Idle | Phase::NextGame | Phase::PreviousGame => {
                overlay::draw_corner(painter, systems, 0.0)
            },
        };
        self.tolerate(overlay)
    }

    fn tolerate(&mut self, result: LauncherResult<()>) -> LauncherResult<()> {
        match result {
            Err(LauncherError::AssetUnavailable { key, reason }) => {
                if self.reported.insert(key.clone()) {
                    warn!(%key, %reason, "asset unavailable, skipping draw");
                }
                Ok(())
            },
            other => other,
        }
    }
}

impl Default for SceneRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_background<P: Painter + ?Sized>(painter: &mut P) -> LauncherResult<()> {
    let picture = painter.image(BACKGROUND)?;
    painter.copy(&picture, None, None, 0.0)
}
