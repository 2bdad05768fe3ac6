//! Game conveyor: the dark band across the lower screen, the system-colored
//! stripe, control hints and the row of cover thumbnails.

use super::{COVER, SCREEN_WIDTH};
use crate::compose::{blit, outline, Align, Painter, Rect, Rgba, Size};
use crate::error::LauncherResult;
use crate::systems::System;

const BAND: Rect = Rect::new(0, 640, SCREEN_WIDTH, 352);
const STRIPE: Rect = Rect::new(0, 704, SCREEN_WIDTH, 224);
const BAND_TOP_LINE: i32 = 639;
const BAND_BOTTOM_LINE: i32 = 992;

const THUMB_TARGET: &str = "default";
const THUMB_CANVAS: u32 = 492;
const THUMB_CENTER_Y: i32 = 816;

pub const RESTING: (u32, u32) = (192, 192);
pub const EMPHASIZED: (u32, u32) = (480, 352);

const SLOT_ORIGIN_X: f32 = 320.0;
const SLOT_SPACING: f32 = 212.0;

/// Draw order of the slots; the focused one goes last so it ends on top
pub const SLOT_ORDER: [i32; 8] = [-2, 2, 3, 4, 5, -1, 1, 0];

pub struct Hint {
    pub icon: &'static str,
    pub icon_x: i32,
    pub label: &'static str,
    pub label_x: i32,
}

pub const HINTS: [Hint; 3] = [
    Hint {
        icon: "controls/left_right.png",
        icon_x: 792,
        label: "GAMES",
        label_x: 832,
    },
    Hint {
        icon: "controls/up_down.png",
        icon_x: 952,
        label: "SYSTEMS",
        label_x: 992,
    },
    Hint {
        icon: "controls/a.png",
        icon_x: 1120,
        label: "PLAY",
        label_x: 1152,
    },
];

const HINT_ICON_Y: i32 = 960;
const HINT_LABEL_Y: i32 = 962;
const HINT_ICON_BOX: u32 = 48;

/// How far `slot` is toward its emphasized size, in [0, 1], at signed
/// conveyor progress `p`
pub fn emphasis(slot: i32, p: f32) -> f32 {
    let p = p.clamp(-1.0, 1.0);
    let weight = if p > 0.0 {
        match slot {
            -1 => p,
            0 => 1.0 - p,
            _ => 0.0,
        }
    } else {
        match slot {
            0 => 1.0 + p,
            1 => -p,
            _ => 0.0,
        }
    };
    weight.clamp(0.0, 1.0)
}

pub fn thumb_size(slot: i32, p: f32) -> (u32, u32) {
    let t = emphasis(slot, p);
    let lerp = |rest: u32, grown: u32| (rest as f32 + (grown - rest) as f32 * t) as u32;
    (lerp(RESTING.0, EMPHASIZED.0), lerp(RESTING.1, EMPHASIZED.1))
}

/// Horizontal center of `slot` on screen
pub fn thumb_x(slot: i32, p: f32) -> i32 {
    (SLOT_ORIGIN_X + (slot as f32 + p.clamp(-1.0, 1.0)) * SLOT_SPACING) as i32
}

pub fn draw_band<P: Painter + ?Sized>(painter: &mut P, system: &System) -> LauncherResult<()> {
    painter.set_color(Rgba::BLACK);
    painter.draw_line((0, BAND_TOP_LINE), (SCREEN_WIDTH as i32, BAND_TOP_LINE))?;
    painter.draw_line((0, BAND_BOTTOM_LINE), (SCREEN_WIDTH as i32, BAND_BOTTOM_LINE))?;

    painter.set_color(Rgba::new(0, 0, 0, 128));
    painter.fill_rect(BAND)?;

    outline(painter, STRIPE, true)?;
    painter.set_color(Rgba::opaque(system.color));
    painter.fill_rect(STRIPE)
}

pub fn draw_hint<P: Painter + ?Sized>(painter: &mut P, hint: &Hint) -> LauncherResult<()> {
    let icon = painter.image(hint.icon)?;
    blit(
        painter,
        &icon,
        hint.icon_x,
        HINT_ICON_Y,
        Size::Fit {
            w: HINT_ICON_BOX,
            h: HINT_ICON_BOX,
        },
        Align::Centered,
        0.0,
    )?;

    let label = painter.text(hint.label, Rgba::WHITE)?;
    blit(
        painter,
        &label,
        hint.label_x,
        HINT_LABEL_Y,
        Size::Natural,
        Align::LeftMiddle,
        0.0,
    )
}

/// Compose one thumbnail on the shared thumb target and copy it to the
/// screen at its slot position.
pub fn draw_thumb<P: Painter + ?Sized>(painter: &mut P, slot: i32, p: f32) -> LauncherResult<()> {
    let cover = painter.image(COVER)?;
    let thumb = painter.target(THUMB_TARGET, THUMB_CANVAS, THUMB_CANVAS)?.id;
    let (w, h) = thumb_size(slot, p);
    let center = (THUMB_CANVAS / 2) as i32;

    painter.paint_into(&thumb, &mut |canvas: &mut dyn Painter| -> LauncherResult<()> {
        canvas.set_color(Rgba::TRANSPARENT);
        canvas.clear();
        blit(
            canvas,
            &cover,
            center,
            center,
            Size::Contain { w, h },
            Align::Centered,
            0.0,
        )?;
        let frame = Rect::new(
            ((THUMB_CANVAS - w) / 2) as i32,
            ((THUMB_CANVAS - h) / 2) as i32,
            w,
            h,
        );
        outline(canvas, frame, false)
    })?;

    blit(
        painter,
        &thumb,
        thumb_x(slot, p),
        THUMB_CENTER_Y,
        Size::Natural,
        Align::Centered,
        0.0,
    )
}
