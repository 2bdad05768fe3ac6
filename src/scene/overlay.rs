//! System overlays: the corner stripe shown at rest and during fades, and
//! the two-stripe slide used while changing systems.

use super::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::compose::{blit, outline, Align, DrawableId, Painter, Rect, Rgba, Size};
use crate::error::LauncherResult;
use crate::systems::{System, SystemRing};

const STRIPE_WIDTH: u32 = 1920;
const STRIPE_HEIGHT: u32 = 172;
const STRIPE_BAND: Rect = Rect::new(0, 6, STRIPE_WIDTH, 160);
const LOGO_BOX: (u32, u32) = (256, 128);

const SLIDE_DISTANCE: f32 = 160.0;
const SLIDE_CENTER_X: i32 = 640;
const SLIDE_CURRENT_Y: i32 = 512;
const SLIDE_FOLLOWING_Y: i32 = 672;
const SLIDE_PRECEDING_Y: i32 = 352;
const SLIDE_MASK_TOP: Rect = Rect::new(0, 0, SCREEN_WIDTH, 432);
const SLIDE_MASK_BOTTOM: Rect = Rect::new(0, 592, SCREEN_WIDTH, 432);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Forward,
    Backward,
}

/// Stripe targets live under their own prefix so a system name can never
/// alias another target such as the thumbnail canvas
fn stripe_name(system: &System) -> String {
    format!("stripe:{}", system.name)
}

/// The system's stripe: color band, logo and shadowed outline on a
/// transparent target. Built on first use and reused afterwards.
pub fn stripe<P: Painter + ?Sized>(painter: &mut P, system: &System) -> LauncherResult<DrawableId> {
    // Resolve the logo first so a missing one never leaves an empty stripe cached
    let logo = painter.image(&system.logo_path())?;
    let target = painter.target(&stripe_name(system), STRIPE_WIDTH, STRIPE_HEIGHT)?;
    if !target.fresh {
        return Ok(target.id);
    }

    let color = Rgba::opaque(system.color);
    painter.paint_into(&target.id, &mut |canvas: &mut dyn Painter| -> LauncherResult<()> {
        canvas.set_color(Rgba::TRANSPARENT);
        canvas.clear();
        canvas.set_color(color);
        canvas.fill_rect(STRIPE_BAND)?;
        blit(
            canvas,
            &logo,
            (STRIPE_WIDTH / 2) as i32,
            86,
            Size::Fit {
                w: LOGO_BOX.0,
                h: LOGO_BOX.1,
            },
            Align::Centered,
            0.0,
        )?;
        outline(canvas, STRIPE_BAND, true)
    })?;

    Ok(target.id)
}

fn stripe_at<P: Painter + ?Sized>(
    painter: &mut P,
    stripe: &DrawableId,
    x: i32,
    y: i32,
    rotation: f64,
) -> LauncherResult<()> {
    blit(
        painter,
        stripe,
        x,
        y,
        Size::Fit {
            w: STRIPE_WIDTH,
            h: STRIPE_HEIGHT,
        },
        Align::Centered,
        rotation,
    )
}

/// Corner reveal. At 0 the stripe rests tilted in the top-right corner over
/// the clear scene; at 1 it lies flat across the middle over a black screen.
pub fn draw_corner<P: Painter + ?Sized>(
    painter: &mut P,
    systems: &SystemRing,
    progress: f32,
) -> LauncherResult<()> {
    let q = progress.clamp(0.0, 1.0);
    let stripe = stripe(painter, systems.current())?;

    painter.set_color(Rgba::shade(q));
    painter.fill_rect(Rect::new(0, 0, SCREEN_WIDTH, SCREEN_HEIGHT))?;

    stripe_at(
        painter,
        &stripe,
        (1152.0 - 512.0 * q) as i32,
        (128.0 + 384.0 * q) as i32,
        f64::from(45.0 * (1.0 - q)),
    )
}

/// Slide the current stripe out and its neighbor in through a 160px window
pub fn draw_slide<P: Painter + ?Sized>(
    painter: &mut P,
    systems: &SystemRing,
    progress: f32,
    direction: SlideDirection,
) -> LauncherResult<()> {
    let offset = (progress.clamp(0.0, 1.0) * SLIDE_DISTANCE) as i32;
    let current = stripe(painter, systems.current())?;
    let (neighbor, offset, neighbor_y) = match direction {
        SlideDirection::Forward => (stripe(painter, systems.following())?, offset, SLIDE_FOLLOWING_Y),
        SlideDirection::Backward => (
            stripe(painter, systems.preceding())?,
            -offset,
            SLIDE_PRECEDING_Y,
        ),
    };

    stripe_at(painter, &current, SLIDE_CENTER_X, SLIDE_CURRENT_Y - offset, 0.0)?;
    stripe_at(painter, &neighbor, SLIDE_CENTER_X, neighbor_y - offset, 0.0)?;

    painter.set_color(Rgba::BLACK);
    painter.fill_rect(SLIDE_MASK_TOP)?;
    painter.fill_rect(SLIDE_MASK_BOTTOM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::recording::{Op, RecordingPainter};

    fn stripe_copies(painter: &RecordingPainter) -> Vec<(DrawableId, Rect, f64)> {
        painter
            .screen_ops()
            .into_iter()
            .filter_map(|op| match op {
                Op::Copy {
                    id,
                    dst: Some(dst),
                    angle,
                    ..
                } => Some((id.clone(), *dst, *angle)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_stripe_is_built_once() {
        let mut painter = RecordingPainter::new();
        let ring = SystemRing::builtin();

        let first = stripe(&mut painter, ring.current()).unwrap();
        let second = stripe(&mut painter, ring.current()).unwrap();
        assert_eq!(first, second);
        assert_eq!(painter.entered(), vec![&DrawableId::target("stripe:arcade")]);
        // logo + target
        assert_eq!(painter.productions(), 2);
    }

    #[test]
    fn test_stripe_contents() {
        let mut painter = RecordingPainter::new().with_image("systems/gba.png", 512, 128);
        let system = System::new("gba", [142, 68, 173]);
        stripe(&mut painter, &system).unwrap();

        let ops = painter.ops();
        assert_eq!(ops[0], Op::Enter(DrawableId::target("stripe:gba")));
        assert_eq!(ops[1], Op::Clear { color: Rgba::TRANSPARENT });
        assert_eq!(
            ops[2],
            Op::Fill {
                rect: STRIPE_BAND,
                color: Rgba::new(142, 68, 173, 255),
            }
        );
        assert_eq!(
            ops[3],
            Op::Copy {
                id: DrawableId::image("systems/gba.png"),
                src: Some(Rect::new(0, 0, 512, 128)),
                dst: Some(Rect::new(832, 54, 256, 64)),
                angle: 0.0,
            }
        );
        assert_eq!(ops.last(), Some(&Op::Leave));
    }

    #[test]
    fn test_system_named_like_thumb_target_gets_its_own_stripe() {
        let mut painter = RecordingPainter::new();
        crate::scene::conveyor::draw_thumb(&mut painter, 0, 0.0).unwrap();
        painter.clear_ops();

        let system = System::new("default", [10, 20, 30]);
        let id = stripe(&mut painter, &system).unwrap();
        assert_eq!(id, DrawableId::target("stripe:default"));
        assert_eq!(painter.entered(), vec![&id]);
        assert_eq!(painter.size_of(&id).unwrap(), (STRIPE_WIDTH, STRIPE_HEIGHT));
    }

    #[test]
    fn test_missing_logo_leaves_no_stripe() {
        let mut painter = RecordingPainter::new().without_image("systems/nes.png");
        let system = System::new("nes", [209, 72, 65]);
        let err = stripe(&mut painter, &system).unwrap_err();
        assert!(err.is_asset_unavailable());
        assert!(painter.entered().is_empty());
        assert_eq!(painter.productions(), 0);
    }

    #[test]
    fn test_corner_at_rest() {
        let mut painter = RecordingPainter::new();
        draw_corner(&mut painter, &SystemRing::builtin(), 0.0).unwrap();

        assert!(painter.screen_ops().contains(&&Op::Fill {
            rect: Rect::new(0, 0, 1280, 1024),
            color: Rgba::TRANSPARENT,
        }));
        assert_eq!(
            stripe_copies(&painter),
            vec![(DrawableId::target("stripe:arcade"), Rect::new(192, 42, 1920, 172), 45.0)]
        );
    }

    #[test]
    fn test_corner_half_way() {
        let mut painter = RecordingPainter::new();
        draw_corner(&mut painter, &SystemRing::builtin(), 0.5).unwrap();

        assert!(painter.screen_ops().contains(&&Op::Fill {
            rect: Rect::new(0, 0, 1280, 1024),
            color: Rgba::new(0, 0, 0, 127),
        }));
        assert_eq!(
            stripe_copies(&painter),
            vec![(DrawableId::target("stripe:arcade"), Rect::new(-64, 234, 1920, 172), 22.5)]
        );
    }

    #[test]
    fn test_corner_fully_revealed() {
        let mut painter = RecordingPainter::new();
        draw_corner(&mut painter, &SystemRing::builtin(), 1.0).unwrap();
        assert_eq!(
            stripe_copies(&painter),
            vec![(DrawableId::target("stripe:arcade"), Rect::new(-320, 426, 1920, 172), 0.0)]
        );
    }

    #[test]
    fn test_slide_forward() {
        let mut painter = RecordingPainter::new();
        draw_slide(&mut painter, &SystemRing::builtin(), 0.5, SlideDirection::Forward).unwrap();

        assert_eq!(
            stripe_copies(&painter),
            vec![
                (DrawableId::target("stripe:arcade"), Rect::new(-320, 346, 1920, 172), 0.0),
                (DrawableId::target("stripe:gameboy"), Rect::new(-320, 506, 1920, 172), 0.0),
            ]
        );
        let screen = painter.screen_ops();
        assert_eq!(
            &screen[screen.len() - 2..],
            &[
                &Op::Fill {
                    rect: SLIDE_MASK_TOP,
                    color: Rgba::BLACK
                },
                &Op::Fill {
                    rect: SLIDE_MASK_BOTTOM,
                    color: Rgba::BLACK
                },
            ]
        );
    }

    #[test]
    fn test_slide_backward() {
        let mut painter = RecordingPainter::new();
        draw_slide(&mut painter, &SystemRing::builtin(), 0.5, SlideDirection::Backward).unwrap();

        assert_eq!(
            stripe_copies(&painter),
            vec![
                (DrawableId::target("stripe:arcade"), Rect::new(-320, 506, 1920, 172), 0.0),
                (DrawableId::target("stripe:snes"), Rect::new(-320, 346, 1920, 172), 0.0),
            ]
        );
    }

    #[test]
    fn test_completed_slide_lines_up_with_rest() {
        // The neighbor ends exactly where the current stripe rests
        let mut painter = RecordingPainter::new();
        let ring = SystemRing::builtin();
        draw_slide(&mut painter, &ring, 1.0, SlideDirection::Forward).unwrap();
        let end = stripe_copies(&painter)[1].1;

        painter.clear_ops();
        draw_slide(&mut painter, &ring, 0.0, SlideDirection::Forward).unwrap();
        let rest = stripe_copies(&painter)[0].1;
        assert_eq!(end, rest);
    }
}
