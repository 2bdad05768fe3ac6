mod painter;
mod textures;

pub use painter::SdlPainter;
pub use textures::TextureStore;

use crate::error::{LauncherError, LauncherResult};
use crate::scene::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::transition::{Direction, Input};
use sdl2::event::Event;
use sdl2::image::{InitFlag, Sdl2ImageContext};
use sdl2::keyboard::Keycode;
use sdl2::render::{BlendMode, Canvas, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;

pub const DEFAULT_WIDTH: u32 = SCREEN_WIDTH;
pub const DEFAULT_HEIGHT: u32 = SCREEN_HEIGHT;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
    _image: Sdl2ImageContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Direction),
    KeyUp(Direction),
}

impl InputEvent {
    /// The transition input for this event; any direction's key-up is a
    /// release. `None` for `Quit`.
    pub fn input(self) -> Option<Input> {
        match self {
            InputEvent::Quit => None,
            InputEvent::KeyDown(direction) => Some(Input::Press(direction)),
            InputEvent::KeyUp(_) => Some(Input::Release),
        }
    }
}

impl Display {
    /// Create display with custom window size and VSync settings.
    /// The scene is always drawn on the fixed logical canvas and scaled.
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> LauncherResult<(Self, TextureCreator<WindowContext>)> {
        let sdl_context = sdl2::init().map_err(LauncherError::initialization)?;
        let video_subsystem = sdl_context.video().map_err(LauncherError::initialization)?;
        let image = sdl2::image::init(InitFlag::PNG).map_err(LauncherError::initialization)?;

        sdl2::hint::set("SDL_RENDER_SCALE_QUALITY", "2");

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .build()
            .map_err(LauncherError::initialization)?;

        let mut canvas_builder = window.into_canvas().accelerated().target_texture();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let mut canvas = canvas_builder.build().map_err(LauncherError::initialization)?;
        canvas.set_blend_mode(BlendMode::Blend);
        canvas
            .set_logical_size(SCREEN_WIDTH, SCREEN_HEIGHT)
            .map_err(LauncherError::initialization)?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump().map_err(LauncherError::initialization)?;

        Ok((
            Self {
                canvas,
                event_pump,
                _image: image,
            },
            texture_creator,
        ))
    }

    /// Draw one frame through a painter bound to the window, then present it
    pub fn present<'a, F>(&mut self, textures: &mut TextureStore<'a>, draw: F) -> LauncherResult<()>
    where
        F: FnOnce(&mut SdlPainter<'_, 'a>) -> LauncherResult<()>,
    {
        let mut painter = SdlPainter::new(&mut self.canvas, textures);
        draw(&mut painter)?;
        self.canvas.present();
        Ok(())
    }

    /// Drain pending events without blocking
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => {
                    if let Some(direction) = map_direction(k) {
                        events.push(InputEvent::KeyDown(direction));
                    }
                },
                Event::KeyUp {
                    keycode: Some(k), ..
                } => {
                    if let Some(direction) = map_direction(k) {
                        events.push(InputEvent::KeyUp(direction));
                    }
                },
                _ => {},
            }
        }

        events
    }
}

fn map_direction(key: Keycode) -> Option<Direction> {
    match key {
        Keycode::Up => Some(Direction::Up),
        Keycode::Down => Some(Direction::Down),
        Keycode::Left => Some(Direction::Left),
        Keycode::Right => Some(Direction::Right),
        _ => None,
    }
}
