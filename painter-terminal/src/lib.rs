/// Terminal front end: drives a painter_core Scene on a character canvas
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use painter_core::{FrameScheduler, InputState, Mesh, Renderer, Scene, StopHandle};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

pub mod canvas;

pub use canvas::CellCanvas;

/// Logical surface size the scene is rendered at before scaling to cells
pub const LOGICAL_WIDTH: u32 = 800;
pub const LOGICAL_HEIGHT: u32 = 600;

/// Install a stderr subscriber when `PAINTER_LOG` is set (e.g. `PAINTER_LOG=debug`)
pub fn init_tracing() {
    if let Ok(filter) = EnvFilter::try_from_env("PAINTER_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
}

/// Browser-style logical name for a terminal key
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Left => Some("ArrowLeft".to_string()),
        KeyCode::Right => Some("ArrowRight".to_string()),
        KeyCode::Up => Some("ArrowUp".to_string()),
        KeyCode::Down => Some("ArrowDown".to_string()),
        _ => None,
    }
}

/// Main application struct for terminal 3D rendering
pub struct TerminalApp {
    scene: Scene,
    canvas: CellCanvas,
    input: InputState,
    interval: Duration,
    // Terminal reports key releases
    release_events: bool,
    last_frame: Instant,
    frame_count: u32,
    fps: f32,
}

impl TerminalApp {
    pub fn new(mesh: Mesh) -> io::Result<Self> {
        let (width, height) = terminal::size()?;

        Ok(Self {
            scene: Scene::new(mesh, Renderer::new(LOGICAL_WIDTH, LOGICAL_HEIGHT)),
            canvas: CellCanvas::new(width as usize, height as usize),
            input: InputState::new(),
            interval: painter_core::DEFAULT_FRAME_INTERVAL,
            release_events: false,
            last_frame: Instant::now(),
            frame_count: 0,
            fps: 0.0,
        })
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        self.release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.release_events {
            execute!(
                stdout(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }

        let mut scheduler = FrameScheduler::new(self.interval);
        let stop = scheduler.stop_handle();
        let result = scheduler.run(|| self.frame(&stop));

        // Cleanup
        if self.release_events {
            execute!(stdout(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result.map(|frames| tracing::info!("Rendered {} frames", frames))
    }

    fn frame(&mut self, stop: &StopHandle) -> io::Result<()> {
        while event::poll(Duration::from_millis(0))? {
            self.handle_event(event::read()?, stop);
        }

        self.scene.tick(&self.input, &mut self.canvas);
        if !self.release_events {
            // Without release events a held key shows up as repeated presses
            self.input.release_all();
        }

        self.present()?;
        self.update_fps();
        Ok(())
    }

    fn handle_event(&mut self, event: Event, stop: &StopHandle) {
        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                kind: KeyEventKind::Press,
                ..
            }) => stop.stop(),
            Event::Key(KeyEvent { code, kind, .. }) => {
                if let Some(name) = key_name(code) {
                    match kind {
                        KeyEventKind::Press | KeyEventKind::Repeat => self.input.press(&name),
                        KeyEventKind::Release => self.input.release(&name),
                    }
                }
            }
            Event::Resize(width, height) => {
                tracing::debug!("Terminal resized to {}x{}", width, height);
                self.canvas = CellCanvas::new(width as usize, height as usize);
            }
            _ => {}
        }
    }

    fn present(&mut self) -> io::Result<()> {
        let mut stdout = stdout();
        self.canvas.draw(&mut stdout)?;

        // Draw UI overlay
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Painter | FPS: {:.1} | W/S=Move Arrows=Rotate Q=Quit",
                self.fps
            )),
            ResetColor
        )?;

        stdout.flush()
    }

    fn update_fps(&mut self) {
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_frame).as_secs() >= 1 {
            self.fps = self.frame_count as f32 / (now - self.last_frame).as_secs_f32();
            self.frame_count = 0;
            self.last_frame = now;
        }
    }
}
