//! Application loop: build, render, wait for input, route it
//!
//! The root component is rebuilt from caller state before every frame. The
//! instance that was just drawn receives the next event; any state its
//! controls change is picked up by the following rebuild.
//!
//! # Example
//!
//! ```ignore
//! let dark_mode = State::new(false);
//! let mut app = App::new(Config::parse())?;
//!
//! app.run(|| {
//!     let dark_mode = dark_mode.clone();
//!     FlexibleRow::titled("Dark Mode", move || ControlToggle::new(dark_mode.binding()))
//! })?;
//! ```

use crate::component::Component;
use crate::context::RenderContext;
use crate::event::{Event, Key};
use crate::focus::FocusRing;
use crate::render::Renderer;
use crate::theme::Theme;
use anyhow::Result;

#[cfg(feature = "tui")]
use crate::config::Config;
#[cfg(feature = "tui")]
use crate::event::EventPoller;
#[cfg(feature = "tui")]
use anyhow::Context;

/// What the loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Draw one frame of `root` over the whole renderer area
///
/// Returns the number of cells that changed on screen.
pub fn render_frame<C: Component + ?Sized>(
    root: &mut C,
    renderer: &mut Renderer,
    theme: &Theme,
    focus: &FocusRing,
) -> Result<usize> {
    let ctx = RenderContext::new(theme, focus);
    let area = renderer.area();

    focus.begin_frame();
    renderer.begin_frame();
    root.render(renderer, area, &ctx)?;
    focus.end_frame();
    renderer.end_frame()
}

/// Route one event
///
/// Quit keys and focus movement are handled here; a resize rebuilds the
/// renderer's buffers. Everything else goes to the last rendered root.
pub fn dispatch<C: Component + ?Sized>(
    root: &mut C,
    event: &Event,
    renderer: &mut Renderer,
    focus: &FocusRing,
) -> Flow {
    match event {
        Event::Key(Key::Char('q')) | Event::Key(Key::Ctrl('c')) | Event::Key(Key::Esc) => {
            return Flow::Quit;
        }
        Event::Key(Key::Tab) => {
            focus.focus_next();
        }
        Event::Key(Key::BackTab) => {
            focus.focus_prev();
        }
        Event::Resize(cols, rows) => {
            tracing::debug!(cols, rows, "terminal resized");
            renderer.resize(*cols, *rows);
        }
        _ => {
            if !root.handle_event(event) {
                tracing::trace!(?event, "event not handled");
            }
        }
    }
    Flow::Continue
}

/// Terminal application driving a rebuilt root component
#[cfg(feature = "tui")]
pub struct App {
    renderer: Renderer,
    theme: Theme,
    focus: FocusRing,
    events: EventPoller,
}

#[cfg(feature = "tui")]
impl App {
    /// Take over the terminal: alternate screen, raw mode, hidden cursor
    pub fn new(config: Config) -> Result<Self> {
        let mut renderer = Renderer::new().context("failed to size the terminal")?;
        renderer.set_colors(config.colors());
        let theme = Theme::new(renderer.capabilities());

        renderer
            .enter_alt_screen()
            .context("failed to enter the alternate screen")?;
        renderer.hide_cursor()?;
        renderer.clear()?;

        let mouse = config.mouse && renderer.capabilities().mouse;
        let events = EventPoller::new(mouse).context("failed to enable raw mode")?;

        tracing::info!(
            cols = renderer.area().width,
            rows = renderer.area().height,
            colors = config.colors(),
            mouse,
            "app started"
        );

        Ok(App {
            renderer,
            theme,
            focus: FocusRing::new(),
            events,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Run until a quit key is pressed
    pub fn run<C, F>(&mut self, mut build: F) -> Result<()>
    where
        C: Component,
        F: FnMut() -> C,
    {
        loop {
            let mut root = build();
            render_frame(&mut root, &mut self.renderer, &self.theme, &self.focus)?;

            let event = self.events.read()?;
            if dispatch(&mut root, &event, &mut self.renderer, &self.focus) == Flow::Quit {
                break;
            }
            if let Event::Resize(..) = event {
                self.renderer.clear()?;
            }
        }

        self.renderer.exit_alt_screen()?;
        self.renderer.show_cursor()?;
        tracing::info!("app finished");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ControlToggle, FlexibleRow};
    use crate::state::State;

    fn toggle_row(state: &State<bool>) -> impl Component {
        let state = state.clone();
        FlexibleRow::titled("Wi-Fi", move || ControlToggle::new(state.binding()))
    }

    #[test]
    fn test_quit_keys() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 3);
        let state = State::new(false);
        let mut root = toggle_row(&state);
        render_frame(&mut root, &mut renderer, &theme, &focus).unwrap();

        for key in [Key::Char('q'), Key::Ctrl('c'), Key::Esc] {
            assert_eq!(
                dispatch(&mut root, &Event::Key(key), &mut renderer, &focus),
                Flow::Quit
            );
        }
        assert_eq!(
            dispatch(&mut root, &Event::Key(Key::Down), &mut renderer, &focus),
            Flow::Continue
        );
    }

    #[test]
    fn test_tab_then_enter_activates_focused_control() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 3);
        let state = State::new(false);

        let mut root = toggle_row(&state);
        render_frame(&mut root, &mut renderer, &theme, &focus).unwrap();
        dispatch(&mut root, &Event::Key(Key::Tab), &mut renderer, &focus);
        assert_eq!(focus.focused(), Some(0));

        // enter reaches the control once the focused frame is drawn
        let mut root = toggle_row(&state);
        render_frame(&mut root, &mut renderer, &theme, &focus).unwrap();
        dispatch(&mut root, &Event::Key(Key::Enter), &mut renderer, &focus);
        assert!(state.get());

        let mut root = toggle_row(&state);
        render_frame(&mut root, &mut renderer, &theme, &focus).unwrap();
        assert!(renderer.buffer().line(1).contains("━━●"));
    }

    #[test]
    fn test_resize_rebuilds_buffers() {
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 3);
        let state = State::new(false);
        let mut root = toggle_row(&state);

        dispatch(&mut root, &Event::Resize(40, 10), &mut renderer, &focus);
        assert_eq!(renderer.area().width, 40);
        assert_eq!(renderer.area().height, 10);
    }

    #[test]
    fn test_unchanged_frame_writes_nothing() {
        let theme = Theme::default();
        let focus = FocusRing::new();
        let mut renderer = Renderer::headless(20, 3);
        let state = State::new(true);

        let mut root = toggle_row(&state);
        assert!(render_frame(&mut root, &mut renderer, &theme, &focus).unwrap() > 0);
        let mut root = toggle_row(&state);
        assert_eq!(render_frame(&mut root, &mut renderer, &theme, &focus).unwrap(), 0);
    }
}
