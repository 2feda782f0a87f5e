//! Event system - keyboard, mouse, and terminal events

#[cfg(feature = "tui")]
use anyhow::Result;

/// Keyboard key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Ctrl(char),
    Alt(char),
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    BackTab,
    Backspace,
    Enter,
    Tab,
    Esc,
    Null,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Mouse event types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEvent {
    Press(MouseButton, u16, u16), // button, col, row
    Release(u16, u16),            // col, row
    ScrollUp(u16, u16),           // col, row
    ScrollDown(u16, u16),         // col, row
}

/// UI events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(Key),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resized (new cols, new rows)
    Resize(u16, u16),
}

impl Event {
    /// Left click at a position
    pub fn click(col: u16, row: u16) -> Self {
        Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row))
    }

    /// Whether this event activates a control occupying `bounds`
    ///
    /// A left press inside the bounds always activates; Enter and Space
    /// activate only when the control holds keyboard focus.
    pub fn activates(&self, bounds: Option<crate::layout::Rect>, focused: bool) -> bool {
        match self {
            Event::Mouse(MouseEvent::Press(MouseButton::Left, col, row)) => {
                bounds.is_some_and(|b| b.contains(*col, *row))
            }
            Event::Key(Key::Enter) | Event::Key(Key::Char(' ')) => focused,
            _ => false,
        }
    }
}

/// Event handler trait for components
pub trait EventHandler {
    /// Handle an event, return true if consumed (stops propagation)
    fn handle_event(&mut self, _event: &Event) -> bool {
        false
    }
}

impl<H: EventHandler + ?Sized> EventHandler for Box<H> {
    fn handle_event(&mut self, event: &Event) -> bool {
        (**self).handle_event(event)
    }
}

impl<H: EventHandler> EventHandler for Option<H> {
    fn handle_event(&mut self, event: &Event) -> bool {
        self.as_mut().is_some_and(|h| h.handle_event(event))
    }
}

/// Event polling and conversion from crossterm events
#[cfg(feature = "tui")]
pub struct EventPoller {
    mouse: bool,
}

#[cfg(feature = "tui")]
impl EventPoller {
    /// Enable raw mode and, optionally, mouse capture
    pub fn new(mouse: bool) -> Result<Self> {
        crossterm::terminal::enable_raw_mode()?;

        if mouse {
            // Don't fail if the terminal refuses mouse capture
            let _ = crossterm::execute!(std::io::stdout(), crossterm::event::EnableMouseCapture);
        }

        Ok(EventPoller { mouse })
    }

    /// Block and wait for the next event we understand
    pub fn read(&self) -> Result<Event> {
        loop {
            if let Some(event) = convert_crossterm_event(crossterm::event::read()?) {
                return Ok(event);
            }
        }
    }

    /// Poll for next event with timeout
    pub fn poll(&self, timeout: std::time::Duration) -> Result<Option<Event>> {
        if crossterm::event::poll(timeout)? {
            Ok(convert_crossterm_event(crossterm::event::read()?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(feature = "tui")]
impl Drop for EventPoller {
    fn drop(&mut self) {
        if self.mouse {
            let _ = crossterm::execute!(std::io::stdout(), crossterm::event::DisableMouseCapture);
        }
        let _ = crossterm::terminal::disable_raw_mode();
    }
}

/// Convert crossterm event to our Event type
///
/// Key releases, mouse moves, focus and paste events are dropped.
#[cfg(feature = "tui")]
fn convert_crossterm_event(event: crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CEvent, KeyEvent, KeyEventKind, MouseEventKind};

    match event {
        CEvent::Key(KeyEvent {
            code,
            modifiers,
            kind,
            ..
        }) if kind != KeyEventKind::Release => Some(Event::Key(convert_key(code, modifiers))),
        CEvent::Mouse(me) => {
            let (col, row) = (me.column, me.row);
            let mouse_event = match me.kind {
                MouseEventKind::Down(btn) => {
                    let button = match btn {
                        crossterm::event::MouseButton::Left => MouseButton::Left,
                        crossterm::event::MouseButton::Right => MouseButton::Right,
                        crossterm::event::MouseButton::Middle => MouseButton::Middle,
                    };
                    MouseEvent::Press(button, col, row)
                }
                MouseEventKind::Up(_) => MouseEvent::Release(col, row),
                MouseEventKind::ScrollUp => MouseEvent::ScrollUp(col, row),
                MouseEventKind::ScrollDown => MouseEvent::ScrollDown(col, row),
                _ => return None,
            };
            Some(Event::Mouse(mouse_event))
        }
        CEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
        _ => None,
    }
}

/// Convert crossterm key code to our Key type
#[cfg(feature = "tui")]
fn convert_key(code: crossterm::event::KeyCode, mods: crossterm::event::KeyModifiers) -> Key {
    use crossterm::event::{KeyCode, KeyModifiers};

    if let KeyCode::Char(c) = code {
        if mods.contains(KeyModifiers::CONTROL) {
            return Key::Ctrl(c);
        }
        if mods.contains(KeyModifiers::ALT) {
            return Key::Alt(c);
        }
    }

    match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    #[test]
    fn test_click_activates_inside_bounds() {
        let bounds = Some(Rect::new(5, 2, 3, 1));
        assert!(Event::click(6, 2).activates(bounds, false));
        assert!(!Event::click(8, 2).activates(bounds, false));
        assert!(!Event::click(6, 2).activates(None, true));
        assert!(!Event::Mouse(MouseEvent::Press(MouseButton::Right, 6, 2)).activates(bounds, true));
    }

    #[test]
    fn test_keys_activate_only_when_focused() {
        let bounds = Some(Rect::new(0, 0, 1, 1));
        assert!(Event::Key(Key::Enter).activates(bounds, true));
        assert!(Event::Key(Key::Char(' ')).activates(bounds, true));
        assert!(!Event::Key(Key::Enter).activates(bounds, false));
        assert!(!Event::Key(Key::Char('x')).activates(bounds, true));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_convert_key_modifiers() {
        use crossterm::event::{KeyCode, KeyModifiers};

        assert_eq!(convert_key(KeyCode::Char('c'), KeyModifiers::CONTROL), Key::Ctrl('c'));
        assert_eq!(convert_key(KeyCode::Char('x'), KeyModifiers::ALT), Key::Alt('x'));
        assert_eq!(convert_key(KeyCode::BackTab, KeyModifiers::SHIFT), Key::BackTab);
        assert_eq!(convert_key(KeyCode::F(5), KeyModifiers::NONE), Key::Null);
    }
}
