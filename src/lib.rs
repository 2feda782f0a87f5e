//! flexrow - slot-based row composition for terminal UIs
//!
//! Settings-style screens built from rows with three content slots:
//! - `FlexibleRow` lays out leading, center and trailing content with a
//!   flexible gap before the trailing slot
//! - `ControlButton`, `ControlToggle` and `ControlRadio` cover the common
//!   trailing controls
//! - Immediate mode rendering: components are rebuilt from caller-owned
//!   `State` every frame, then diffed onto the terminal
//! - Flex-based layout system

pub mod app;
pub mod component;
pub mod components;
pub mod config;
pub mod context;
pub mod event;
pub mod focus;
pub mod layout;
pub mod render;
pub mod state;
pub mod style;
pub mod terminal;
pub mod theme;

// Re-export commonly used types
#[cfg(feature = "tui")]
pub use app::App;
pub use app::{dispatch, render_frame, Flow};
pub use component::Component;
pub use components::{
    ControlButton, ControlRadio, ControlToggle, Empty, FlexibleRow, Font, Image, ListView,
    ScrollableView, Section, Spacer, Stack, Text, TextAlign,
};
pub use config::Config;
pub use context::{RenderContext, UseFocus, UseTheme};
pub use event::{Event, EventHandler, Key, MouseButton, MouseEvent};
pub use focus::{FocusDirection, FocusRing};
pub use layout::Rect;
pub use render::{Buffer, Renderer};
pub use state::{Binding, State};
pub use style::Style;
pub use terminal::{TerminalCapabilities, TerminalContext, TerminalGeometry};
pub use theme::{Color, Theme};
