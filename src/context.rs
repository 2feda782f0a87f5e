//! Rendering context - provides theme and focus tracking to components

use crate::focus::{FocusRing, FocusSlot};
use crate::theme::Theme;

/// Context passed down the component tree during rendering (like React Context)
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Current theme
    pub theme: &'a Theme,

    /// Focus ring for the frame being rendered
    pub focus: &'a FocusRing,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context
    pub fn new(theme: &'a Theme, focus: &'a FocusRing) -> Self {
        RenderContext { theme, focus }
    }

    /// Create a child context with a different theme
    pub fn with_theme(&self, theme: &'a Theme) -> Self {
        RenderContext {
            theme,
            focus: self.focus,
        }
    }
}

/// Hook trait for accessing theme from context
pub trait UseTheme {
    /// Get the current theme
    fn use_theme<'a>(&self, ctx: &RenderContext<'a>) -> &'a Theme {
        ctx.theme
    }
}

/// Hook trait for activatable controls
pub trait UseFocus {
    /// Claim this control's slot in the focus ring for the current frame
    fn use_focus(&self, ctx: &RenderContext) -> FocusSlot {
        ctx.focus.claim()
    }
}

/// Auto-implement all hook traits for all components
impl<T> UseTheme for T {}
impl<T> UseFocus for T {}
