//! Built-in UI components

pub mod controls;
pub mod flexible_row;
pub mod image;
pub mod list;
pub mod scrollable;
pub mod slot_content;
pub mod stack;
pub mod text;

pub use controls::{ControlButton, ControlRadio, ControlToggle};
pub use flexible_row::{FlexibleRow, SlotFn};
pub use image::Image;
pub use list::{ListView, Section};
pub use scrollable::ScrollableView;
pub use slot_content::{Empty, Spacer};
pub use stack::Stack;
pub use text::{Font, Text, TextAlign};
