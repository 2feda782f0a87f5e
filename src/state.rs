//! Caller-owned state and two-way bindings
//!
//! Screens own their mutable UI state as `State<T>` values and hand controls
//! either a clone of the state (to read) or a `Binding<T>` (to read and write
//! back). Everything runs on the render thread, so sharing is `Rc` based.
//!
//! # Example
//!
//! ```ignore
//! let notifications = State::new(true);
//!
//! // Each render builds a toggle bound to the caller's value
//! let toggle = ControlToggle::new(notifications.binding());
//!
//! // After the user flips it, the owner observes the new value
//! assert!(!notifications.get());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Shared mutable value owned by a screen
///
/// Clones share the same value.
pub struct State<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        State {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner.borrow().clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Update the value using a closure
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        f(&mut self.inner.borrow_mut());
    }

    /// Two-way binding to this state
    pub fn binding(&self) -> Binding<T>
    where
        T: Clone + 'static,
    {
        let read = self.clone();
        let write = self.clone();
        Binding::new(move || read.get(), move |value| write.set(value))
    }
}

impl State<bool> {
    /// Flip a boolean state
    pub fn toggle(&self) {
        self.update(|value| *value = !*value);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        State {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for State<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("State").field(&self.inner.borrow()).finish()
    }
}

/// Read/write access to a value owned elsewhere
///
/// The binding never stores the value itself; every `get` reads through to
/// the owner and every `set` writes back to it.
pub struct Binding<T> {
    read: Rc<dyn Fn() -> T>,
    write: Rc<dyn Fn(T)>,
}

impl<T: 'static> Binding<T> {
    /// Binding from a getter and a setter
    pub fn new(read: impl Fn() -> T + 'static, write: impl Fn(T) + 'static) -> Self {
        Binding {
            read: Rc::new(read),
            write: Rc::new(write),
        }
    }

    /// Binding to a fixed value; writes are ignored
    pub fn constant(value: T) -> Self
    where
        T: Clone,
    {
        Binding::new(move || value.clone(), |_| {})
    }

    /// Current value
    pub fn get(&self) -> T {
        (self.read)()
    }

    /// Write a new value back to the owner
    pub fn set(&self, value: T) {
        (self.write)(value)
    }

    /// Project a binding onto a derived value
    ///
    /// `to` maps the owner's value to the derived one; `from` maps a written
    /// derived value back to the owner's type.
    pub fn map<U: 'static>(
        &self,
        to: impl Fn(T) -> U + 'static,
        from: impl Fn(U) -> T + 'static,
    ) -> Binding<U> {
        let read = Rc::clone(&self.read);
        let write = Rc::clone(&self.write);
        Binding::new(move || to(read()), move |value| write(from(value)))
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Binding {
            read: Rc::clone(&self.read),
            write: Rc::clone(&self.write),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.get()).finish()
    }
}
