//! Client application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` tracks the signed-in user and token; `questions` holds every list
//! and statistic the pages render. Both are provided as context by `App`.
//!
//! DESIGN
//! ======
//! State operations mutate through `StateCell`, implemented for `RwSignal`
//! in the app and for `Rc<RefCell<_>>` in tests, so async contracts run
//! without a reactive runtime.

pub mod auth;
pub mod questions;

use leptos::prelude::*;

/// Shared, mutable holder of one state value.
pub trait StateCell<T> {
    fn snapshot(&self) -> T;
    fn modify(&self, f: impl FnOnce(&mut T));
}

impl<T: Clone + Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn snapshot(&self) -> T {
        self.get_untracked()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }
}

#[cfg(test)]
impl<T: Clone> StateCell<T> for std::rc::Rc<std::cell::RefCell<T>> {
    fn snapshot(&self) -> T {
        self.borrow().clone()
    }

    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }
}
