//! Type aliases for shared UI state.
//!
//! Widgets handed to the scale control are owned by the control, while the
//! host (or a test) keeps a second handle to observe them. Everything runs on
//! the UI thread, so plain `Rc<RefCell<T>>` is enough.
//!
//! ```rust,ignore
//! use scalekit_core::types::{shared, Shared};
//!
//! let text: Shared<String> = shared(String::new());
//! text.borrow_mut().push_str("1.5");
//! ```

use std::cell::RefCell;
use std::rc::Rc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
pub type Shared<T> = Rc<RefCell<T>>;

/// Wrap a value in a [`Shared`] handle.
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handles_see_same_value() {
        let a = shared(1.0f32);
        let b = Rc::clone(&a);
        *b.borrow_mut() = 2.5;
        assert_eq!(*a.borrow(), 2.5);
    }
}
