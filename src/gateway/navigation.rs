use std::{cell::RefCell, rc::Rc};

/// Performs a full navigation away from the running client.
///
/// Unlike in-app routing this discards all in-memory state, which is what the gateway
/// wants after the backend rejects the session.
pub trait Navigator {
    fn redirect(&self, location: &str);
}

/// Navigator for runs without a browser; it records the requested locations.
#[derive(Clone, Default, Debug)]
pub struct HeadlessNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl HeadlessNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every location requested so far, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for HeadlessNavigator {
    fn redirect(&self, location: &str) {
        self.visited.borrow_mut().push(location.to_string());
    }
}
