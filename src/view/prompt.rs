use std::{cell::RefCell, rc::Rc};

/// Blocking user dialogs.
pub trait Prompt {
    /// Ask a yes/no question; `true` means the user agreed.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Prompt for runs without a browser: answers every confirmation the same way and
/// records what would have been shown.
#[derive(Clone, Debug)]
pub struct HeadlessPrompt {
    answer: bool,
    confirmations: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl HeadlessPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: Rc::default(),
            alerts: Rc::default(),
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Prompt for HeadlessPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
