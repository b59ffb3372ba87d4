use core::cell::{Cell, RefCell};

use alloc::rc::Rc;
use alloc::vec::Vec;

use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin, StatefulOutputPin};

#[derive(Debug, Clone, Copy)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Output pin that records every level it is driven to.
///
/// Clones share the same history so a test can keep a handle after moving
/// the pin into a channel.
#[derive(Debug, Clone, Default)]
pub struct MockPin {
    states: Rc<RefCell<Vec<bool>>>,
    forced: Rc<Cell<Option<bool>>>,
    failing: Rc<Cell<bool>>,
    unreadable: Rc<Cell<bool>>,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_states(&self) -> Vec<bool> {
        self.states.borrow().clone()
    }

    pub fn is_high(&self) -> bool {
        self.forced
            .get()
            .unwrap_or_else(|| self.states.borrow().last().copied().unwrap_or(false))
    }

    /// Pins the observed level regardless of writes, like a welded relay contact.
    pub fn force(&self, level: Option<bool>) {
        self.forced.set(level);
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn fail_reads(&self, failing: bool) {
        self.unreadable.set(failing);
    }

    fn read(&self) -> Result<bool, MockPinError> {
        if self.unreadable.get() {
            return Err(MockPinError);
        }
        Ok(self.is_high())
    }

    fn push(&self, high: bool) -> Result<(), MockPinError> {
        if self.failing.get() {
            return Err(MockPinError);
        }
        self.states.borrow_mut().push(high);
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.push(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.push(true)
    }
}

impl StatefulOutputPin for MockPin {
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        self.read()
    }

    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        self.read().map(|high| !high)
    }
}
