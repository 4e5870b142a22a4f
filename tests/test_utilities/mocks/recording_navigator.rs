use deptrace::prelude::*;
use std::cell::RefCell;

/// DescriptorNavigator recording every location it was asked to open
#[derive(Default)]
pub struct RecordingNavigator {
    pub visited: RefCell<Vec<DescriptorLocation>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DescriptorNavigator for RecordingNavigator {
    fn navigate(&self, location: &DescriptorLocation) -> Result<()> {
        self.visited.borrow_mut().push(location.clone());
        Ok(())
    }
}
