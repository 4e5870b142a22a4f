use deptrace::prelude::*;
use std::cell::RefCell;

/// ExclusionEditor recording the actions instead of editing descriptors
#[derive(Default)]
pub struct RecordingExclusionEditor {
    pub applied: RefCell<Vec<ExclusionAction>>,
}

impl RecordingExclusionEditor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExclusionEditor for RecordingExclusionEditor {
    fn exclude(&self, action: &ExclusionAction) -> Result<()> {
        self.applied.borrow_mut().push(action.clone());
        Ok(())
    }
}
