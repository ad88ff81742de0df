use std::borrow::Cow;

use crate::{devices::Door, traits::command::Command};

/// Opens a door; undo closes it.
#[derive(Debug, Clone, Copy)]
pub struct DoorOpenCommand<'a> {
    door: &'a Door,
}

impl<'a> DoorOpenCommand<'a> {
    #[must_use]
    pub fn new(door: &'a Door) -> Self {
        Self { door }
    }
}

impl Command for DoorOpenCommand<'_> {
    fn execute(&self) {
        self.door.open();
    }

    fn undo(&self) {
        self.door.close();
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("DoorOpen({})", self.door.location()))
    }
}
