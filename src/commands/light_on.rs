use std::borrow::Cow;

use crate::{devices::Light, traits::command::Command};

/// Turns a light on; undo turns it back off.
#[derive(Debug, Clone, Copy)]
pub struct LightOnCommand<'a> {
    light: &'a Light,
}

impl<'a> LightOnCommand<'a> {
    #[must_use]
    pub fn new(light: &'a Light) -> Self {
        Self { light }
    }
}

impl Command for LightOnCommand<'_> {
    fn execute(&self) {
        self.light.on();
    }

    fn undo(&self) {
        self.light.off();
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("LightOn({})", self.light.location()))
    }
}
