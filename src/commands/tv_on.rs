use std::borrow::Cow;

use crate::{devices::Television, traits::command::Command};

#[derive(Debug, Clone, Copy)]
pub struct TvOnCommand<'a> {
    tv: &'a Television,
}

impl<'a> TvOnCommand<'a> {
    #[must_use]
    pub fn new(tv: &'a Television) -> Self {
        Self { tv }
    }
}

impl Command for TvOnCommand<'_> {
    fn execute(&self) {
        self.tv.on();
    }

    fn undo(&self) {
        self.tv.off();
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("TvOn({})", self.tv.location()))
    }
}
