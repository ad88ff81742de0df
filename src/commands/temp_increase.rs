use std::borrow::Cow;

use crate::{devices::Thermostat, traits::command::Command};

/// Raises the thermostat to a fixed comfort temperature.
///
/// Despite the name, this does not apply a relative change: `execute` always
/// sets [`TempIncreaseCommand::TARGET`] and `undo` always sets
/// [`TempIncreaseCommand::RESTORE`], whatever the thermostat read before.
#[derive(Debug, Clone, Copy)]
pub struct TempIncreaseCommand<'a> {
    thermostat: &'a Thermostat,
}

impl<'a> TempIncreaseCommand<'a> {
    /// Nominal step size. Not used by `execute` or `undo`.
    pub const DELTA: i32 = 2;
    pub const TARGET: i32 = 22;
    pub const RESTORE: i32 = 20;

    #[must_use]
    pub fn new(thermostat: &'a Thermostat) -> Self {
        Self { thermostat }
    }
}

impl Command for TempIncreaseCommand<'_> {
    fn execute(&self) {
        self.thermostat.set(Self::TARGET);
    }

    fn undo(&self) {
        self.thermostat.set(Self::RESTORE);
    }

    fn description(&self) -> Cow<'_, str> {
        Cow::Owned(format!("TempIncrease({})", self.thermostat.location()))
    }
}
