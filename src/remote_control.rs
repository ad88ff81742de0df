use crate::{
    error::RemoteError,
    traits::{command::Command, command_dispatcher::CommandDispatcher},
};

/// Executes commands and keeps them on a last-in-first-out history for undo.
///
/// Commands borrow the devices they drive, so the remote cannot outlive those
/// devices.
///
/// # Examples
///
/// ```
/// use remote_control::prelude::*;
///
/// let light = Light::new("Kitchen");
/// let mut remote = RemoteControl::new();
///
/// remote.press(Box::new(LightOnCommand::new(&light)));
/// assert!(light.is_on());
///
/// remote.undo().unwrap();
/// assert!(!light.is_on());
///
/// assert_eq!(remote.undo(), Err(RemoteError::EmptyHistory));
/// ```
#[derive(Default)]
pub struct RemoteControl<'a> {
    history: Vec<Box<dyn Command + 'a>>,
}

impl<'a> RemoteControl<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            history: Vec::new(),
        }
    }

    /// Returns the commands available for undo, most recent first.
    #[must_use]
    pub fn history(&self) -> Option<Vec<&(dyn Command + 'a)>> {
        if self.history.is_empty() {
            None
        } else {
            Some(self.history.iter().rev().map(|command| &**command).collect())
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl<'a> CommandDispatcher<'a> for RemoteControl<'a> {
    fn press(&mut self, command: Box<dyn Command + 'a>) {
        tracing::info!(command = %command.description(), "EXECUTE");
        command.execute();

        self.history.push(command);
    }

    fn undo(&mut self) -> Result<(), RemoteError> {
        let Some(command) = self.history.pop() else {
            tracing::warn!("undo requested with empty history");
            return Err(RemoteError::EmptyHistory);
        };

        tracing::info!(command = %command.description(), "UNDO");
        command.undo();
        Ok(())
    }
}

impl std::fmt::Debug for RemoteControl<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteControl")
            .field(
                "history",
                &self
                    .history
                    .iter()
                    .map(|command| command.description())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
