use crate::error::RemoteError;

use super::command::Command;

pub trait CommandDispatcher<'a> {
    fn press(&mut self, command: Box<dyn Command + 'a>);

    /// Reverts the most recently pressed command that has not been undone yet.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::EmptyHistory`] when there is nothing left to undo.
    fn undo(&mut self) -> Result<(), RemoteError>;

    fn press_all<I>(&mut self, commands: I)
    where
        I: IntoIterator<Item = Box<dyn Command + 'a>>,
    {
        for command in commands {
            self.press(command);
        }
    }
}
