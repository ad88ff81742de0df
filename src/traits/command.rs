use std::borrow::Cow;

/// A trait representing an action that can be executed and later undone.
///
/// A command binds to the device it drives when it is constructed, so neither
/// `execute` nor `undo` takes any arguments. Both operations must be exact
/// inverses of each other as far as the bound device is concerned.
///
/// # Required Methods
///
/// * `execute(&self)`: Applies the forward action to the bound device.
/// * `undo(&self)`: Applies the inverse action to the bound device.
///
/// # Provided Methods
///
/// * `description(&self) -> Cow<str>`: Returns a description of the command. The default implementation returns "Unknown command".
///
/// # Example
///
/// ```
/// use remote_control::prelude::Command;
/// use std::borrow::Cow;
/// use std::cell::Cell;
///
/// struct Toggle<'a> {
///     flag: &'a Cell<bool>,
/// }
///
/// impl Command for Toggle<'_> {
///     fn execute(&self) {
///         self.flag.set(true);
///     }
///
///     fn undo(&self) {
///         self.flag.set(false);
///     }
///
///     fn description(&self) -> Cow<'_, str> {
///         Cow::Borrowed("Toggle")
///     }
/// }
///
/// let flag = Cell::new(false);
/// let cmd = Toggle { flag: &flag };
/// cmd.execute();
/// assert!(flag.get());
/// cmd.undo();
/// assert!(!flag.get());
/// assert_eq!(cmd.description(), "Toggle");
/// ```
pub trait Command {
    /// Applies the forward action to the bound device.
    fn execute(&self);

    /// Applies the inverse action to the bound device.
    fn undo(&self);

    /// Returns a description of the command. The default implementation returns "Unknown command".
    ///
    /// # Returns
    ///
    /// A string slice that holds the description of the command.
    fn description(&self) -> Cow<'_, str> {
        Cow::Borrowed("Unknown command")
    }
}
