#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::style)]
#![warn(clippy::correctness)]
#![warn(clippy::complexity)]
#![warn(clippy::suspicious)]
#![warn(clippy::cargo)]

pub mod commands;
pub mod devices;
pub mod error;
pub mod remote_control;
pub mod traits;

pub mod prelude {
	pub use crate::commands::{DoorOpenCommand, LightOnCommand, TempIncreaseCommand, TvOnCommand};
	pub use crate::devices::{Door, Light, Television, Thermostat};
	pub use crate::error::RemoteError;
	pub use crate::remote_control::RemoteControl;
	pub use crate::traits::command::Command;
	pub use crate::traits::command_dispatcher::CommandDispatcher;
}
