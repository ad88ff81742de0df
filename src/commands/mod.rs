mod door_open;
mod light_on;
mod temp_increase;
mod tv_on;

pub use door_open::DoorOpenCommand;
pub use light_on::LightOnCommand;
pub use temp_increase::TempIncreaseCommand;
pub use tv_on::TvOnCommand;
