use remote_control::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let light = Light::new("Kitchen");
    let door = Door::new("Garage");
    let thermo = Thermostat::new("Hallway");
    let tv = Television::new("Living Room");

    let mut remote = RemoteControl::new();

    println!("Testing Command Execution and History");
    remote.press(Box::new(LightOnCommand::new(&light)));
    remote.press(Box::new(DoorOpenCommand::new(&door)));
    remote.press(Box::new(TempIncreaseCommand::new(&thermo)));
    remote.press(Box::new(TvOnCommand::new(&tv)));

    println!("\nTesting Undo Functionality");
    // One more undo than presses; the last one exercises the empty-history path.
    for _ in 0..5 {
        if let Err(err) = remote.undo() {
            tracing::error!("{err}");
        }
    }
}
