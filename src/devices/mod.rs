mod door;
mod light;
mod television;
mod thermostat;

pub use door::Door;
pub use light::Light;
pub use television::Television;
pub use thermostat::Thermostat;

/// Writes the device's current status line to stdout.
///
/// Every device announces its new state after each change; this is the only
/// observable output a device produces.
pub(crate) fn announce(device: &impl std::fmt::Display) {
    println!("   {device}");
}
