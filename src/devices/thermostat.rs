use std::{cell::Cell, fmt};

/// A thermostat holding a target temperature in whole degrees Celsius.
#[derive(Debug)]
pub struct Thermostat {
    location: String,
    temperature: Cell<i32>,
}

impl Thermostat {
    /// Temperature every thermostat starts at.
    pub const DEFAULT_TEMPERATURE: i32 = 20;

    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            temperature: Cell::new(Self::DEFAULT_TEMPERATURE),
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature.get()
    }

    pub fn set(&self, degrees: i32) {
        self.temperature.set(degrees);
        tracing::debug!(location = %self.location, degrees, "thermostat set");
        super::announce(self);
    }
}

impl fmt::Display for Thermostat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[Thermo] {}: Temp set to: {}°C",
            self.location,
            self.temperature()
        )
    }
}
