use std::{cell::Cell, fmt};

/// A light fixture identified by the room it hangs in.
#[derive(Debug)]
pub struct Light {
    location: String,
    on: Cell<bool>,
}

impl Light {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            on: Cell::new(false),
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn is_on(&self) -> bool {
        self.on.get()
    }

    pub fn on(&self) {
        self.switch(true);
    }

    pub fn off(&self) {
        self.switch(false);
    }

    fn switch(&self, on: bool) {
        self.on.set(on);
        tracing::debug!(location = %self.location, on, "light switched");
        super::announce(self);
    }
}

impl fmt::Display for Light {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_on() { "ON" } else { "OFF" };
        write!(f, "[Light] {}: {state}", self.location)
    }
}
