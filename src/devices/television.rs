use std::{cell::Cell, fmt};

#[derive(Debug)]
pub struct Television {
    location: String,
    on: Cell<bool>,
}

impl Television {
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
        self.power(true);
    }

    pub fn off(&self) {
        self.power(false);
    }

    fn power(&self, on: bool) {
        self.on.set(on);
        tracing::debug!(location = %self.location, on, "television powered");
        super::announce(self);
    }
}

impl fmt::Display for Television {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_on() { "ON" } else { "OFF" };
        write!(f, "[TV] {}: Power {state}", self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power() {
        let tv = Television::new("Living Room");
        assert!(!tv.is_on());

        tv.on();
        assert!(tv.is_on());
        assert_eq!(tv.to_string(), "[TV] Living Room: Power ON");

        tv.off();
        assert!(!tv.is_on());
        assert_eq!(tv.to_string(), "[TV] Living Room: Power OFF");
    }
}
