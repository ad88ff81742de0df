use std::{cell::Cell, fmt};

#[derive(Debug)]
pub struct Door {
    location: String,
    open: Cell<bool>,
}

impl Door {
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            open: Cell::new(false),
        }
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn open(&self) {
        self.set_open(true);
    }

    pub fn close(&self) {
        self.set_open(false);
    }

    fn set_open(&self, open: bool) {
        self.open.set(open);
        tracing::debug!(location = %self.location, open, "door moved");
        super::announce(self);
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_open() { "OPEN" } else { "CLOSE" };
        write!(f, "[Door] {}: {state}", self.location)
    }
}
