//! Root controller: owns the visitor name and decides which screen is up.

use log::{info, warn};

use keepsake_core::enums::Screen;
use keepsake_core::types::VisitorName;

#[derive(Debug, Default)]
pub struct RootController {
    name: Option<VisitorName>,
}

impl RootController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&VisitorName> {
        self.name.as_ref()
    }

    pub fn screen(&self) -> Screen {
        if self.name.is_some() {
            Screen::Story
        } else {
            Screen::NameEntry
        }
    }

    /// Store the name. The name is write-once; later calls return `false`
    /// and leave it untouched.
    pub fn accept_name(&mut self, name: VisitorName) -> bool {
        if let Some(current) = &self.name {
            warn!("root controller: name already set to {current}, ignoring {name}");
            return false;
        }
        info!("root controller: story unlocked for {name}");
        self.name = Some(name);
        true
    }
}
