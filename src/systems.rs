use crate::error::{LauncherError, LauncherResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One emulated platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    /// Used to derive asset paths and the stripe cache key
    pub name: String,
    pub color: [u8; 3],
}

impl System {
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }

    pub fn logo_path(&self) -> String {
        format!("systems/{}.png", self.name)
    }
}

const BUILTIN: [(&str, [u8; 3]); 12] = [
    ("arcade", [211, 84, 0]),
    ("gameboy", [127, 140, 141]),
    ("gamegear", [44, 62, 80]),
    ("gba", [142, 68, 173]),
    ("gbc", [22, 160, 133]),
    ("megadrive", [41, 105, 176]),
    ("neogeo", [52, 73, 94]),
    ("nes", [209, 72, 65]),
    ("ngpx", [241, 196, 15]),
    ("psx", [33, 33, 33]),
    ("sms", [26, 188, 156]),
    ("snes", [251, 192, 45]),
];

/// Circular list of systems with a cursor on the active one
#[derive(Debug, Clone)]
pub struct SystemRing {
    systems: Vec<System>,
    current: usize,
}

impl SystemRing {
    pub fn new(systems: Vec<System>) -> LauncherResult<Self> {
        if systems.is_empty() {
            return Err(LauncherError::systems("at least one system is required"));
        }
        Ok(Self {
            systems,
            current: 0,
        })
    }

    /// The twelve platforms shipped by default
    pub fn builtin() -> Self {
        Self {
            systems: BUILTIN
                .iter()
                .map(|&(name, color)| System::new(name, color))
                .collect(),
            current: 0,
        }
    }

    /// Load a substitute table from a JSON array of systems
    pub fn load(path: impl AsRef<Path>) -> LauncherResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| LauncherError::systems(format!("{}: {}", path.display(), e)))?;
        let systems: Vec<System> = serde_json::from_str(&json)
            .map_err(|e| LauncherError::systems(format!("{}: {}", path.display(), e)))?;
        Self::new(systems)
    }

    pub fn len(&self) -> usize {
        self.systems.len()
    }

    #[cfg(test)]
    pub fn index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &System {
        &self.systems[self.current]
    }

    pub fn following(&self) -> &System {
        &self.systems[self.following_index()]
    }

    pub fn preceding(&self) -> &System {
        &self.systems[self.preceding_index()]
    }

    pub fn advance(&mut self) {
        self.current = self.following_index();
    }

    pub fn retreat(&mut self) {
        self.current = self.preceding_index();
    }

    fn following_index(&self) -> usize {
        (self.current + 1) % self.systems.len()
    }

    fn preceding_index(&self) -> usize {
        (self.current + self.systems.len() - 1) % self.systems.len()
    }
}

impl Default for SystemRing {
    fn default() -> Self {
        Self::builtin()
    }
}
