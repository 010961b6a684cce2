// ── Tab ──
//
// A label plus the stable name it is addressed by. The name falls back to
// the label when none is given.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single selectable tab header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawTab")]
pub struct Tab {
    label: String,
    name: String,
}

impl Tab {
    /// Tab whose name is its label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            name: label.clone(),
            label,
        }
    }

    /// Tab with an explicit name distinct from what is shown.
    pub fn named(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl From<&str> for Tab {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

/// Deserialized shape, with the name still optional.
#[derive(Deserialize)]
struct RawTab {
    label: String,
    name: Option<String>,
}

impl From<RawTab> for Tab {
    fn from(raw: RawTab) -> Self {
        match raw.name {
            Some(name) => Self::named(raw.label, name),
            None => Self::new(raw.label),
        }
    }
}
