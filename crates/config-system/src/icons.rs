//! Icon policy: denylists and per-icon presentation overrides
//!
//! The disallowed set is configuration data, not logic: it lists icon ids
//! that are purely decorative map dressing and must never become
//! interactive or show tooltips. It ships with a built-in table and can be
//! overridden from a stored file like any other setting.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Icon ids that never get tooltips or click handlers. Zero means "no
/// icon"; the 60091+ block is area/sub-area label dressing.
const DEFAULT_DISALLOWED_ICONS: &[u32] = &[0, 60091, 60092, 60093, 60094, 60095, 60096];

/// Per-icon display override.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IconSetting {
    pub hidden: bool,
    pub scale: f32,
}

impl Default for IconSetting {
    fn default() -> Self {
        Self {
            hidden: false,
            scale: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPolicy {
    disallowed: HashSet<u32>,
    overrides: HashMap<u32, IconSetting>,
}

impl Default for IconPolicy {
    fn default() -> Self {
        Self {
            disallowed: DEFAULT_DISALLOWED_ICONS.iter().copied().collect(),
            overrides: HashMap::new(),
        }
    }
}

impl IconPolicy {
    /// Whether this icon is excluded from interactivity and tooltips.
    pub fn is_disallowed(&self, icon_id: u32) -> bool {
        self.disallowed.contains(&icon_id)
    }

    pub fn setting(&self, icon_id: u32) -> IconSetting {
        self.overrides.get(&icon_id).copied().unwrap_or_default()
    }

    pub fn set_override(&mut self, icon_id: u32, setting: IconSetting) {
        self.overrides.insert(icon_id, setting);
    }
}
