//! Live game state and host collaborator seams
//!
//! Everything read through [`LiveState`] races with the host's own update
//! thread, so every value is a snapshot valid only for the current frame.
//! The pipeline never caches or diffs these reads across frames except via
//! explicitly modeled state (the renderer's `last_map_id`).

use nalgebra_glm::Vec2;
use overmap_shared::{FateSnapshot, MarkerRecord};

/// Per-frame reads from the running game client.
pub trait LiveState {
    /// The marker table for the currently selected map, re-fetched every
    /// frame.
    fn markers(&self) -> Vec<MarkerRecord>;

    /// Active fates in the current zone; small, typically single digits.
    fn active_fates(&self) -> Vec<FateSnapshot>;

    /// Gil cost to teleport to an aetheryte, zero when it is not in the
    /// player's teleport list.
    fn teleport_cost(&self, aetheryte_id: u32) -> u32;

    /// The map the overlay is displaying.
    fn selected_map_id(&self) -> u32;

    /// The map the player is physically in.
    fn current_map_id(&self) -> u32;

    /// Player position in raw world units, when a player exists.
    fn player_position(&self) -> Option<Vec2>;
}

/// Map-navigation collaborator: switches the displayed map.
pub trait MapNavigator {
    fn open_map(&self, map_id: u32);
}

/// User-facing notification channel. Fire-and-forget; failures to deliver
/// are the host's problem.
pub trait Notifier {
    fn print_error(&self, text: &str);
    fn print_toast(&self, text: &str);
}
