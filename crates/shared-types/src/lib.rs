//! Shared types for the Overmap architecture
//!
//! This crate contains all types that are shared between the data-manager,
//! config-system, and renderer crates: the raw marker records read from the
//! live game state, the per-frame presentation built from them, and the
//! error taxonomy used across the workspace.

use nalgebra_glm::Vec2;

pub mod errors;
pub mod events;
pub mod presentation;

pub use errors::{OvermapError, OvermapResult};
pub use events::{ElementState, MapInputEvent, MouseButton, PhysicalPosition};
pub use presentation::{ClickAction, Color, MarkerPresentation, TextSource};

/// The kind of map object a marker annotates, decoded from the numeric
/// data type tag the game attaches to each marker slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerKind {
    /// Jump point to another map (zone exits, region maps).
    MapLink,
    /// Entrance to an instanced duty; carries the instance id as its key.
    InstanceLink,
    /// A fixed teleport destination; key is the aetheryte row id.
    Aetheryte,
    /// A local teleport shard; key is the aethernet name id, which may or
    /// may not resolve to a parent aetheryte.
    Aethernet,
    /// A marker that may correspond to a live fate by name.
    FateCandidate,
    /// A gathering area. The raw tables tag these as generic markers with
    /// no icon; the live source synthesizes this kind when the marker
    /// carries a gathering point key, and the icon is resolved from the
    /// gathering type.
    GatheringPoint,
    /// Everything else: quest objectives, decorations.
    Generic,
}

impl MarkerKind {
    /// Decode the raw data type tag used by the live marker tables.
    pub fn from_raw(tag: u8) -> Self {
        match tag {
            1 => MarkerKind::MapLink,
            2 => MarkerKind::InstanceLink,
            3 => MarkerKind::Aetheryte,
            4 => MarkerKind::Aethernet,
            5 => MarkerKind::FateCandidate,
            _ => MarkerKind::Generic,
        }
    }
}

/// A raw marker record as read from the live game state.
///
/// Produced fresh each frame by the live-state collaborator and never
/// mutated by the pipeline; everything derived from it lives in
/// [`MarkerPresentation`] and is rebuilt every render pass.
#[derive(Debug, Clone)]
pub struct MarkerRecord {
    pub kind: MarkerKind,
    /// Identifier whose meaning depends on `kind` (map id, aetheryte row,
    /// aethernet key, instance id, ...).
    pub data_key: u32,
    /// Raw world units, center-based coordinate system.
    pub world_position: Vec2,
    pub icon_id: u32,
    /// World-space radius for area markers; zero for point markers.
    pub radius: f32,
    /// Free-form label baked into the marker table, often empty.
    pub subtext: String,
}

/// Snapshot of one live fate, read once per frame.
///
/// `time_remaining` is negative when the fate has no countdown (collection
/// fates, expired timers); callers must branch on the sign rather than
/// formatting a negative clock.
#[derive(Debug, Clone)]
pub struct FateSnapshot {
    pub name: String,
    pub level: u8,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    pub time_remaining: chrono::Duration,
}
