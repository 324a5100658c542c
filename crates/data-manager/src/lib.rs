//! Data access layer for the Overmap overlay
//!
//! Wraps the host's static game data tables and live state behind trait
//! seams, provides the memoizing lookup caches that sit between them and
//! the render pipeline, and hosts the teleport gateway.

pub mod cache;
pub mod live_state;
pub mod static_data;
pub mod teleport;

pub use cache::{
    aethernet_cache, gathering_icon_cache, icon_tooltip_cache, AethernetCache,
    GatheringIconCache, LookupCache, TooltipCache,
};
pub use live_state::{LiveState, MapNavigator, Notifier};
pub use static_data::{
    AetheryteRecord, GatheringPointBaseRecord, GatheringPointRecord, MapRecord, StaticGameData,
};
pub use teleport::{format_gil, TeleportGateway, TeleportIpc};
