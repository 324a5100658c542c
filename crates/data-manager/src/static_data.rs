//! Static game data records and the lookup seam
//!
//! The host exposes its data sheets as key/record lookups. They are
//! side-effect free and referentially stable for a whole session, which is
//! what makes the memoizing caches in [`crate::cache`] sound.

/// One teleport destination from the aetheryte sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AetheryteRecord {
    pub id: u32,
    /// Sub-row index passed to the teleport capability alongside the id.
    pub sub_id: u8,
    pub place_name_id: u32,
    /// Aethernet group key; zero when this aetheryte is not part of a
    /// local aethernet.
    pub aethernet_key: u32,
}

/// Per-map metadata needed for coordinate display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    pub id: u32,
    pub place_name_id: u32,
    /// Percent scale of this map relative to the base 2048-unit texture
    /// (100 = 1:1, 200 = half-size zone).
    pub size_factor: u16,
    pub offset_x: i16,
    pub offset_y: i16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheringPointRecord {
    pub id: u32,
    pub base_id: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatheringPointBaseRecord {
    pub id: u32,
    pub gathering_type: u32,
}

/// Read-only access to the host's static data sheets.
///
/// Lookups by id may legitimately miss (sparse sheets); callers decide
/// whether a miss is expected absence or a data inconsistency.
pub trait StaticGameData {
    fn aetheryte(&self, id: u32) -> Option<AetheryteRecord>;

    /// Every aetheryte in the sheet, for scans keyed on something other
    /// than the row id.
    fn aetherytes(&self) -> Vec<AetheryteRecord>;

    fn map(&self, id: u32) -> Option<MapRecord>;

    fn place_name(&self, id: u32) -> Option<String>;

    fn gathering_point(&self, id: u32) -> Option<GatheringPointRecord>;

    fn gathering_point_base(&self, id: u32) -> Option<GatheringPointBaseRecord>;

    /// Localized display label for a map icon.
    fn icon_label(&self, icon_id: u32) -> Option<String>;
}
