//! Memoizing lookup caches between static game data and the render pipeline
//!
//! Keyspaces are small and bounded by static game data, so entries are
//! retained for the process lifetime and growth is never a concern. The
//! interesting invariant is single-load: a loader runs at most once per
//! key, and a result is cached whether it is a success, a legitimate
//! absence, or a data-inconsistency error, so a bad key is never retried
//! every frame.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use parking_lot::Mutex;

use overmap_shared::{OvermapError, OvermapResult};

use crate::static_data::{AetheryteRecord, StaticGameData};

/// Generic memoizing store with a pluggable loader.
///
/// The lock is held across the loader call, so the at-most-once guarantee
/// holds even if a threaded host ever calls in; the trade-off is that a
/// loader must not call back into the same cache.
pub struct LookupCache<K, V> {
    entries: Mutex<HashMap<K, V>>,
    loader: Box<dyn Fn(&K) -> V>,
}

impl<K, V> LookupCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(loader: impl Fn(&K) -> V + 'static) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            loader: Box::new(loader),
        }
    }

    /// Fetch the value for `key`, invoking the loader on first miss and
    /// the stored value on every later call.
    pub fn get(&self, key: K) -> V {
        let mut entries = self.entries.lock();
        if let Some(value) = entries.get(&key) {
            return value.clone();
        }
        let value = (self.loader)(&key);
        entries.insert(key, value.clone());
        value
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

/// gathering point id -> representative icon id
pub type GatheringIconCache = LookupCache<u32, OvermapResult<u32>>;
/// aethernet key -> parent aetheryte
pub type AethernetCache = LookupCache<u32, Option<AetheryteRecord>>;
/// icon id -> localized tooltip label
pub type TooltipCache = LookupCache<u32, Option<String>>;

/// Cache mapping a gathering point to the icon representing its gathering
/// type. An unknown gathering type is a fatal classification error: it
/// means the static data mapping is stale, and defaulting would silently
/// draw the wrong icon.
pub fn gathering_icon_cache(data: Rc<dyn StaticGameData>) -> GatheringIconCache {
    LookupCache::new(move |&key| load_gathering_icon(data.as_ref(), key))
}

fn load_gathering_icon(data: &dyn StaticGameData, key: u32) -> OvermapResult<u32> {
    let point = data
        .gathering_point(key)
        .ok_or_else(|| OvermapError::DataInconsistency {
            sheet: "GatheringPoint",
            key,
            detail: "no such gathering point".to_string(),
        })?;
    let base = data.gathering_point_base(point.base_id).ok_or_else(|| {
        OvermapError::DataInconsistency {
            sheet: "GatheringPointBase",
            key: point.base_id,
            detail: "no such gathering point base".to_string(),
        }
    })?;

    match base.gathering_type {
        0 => Ok(60438),
        1 => Ok(60437),
        2 => Ok(60433),
        3 => Ok(60432),
        5 => Ok(60445),
        other => {
            let err = OvermapError::DataInconsistency {
                sheet: "GatheringPointBase",
                key: point.base_id,
                detail: format!("unknown gathering type {other}"),
            };
            log::error!("{err}");
            Err(err)
        }
    }
}

/// Cache resolving an aethernet key to the aetheryte that owns it. A miss
/// is a legitimate "not found": standalone shards exist, and callers treat
/// absence as "teleport unavailable for this marker".
pub fn aethernet_cache(data: Rc<dyn StaticGameData>) -> AethernetCache {
    LookupCache::new(move |&key| {
        data.aetherytes()
            .into_iter()
            .find(|aetheryte| aetheryte.aethernet_key == key)
    })
}

/// Cache for localized icon tooltip labels.
pub fn icon_tooltip_cache(data: Rc<dyn StaticGameData>) -> TooltipCache {
    LookupCache::new(move |&icon_id| data.icon_label(icon_id))
}
