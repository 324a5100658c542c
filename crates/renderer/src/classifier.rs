//! Marker classification: raw records to per-frame presentations
//!
//! One dispatch table per concern (click behavior, secondary text, primary
//! text resolution) keyed on the marker kind, so the whole classification
//! policy lives here instead of being scattered across call sites.

use std::rc::Rc;

use overmap_data::{format_gil, AetheryteRecord};
use overmap_shared::{ClickAction, MarkerKind, MarkerPresentation, MarkerRecord, TextSource};

use crate::render_context::RenderContext;

/// Build the presentation for one raw marker record.
pub fn classify(record: &MarkerRecord, ctx: &RenderContext) -> MarkerPresentation {
    let mut presentation = MarkerPresentation::new(record.world_position, record.icon_id);
    presentation.radius = record.radius;

    if record.kind == MarkerKind::GatheringPoint {
        match ctx.gathering_icons.get(record.data_key) {
            Ok(icon_id) => presentation.icon_id = icon_id,
            Err(_) => {
                // Loader already logged the inconsistency; the marker
                // stays iconless and inert, the frame goes on.
                return presentation;
            }
        }
    }

    // Resolve the aethernet target once; click handler and tooltip both
    // reuse it, and the cache makes later frames free anyway.
    let aethernet_target = if record.kind == MarkerKind::Aethernet {
        ctx.aethernet.get(record.data_key)
    } else {
        None
    };

    presentation.primary_text = primary_text(record, presentation.icon_id, ctx);
    presentation.secondary_text = secondary_text(record, aethernet_target.as_ref(), ctx);
    presentation.on_click = click_action(record, aethernet_target, ctx);

    presentation
}

/// Primary tooltip text, first applicable source wins: disallowed icons
/// and disabled misc tooltips yield nothing, then the record's own
/// subtext, then the aethernet place name, then the icon label cache.
fn primary_text(record: &MarkerRecord, icon_id: u32, ctx: &RenderContext) -> TextSource {
    if ctx.icons.is_disallowed(icon_id) {
        return TextSource::Empty;
    }
    if !ctx.config.show_misc_tooltips {
        return TextSource::Empty;
    }
    if !record.subtext.is_empty() {
        return TextSource::Literal(record.subtext.clone());
    }

    match record.kind {
        MarkerKind::Aethernet => {
            let data = ctx.data.clone();
            let key = record.data_key;
            TextSource::deferred(move || data.place_name(key).unwrap_or_default())
        }
        _ => {
            let tooltips = ctx.tooltips.clone();
            TextSource::deferred(move || tooltips.get(icon_id).unwrap_or_default())
        }
    }
}

fn secondary_text(
    record: &MarkerRecord,
    aethernet_target: Option<&AetheryteRecord>,
    ctx: &RenderContext,
) -> TextSource {
    match record.kind {
        MarkerKind::MapLink if !ctx.icons.is_disallowed(record.icon_id) => {
            let data = ctx.data.clone();
            let key = record.data_key;
            TextSource::deferred(move || {
                let name = data
                    .map(key)
                    .and_then(|map| data.place_name(map.place_name_id))
                    .unwrap_or_else(|| "unable to read the target map name".to_string());
                format!("Open map {name}")
            })
        }
        MarkerKind::InstanceLink => {
            TextSource::Literal(format!("Instance link {}", record.data_key))
        }
        MarkerKind::Aetheryte => {
            let data = ctx.data.clone();
            let key = record.data_key;
            teleport_text(ctx, record.data_key, move || {
                data.aetheryte(key)
                    .and_then(|aetheryte| data.place_name(aetheryte.place_name_id))
            })
        }
        MarkerKind::Aethernet => match aethernet_target {
            Some(target) => {
                let data = ctx.data.clone();
                let place_name_id = target.place_name_id;
                teleport_text(ctx, target.id, move || data.place_name(place_name_id))
            }
            None => TextSource::Empty,
        },
        _ => TextSource::Empty,
    }
}

/// Deferred "Teleport to {name} ({cost} gil)" text. `aetheryte_id` keys
/// the cost lookup; `name_lookup` runs only when the tooltip is shown.
fn teleport_text(
    ctx: &RenderContext,
    aetheryte_id: u32,
    name_lookup: impl Fn() -> Option<String> + 'static,
) -> TextSource {
    let teleporter = ctx.teleporter.clone();
    let show_cost = ctx.config.show_teleport_cost;
    TextSource::deferred(move || {
        let name =
            name_lookup().unwrap_or_else(|| "unable to read the aetheryte name".to_string());
        if show_cost {
            let cost = format_gil(teleporter.cost(aetheryte_id));
            format!("Teleport to {name} ({cost} gil)")
        } else {
            format!("Teleport to {name}")
        }
    })
}

fn click_action(
    record: &MarkerRecord,
    aethernet_target: Option<AetheryteRecord>,
    ctx: &RenderContext,
) -> Option<ClickAction> {
    match record.kind {
        MarkerKind::MapLink if !ctx.icons.is_disallowed(record.icon_id) => {
            let navigator = ctx.navigator.clone();
            let key = record.data_key;
            Some(Rc::new(move || navigator.open_map(key)) as ClickAction)
        }
        MarkerKind::Aetheryte => {
            let data = ctx.data.clone();
            let teleporter = ctx.teleporter.clone();
            let key = record.data_key;
            Some(Rc::new(move || match data.aetheryte(key) {
                Some(aetheryte) => teleporter.teleport(&aetheryte),
                // The key comes from the live marker table, so this
                // indicates stale static data rather than a bad marker.
                None => log::error!("aetheryte {key} is missing from static data"),
            }) as ClickAction)
        }
        MarkerKind::Aethernet => aethernet_target.map(|target| {
            let teleporter = ctx.teleporter.clone();
            Rc::new(move || teleporter.teleport(&target)) as ClickAction
        }),
        _ => None,
    }
}
