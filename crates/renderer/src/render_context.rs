//! Bundles configuration, caches, viewport state, and collaborator handles
//!
//! Every pipeline operation takes the context as a parameter instead of
//! reaching for globals, which is what makes the classifier, annotator,
//! and renderer testable in isolation.

use std::rc::Rc;

use overmap_config::{IconPolicy, OverlayConfig};
use overmap_data::{
    aethernet_cache, gathering_icon_cache, icon_tooltip_cache, AethernetCache,
    GatheringIconCache, LiveState, MapNavigator, Notifier, StaticGameData, TeleportGateway,
    TeleportIpc, TooltipCache,
};

use crate::coordinates::ViewportState;

pub struct RenderContext {
    pub config: OverlayConfig,
    pub icons: IconPolicy,
    pub viewport: ViewportState,

    pub data: Rc<dyn StaticGameData>,
    pub live: Rc<dyn LiveState>,
    pub navigator: Rc<dyn MapNavigator>,
    pub notifier: Rc<dyn Notifier>,
    pub teleporter: Rc<TeleportGateway>,

    pub gathering_icons: Rc<GatheringIconCache>,
    pub aethernet: Rc<AethernetCache>,
    pub tooltips: Rc<TooltipCache>,
}

impl RenderContext {
    /// Wire up a context from the host collaborators, instantiating the
    /// lookup caches against the static data source.
    pub fn new(
        config: OverlayConfig,
        icons: IconPolicy,
        data: Rc<dyn StaticGameData>,
        live: Rc<dyn LiveState>,
        navigator: Rc<dyn MapNavigator>,
        notifier: Rc<dyn Notifier>,
        teleport_ipc: Rc<dyn TeleportIpc>,
    ) -> Self {
        let teleporter = Rc::new(TeleportGateway::new(
            teleport_ipc,
            data.clone(),
            live.clone(),
            notifier.clone(),
        ));

        Self {
            config,
            icons,
            viewport: ViewportState::default(),
            gathering_icons: Rc::new(gathering_icon_cache(data.clone())),
            aethernet: Rc::new(aethernet_cache(data.clone())),
            tooltips: Rc::new(icon_tooltip_cache(data.clone())),
            data,
            live,
            navigator,
            notifier,
            teleporter,
        }
    }
}
