//! End-to-end pipeline tests: raw marker records through classification,
//! fate annotation, and drawing, against recording fakes for every host
//! collaborator.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use nalgebra_glm::{vec2, Vec2};
use overmap_config::{IconPolicy, IconSetting, OverlayConfig};
use overmap_data::{
    AetheryteRecord, GatheringPointBaseRecord, GatheringPointRecord, LiveState, MapNavigator,
    MapRecord, Notifier, StaticGameData, TeleportIpc,
};
use overmap_renderer::{classifier, marker_renderer, Canvas, FrameInput, MapOverlay, RenderContext};
use overmap_shared::presentation::URGENT_RADIUS_COLOR;
use overmap_shared::{
    Color, ElementState, FateSnapshot, MapInputEvent, MarkerKind, MarkerRecord, MouseButton,
    OvermapResult, PhysicalPosition,
};

fn limsa() -> AetheryteRecord {
    AetheryteRecord {
        id: 8,
        sub_id: 0,
        place_name_id: 28,
        aethernet_key: 0,
    }
}

fn hawkers() -> AetheryteRecord {
    AetheryteRecord {
        id: 12,
        sub_id: 3,
        place_name_id: 77,
        aethernet_key: 77,
    }
}

fn aleport() -> AetheryteRecord {
    AetheryteRecord {
        id: 9,
        sub_id: 0,
        place_name_id: 29,
        aethernet_key: 0,
    }
}

#[derive(Default)]
struct FakeData {
    label_calls: Cell<u32>,
}

impl StaticGameData for FakeData {
    fn aetheryte(&self, id: u32) -> Option<AetheryteRecord> {
        match id {
            8 => Some(limsa()),
            9 => Some(aleport()),
            12 => Some(hawkers()),
            _ => None,
        }
    }

    fn aetherytes(&self) -> Vec<AetheryteRecord> {
        vec![limsa(), aleport(), hawkers()]
    }

    fn map(&self, id: u32) -> Option<MapRecord> {
        (id == 50).then(|| MapRecord {
            id: 50,
            place_name_id: 400,
            size_factor: 100,
            offset_x: 0,
            offset_y: 0,
        })
    }

    fn place_name(&self, id: u32) -> Option<String> {
        match id {
            28 => Some("Limsa Lominsa Lower Decks".to_string()),
            29 => Some("Aleport".to_string()),
            77 => Some("Hawkers' Alley".to_string()),
            400 => Some("Middle La Noscea".to_string()),
            _ => None,
        }
    }

    fn gathering_point(&self, id: u32) -> Option<GatheringPointRecord> {
        match id {
            200 => Some(GatheringPointRecord {
                id: 200,
                base_id: 900,
            }),
            201 => Some(GatheringPointRecord {
                id: 201,
                base_id: 901,
            }),
            _ => None,
        }
    }

    fn gathering_point_base(&self, id: u32) -> Option<GatheringPointBaseRecord> {
        match id {
            900 => Some(GatheringPointBaseRecord {
                id: 900,
                gathering_type: 3,
            }),
            901 => Some(GatheringPointBaseRecord {
                id: 901,
                gathering_type: 4,
            }),
            _ => None,
        }
    }

    fn icon_label(&self, icon_id: u32) -> Option<String> {
        self.label_calls.set(self.label_calls.get() + 1);
        Some(format!("Icon {icon_id}"))
    }
}

#[derive(Default)]
struct FakeLive {
    markers: RefCell<Vec<MarkerRecord>>,
    fates: RefCell<Vec<FateSnapshot>>,
    selected_map: Cell<u32>,
    current_map: Cell<u32>,
    player: Cell<Option<Vec2>>,
}

impl LiveState for FakeLive {
    fn markers(&self) -> Vec<MarkerRecord> {
        self.markers.borrow().clone()
    }

    fn active_fates(&self) -> Vec<FateSnapshot> {
        self.fates.borrow().clone()
    }

    fn teleport_cost(&self, aetheryte_id: u32) -> u32 {
        match aetheryte_id {
            8 => 1462,
            12 => 120,
            _ => 0,
        }
    }

    fn selected_map_id(&self) -> u32 {
        self.selected_map.get()
    }

    fn current_map_id(&self) -> u32 {
        self.current_map.get()
    }

    fn player_position(&self) -> Option<Vec2> {
        self.player.get()
    }
}

#[derive(Default)]
struct RecordingNavigator {
    opened: RefCell<Vec<u32>>,
}

impl MapNavigator for RecordingNavigator {
    fn open_map(&self, map_id: u32) {
        self.opened.borrow_mut().push(map_id);
    }
}

#[derive(Default)]
struct RecordingNotifier {
    errors: RefCell<Vec<String>>,
    toasts: RefCell<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn print_error(&self, text: &str) {
        self.errors.borrow_mut().push(text.to_string());
    }

    fn print_toast(&self, text: &str) {
        self.toasts.borrow_mut().push(text.to_string());
    }
}

#[derive(Default)]
struct FakeIpc {
    invocations: RefCell<Vec<(u32, u8)>>,
}

impl TeleportIpc for FakeIpc {
    fn invoke(&self, aetheryte_id: u32, sub_id: u8) -> OvermapResult<bool> {
        self.invocations.borrow_mut().push((aetheryte_id, sub_id));
        Ok(true)
    }

    fn show_chat_message(&self) -> bool {
        true
    }
}

#[derive(Default)]
struct RecordingCanvas {
    icons: Vec<(u32, Vec2, f32)>,
    fills: Vec<(Vec2, f32, Color)>,
    outlines: Vec<(Vec2, f32, Color)>,
    hit_regions: Vec<(Vec2, f32)>,
    tooltips: Vec<String>,
    texts: Vec<(Vec2, String)>,
}

impl Canvas for RecordingCanvas {
    fn draw_icon(&mut self, icon_id: u32, center: Vec2, size: f32) {
        self.icons.push((icon_id, center, size));
    }

    fn draw_circle_filled(&mut self, center: Vec2, radius: f32, color: Color) {
        self.fills.push((center, radius, color));
    }

    fn draw_circle_outline(&mut self, center: Vec2, radius: f32, color: Color) {
        self.outlines.push((center, radius, color));
    }

    fn push_hit_region(&mut self, center: Vec2, size: f32) {
        self.hit_regions.push((center, size));
    }

    fn draw_tooltip(&mut self, text: &str) {
        self.tooltips.push(text.to_string());
    }

    fn draw_text(&mut self, position: Vec2, text: &str, _color: Color) {
        self.texts.push((position, text.to_string()));
    }
}

struct Harness {
    data: Rc<FakeData>,
    live: Rc<FakeLive>,
    navigator: Rc<RecordingNavigator>,
    notifier: Rc<RecordingNotifier>,
    ipc: Rc<FakeIpc>,
    overlay: MapOverlay,
}

fn harness() -> Harness {
    let _ = env_logger::builder().is_test(true).try_init();

    let data = Rc::new(FakeData::default());
    let live = Rc::new(FakeLive::default());
    live.selected_map.set(50);
    live.current_map.set(50);
    let navigator = Rc::new(RecordingNavigator::default());
    let notifier = Rc::new(RecordingNotifier::default());
    let ipc = Rc::new(FakeIpc::default());

    let ctx = RenderContext::new(
        OverlayConfig::default(),
        IconPolicy::default(),
        data.clone(),
        live.clone(),
        navigator.clone(),
        notifier.clone(),
        ipc.clone(),
    );

    Harness {
        data,
        live,
        navigator,
        notifier,
        ipc,
        overlay: MapOverlay::new(ctx),
    }
}

fn marker(kind: MarkerKind, data_key: u32, icon_id: u32) -> MarkerRecord {
    MarkerRecord {
        kind,
        data_key,
        world_position: vec2(0.0, 0.0),
        icon_id,
        radius: 0.0,
        subtext: String::new(),
    }
}

#[test]
fn test_map_link_opens_target_map() {
    let h = harness();
    let record = marker(MarkerKind::MapLink, 50, 60453);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(
        presentation.secondary_text.resolve().as_deref(),
        Some("Open map Middle La Noscea")
    );

    presentation.on_click.as_ref().unwrap()();
    assert_eq!(*h.navigator.opened.borrow(), vec![50]);
}

#[test]
fn test_aetheryte_click_invokes_teleport_capability() {
    let h = harness();
    let record = marker(MarkerKind::Aetheryte, 8, 60453);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(
        presentation.secondary_text.resolve().as_deref(),
        Some("Teleport to Limsa Lominsa Lower Decks (1,462 gil)")
    );

    presentation.on_click.as_ref().unwrap()();
    assert_eq!(*h.ipc.invocations.borrow(), vec![(8, 0)]);
    assert_eq!(
        h.notifier.toasts.borrow().last().map(String::as_str),
        Some("Teleporting to Limsa Lominsa Lower Decks")
    );
}

#[test]
fn test_cost_is_omitted_when_disabled() {
    let mut h = harness();
    h.overlay.ctx.config.show_teleport_cost = false;
    let record = marker(MarkerKind::Aetheryte, 8, 60453);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(
        presentation.secondary_text.resolve().as_deref(),
        Some("Teleport to Limsa Lominsa Lower Decks")
    );
}

#[test]
fn test_aethernet_resolves_parent_aetheryte() {
    let h = harness();
    let record = marker(MarkerKind::Aethernet, 77, 60430);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(
        presentation.primary_text.resolve().as_deref(),
        Some("Hawkers' Alley")
    );
    assert_eq!(
        presentation.secondary_text.resolve().as_deref(),
        Some("Teleport to Hawkers' Alley (120 gil)")
    );

    presentation.on_click.as_ref().unwrap()();
    assert_eq!(*h.ipc.invocations.borrow(), vec![(12, 3)]);
}

#[test]
fn test_unresolvable_aethernet_is_inert() {
    let h = harness();
    let record = marker(MarkerKind::Aethernet, 999, 60430);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert!(presentation.on_click.is_none());
    assert!(presentation.secondary_text.is_empty());
}

#[test]
fn test_tooltip_lookup_is_lazy_and_memoized() {
    let h = harness();
    let record = marker(MarkerKind::Generic, 0, 60453);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(h.data.label_calls.get(), 0);

    assert_eq!(
        presentation.primary_text.resolve().as_deref(),
        Some("Icon 60453")
    );
    assert_eq!(h.data.label_calls.get(), 1);

    // A second classification goes through the cache.
    let again = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(again.primary_text.resolve().as_deref(), Some("Icon 60453"));
    assert_eq!(h.data.label_calls.get(), 1);
}

#[test]
fn test_subtext_wins_over_icon_label() {
    let h = harness();
    let mut record = marker(MarkerKind::Generic, 0, 60453);
    record.subtext = "Treasure".to_string();

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(presentation.primary_text.resolve().as_deref(), Some("Treasure"));
    assert_eq!(h.data.label_calls.get(), 0);
}

#[test]
fn test_disallowed_icon_gets_no_text_or_click() {
    let h = harness();
    let record = marker(MarkerKind::MapLink, 50, 60091);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert!(presentation.primary_text.is_empty());
    assert!(presentation.secondary_text.is_empty());
    assert!(presentation.on_click.is_none());
}

#[test]
fn test_gathering_icon_resolved_from_gathering_type() {
    let h = harness();
    let record = marker(MarkerKind::GatheringPoint, 200, 0);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(presentation.icon_id, 60432);
}

#[test]
fn test_unknown_gathering_type_leaves_marker_inert() {
    let h = harness();
    let record = marker(MarkerKind::GatheringPoint, 201, 0);

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    assert_eq!(presentation.icon_id, 0);
    assert!(presentation.primary_text.is_empty());
    assert!(presentation.on_click.is_none());
}

#[test]
fn test_hidden_override_suppresses_icon_but_not_radius() {
    let mut h = harness();
    h.overlay.ctx.icons.set_override(
        60453,
        IconSetting {
            hidden: true,
            scale: 1.0,
        },
    );
    let mut record = marker(MarkerKind::Generic, 0, 60453);
    record.radius = 160.0;

    let presentation = classifier::classify(&record, &h.overlay.ctx);
    let mut canvas = RecordingCanvas::default();
    let hovered = marker_renderer::draw_marker(
        &presentation,
        &h.overlay.ctx,
        &mut canvas,
        &mut FrameInput::default(),
    );

    assert!(!hovered);
    assert!(canvas.icons.is_empty());
    assert!(canvas.hit_regions.is_empty());
    assert_eq!(canvas.fills.len(), 1);
}

#[test]
fn test_fate_annotation_recolors_radius_ring() {
    let mut h = harness();
    let mut record = marker(MarkerKind::FateCandidate, 0, 60458);
    record.subtext = "Icebound Buffoon".to_string();
    record.radius = 120.0;
    h.live.markers.borrow_mut().push(record);
    h.live.fates.borrow_mut().push(FateSnapshot {
        name: "icebound buffoon".to_string(),
        level: 37,
        progress: 45,
        time_remaining: chrono::Duration::seconds(200),
    });

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);

    assert_eq!(canvas.fills.len(), 1);
    assert_eq!(canvas.fills[0].2, URGENT_RADIUS_COLOR);
    assert_eq!(canvas.outlines[0].2, URGENT_RADIUS_COLOR);
}

#[test]
fn test_click_on_hovered_aetheryte_teleports() {
    let mut h = harness();
    // World origin lands at the viewport center after the map-change
    // recenter on the first frame (400x250 viewport, zoom 1).
    h.live
        .markers
        .borrow_mut()
        .push(marker(MarkerKind::Aetheryte, 8, 60453));

    let mut canvas = RecordingCanvas::default();
    h.overlay.handle_event(&MapInputEvent::CursorMoved {
        position: PhysicalPosition::new(200.0, 125.0),
    });
    h.overlay.render_frame(&mut canvas);
    assert_eq!(canvas.icons[0].1, vec2(200.0, 125.0));
    assert!(!canvas.tooltips.is_empty());
    assert!(h.ipc.invocations.borrow().is_empty());

    h.overlay.handle_event(&MapInputEvent::MouseInput {
        state: ElementState::Pressed,
        button: MouseButton::Left,
    });
    h.overlay.handle_event(&MapInputEvent::MouseInput {
        state: ElementState::Released,
        button: MouseButton::Left,
    });

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);
    assert_eq!(*h.ipc.invocations.borrow(), vec![(8, 0)]);
}

#[test]
fn test_overlapping_markers_share_one_click_and_tooltip() {
    let mut h = harness();
    // Two aetherytes on the same spot, the plaza-with-shards layout.
    h.live
        .markers
        .borrow_mut()
        .push(marker(MarkerKind::Aetheryte, 8, 60453));
    h.live
        .markers
        .borrow_mut()
        .push(marker(MarkerKind::Aetheryte, 9, 60453));

    let mut canvas = RecordingCanvas::default();
    h.overlay.handle_event(&MapInputEvent::CursorMoved {
        position: PhysicalPosition::new(200.0, 125.0),
    });
    h.overlay.render_frame(&mut canvas);
    assert_eq!(canvas.tooltips.len(), 1);

    h.overlay.handle_event(&MapInputEvent::MouseInput {
        state: ElementState::Pressed,
        button: MouseButton::Left,
    });
    h.overlay.handle_event(&MapInputEvent::MouseInput {
        state: ElementState::Released,
        button: MouseButton::Left,
    });

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);
    assert_eq!(*h.ipc.invocations.borrow(), vec![(8, 0)]);
    assert_eq!(canvas.tooltips.len(), 1);
}

#[test]
fn test_map_change_resets_pan() {
    let mut h = harness();
    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);

    h.overlay.ctx.viewport.pan_offset = vec2(500.0, 500.0);
    h.overlay.render_frame(&mut canvas);
    assert_eq!(h.overlay.ctx.viewport.pan_offset, vec2(500.0, 500.0));

    h.live.selected_map.set(60);
    h.overlay.render_frame(&mut canvas);
    let expected = h.overlay.ctx.viewport.size * 0.5 / h.overlay.ctx.viewport.zoom_scale
        - Vec2::repeat(1024.0);
    assert_eq!(h.overlay.ctx.viewport.pan_offset, expected);
}

#[test]
fn test_follow_player_centers_viewport() {
    let mut h = harness();
    h.overlay.ctx.config.follow_player = true;
    h.live.player.set(Some(vec2(3200.0, -1600.0)));
    h.live
        .markers
        .borrow_mut()
        .push(marker(MarkerKind::Generic, 0, 60453));
    h.live.markers.borrow_mut()[0].world_position = vec2(3200.0, -1600.0);

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);

    // The marker sits on the player, so it draws at the viewport center.
    assert_eq!(canvas.icons[0].1, vec2(200.0, 125.0));
}

#[test]
fn test_follow_is_skipped_on_foreign_map() {
    let mut h = harness();
    h.overlay.ctx.config.follow_player = true;
    h.live.player.set(Some(vec2(3200.0, -1600.0)));
    h.live.current_map.set(60);

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);

    // Recentered on the map itself, not the player.
    let expected = h.overlay.ctx.viewport.size * 0.5 - Vec2::repeat(1024.0);
    assert_eq!(h.overlay.ctx.viewport.pan_offset, expected);
}

#[test]
fn test_coordinate_bar_shows_cursor_map_coordinates() {
    let mut h = harness();
    let mut canvas = RecordingCanvas::default();
    h.overlay.handle_event(&MapInputEvent::CursorMoved {
        position: PhysicalPosition::new(200.0, 125.0),
    });
    h.overlay.render_frame(&mut canvas);

    // Cursor at the viewport center is the world origin, which reads as
    // (21.5, 21.5) on a size-factor-100 map.
    assert_eq!(canvas.texts.len(), 1);
    assert_eq!(canvas.texts[0].1, "X: 21.5  Y: 21.5");
}

#[test]
fn test_coordinate_bar_can_be_disabled() {
    let mut h = harness();
    h.overlay.ctx.config.show_coordinate_bar = false;

    let mut canvas = RecordingCanvas::default();
    h.overlay.render_frame(&mut canvas);
    assert!(canvas.texts.is_empty());
}
