// Host-side tests for the frame loop: reduced motion, rescheduling, dispose
// and the per-frame draw order.

use showcase_core::constants::{FIELD_LINE_COLOR, GRID_COLOR};
use showcase_core::selection::NoSelectionHost;
use showcase_core::{
    DrawCmd, Engine, EngineConfig, FrameLoop, InputEvent, LoopState, ManualScheduler,
    MotionPreference, RecordingSurface, SurfaceSize,
};

fn setup(config: EngineConfig) -> (Engine, RecordingSurface, FrameLoop<ManualScheduler>) {
    let mut engine = Engine::new(config, 5);
    let mut surface = RecordingSurface::new();
    engine.resize(SurfaceSize::new(800.0, 400.0, 2.0), &mut surface);
    surface.take();
    (engine, surface, FrameLoop::new(ManualScheduler::new()))
}

/// Fire pending frames the way a display would, up to `max` of them.
fn pump(
    frame_loop: &mut FrameLoop<ManualScheduler>,
    engine: &mut Engine,
    surface: &mut RecordingSurface,
    max: usize,
) -> usize {
    let mut fired = 0;
    let mut now = 0.0;
    while fired < max {
        if frame_loop.scheduler_mut().take_pending().is_none() {
            break;
        }
        now += 16.0;
        frame_loop.on_frame(now, engine, surface);
        fired += 1;
    }
    fired
}

#[test]
fn reduced_motion_draws_once_and_never_schedules() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    assert_eq!(frame_loop.state(), LoopState::Static);
    assert_eq!(frame_loop.frames_rendered(), 1);
    assert_eq!(frame_loop.scheduler().requested, 0);
    assert_eq!(pump(&mut frame_loop, &mut engine, &mut surface, 10), 0);

    // the hero static frame is a clear plus a flat fill
    assert_eq!(surface.commands.len(), 2);
    assert!(matches!(surface.commands[0], DrawCmd::Clear(_)));
    assert!(matches!(surface.commands[1], DrawCmd::FillRect { .. }));

    // a stray frame callback is ignored
    assert!(!frame_loop.on_frame(16.0, &mut engine, &mut surface));
    assert_eq!(frame_loop.frames_rendered(), 1);
}

#[test]
fn reduced_motion_map_keeps_nodes_visible() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::project_map());
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    assert_eq!(
        surface.count(|c| matches!(c, DrawCmd::RadialGradient { .. })),
        3
    );
    assert_eq!(frame_loop.scheduler().requested, 0);
}

#[test]
fn full_motion_keeps_rescheduling() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    assert_eq!(frame_loop.state(), LoopState::Running);
    assert_eq!(frame_loop.frames_rendered(), 0);
    assert_eq!(frame_loop.scheduler().requested, 1);

    let fired = pump(&mut frame_loop, &mut engine, &mut surface, 500);
    assert_eq!(fired, 500);
    assert_eq!(frame_loop.frames_rendered(), 500);
    assert_eq!(frame_loop.scheduler().requested, 501);
    assert!(frame_loop.scheduler().pending().is_some());
}

#[test]
fn start_is_idempotent() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    assert_eq!(frame_loop.scheduler().requested, 1);
    assert_eq!(frame_loop.state(), LoopState::Running);
}

#[test]
fn dispose_cancels_pending_frame_and_stops() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    pump(&mut frame_loop, &mut engine, &mut surface, 3);
    let pending = frame_loop.scheduler().pending().expect("frame pending");

    frame_loop.dispose();
    assert_eq!(frame_loop.state(), LoopState::Disposed);
    assert_eq!(frame_loop.scheduler().cancelled, vec![pending]);
    assert!(frame_loop.scheduler().pending().is_none());

    assert!(!frame_loop.on_frame(100.0, &mut engine, &mut surface));
    assert_eq!(frame_loop.frames_rendered(), 3);

    frame_loop.dispose();
    assert_eq!(frame_loop.scheduler().cancelled.len(), 1);
}

#[test]
fn refused_schedule_degrades_to_static() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.scheduler_mut().unavailable = true;
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    assert_eq!(frame_loop.state(), LoopState::Static);
    assert_eq!(frame_loop.frames_rendered(), 1);
}

#[test]
fn map_frame_draw_order() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::project_map());
    engine.handle_event(
        InputEvent::Click { x: 100.0, y: 150.0 },
        &mut NoSelectionHost,
        &mut surface,
    );
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    pump(&mut frame_loop, &mut engine, &mut surface, 1);
    let cmds = surface.take();

    assert!(matches!(cmds[0], DrawCmd::Clear(_)));
    assert!(matches!(cmds[1], DrawCmd::LinearGradient { .. }));

    let is_grid = |c: &DrawCmd| matches!(c, DrawCmd::Line { color, .. } if color == GRID_COLOR);
    let last_grid = cmds.iter().rposition(is_grid).expect("grid lines");
    let first_dashed = cmds
        .iter()
        .position(|c| matches!(c, DrawCmd::Line { dashed: true, .. }))
        .expect("node links");
    let last_dashed = cmds
        .iter()
        .rposition(|c| matches!(c, DrawCmd::Line { dashed: true, .. }))
        .expect("node links");
    let first_field = cmds
        .iter()
        .position(|c| matches!(c, DrawCmd::Line { color, .. } if color == FIELD_LINE_COLOR))
        .expect("field lines");
    let first_glow = cmds
        .iter()
        .position(|c| matches!(c, DrawCmd::RadialGradient { .. }))
        .expect("node glows");
    let burst_circles: Vec<usize> = cmds
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, DrawCmd::Circle { color, .. } if color == "#667eea"))
        .map(|(i, _)| i)
        .collect();

    // burst particles sit between the field and the nodes; the selected
    // node's own inner disc comes after its glow
    let burst_before_nodes = burst_circles.iter().filter(|&&i| i < first_glow).count();
    assert_eq!(burst_before_nodes, 20);
    assert!(last_grid < first_dashed);
    assert!(last_dashed < first_field);
    assert!(first_field < first_glow);
    assert!(burst_circles.iter().all(|&i| i > first_field));
    assert!(matches!(cmds.last(), Some(DrawCmd::Ring { .. })));
}

#[test]
fn hero_frame_has_no_grid_or_nodes() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    pump(&mut frame_loop, &mut engine, &mut surface, 1);
    assert!(matches!(surface.commands[0], DrawCmd::Clear(_)));
    assert!(matches!(surface.commands[1], DrawCmd::LinearGradient { .. }));
    assert_eq!(
        surface.count(|c| matches!(c, DrawCmd::Line { dashed: true, .. })),
        0
    );
    assert_eq!(
        surface.count(|c| matches!(c, DrawCmd::RadialGradient { .. } | DrawCmd::Text { .. })),
        0
    );
    assert_eq!(
        surface.count(|c| matches!(c, DrawCmd::Circle { .. })),
        engine.field().points().len()
    );
}

#[test]
fn resize_resets_transform_and_regenerates_points() {
    let (mut engine, mut surface, _) = setup(EngineConfig::hero());
    let before = engine.field().points().to_vec();
    engine.handle_event(
        InputEvent::Resize {
            width: 1200.0,
            height: 600.0,
            pixel_ratio: 3.0,
        },
        &mut NoSelectionHost,
        &mut surface,
    );
    assert_eq!(surface.commands, vec![DrawCmd::ResetTransform(3.0)]);
    assert_eq!(engine.size(), SurfaceSize::new(1200.0, 600.0, 3.0));
    assert_eq!(engine.field().points().len(), 110);
    assert_ne!(engine.field().points()[0], before[0]);
}

#[test]
fn static_loop_redraws_its_frame_after_resize_and_selection() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::project_map());
    let mut host = NoSelectionHost;
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    assert_eq!(frame_loop.frames_rendered(), 1);
    surface.take();

    // hover changes only the cursor
    let moved = frame_loop.dispatch(
        InputEvent::PointerMove { x: 100.0, y: 150.0 },
        10.0,
        &mut engine,
        &mut host,
        &mut surface,
    );
    assert!(moved.cursor.is_some());
    assert!(surface.commands.is_empty());
    assert_eq!(frame_loop.frames_rendered(), 1);

    // resizing clears the canvas bitmap, so the frame is drawn again
    frame_loop.dispatch(
        InputEvent::Resize {
            width: 400.0,
            height: 200.0,
            pixel_ratio: 1.0,
        },
        20.0,
        &mut engine,
        &mut host,
        &mut surface,
    );
    assert_eq!(surface.commands[0], DrawCmd::ResetTransform(1.0));
    assert!(matches!(surface.commands[1], DrawCmd::Clear(_)));
    assert_eq!(
        surface.count(|c| matches!(c, DrawCmd::RadialGradient { .. })),
        3
    );
    assert_eq!(frame_loop.frames_rendered(), 2);
    surface.take();

    // a click selects and shows the ring right away
    let clicked = frame_loop.dispatch(
        InputEvent::Click { x: 50.0, y: 75.0 },
        30.0,
        &mut engine,
        &mut host,
        &mut surface,
    );
    assert!(clicked.selection.is_some());
    assert!(matches!(surface.commands.last(), Some(DrawCmd::Ring { .. })));
    assert_eq!(frame_loop.frames_rendered(), 3);
    surface.take();

    frame_loop
        .select("sportspredictor", 40.0, &mut engine, &mut host, &mut surface)
        .unwrap();
    assert!(matches!(surface.commands.last(), Some(DrawCmd::Ring { .. })));
    assert_eq!(frame_loop.frames_rendered(), 4);

    assert_eq!(frame_loop.state(), LoopState::Static);
    assert_eq!(frame_loop.scheduler().requested, 0);
}

#[test]
fn running_loop_leaves_drawing_to_the_next_frame() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::hero());
    frame_loop.start(MotionPreference::Full, 0.0, &mut engine, &mut surface);
    let resized = frame_loop.dispatch(
        InputEvent::Resize {
            width: 640.0,
            height: 320.0,
            pixel_ratio: 2.0,
        },
        5.0,
        &mut engine,
        &mut NoSelectionHost,
        &mut surface,
    );
    assert!(resized.resized);
    assert_eq!(surface.commands, vec![DrawCmd::ResetTransform(2.0)]);
    assert_eq!(frame_loop.frames_rendered(), 0);
    assert_eq!(frame_loop.scheduler().requested, 1);
}

#[test]
fn disposed_loop_drops_input() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::project_map());
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    frame_loop.dispose();
    surface.take();

    let r = frame_loop.dispatch(
        InputEvent::Click { x: 100.0, y: 150.0 },
        10.0,
        &mut engine,
        &mut NoSelectionHost,
        &mut surface,
    );
    assert_eq!(r, showcase_core::EventResponse::default());
    assert!(engine.selected_node().is_none());
    assert!(surface.commands.is_empty());
}

#[test]
fn selecting_an_unknown_id_draws_nothing() {
    let (mut engine, mut surface, mut frame_loop) = setup(EngineConfig::project_map());
    frame_loop.start(MotionPreference::Reduced, 0.0, &mut engine, &mut surface);
    surface.take();
    let err = frame_loop.select("nope", 1.0, &mut engine, &mut NoSelectionHost, &mut surface);
    assert!(err.is_err());
    assert!(surface.commands.is_empty());
    assert_eq!(frame_loop.frames_rendered(), 1);
}
