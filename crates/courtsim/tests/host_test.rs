//! End-to-end tests of the host tick loop with a recording renderer.

use courtsim::*;
use proptest::prelude::*;

const DT: f32 = 1.0 / 60.0;
const WHITE: Vec3 = Vec3::new(1.0, 1.0, 1.0);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);

fn run(host: &mut Host, renderer: &mut RecordingRenderer, seconds: f32) {
    let ticks = (seconds / DT).round() as usize;
    for _ in 0..ticks {
        host.tick(DT, renderer);
    }
}

#[test]
fn test_primary_then_secondary() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    host.tick(DT, &mut renderer);
    assert_eq!(renderer.calls().len(), 1);
    assert!(matches!(renderer.calls()[0], RenderCall::Primary { .. }));

    assert!(host.toggle_pip());
    renderer.clear();
    host.tick(DT, &mut renderer);
    assert_eq!(renderer.calls().len(), 2);
    assert!(matches!(renderer.calls()[0], RenderCall::Primary { .. }));
    assert_eq!(
        renderer.calls()[1],
        RenderCall::Secondary {
            time: host.time(),
            size: (320, 177)
        }
    );
    assert_eq!(
        renderer.last_preview_view(),
        Some(&host.detection().uniforms())
    );

    assert!(!host.toggle_pip());
    renderer.clear();
    host.tick(DT, &mut renderer);
    assert_eq!(renderer.calls().len(), 1);
}

#[test]
fn test_in_bounds_shot_raises_no_alarm() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    run(&mut host, &mut renderer, 8.0);
    assert!(renderer.violations().is_empty());
    assert!(!host.alarm().is_active());
}

#[test]
fn test_long_bounce_blinks_far_baseline() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    host.set_parameter("ball_speed", "120").unwrap();

    // First contact is around 1.83 s; the alarm runs for one second after it
    run(&mut host, &mut renderer, 2.5);
    assert_eq!(renderer.violations(), vec![Baseline::Far]);
    assert!(host.alarm().is_active());

    // The violation tick already shows the flash color
    let flashed = renderer.calls().iter().any(|call| {
        matches!(call, RenderCall::Primary { far_baseline, near_baseline, .. }
            if *far_baseline == RED && *near_baseline == WHITE)
    });
    assert!(flashed);

    run(&mut host, &mut renderer, 0.5);
    assert!(!host.alarm().is_active());
    assert!(renderer
        .events()
        .contains(&HostEvent::AlarmCleared(Baseline::Far)));
    assert_eq!(
        host.court().line(CourtLineKind::FarBaseline).unwrap().color(),
        WHITE
    );
    assert_eq!(renderer.violations().len(), 1);
}

#[test]
fn test_alarm_clears_after_days_of_uptime() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    // Advance the clock about a week with the ball parked
    assert!(!host.toggle_ball());
    host.tick(600_000.0, &mut renderer);
    assert!(host.toggle_ball());
    host.set_parameter("ball_speed", "120").unwrap();

    let before = host.time();
    run(&mut host, &mut renderer, 3.0);
    assert!((host.time() - before - 3.0).abs() < 1e-3);

    assert_eq!(renderer.violations(), vec![Baseline::Far]);
    assert!(!host.alarm().is_active());
    assert!(renderer
        .events()
        .contains(&HostEvent::AlarmCleared(Baseline::Far)));
}

#[test]
fn test_lens_changes_are_pushed() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();

    host.set_parameter("focal_length", "50").unwrap();
    host.set_parameter("sensor_height", "36").unwrap();
    host.set_parameter("cam_pos_x", "2").unwrap();

    // Nothing is delivered until the next tick
    assert!(renderer.events().is_empty());
    host.tick(DT, &mut renderer);

    let events = renderer.events();
    assert!(events.iter().any(|e| matches!(
        e,
        HostEvent::ProjectionChanged(p) if (p.aspect_ratio - 1.0).abs() < 1e-6
    )));
    assert!(events.contains(&HostEvent::PipResized {
        width: 320,
        height: 320
    }));
    assert!(events.contains(&HostEvent::DetectionCameraMoved(Vec3::new(2.0, 6.0, 10.0))));
    assert_eq!(host.detection().helper().nodes()[0], Vec3::new(2.0, 6.0, 10.0));
}

#[test]
fn test_rejected_parameters() {
    let mut host = Host::new(Options::default()).unwrap();
    assert!(matches!(
        host.set_parameter("shutter", "1"),
        Err(CourtsimError::UnknownParameter(_))
    ));
    assert!(matches!(
        host.set_parameter("launch_angle", "steep"),
        Err(CourtsimError::NonFiniteValue { .. })
    ));
    assert_eq!(host.trajectory().params().launch_angle_deg, 45.0);
}

#[test]
fn test_launch_changes_reset_trajectory() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    run(&mut host, &mut renderer, 0.5);
    assert!(host.trajectory().position().z < 5.0);

    host.set_parameter("start_pos_z", "4").unwrap();
    let params = *host.trajectory().params();
    assert_eq!(params.start_pos.z, 4.0);
    assert!((params.end_pos.z - (4.0 - 11.41)).abs() < 1e-4);
    assert_eq!(host.trajectory().position(), params.start_pos);

    host.set_parameter("start_pos_x", "1.5").unwrap();
    let params = *host.trajectory().params();
    assert_eq!((params.start_pos.x, params.end_pos.x), (1.5, -1.5));

    // Clamped to the control's range
    host.set_parameter("launch_angle", "95").unwrap();
    assert_eq!(host.trajectory().params().launch_angle_deg, 85.0);
}

#[test]
fn test_ball_toggle() {
    let mut host = Host::new(Options::default()).unwrap();
    let mut renderer = RecordingRenderer::new();
    run(&mut host, &mut renderer, 0.5);

    assert!(!host.toggle_ball());
    let paused_at = host.trajectory().position();
    renderer.clear();
    run(&mut host, &mut renderer, 0.5);
    assert_eq!(host.trajectory().position(), paused_at);
    assert!(matches!(
        renderer.calls()[0],
        RenderCall::Primary { ball: None, .. }
    ));

    assert!(host.toggle_ball());
    assert_eq!(
        host.trajectory().position(),
        host.trajectory().params().start_pos
    );
    assert_eq!(host.trajectory().bounce_count(), 0);
}

#[test]
fn test_overlays() {
    let mut host = Host::new(Options::default()).unwrap();

    assert!(host.toggle_line_detection());
    let overlay = *host.frame().line_detection.unwrap();
    assert_eq!(overlay.ray[0], Vec3::new(0.0, 6.0, 10.0));
    assert!(overlay.in_bounds);

    host.set_parameter("cam_pos_z", "-8").unwrap();
    let overlay = *host.frame().line_detection.unwrap();
    assert_eq!(overlay.ray[0], Vec3::new(0.0, 6.0, -8.0));

    assert!(!host.toggle_line_detection());
    assert!(host.frame().line_detection.is_none());

    assert!(host.toggle_virtual_lines());
    assert_eq!(host.frame().virtual_lines.unwrap().corner_lines.len(), 4);
}

#[test]
fn test_player_toggle() {
    let mut host = Host::new(Options::default()).unwrap();
    assert!(!host.is_player_visible());
    assert!(host.frame().player.is_none());

    assert!(host.toggle_player());
    let player = host.frame().player.unwrap();
    assert!((player - Vec3::new(0.0, 0.0, 6.205)).length() < 1e-5);

    assert!(!host.toggle_player());
    assert!(host.frame().player.is_none());

    let options = Options::from_json_str(r#"{ "view": { "player_visible": true } }"#).unwrap();
    let host = Host::new(options).unwrap();
    assert!(host.frame().player.is_some());
}

#[test]
fn test_view_presets_and_resize() {
    let mut host = Host::new(Options::default()).unwrap();
    host.apply_view_preset(ViewPreset::Isometric);
    assert_eq!(host.camera().position, Vec3::new(8.0, 6.0, 8.0));

    host.apply_view_preset(ViewPreset::Reset);
    host.orbit_camera(-std::f32::consts::FRAC_PI_2, 0.0);
    assert!((host.camera().position - Vec3::new(10.0, 5.0, 0.0)).length() < 1e-4);
    host.zoom_camera(f32::NAN);
    assert!(host.camera().position.is_finite());
    let distance = host.camera().position.length();
    host.zoom_camera(1.0);
    assert!((host.camera().position.length() - (distance - 1.0)).abs() < 1e-4);

    host.resize(1000, 500);
    assert_eq!(host.camera().aspect_ratio, 2.0);
    // The preview follows the lens, not the window
    assert_eq!(host.detection().pip().pixel_size(), (320, 177));
}

#[test]
fn test_options_from_json() {
    let options = Options::from_json_str(
        r#"{ "pip": { "enabled": true }, "view": { "virtual_lines": true } }"#,
    )
    .unwrap();
    let mut host = Host::new(options).unwrap();
    let mut renderer = RecordingRenderer::new();
    host.tick(DT, &mut renderer);

    assert_eq!(renderer.calls().len(), 2);
    assert!(host.frame().virtual_lines.is_some());
}

#[test]
fn test_invalid_options_rejected() {
    let mut options = Options::default();
    options.launch.angle_deg = 0.0;
    assert!(matches!(
        Host::new(options),
        Err(CourtsimError::InvalidLaunchAngle(_))
    ));
}

proptest! {
    #[test]
    fn ball_stays_on_or_above_court(
        angle in "[1-8][0-9]",
        speed in 50u32..150,
        ticks in 1usize..600,
    ) {
        let mut host = Host::new(Options::default()).unwrap();
        let mut renderer = RecordingRenderer::new();
        host.set_parameter("launch_angle", &angle).unwrap();
        host.set_parameter("ball_speed", &speed.to_string()).unwrap();

        let surface = host.options().court.court_surface_y();
        for _ in 0..ticks {
            host.tick(DT, &mut renderer);
            prop_assert!(host.trajectory().position().y >= surface);
        }
        prop_assert!(renderer.violations().len() <= 1 + ticks / 60);
    }
}
