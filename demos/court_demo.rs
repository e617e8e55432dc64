//! Runs the court simulation headlessly for a few seconds and logs what happens.
//!
//! Run with: `RUST_LOG=info cargo run --example court_demo [options.json]`

use courtsim::*;

fn main() -> Result<()> {
    init();

    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };

    let mut host = Host::new(options)?;
    let mut renderer = RecordingRenderer::new();

    // A fast, flat shot that lands beyond the far baseline
    host.set_parameter("ball_speed", "125")?;
    host.set_parameter("launch_angle", "35")?;

    // Tele lens on a camera behind the far baseline
    host.set_parameter("cam_pos_z", "-10")?;
    host.set_parameter("focal_length", "85")?;
    host.toggle_pip();
    host.toggle_line_detection();
    host.toggle_player();

    // Swing the main view a little toward the side
    host.orbit_camera(0.4, 0.1);

    let dt = 1.0 / 60.0;
    for _ in 0..(60 * 8) {
        host.tick(dt, &mut renderer);
    }

    let projection = host.detection().projection();
    log::info!(
        "detection camera: fov {:.1} deg, aspect {:.2}, near {:.2}, far {:.2}, preview {:?}",
        projection.fov_vertical_degrees,
        projection.aspect_ratio,
        projection.near,
        projection.far,
        host.detection().pip().pixel_size()
    );
    log::info!(
        "{} frames rendered, long bounces on {:?}",
        renderer.calls().len(),
        renderer.violations()
    );

    Ok(())
}
