//! Headless walk-through of a geoscene session.
//!
//! Generates a scene, clicks the middle of the view, animates the resulting
//! bounce for two seconds of simulated frames, exports the selection, then
//! regenerates.
//!
//! ```text
//! cargo run --example headless
//! RUST_LOG=geoscene=debug cargo run --example headless
//! ```

use std::time::{Duration, Instant};

use geoscene::interaction::{AnalyticPicker, Viewport};
use geoscene::lifecycle::collaborators::{Exporter, Renderer, SceneGraph};
use geoscene::lifecycle::{FrameClock, FrameHost, FrameLoop, SceneConfig, SceneLifecycle};
use geoscene::operations::query::Describe;
use geoscene::scene::{Camera, SceneStore, SolidData, SolidId, StageSetup};

/// Prints scene-graph changes instead of building meshes.
struct ConsoleGraph;

impl SceneGraph for ConsoleGraph {
    fn configure_stage(&mut self, stage: &StageSetup) {
        let size = stage.ground.size;
        println!("stage: background #{:x}, ground {size}x{size}", stage.background);
    }

    fn add_solid(&mut self, id: SolidId, solid: &SolidData) {
        let [r, g, b] = solid.color.to_rgb_f32();
        println!(
            "  + {id:?} {} at ({:.2}, {:.2}, {:.2}), rgb ({r:.2}, {g:.2}, {b:.2})",
            solid.shape.kind(),
            solid.position.x,
            solid.position.y,
            solid.position.z
        );
    }

    fn remove_solid(&mut self, id: SolidId) {
        println!("  - {id:?}");
    }
}

/// Simulated 60 Hz display that reports the highest solid every 30 frames.
struct SimulatedDisplay {
    now: Instant,
    frames_left: u32,
    rendered: u32,
}

impl Renderer for SimulatedDisplay {
    fn render(&mut self, store: &SceneStore, _camera: &Camera) {
        self.rendered += 1;
        if self.rendered % 30 == 0 {
            let top = store
                .iter()
                .map(|(_, s)| s.highest_y())
                .fold(f64::NEG_INFINITY, f64::max);
            println!("frame {:>3}: highest point {top:.3}", self.rendered);
        }
    }
}

impl FrameHost for SimulatedDisplay {
    fn next_frame(&mut self) -> Option<Instant> {
        if self.frames_left == 0 {
            return None;
        }
        self.frames_left -= 1;
        self.now += Duration::from_micros(16_667);
        Some(self.now)
    }
}

/// Writes a plain-text summary in place of a real interchange encoder.
struct SummaryExporter;

impl Exporter for SummaryExporter {
    fn serialize(&mut self, id: SolidId, solid: &SolidData) -> geoscene::Result<Vec<u8>> {
        let mut out = format!("{id:?} {} #{:x}", solid.shape.kind(), solid.color);
        let p = solid.position;
        out.push_str(&format!(" @ {:.3} {:.3} {:.3}", p.x, p.y, p.z));
        Ok(out.into_bytes())
    }
}

fn main() -> geoscene::Result<()> {
    // Default: WARN for everything, INFO for geoscene.
    // Override with RUST_LOG env var (e.g. RUST_LOG=geoscene=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("headless=info".parse().unwrap_or_default())
        .add_directive("geoscene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let viewport = Viewport::new(1280.0, 720.0);
    let mut scene = SceneLifecycle::new(SceneConfig::default());
    scene.camera_mut().set_viewport(viewport.width, viewport.height);

    let mut graph = ConsoleGraph;
    let placed = scene.populate(&mut graph);
    println!("placed {placed} solids");

    // Nothing selected yet, so this is a logged no-op.
    scene.export(&mut SummaryExporter)?;

    // Aim at the first solid so the click always lands.
    let target = scene.session().store().iter().next().map(|(_, s)| s.position);
    if let Some(target) = target {
        scene.camera_mut().target = target;
    }
    match scene.click(viewport.width / 2.0, viewport.height / 2.0, &viewport, &AnalyticPicker) {
        Some(id) => {
            if let Some(props) = Describe::new(id).execute(scene.session().store()) {
                println!("\n{props}\n");
            }
            if let Some(color) = scene.session().selected_color() {
                println!("highlight #{color:x}");
            }
        }
        None => println!("click missed"),
    }

    let start = Instant::now();
    let mut display = SimulatedDisplay {
        now: start,
        frames_left: 120,
        rendered: 0,
    };
    let frames = FrameLoop::new(FrameClock::starting_at(start)).run(&mut scene, &mut display);
    println!(
        "ran {frames} frames, {} solid(s) still bouncing",
        scene.session().bounce().tracked_count()
    );

    if let Some(artifact) = scene.export(&mut SummaryExporter)? {
        println!(
            "exported {} ({} bytes): {}",
            artifact.file_name,
            artifact.bytes.len(),
            String::from_utf8_lossy(&artifact.bytes)
        );
    }

    let placed = scene.reset(&mut graph);
    println!(
        "new scene with {placed} solids, export enabled: {}",
        scene.session().info().export_enabled()
    );
    Ok(())
}
