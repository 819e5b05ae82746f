//! Planix scene checker: reports which shapes of a demo scene intersect.
//!
//! ```text
//! main.rs     entry point (this file)
//! scenes.rs   scene dispatcher (starting layouts of the canvas demos)
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example circ_rec                  # default (mixed)
//! cargo run --example circ_rec -- rect_rect
//! RUST_LOG=planix=trace cargo run --example circ_rec -- tri_tri
//! ```

mod scenes;

use planix::geometry::Shape;
use planix::operations::intersect::IntersectingPairs;

fn main() -> planix::Result<()> {
    // Default: WARN for everything, INFO for the demo and the kernel.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("circ_rec=info".parse().unwrap_or_default())
        .add_directive("planix=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "mixed".to_owned());
    let Some(scene) = scenes::build(&name) else {
        tracing::error!(scene = %name, available = ?scenes::SCENES, "unknown scene");
        std::process::exit(2);
    };
    let entries = scene?;

    let shapes: Vec<Shape> = entries.iter().map(|e| e.shape.clone()).collect();
    let query = IntersectingPairs::new(&shapes);
    for (i, j) in query.execute()? {
        tracing::info!(a = %entries[i].label, b = %entries[j].label, "intersect");
    }
    for (entry, hit) in entries.iter().zip(query.flags()?) {
        let color = if hit { "red" } else { "black" };
        tracing::info!(shape = %entry.label, color, "shape");
    }
    Ok(())
}
