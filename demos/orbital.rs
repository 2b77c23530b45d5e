use physlab::properties::CanvasBounds;
use physlab::renderer::{OrbitalScene, Renderer};

fn main() {
    tracing_subscriber::fmt().init();

    // Star at the center, planet on a circular launch
    let scene = OrbitalScene::new(CanvasBounds::new(1280.0, 720.0));

    // Start the renderer
    if let Err(err) = Renderer::new(scene).run() {
        tracing::error!(%err, "renderer failed");
        std::process::exit(1);
    }
}
