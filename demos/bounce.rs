use physlab::renderer::{BounceScene, Renderer};
use physlab::simulator::BounceSimulator;

fn main() {
    tracing_subscriber::fmt().init();

    // Configure the simulator
    let simulator = BounceSimulator::builder()
        .canvas(1280.0, 720.0)
        .gravity(0.5)
        .build();

    // Start the renderer
    if let Err(err) = Renderer::new(BounceScene::new(simulator)).run() {
        tracing::error!(%err, "renderer failed");
        std::process::exit(1);
    }
}
