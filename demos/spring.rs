use physlab::renderer::{Renderer, SpringScene};
use physlab::simulator::SpringSimulator;

fn main() {
    tracing_subscriber::fmt().init();

    // Configure the simulator
    let simulator = SpringSimulator::builder()
        .canvas(1280.0, 720.0)
        .spring_constant(0.1)
        .damping(0.05)
        .build();

    // Start the renderer
    if let Err(err) = Renderer::new(SpringScene::new(simulator)).run() {
        tracing::error!(%err, "renderer failed");
        std::process::exit(1);
    }
}
