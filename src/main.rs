use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use physlab::properties::CanvasBounds;
use physlab::renderer::{BounceScene, OrbitalScene, Renderer, SpringScene};
use physlab::simulator::{BounceSimulator, SpringSimulator};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    Bounce,
    Orbital,
    Spring,
}

/// Interactive physics demos on a 2D canvas.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Which demo to run
    #[arg(value_enum, default_value = "bounce")]
    demo: Demo,

    /// Window width in pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 720)]
    height: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let bounds = CanvasBounds::new(cli.width as f32, cli.height as f32);

    let result = match cli.demo {
        Demo::Bounce => {
            let simulator = BounceSimulator::builder()
                .canvas(bounds.width, bounds.height)
                .build();
            Renderer::new(BounceScene::new(simulator))
                .window_size(cli.width, cli.height)
                .run()
        }
        Demo::Orbital => Renderer::new(OrbitalScene::new(bounds))
            .window_size(cli.width, cli.height)
            .run(),
        Demo::Spring => {
            let simulator = SpringSimulator::builder()
                .canvas(bounds.width, bounds.height)
                .build();
            Renderer::new(SpringScene::new(simulator))
                .window_size(cli.width, cli.height)
                .run()
        }
    };

    if let Err(err) = result {
        error!(%err, "renderer failed");
        std::process::exit(1);
    }
}
