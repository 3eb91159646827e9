mod demo_app;

use clap::{Args, Parser, Subcommand};
use physdemo_core::{
    BallCount, DemoConfig, DemoKind, DemoSuite, InputEvent, MassRatio, ObstacleShape, Screen,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "physdemo")]
#[command(about = "Physics Demo Suite - bouncing balls, colliding squares, Newton's cradle and fluid flow", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log filter, e.g. "debug" or "physdemo_core=trace" (falls back to RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive window (default)
    Run {
        #[command(flatten)]
        params: DemoParams,

        /// Open this demo instead of the main menu
        #[arg(long)]
        demo: Option<DemoKind>,

        /// Initial window width in pixels
        #[arg(long, default_value_t = 800.0)]
        width: f32,

        /// Initial window height in pixels
        #[arg(long, default_value_t = 600.0)]
        height: f32,
    },
    /// Run one demo without a window and print its final state
    Simulate {
        #[command(flatten)]
        params: DemoParams,

        /// Demo to run
        #[arg(long)]
        demo: DemoKind,

        /// Number of fixed ticks to advance
        #[arg(long, default_value_t = 600)]
        ticks: usize,
    },
}

#[derive(Args, Clone)]
struct DemoParams {
    /// Seed for ball placement and fluid spawning
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of balls: 5, 10 or 50
    #[arg(long, default_value = "5", value_parser = parse_ball_count)]
    ball_count: BallCount,

    /// Mass of square B relative to square A: 1, 10 or 100
    #[arg(long, default_value = "1", value_parser = parse_mass_ratio)]
    mass_ratio: MassRatio,

    /// Fluid obstacle: ball, triangle or airfoil
    #[arg(long, default_value = "ball")]
    obstacle: ObstacleShape,
}

impl DemoParams {
    fn to_config(&self) -> DemoConfig {
        DemoConfig::new()
            .with_seed(self.seed)
            .with_ball_count(self.ball_count)
            .with_mass_ratio(self.mass_ratio)
            .with_obstacle(self.obstacle)
    }
}

impl Default for DemoParams {
    fn default() -> Self {
        let config = DemoConfig::default();
        Self {
            seed: config.seed,
            ball_count: config.ball_count,
            mass_ratio: config.mass_ratio,
            obstacle: config.obstacle,
        }
    }
}

fn parse_ball_count(s: &str) -> Result<BallCount, String> {
    let n: u32 = s.parse().map_err(|e| format!("{}", e))?;
    BallCount::try_from(n).map_err(|e| e.to_string())
}

fn parse_mass_ratio(s: &str) -> Result<MassRatio, String> {
    let n: u32 = s.parse().map_err(|e| format!("{}", e))?;
    MassRatio::try_from(n).map_err(|e| e.to_string())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let command = cli.command.unwrap_or(Commands::Run {
        params: DemoParams::default(),
        demo: None,
        width: 800.0,
        height: 600.0,
    });

    let outcome = match command {
        Commands::Run {
            params,
            demo,
            width,
            height,
        } => run_window(&params, demo, width, height),
        Commands::Simulate {
            params,
            demo,
            ticks,
        } => simulate(&params, demo, ticks),
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_window(
    params: &DemoParams,
    demo: Option<DemoKind>,
    width: f32,
    height: f32,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = demo.map(Screen::Demo).unwrap_or(Screen::MainMenu);
    let config = params.to_config().with_start_screen(start);
    info!(seed = config.seed, ?start, "starting window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Physics Demo Suite")
            .with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Physics Demo Suite",
        options,
        Box::new(move |cc| Ok(Box::new(demo_app::DemoApp::new(config, cc)))),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}

fn simulate(
    params: &DemoParams,
    demo: DemoKind,
    ticks: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = params.to_config().with_start_screen(Screen::Demo(demo));
    let mut suite = DemoSuite::new(&config);
    info!(demo = %demo, ticks, "simulating headless");

    for _ in 0..ticks {
        suite.step(InputEvent::Tick);
    }

    println!("{} after {} ticks", demo, ticks);
    for line in suite.status_lines(demo) {
        println!("  {}", line);
    }

    Ok(())
}
