use clap::Parser;
use fortune_caster::core::catalog::FortuneCatalog;
use fortune_caster::core::config::{self, CliOverrides};
use fortune_caster::core::random;
use fortune_caster::once;
use fortune_caster::share::WarpcastShare;
use fortune_caster::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fortune-caster", about = "Crack open a fortune cookie in your terminal")]
struct Args {
    /// Fortune file to draw from (one fortune per line)
    #[arg(short, long)]
    fortunes: Option<PathBuf>,

    /// Seed the random source for a reproducible sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Delay before the fortune appears, in milliseconds
    #[arg(long)]
    message_delay_ms: Option<u64>,

    /// Delay between the fortune and the action buttons, in milliseconds
    #[arg(long)]
    actions_delay_ms: Option<u64>,

    /// Print the share link instead of opening a browser
    #[arg(long)]
    no_browser: bool,

    /// Draw a single fortune, print it, and exit
    #[arg(long)]
    once: bool,

    /// With --once, print the draw as JSON
    #[arg(long, requires = "once")]
    json: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to fortune-caster.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("fortune-caster.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(std::io::Error::other)?;
    let cli = CliOverrides {
        fortunes: args.fortunes,
        seed: args.seed,
        message_delay_ms: args.message_delay_ms,
        actions_delay_ms: args.actions_delay_ms,
        no_browser: args.no_browser,
    };
    let resolved = config::resolve(&file_config, &cli);

    let catalog =
        FortuneCatalog::load(resolved.fortunes_file.as_deref()).map_err(std::io::Error::other)?;

    log::info!(
        "Fortune Caster starting up with {} fortunes (delays {:?} / {:?}, full reveal {:?})",
        catalog.len(),
        resolved.delays.message,
        resolved.delays.actions,
        resolved.delays.total()
    );

    if args.once {
        let share = WarpcastShare::new(
            resolved.compose_url.clone(),
            resolved.app_url.clone(),
            resolved.open_browser,
        );
        let mut random = random::from_seed(resolved.seed);
        let draw = once::draw(&catalog, random.as_mut(), &share);
        println!("{}", once::format(&draw, args.json).map_err(std::io::Error::other)?);
        return Ok(());
    }

    tui::run(resolved, catalog)
}
