use bitball::mainloop::{Mainloop, MainloopBuilder};
use bitball::terminal::TerminalMainloopBuilder;
use bitball::{BitBallState, DisplayMode};

use clap::Parser;
use log::LevelFilter;

/// Toggle sixteen lamps and read the value in binary, decimal and hex
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Decimal reading shown at start
    #[arg(short, long, value_enum, default_value_t = DisplayMode::Unsigned)]
    mode: DisplayMode,

    /// Debug mode
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

fn main() -> Result<(), String> {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let mut page = BitBallState::with_mode(args.mode);
    let mut mainloop = TerminalMainloopBuilder {}
        .init()
        .map_err(|e| e.to_string())?;
    mainloop.mainloop(&mut page).map_err(|e| e.to_string())?;

    Ok(())
}
