use bitball::mainloop::{Mainloop, MainloopBuilder};
use bitball::scripted::ScriptedMainloopBuilder;
use bitball::{BitBallInput, BitBallState, DisplayMode};

use clap::Parser;
use log::LevelFilter;

/// Toggle lamps from the command line and print the page once
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lamp to toggle, 0 is the MSB and 15 the LSB. May be repeated.
    #[arg(short, long = "toggle")]
    toggles: Vec<usize>,

    /// Decimal reading to print
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

    let inputs = args
        .toggles
        .iter()
        .map(|index| BitBallInput::ToggleBit(*index))
        .collect();

    let mut page = BitBallState::with_mode(args.mode);
    let mut mainloop = ScriptedMainloopBuilder {
        inputs,
        writer: std::io::stdout(),
    }
    .init()
    .map_err(|e| e.to_string())?;
    mainloop.mainloop(&mut page).map_err(|e| e.to_string())?;

    Ok(())
}
