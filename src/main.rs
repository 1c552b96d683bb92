//! rpair - E24 resistor pair finder
//!
//! Finds the two standard resistors that best approximate a target.
//!
//! # Usage
//!
//! ```bash
//! rpair parallel 4k3
//! rpair divider --vin 12 --vout 5 --max-current 1
//! rpair divider            # asks for Vin, Vout and the current limit
//! ```

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use resistor_pair::{
    error::Result,
    find_best_parallel_combination, find_resistor_values, is_standard_value,
    notation::{parse_shorthand, Shorthand},
    prompt::Prompter,
    DividerTarget,
};

/// E24 resistor pair finder
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Two resistors in parallel closest to a target resistance
    Parallel {
        /// Target resistance in shorthand (e.g. 4k7); asked for when omitted
        #[arg(value_name = "TARGET", value_parser = parse_shorthand)]
        target: Option<f64>,

        /// Search even when the target is itself a standard value
        #[arg(long)]
        always_search: bool,
    },

    /// Voltage divider closest to a target output voltage
    Divider {
        /// Input voltage (V)
        #[arg(long)]
        vin: Option<f64>,

        /// Desired output voltage (V)
        #[arg(long)]
        vout: Option<f64>,

        /// Maximum divider current (mA); unbounded when omitted
        #[arg(long, value_name = "MA")]
        max_current: Option<f64>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        Command::Parallel {
            target,
            always_search,
        } => run_parallel(target, always_search),
        Command::Divider {
            vin,
            vout,
            max_current,
        } => run_divider(vin, vout, max_current),
    }
}

fn run_parallel(target: Option<f64>, always_search: bool) -> Result<()> {
    let target = match target {
        Some(t) => t,
        None => Prompter::stdio().ask_resistance("Enter target resistance: ")?,
    };

    if is_standard_value(target) && !always_search {
        println!("Target resistance {} belongs to the standard set.", Shorthand(target));
        return Ok(());
    }

    let pair = find_best_parallel_combination(target)?;
    println!(
        "Best combination: R1={}, R2={}, Error={:.4}",
        Shorthand(pair.r1),
        Shorthand(pair.r2),
        pair.error
    );

    Ok(())
}

fn run_divider(vin: Option<f64>, vout: Option<f64>, max_current: Option<f64>) -> Result<()> {
    // Interactive only when the voltages were not both given as flags
    let interactive = vin.is_none() || vout.is_none();
    let mut prompter = Prompter::stdio();

    let vin = match vin {
        Some(v) => v,
        None => prompter.ask_number("Enter Vin: ")?,
    };
    let vout = match vout {
        Some(v) => v,
        None => prompter.ask_number("Enter Vout: ")?,
    };
    let max_current = match max_current {
        Some(ma) => Some(ma),
        None if interactive => prompter.ask_optional_number("Enter maximum current (mA): ")?,
        None => None,
    };

    let mut target = DividerTarget::new(vin, vout);
    if let Some(ma) = max_current {
        target = target.with_max_current_ma(ma);
    }

    let divider = find_resistor_values(&target)?;
    println!(
        "Best R1: {}, Best R2: {} with error: {:.4} and a current of {:.4} mA",
        Shorthand(divider.r1),
        Shorthand(divider.r2),
        divider.error,
        divider.current_ma()
    );

    Ok(())
}
