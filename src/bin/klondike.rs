//! Interactive Klondike at the terminal.
//!
//! ```text
//! klondike [--draw=1|3] [--seed=<u64>] [--log=<level>] [--autoplay]
//! ```
//!
//! Reads one command per line from stdin and prints the board after each.
//! `--autoplay` plays the dealt game with the greedy policy and exits.

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};

use klondike_engine::cli::{Outcome, Session, HELP};
use klondike_engine::core::{DrawMode, KlondikeConfig};
use klondike_engine::{logging, render, Command};

struct Args {
    config: KlondikeConfig,
    log: Option<String>,
    autoplay: bool,
}

fn parse_args() -> Result<Args> {
    let mut config = KlondikeConfig::new();
    let mut log = None;
    let mut autoplay = false;

    for arg in std::env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--draw=") {
            let count: usize = rest
                .parse()
                .with_context(|| format!("could not parse draw count from '{rest}'"))?;
            config = config.with_draw(DrawMode::from_count(count)?);
        } else if let Some(rest) = arg.strip_prefix("--seed=") {
            let seed: u64 = rest
                .parse()
                .with_context(|| format!("could not parse seed from '{rest}'"))?;
            config = config.with_seed(seed);
        } else if let Some(rest) = arg.strip_prefix("--log=") {
            log = Some(rest.to_string());
        } else if arg == "--autoplay" {
            autoplay = true;
        } else if arg == "--help" || arg == "-h" {
            println!("usage: klondike [--draw=1|3] [--seed=<u64>] [--log=<level>] [--autoplay]");
            println!();
            println!("{HELP}");
            std::process::exit(0);
        } else {
            bail!(
                "unrecognized argument '{arg}'; supported: --draw=1|3, --seed=<u64>, --log=<level>, --autoplay"
            );
        }
    }

    Ok(Args { config, log, autoplay })
}

fn main() -> Result<()> {
    let args = parse_args()?;

    let level = logging::resolve_level(args.log.as_deref());
    logging::init(level).map_err(|e| anyhow!("failed to install logger: {e}"))?;

    let mut session = Session::new(&args.config);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.autoplay {
        if let Outcome::Continue { message: Some(message) } = session.execute(Command::Autoplay) {
            writeln!(out, "{message}")?;
        }
        write!(out, "{}", render::board(session.engine()))?;
        return Ok(());
    }

    writeln!(out, "Klondike solitaire. H for help, Q to quit.")?;
    writeln!(out)?;
    write!(out, "{}", render::board(session.engine()))?;

    let stdin = io::stdin();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("failed to read command")? == 0 {
            break;
        }

        match session.execute_line(&line) {
            Outcome::Quit => break,
            Outcome::Continue { message } => {
                if let Some(message) = message {
                    writeln!(out, "{message}")?;
                }
                writeln!(out)?;
                write!(out, "{}", render::board(session.engine()))?;
            }
        }
    }

    Ok(())
}
