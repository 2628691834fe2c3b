mod command;
mod config;
mod render;

use std::io::{self, BufRead, Write};

use clap::Parser;
use colour_sort_common::config::ConfigManager;
use colour_sort_common::games::SessionRng;
use colour_sort_common::games::colour_sort::Session;
use colour_sort_common::progress::Progress;
use colour_sort_common::{log, logger};

use command::{Command, HELP};
use config::get_config_manager;
use render::{render_legend, render_update, render_view};

#[derive(Parser)]
#[command(name = "colour_sort_client")]
struct Args {
    /// Path to the YAML config; defaults to one next to the executable.
    #[arg(long)]
    config: Option<String>,

    /// Seed for level generation, for reproducible deals.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = get_config_manager(args.config.as_deref()).get_config()?;

    let prefix = if args.use_log_prefix {
        Some(config.log_prefix.clone().unwrap_or_else(|| "Client".to_string()))
    } else {
        None
    };
    logger::init_logger(prefix);

    let store: ConfigManager<_, Progress, _> = ConfigManager::from_yaml_file(&config.progress_file);
    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    let mut session = Session::new(config.game.clone(), Box::new(store), rng)?;

    println!("{}", HELP);
    print!("{}", render_legend());
    print!("{}", render_view(&session.view()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let update = match command {
            Command::Activate(position) => {
                let Some(stack) = session.view().stacks.get(position - 1).map(|s| s.id.clone()) else {
                    println!("There is no stack {}", position);
                    continue;
                };
                session.on_stack_activated(&stack)?
            }
            Command::Undo => session.on_undo_requested(),
            Command::Reset => session.on_reset_requested(),
            Command::Bonus => session.on_bonus_requested(),
            Command::Help => {
                println!("{}", HELP);
                print!("{}", render_legend());
                continue;
            }
            Command::Quit => break,
        };

        print!("{}", render_update(&update));
        stdout.flush()?;
    }

    log!("Leaving at level {}", session.level());
    Ok(())
}
