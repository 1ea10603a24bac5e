use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use anyhow::{Context, Result};
use clap::Parser;

mod app;
mod card;
mod cli;
mod menu;
mod opener;
mod render;

use app::App;
use card::Card;
use cli::Cli;
use menu::TermPrompter;
use opener::SystemOpener;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let card = Card::load(cli.config.as_deref())?;

    if cli.links {
        render::link_table(&card);
        return Ok(());
    }

    // startup sequence runs exactly once, outside the loop
    if !cli.no_banner {
        render::banner(&card);
    }
    render::profile_panel(&card);
    render::usage_tip();

    // a signal during a handler must still end in the loop's farewell, so the
    // handler only raises a flag the loop folds into quit
    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let interrupted = Arc::clone(&interrupted);
        ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
            .context("failed to install the interrupt handler")?;
    }

    let animate = io::stdout().is_terminal();
    let opener = SystemOpener;
    let mut prompter = TermPrompter;

    let mut app = App::new(&card, &opener, io::stdout(), animate, interrupted);
    if let Err(err) = app.run(&mut prompter) {
        // only a failure to write the report itself gets here; still exit clean
        eprintln!("termcard: {err:#}");
    }

    Ok(())
}
