use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use anyhow::Result;
use colored::Colorize;
use spinoff::{spinners, Spinner};

use crate::card::Card;
use crate::menu::{self, MenuAction, Prompter};
use crate::opener::UrlOpener;
use crate::render;

enum ControlFlow {
    Continue,
    Exit,
}

/// the dispatch loop: prompt, resolve, run the handler, repeat until quit
pub struct App<'a, W: Write> {
    card: &'a Card,
    opener: &'a dyn UrlOpener,
    out: W,
    animate: bool,
    interrupted: Arc<AtomicBool>,
}

impl<'a, W: Write> App<'a, W> {
    pub fn new(
        card: &'a Card,
        opener: &'a dyn UrlOpener,
        out: W,
        animate: bool,
        interrupted: Arc<AtomicBool>,
    ) -> Self {
        Self {
            card,
            opener,
            out,
            animate,
            interrupted,
        }
    }

    /// run to termination; nothing propagates past this boundary except a
    /// failure to write the report itself
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let choices = menu::choices(&self.card.links);

        loop {
            let action = self.next_action(prompter, &choices);

            match self.step(action) {
                Ok(ControlFlow::Continue) => continue,
                Ok(ControlFlow::Exit) => break,
                Err(err) => {
                    // single top-level recovery point: report and exit cleanly
                    writeln!(self.out, "\n  {} {:#}", "error:".red().bold(), err)?;
                    break;
                }
            }
        }

        Ok(())
    }

    /// a signal landing during a handler or the prompt folds into quit here,
    /// so the quit branch owns the single farewell
    fn next_action(&self, prompter: &mut dyn Prompter, choices: &[menu::MenuChoice]) -> MenuAction {
        if self.interrupted.load(Ordering::SeqCst) {
            return MenuAction::Quit;
        }

        let action = prompter.prompt(choices);
        if self.interrupted.load(Ordering::SeqCst) {
            return MenuAction::Quit;
        }
        action
    }

    fn step(&mut self, action: MenuAction) -> Result<ControlFlow> {
        if action == MenuAction::Quit {
            self.farewell()?;
            return Ok(ControlFlow::Exit);
        }

        let card = self.card;
        let Some(url) = card.links.url_for(action) else {
            // menu entry without a configured link is a config gap, not a
            // user-facing error; skip it and keep prompting
            return Ok(ControlFlow::Continue);
        };

        self.launch(action, url)?;
        Ok(ControlFlow::Continue)
    }

    /// two phases: one launch attempt under a scoped spinner, then exactly
    /// one user-facing message
    fn launch(&mut self, action: MenuAction, url: &str) -> Result<()> {
        let outcome = if self.animate {
            let spinner = Spinner::new(
                spinners::Dots,
                format!("opening {}", url),
                render::spinner_color(&self.card.theme.spinner),
            );
            let outcome = self.opener.open(url);
            render::settle(&self.card.theme);
            spinner.clear();
            outcome
        } else {
            self.opener.open(url)
        };

        let accent = render::theme_color(&self.card.theme.accent);
        match outcome {
            Ok(()) => writeln!(
                self.out,
                "  {} {}",
                "✔".color(accent),
                confirmation(action)
            )?,
            Err(_) => writeln!(
                self.out,
                "  {} couldn't reach a browser, open this yourself: {}",
                "✘".yellow(),
                url.underline()
            )?,
        }

        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        writeln!(self.out, "\n  👋 thanks for stopping by!")?;
        Ok(())
    }
}

fn confirmation(action: MenuAction) -> &'static str {
    match action {
        MenuAction::Email => "your mail client should be opening, say hi!",
        MenuAction::Resume => "resume sent to your browser",
        MenuAction::Portfolio => "portfolio sent to your browser",
        MenuAction::Github => "GitHub profile sent to your browser",
        MenuAction::Linkedin => "LinkedIn profile sent to your browser",
        MenuAction::Twitter => "Twitter profile sent to your browser",
        MenuAction::Quit => "",
    }
}
