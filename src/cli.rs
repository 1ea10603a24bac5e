use std::path::PathBuf;
use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "termcard",
    about = "An interactive business card for your terminal",
    version = "0.1.0"
)]
pub struct Cli {
    /// path to a card config file (JSON), defaults to the built-in card
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// just print the link table without interactive mode
    #[arg(short, long)]
    pub links: bool,

    /// disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// skip the startup banner
    #[arg(long)]
    pub no_banner: bool,
}
