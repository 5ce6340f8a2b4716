use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "UCT Client")]
#[clap(about = "Plays connect4 with a UCT search", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Play(PlayCommand),
    Ugi(UgiCommand),
}

/// Plays a full game between two UCT agents.
#[derive(Args)]
pub struct PlayCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,

    /// Writes the moves and the result as JSON.
    #[clap(short, long)]
    pub record: Option<String>,
}

#[derive(Args)]
#[clap(name = "ugi-client")]
#[clap(about = "Runs the engine through a line based protocol on stdin similar to the UCI Universal Chess Interface.", long_about = None)]
pub struct UgiCommand {
    #[clap(short, long, default_value_t = String::from("client.conf"))]
    pub config: String,
}
