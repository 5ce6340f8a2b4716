use std::thread;

use anyhow::{anyhow, Result};
use connect4::{Action, Engine, GameState};
use engine::GameState as GameStateTrait;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use uct::{CancellationToken, UCTAgent, UCTOptions};

const NAME: &str = "UCT";
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

static MAKE_MOVE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^makemove\s+(.+)").unwrap());

#[derive(Debug, PartialEq)]
pub enum UGICommand {
    UGI,
    IsReady,
    NewGame,
    MakeMove(Vec<Action>),
    Go,
    Stop,
    Quit,
    Noop,
}

#[derive(Debug, PartialEq)]
pub enum Output {
    Command(String, String),
    Info(String),
    Warning(String),
}

pub fn parse_line(line: &str) -> Result<UGICommand> {
    let line = line.trim();

    match line {
        "" => Ok(UGICommand::Noop),
        "ugi" => Ok(UGICommand::UGI),
        "isready" => Ok(UGICommand::IsReady),
        "newgame" => Ok(UGICommand::NewGame),
        "go" => Ok(UGICommand::Go),
        "stop" => Ok(UGICommand::Stop),
        "quit" => Ok(UGICommand::Quit),
        _ => {
            let captures = MAKE_MOVE_RE
                .captures(line)
                .ok_or_else(|| anyhow!("Unknown command: {}", line))?;

            let actions = captures[1]
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<Action>>>()?;

            Ok(UGICommand::MakeMove(actions))
        }
    }
}

enum CommandInner {
    NewGame,
    MakeMove(Vec<Action>),
    Go,
}

/// Front half of the UGI host. Answers the handshake directly and forwards position and search
/// commands to the game loop, which runs on its own thread so that `stop` can be read while a
/// search is in flight.
pub struct GameManager {
    command_channel: mpsc::Sender<CommandInner>,
    cancellation: CancellationToken,
    output: OutputHandle,
}

impl GameManager {
    /// Must be called from within a tokio runtime.
    pub fn new(options: UCTOptions) -> (Self, mpsc::UnboundedReceiver<Output>) {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (output_tx, output_rx) = mpsc::unbounded_channel();
        let cancellation = CancellationToken::new();

        let mut game_manager_inner = GameManagerInner {
            engine: Engine::new(),
            game_state: GameState::initial(),
            options,
            cancellation: cancellation.clone(),
            command_rx,
            output: OutputHandle {
                output_tx: output_tx.clone(),
            },
        };

        let handle = tokio::runtime::Handle::current();
        thread::spawn(move || {
            handle.block_on(async { game_manager_inner.run_game_loop().await });
        });

        let game_manager = Self {
            command_channel: command_tx,
            cancellation,
            output: OutputHandle { output_tx },
        };

        (game_manager, output_rx)
    }

    /// Handles one command. Returns false once the host asked to quit.
    pub async fn command(&self, command: UGICommand) -> bool {
        match command {
            UGICommand::UGI => {
                self.output.cmd("protocol-version", "1");
                self.output.cmd("id name", NAME);
                self.output.cmd("id author", AUTHOR);
                self.output.cmd("ugiok", "");
            }
            UGICommand::IsReady => self.output.cmd("readyok", ""),
            UGICommand::NewGame => self.send(CommandInner::NewGame).await,
            UGICommand::MakeMove(actions) => self.send(CommandInner::MakeMove(actions)).await,
            UGICommand::Go => {
                self.cancellation.reset();
                self.send(CommandInner::Go).await;
            }
            UGICommand::Stop => self.cancellation.cancel(),
            UGICommand::Quit => {
                self.cancellation.cancel();
                return false;
            }
            UGICommand::Noop => {}
        }

        true
    }

    async fn send(&self, command: CommandInner) {
        if self.command_channel.send(command).await.is_err() {
            self.output.warning("The game loop has stopped");
        }
    }
}

impl Drop for GameManager {
    fn drop(&mut self) {
        self.cancellation.cancel();
    }
}

struct GameManagerInner {
    engine: Engine,
    game_state: GameState,
    options: UCTOptions,
    cancellation: CancellationToken,
    command_rx: mpsc::Receiver<CommandInner>,
    output: OutputHandle,
}

impl GameManagerInner {
    async fn run_game_loop(&mut self) {
        let mut agent = UCTAgent::new(&self.engine, self.options.clone())
            .with_cancellation(self.cancellation.clone());

        while let Some(command) = self.command_rx.recv().await {
            match command {
                CommandInner::NewGame => self.game_state = GameState::initial(),
                CommandInner::MakeMove(actions) => {
                    for action in actions {
                        if self.game_state.is_terminal().is_some() {
                            self.output
                                .warning(&format!("The game is over, ignoring move {}", action));
                            break;
                        }

                        if !self.game_state.is_valid_action(&action) {
                            self.output.warning(&format!("Column {} is full", action));
                            break;
                        }

                        self.game_state = self.game_state.drop_piece(action.column());
                    }

                    debug!("{}", self.game_state);
                }
                CommandInner::Go => match agent.decide(&self.game_state) {
                    Ok(decision) => {
                        self.output.info(&format!(
                            "iterations {} time {}",
                            decision.stats.iterations,
                            decision.stats.elapsed.as_millis()
                        ));
                        self.output.cmd("bestmove", &decision.action.to_string());
                    }
                    Err(err) => self.output.warning(&err.to_string()),
                },
            }
        }
    }
}

struct OutputHandle {
    output_tx: mpsc::UnboundedSender<Output>,
}

impl OutputHandle {
    fn cmd(&self, cmd_name: &str, cmd_value: &str) {
        self.send(Output::Command(cmd_name.to_string(), cmd_value.to_string()));
    }

    fn info(&self, msg: &str) {
        self.send(Output::Info(msg.to_string()));
    }

    fn warning(&self, msg: &str) {
        self.send(Output::Warning(msg.to_string()));
    }

    fn send(&self, output: Output) {
        if self.output_tx.send(output).is_err() {
            warn!("Output channel closed");
        }
    }
}

pub fn output_ugi_cmd(cmd: &str, msg: &str) {
    if !msg.is_empty() {
        println!("{} {}", cmd, msg);
    } else {
        println!("{}", cmd);
    }
}

pub fn output_ugi_info(msg: &str) {
    println!("info {}", msg);
}

pub fn log_warning(msg: &str) {
    println!("log Warning: {}", msg);
}

fn print_output(output: Output) {
    match output {
        Output::Command(cmd, value) => output_ugi_cmd(&cmd, &value),
        Output::Info(msg) => output_ugi_info(&msg),
        Output::Warning(msg) => log_warning(&msg),
    }
}

pub async fn run_ugi(options: UCTOptions) -> Result<()> {
    let (game_manager, mut output_rx) = GameManager::new(options);

    let output_task = tokio::spawn(async move {
        while let Some(output) = output_rx.recv().await {
            print_output(output);
        }
    });

    let mut lines = BufReader::new(stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_line(&line) {
            Ok(command) => {
                if !game_manager.command(command).await {
                    break;
                }
            }
            Err(e) => log_warning(&e.to_string()),
        }
    }

    // Dropping the manager closes the command channel, which ends the game loop and with it the
    // last output sender.
    drop(game_manager);
    output_task.await?;

    Ok(())
}
