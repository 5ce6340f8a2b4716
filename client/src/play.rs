use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use common::FsExt;
use connect4::{Action, Engine, GameState, Value};
use engine::{GameEngine, GameState as GameStateTrait};
use log::info;
use serde::{Deserialize, Serialize};
use uct::{UCTAgent, UCTOptions};

#[derive(Serialize, Deserialize, Debug)]
pub struct GameRecord {
    pub actions: Vec<Action>,
    pub result: Value,
    pub options: UCTOptions,
}

/// Plays two UCT agents against each other until the game ends. Player 2 is seeded one past
/// player 1 so a fixed seed still gives the agents distinct streams.
pub fn play_game(options: &UCTOptions, record: Option<&str>) -> Result<GameRecord> {
    let engine = Engine::new();
    let p2_options = UCTOptions {
        seed: options.seed.map(|seed| seed.wrapping_add(1)),
        ..options.clone()
    };

    let mut agents = [
        UCTAgent::new(&engine, options.clone()),
        UCTAgent::new(&engine, p2_options),
    ];
    for (idx, agent) in agents.iter_mut().enumerate() {
        agent.init_ai(idx + 1);
    }

    let mut game_state = GameState::initial();
    let mut actions = vec![];

    let result = loop {
        if let Some(result) = engine.terminal_state(&game_state) {
            break result;
        }

        let player = engine.player_to_move(&game_state);
        let decision = agents[player - 1].decide(&game_state)?;

        info!("Player {} plays {}", player, decision.action);
        info!("{}", decision);

        game_state = engine.take_action(&game_state, &decision.action);
        actions.push(decision.action);

        info!("{}", game_state);
    };

    info!("{} after {} moves", result, actions.len());

    let game_record = GameRecord {
        actions,
        result,
        options: options.clone(),
    };

    if let Some(path) = record {
        write_record(path, &game_record)?;
    }

    Ok(game_record)
}

fn write_record(path: &str, game_record: &GameRecord) -> Result<()> {
    let path = path.relative_to_cwd()?;
    path.create_parent_dirs()?;

    let file =
        File::create(&path).with_context(|| format!("Failed to create record at {:?}", path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, game_record)
        .with_context(|| format!("Failed to write record to {:?}", path))?;
    writer.flush()?;

    info!("Game record written to {:?}", path);

    Ok(())
}
