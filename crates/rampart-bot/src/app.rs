//! Main application orchestration.
//!
//! One game, one process: the engine drives the bot over stdio. The first
//! line is the config payload; every later line is a frame. Deploy frames
//! run one turn decision and submit the two action stacks; action frames
//! feed breach events to the planner; the end-game frame stops the loop.

use crate::config::AppConfig;
use crate::error::AppResult;
use rampart_core::UnitRoster;
use rampart_engine::{parse_config, Frame, FramePhase, GameState};
use rampart_strategy::{Plans, TurnPlanner};
use std::io::{BufRead, Write};
use tracing::{info, warn};

/// Per-game state, created once the config line has been consumed.
struct Session {
    roster: UnitRoster,
    planner: TurnPlanner,
}

/// Main application.
pub struct Application {
    config: AppConfig,
    session: Option<Session>,
}

impl Application {
    /// Create a new application. The session starts once the engine sends
    /// its config line.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    /// Run the game loop over stdio.
    pub fn run(&mut self) -> AppResult<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        self.run_on(stdin.lock(), stdout.lock())
    }

    /// Run the game loop over an explicit reader/writer pair.
    pub fn run_on<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> AppResult<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if self.session.is_none() {
                self.on_game_start(line);
                continue;
            }

            match Frame::parse(line) {
                Err(error) => warn!(%error, "skipping malformed frame"),
                Ok(frame) => match frame.phase {
                    FramePhase::Deploy => self.on_turn(&frame, &mut output)?,
                    FramePhase::Action => self.on_action_frame(&frame),
                    FramePhase::EndGame => {
                        info!(turn = frame.turn_number, "game over");
                        break;
                    }
                },
            }
        }
        Ok(())
    }

    /// Consume the config line and set up the per-game session.
    fn on_game_start(&mut self, line: &str) {
        match parse_config(line) {
            Ok(roster) => {
                info!(
                    rush_threshold = self.config.rush_threshold,
                    wave_size = self.config.wave_size,
                    "game configured"
                );
                let planner = TurnPlanner::new(
                    Plans::standard(),
                    self.config.rush_threshold,
                    self.config.wave_size,
                );
                self.session = Some(Session { roster, planner });
            }
            Err(error) => warn!(%error, "skipping malformed config line"),
        }
    }

    /// Decide one turn and submit the build and deploy stacks.
    fn on_turn<W: Write>(&mut self, frame: &Frame, output: &mut W) -> AppResult<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let mut state = GameState::from_frame(frame, &session.roster);
        session.planner.play_turn(&mut state);

        let (build, deploy) = state.submit_lines()?;
        writeln!(output, "{build}")?;
        writeln!(output, "{deploy}")?;
        output.flush()?;

        info!(
            turn = frame.turn_number,
            orders = state.queued_orders(),
            "turn submitted"
        );
        Ok(())
    }

    /// Ingest the breach events of one action frame.
    fn on_action_frame(&mut self, frame: &Frame) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        for &breach in &frame.breaches {
            session.planner.record_breach(breach);
        }
    }
}
