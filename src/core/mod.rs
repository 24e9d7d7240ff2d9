//! Core engine types: players, configuration, session state, RNG, clock, errors.

pub mod clock;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use clock::{Clock, ElapsedTime};
pub use config::{
    GameConfig, GameMode, ParseGameModeError, COMPLETION_DELAY, FLIP_BACK_DELAY, MAX_GRID_SIDE,
    MIN_GRID_SIDE,
};
pub use error::MatchError;
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameSession, TurnPhase, TurnRecord};
