//! pokecalc: Pokémon capture, shake and shiny-odds probability engine
//!
//! Goals:
//! - Game-accurate formulas for every generation, including the fixed-point
//!   rounding each one applies between multiplications
//! - Pure functions over plain parameter records; no engine-held state
//! - Randomness only through an injected source, so simulations replay
//!
//! ## Quick start: capture odds
//! ```
//! use pokecalc::balls::{Ball, BallContext};
//! use pokecalc::capture::{compute_capture, CaptureParameters, StatusCondition};
//! use pokecalc::generation::Generation;
//!
//! // Base rate 45, a third of its HP left, asleep, Ultra Ball in Gen IV.
//! let effect = Ball::UltraBall.effect(Generation::Gen4, &BallContext::default());
//! let params = effect.apply_to(
//!     CaptureParameters::new(45, 40.0, 120.0).with_status(StatusCondition::Sleep),
//! );
//! let result = compute_capture(Generation::Gen4, &params);
//! assert!(result.capture_percentage > 40.0);
//! ```
//!
//! ## Quick start: shiny odds
//! ```
//! use pokecalc::game::Game;
//! use pokecalc::shiny::{compute_shiny_odds, ShinyMethod, ShinyOddsParameters};
//!
//! let params = ShinyOddsParameters::for_game(Game::Scarlet, ShinyMethod::TeraRaid);
//! assert_eq!(compute_shiny_odds(&params).to_string(), "1/4103");
//! ```
//!
//! ## TUI
//! Run the interactive calculator with:
//! ```sh
//! cargo run --bin pokecalc
//! ```

pub mod balls;
pub mod capture;
pub mod encounters;
pub mod game;
pub mod generation;
pub mod numeric;
pub mod shake;
pub mod shiny;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
