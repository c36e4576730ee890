//! Turn orchestration and session state.
//!
//! This module provides the high-level game logic that drives the core data
//! structures through a block-placement game:
//!
//! - [`GameSession`] - One game: grid, shape offer, score, lifecycle state
//! - [`GameConfig`] - Tunable session parameters
//! - [`ShapeTray`] - The per-turn shape offer, backed by a seedable generator
//! - [`DrawSeed`] - Seed for deterministic shape draws
//! - [`SessionStats`] - Score and placement statistics
//!
//! # Game Flow
//!
//! A typical game progresses as follows:
//!
//! 1. Create a [`GameSession`]; the tray offers three shapes
//! 2. The player places an offered shape on the grid
//! 3. Complete rows and columns are cleared and scored
//! 4. Once the offer is exhausted, three fresh shapes are drawn
//! 5. Repeat until no offered shape fits anywhere (terminal state)
//!
//! A terminal session can be recovered with [`GameSession::try_continue`]
//! (an externally granted second chance) or started over with
//! [`GameSession::reset`], which folds the score into the best score.
//!
//! # Example
//!
//! ```
//! use gridfall_engine::{GameConfig, GameSession, GridPos};
//!
//! let mut session = GameSession::new(GameConfig::default());
//!
//! // Place the first offered shape in the top-left corner.
//! let shape = session.tray().shapes()[0];
//! let result = session.place(shape, GridPos::new(0, 0));
//!
//! assert!(result.placed);
//! assert_eq!(session.tray().len(), 2);
//! ```

pub use self::{session::*, stats::*, tray::*};

pub(crate) mod session;
pub(crate) mod stats;
pub(crate) mod tray;
