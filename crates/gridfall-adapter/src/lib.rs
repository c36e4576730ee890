//! Presentation boundary for the block-placement engine.
//!
//! A renderer never touches engine types directly: it polls a
//! [`GameHandle`] for snapshots and issues commands with the ids those
//! snapshots publish.
//!
//! - [`GameHandle`] - Owns the session; queries, commands, change counter
//! - [`GameSnapshot`] / [`ShapeView`] - Flattened, serializable session views
//! - [`ScoreStore`] / [`MemoryScoreStore`] - Best-score persistence

pub use self::{handle::*, snapshot::*, store::*};

pub mod handle;
pub mod snapshot;
pub mod store;
