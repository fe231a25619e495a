//! EvoLingo core — the timeline-driven geo-temporal reveal controller
//! behind the word-evolution map, plus the provider, translation and
//! group-chat glue around it.
//!
//! The shape of the crate:
//!   - `waypoint` / `reveal`: the data model and the pure derivations
//!     of what the map shows at a given cursor year.
//!   - `cursor` / `playback`: the scrub-and-play state machine.
//!   - `viewport`: camera focus commands, one per active-waypoint change.
//!   - `controller`: the single owner wiring the above together.
//!   - `provider` / `translate` / `chat`: external-collaborator
//!     contracts with deterministic fallbacks.

pub mod chat;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod error;
pub mod playback;
pub mod provider;
pub mod render;
pub mod reveal;
pub mod translate;
pub mod types;
pub mod viewport;
pub mod waypoint;

pub use config::AppConfig;
pub use controller::RevealController;
pub use error::{EvoError, EvoResult};
