//! Core table logic. Keep this crate free of IO and terminal concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod decisions;
pub mod events;
pub mod hand;
pub mod participant;
pub mod rng;
pub mod round;
pub mod state;
pub mod table;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use decisions::*;
pub use events::*;
pub use hand::*;
pub use participant::*;
pub use rng::*;
pub use round::*;
pub use state::*;
pub use table::*;
