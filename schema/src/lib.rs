// Trainer AI Schema - static battle data
// Every table in this crate is compiled in and globally shared; nothing here is
// mutated at runtime.

pub use abilities::*;
pub use battle_data::*;
pub use items::*;
pub use moves::*;
pub use pokemon_types::*;
pub use species::*;

pub mod abilities;
pub mod battle_data;
pub mod items;
pub mod moves;
pub mod pokemon_types;
pub mod species;
