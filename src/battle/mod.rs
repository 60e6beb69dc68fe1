pub mod conditions;
pub mod context;
pub mod damage;
pub mod rng;
pub mod state;
pub mod stats;
