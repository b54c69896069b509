//! Partition dishes into groups of 2, 3 or 4 so that the sum of squared
//! distinct-ingredient counts per group is as high as possible.
//!
//! The solver is a multi-start randomized greedy: every trial shuffles the
//! dishes and packs them front to back, always trying size 2 first, then 3,
//! then 4, within per-size slot budgets. See [`search::solve`].

pub mod action;
pub mod batch;
pub mod cache;
pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod search;

pub use model::condition::{GroupSize, Quota, Score};
pub use model::entity::{Dish, Id};
pub use model::group::{Group, Plan};
pub use model::instance::Instance;
pub use search::solve;
