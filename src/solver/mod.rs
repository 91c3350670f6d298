//! The constraint-satisfaction core: domain storage, consistency
//! enforcement, and heuristic backtracking search.

pub mod domains;
pub mod engine;
pub mod heuristics;
pub mod propagate;
pub mod search;
pub mod stats;
pub mod work_list;
