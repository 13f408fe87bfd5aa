//! Core matching engine for cellarmatch
//!
//! Pure functions over wine-like records: text normalization, blocking-key
//! generation, fuzzy similarity scoring, transitive clustering, and master
//! selection. No I/O — persistence lives in `cellarmatch-storage`.

mod candidates;
mod cluster;
mod constants;
mod fuzzy;
mod master;
mod normalize;
mod record;
mod similarity;

pub use candidates::*;
pub use cluster::*;
pub use constants::*;
pub use fuzzy::*;
pub use master::*;
pub use normalize::*;
pub use record::*;
pub use similarity::*;
