//! Dependency tree core: the tree model, issue aggregation, filtering and
//! navigation/exclusion resolution.
//!
//! Everything in here is synchronous, performs no I/O and works only on
//! in-memory trees.

pub mod domain;
pub mod policies;
pub mod services;
