//! Utility modules: storage persistence.

pub mod persistence;
