//! Data Transfer Objects - For API boundaries

pub mod grooming;

pub use grooming::*;
