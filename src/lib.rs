//! Cukai - Malaysian company tax calculator
//!
//! This library provides the tax engine for Malaysian business entities
//! (Sdn Bhd, Enterprise, Berhad) together with their static reporting
//! profiles, profit parsing and Ringgit formatting.

pub mod config;
pub mod entity;
pub mod error;
pub mod tax;
pub mod utils;
