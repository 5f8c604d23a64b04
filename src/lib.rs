// src/lib.rs

pub mod config;
pub mod maze;
pub mod session;
pub mod ui;
