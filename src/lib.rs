// src/lib.rs

pub mod config;
pub mod core;
pub mod specs;

pub mod data;
pub mod export;
pub mod geocode;
pub mod pipeline;
