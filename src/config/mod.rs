// src/config/mod.rs

pub mod consts;
