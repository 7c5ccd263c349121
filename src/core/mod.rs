// src/core/mod.rs

pub mod net;
pub mod price;
pub mod sanitize;
