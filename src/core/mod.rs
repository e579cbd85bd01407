// src/core/mod.rs

pub mod blocks;
pub mod net;
pub mod seatmap;
