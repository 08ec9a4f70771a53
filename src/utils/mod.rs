// src/utils/mod.rs

pub mod pagination;
pub mod quiz;
