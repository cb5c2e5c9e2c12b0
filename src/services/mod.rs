// src/services/mod.rs

pub mod matcher;
pub mod recommend;
pub mod scorer;
pub mod suggest;
