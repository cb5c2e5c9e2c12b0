// src/handlers/mod.rs

pub mod blog;
pub mod course;
pub mod health;
pub mod quiz;
