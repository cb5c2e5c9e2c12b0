// src/data/mod.rs

pub mod catalog;
pub mod questions;
