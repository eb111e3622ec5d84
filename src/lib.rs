// src/lib.rs
//
// fuzzvis: renders a string as a pixel raster whose rows are displaced by
// per-frame random jitter. The library is window-free; src/main.rs embeds
// it in a nannou app.

pub mod config;
pub mod controllers;
pub mod effects;
pub mod models;
pub mod render;
pub mod services;
pub mod utilities;
pub mod views;
