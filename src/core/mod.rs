// HitMapper - core/mod.rs
//
// Core business logic layer.
// Must NOT depend on: app, platform, or any I/O stream directly.

pub mod filter;
pub mod mapper;
pub mod model;
pub mod tokenizer;
