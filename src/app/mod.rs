// HitMapper - app/mod.rs
//
// Application orchestration: drives the core map step over I/O streams.

pub mod runner;
