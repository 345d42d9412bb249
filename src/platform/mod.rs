// HitMapper - platform/mod.rs
//
// Filesystem-backed configuration. The only layer that reads files.

pub mod config;
