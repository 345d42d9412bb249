// HitMapper - lib.rs
//
// Library entry point, exposing the mapper for integration testing and for
// embedding in other streaming jobs. The binary in `main.rs` only wires
// stdin/stdout and the CLI around `app::runner::run_mapper`.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
