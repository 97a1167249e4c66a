pub mod check;
pub mod dump;
pub mod pattern_loader;
pub mod run_common;
pub mod trace;
