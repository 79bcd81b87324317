//! Simulation driver and program loading.
//!
//! Provides the top-level `Simulator`, cycle pacing policies and the
//! program-image loader used by the command-line front end.

/// Program image loading (binary and text formats).
pub mod loader;
/// Wall-clock pacing between cycles.
pub mod pacing;
/// Simulator driving a CPU to completion.
pub mod simulator;
