//! # Engine Module
//!
//! Orchestration of the orientation sweep: validated scan parameters, the
//! parallel fork-join over the angle grid, progress reporting, and cooperative
//! cancellation.
//!
//! - **Configuration** ([`config`]) - grid step and disk radius, validated up front
//! - **Sweep** ([`scan`]) - per-orientation area computation and matrix assembly
//! - **Progress Monitoring** ([`progress`]) - callback-based event reporting
//! - **Cancellation** ([`cancel`]) - a shared flag checked between rows
//! - **Error Handling** ([`error`]) - engine-level error taxonomy

pub mod cancel;
pub mod config;
pub mod error;
pub mod progress;
pub mod scan;
