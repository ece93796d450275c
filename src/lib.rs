//! # SOLID Design Patterns
//!
//! Runnable examples demonstrating two design principles with deliberately
//! small types.
//!
//! ## Patterns Covered
//!
//! 1. **Single Responsibility** - a journal that stores numbered entries
//!    ([`journal`]) while saving and loading live elsewhere ([`persistence`])
//! 2. **Interface Segregation** - a fat `Machine` interface whose implementers
//!    fail unsupported calls at runtime, contrasted with per-capability role
//!    traits where an unsupported call cannot be written at all ([`devices`])
//!
//! ## Running Examples
//!
//! ```bash
//! cargo run --bin demo_journal
//! cargo run --bin demo_devices
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for custom error types
//! - `colored` - Terminal colors for demo output
//! - `tempfile` - Scratch files for persistence tests

pub mod devices;
pub mod journal;
pub mod persistence;
