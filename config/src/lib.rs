//! # Config Crate
//!
//! Centralized configuration for the ECMAScript CST-to-AST converter.
//! Every tunable default is defined here once so the CST and AST crates
//! stay free of scattered literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ConverterConfig, SourceKind};
//!
//! let config = ConverterConfig::default();
//! assert!(config.attach_tokens);
//! assert_eq!(config.default_source_type, SourceKind::Script);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable Snapshots**: `ConverterConfig` is `Copy` and validated on construction
//! - **Minimal Dependencies**: Only `thiserror`, usable from every crate

pub mod constants;
