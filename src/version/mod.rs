//! Version model and remote update checking
//!
//! This module parses and orders dotted version strings and polls remote
//! resource-hosting services for the latest published version.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Endpoint   │────▶│   Checker   │────▶│  Completed  │
//! │  (fetch)    │ raw │   (parse)   │     │  (compare)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │  Endpoints  │     │   Version   │
//! │(spigot, gh) │     │ (types.rs)  │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: `UpdateChecker`, its builder, and the `Completed` result
//! - [`endpoint`]: `Endpoint` enum and the `VersionSource` query trait
//! - [`endpoints`]: Concrete endpoint implementations (Spigot, Polymart, Modrinth, GitHub)
//! - [`error`]: Error types for parsing, querying, and building
//! - [`types`]: The `Version` type

pub mod checker;
pub mod endpoint;
pub mod endpoints;
pub mod error;
pub mod types;
