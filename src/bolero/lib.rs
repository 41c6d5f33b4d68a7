//! # Bolero Search Architecture
//!
//! Bolero search is a **UI-agnostic library** for composing catalog searches against
//! the Bolero bibliographic backend. A search form is a fixed set of per-entity
//! filters plus any number of ad-hoc `field = value` rows; this crate keeps that
//! state, decides which fields each row may still pick, and compiles everything
//! into the query parameters of the backend's list and export endpoints.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the configuration        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Rebuilds a session, returns a structured CmdResult       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (catalog, fields, session, params, request)           │
//! │  - Pure data and in-place mutation of caller-owned state    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O in the Core
//!
//! Nothing below the CLI writes to stdout/stderr, and nothing in the crate performs
//! HTTP requests. [`request::SearchRequest`] describes the request (URL, response
//! mode, timeout); executing it is up to whichever transport the front-end uses.
//!
//! ## Module Overview
//!
//! - [`catalog`]: Static per-entity field catalogs
//! - [`fields`]: Fixed values, dynamic rows and row availability
//! - [`session`]: The search form state of one entity
//! - [`params`]: Query parameter builders (list and export)
//! - [`request`]: Endpoint resolution and query encoding
//! - [`api`]: The API facade
//! - [`commands`]: One module per user operation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod fields;
pub mod params;
pub mod request;
pub mod session;
