//! # aegis-core
//!
//! Shared domain logic for the Aegis assistant. The frontend and server
//! crates both build on the pieces here:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  aegis-web (Leptos)          aegis-server (axum)        │
//! │  ┌──────────────┐            ┌──────────────────────┐   │
//! │  │ PromptPanel  │── wire ────│  handlers / Answerer │   │
//! │  └──────────────┘            └──────────────────────┘   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! `panel` owns the single question/answer exchange: one prompt, one
//! in-flight request at a time, one displayed answer. `answerer` is the
//! strategy seam the server plugs a backend into.

pub mod answerer;
pub mod auth;
pub mod error;
pub mod panel;
pub mod wire;

pub use answerer::{Answerer, StubAnswerer};
pub use error::{AegisError, Result};
pub use panel::{PromptPanel, COMMIT_KEY};
