//! Haven Server - HTTP REST API for the moderation-and-matching core
//!
//! This crate exposes the `haven` core over a REST API:
//!
//! - **Story submission**: text-only and multipart, gated by content
//!   moderation with AI-to-local fallback
//! - **Story metadata**: summary and tag generation for existing text
//! - **Matching**: mentor and support-group ranking for a requester
//!   profile
//! - **Personalization & search**: resource recommendations and
//!   free-text resource search
//! - **Health & Metrics**: liveness/readiness probes and Prometheus
//!   metrics
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! ## Public
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe
//! - `GET /metrics` - Prometheus metrics
//!
//! ## API
//!
//! - `POST /api/v1/stories` - Submit a text-only story
//! - `POST /api/v1/stories/media` - Submit a story with media (multipart)
//! - `POST /api/v1/stories/metadata` - Generate summary and tags
//! - `GET /api/v1/stories` - List stories
//! - `GET /api/v1/stories/stats` - Registry statistics
//! - `PATCH /api/v1/stories/{id}/comments` - Adjust a comment count
//! - `POST /api/v1/match` - Match mentors and support groups
//! - `POST /api/v1/resources/personalize` - Personalized resources
//! - `POST /api/v1/resources/search` - Search resources

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
