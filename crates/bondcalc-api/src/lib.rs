//! Bondcalc REST API Server.
//!
//! Thin HTTP shell around [`bondcalc_analytics`]: it validates the request
//! body, runs the engine and returns the aggregate result as JSON.
//!
//! ## Endpoints
//!
//! - `POST /api/v1/bond/calculate` (also served as `POST /bond/calculate`)
//! - `GET /health`
//!
//! ## Usage
//!
//! ```bash
//! # Start server on default port
//! bondcalc-api-server
//!
//! # Custom host and port
//! bondcalc-api-server --host 0.0.0.0 --port 3000
//!
//! # Load settings from a TOML file
//! bondcalc-api-server --config config/bondcalc.toml
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use server::create_router;
pub use state::AppState;
