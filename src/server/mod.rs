//! Server-side backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, form parsing, redirects
//! - **Service Layer** (`service/`) - Grouping, past/upcoming splits, existence checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrappers for flash messages
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Database connection, migrations and the session layer
//! - **Router** (`router`) - Route table, static files and request tracing
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** parses the path and body, calls a service
//! 3. **Service** orchestrates repository calls
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** renders the page with `view` or flashes a message and redirects

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
