//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the Brazilian biomes API: HTTP
//! endpoints, business rules, data access and the supporting infrastructure. The
//! backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, existence checks and ownership rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Ownership guard for modifying requests
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, upload directory)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown
//! - **Router** (`router`) - Route table, OpenAPI document and HTTP layers
//! - **Upload** (`upload`) - Multipart parsing and storage of image files
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses identifiers, converts DTOs to params, calls the service
//! 3. **Service** validates input, checks referenced records and ownership
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

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
pub mod upload;
pub mod util;
