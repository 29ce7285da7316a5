//! Use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into the operations the command loop needs.
//! - Keep the CLI decoupled from storage details.

pub mod project_service;
