//! Close CRM MCP server.
//!
//! Exposes Close leads, contacts, email and call activities, tasks, opportunities and users as MCP
//! tools over stdio. Request building and rendering live in `close-mcp-tools`; this crate binds
//! them to typed tool parameters and the MCP transport.

pub mod config;
pub mod error;
pub mod params;
pub mod server;

pub use error::{Result, ServerError};
pub use server::CloseMcpServer;
