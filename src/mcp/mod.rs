//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes the step catalog to coding agents over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and its tools
//! - `types`: Tool parameters and response DTOs

mod server;
pub mod types;

pub use server::{StepcatMcpServer, run_server};
