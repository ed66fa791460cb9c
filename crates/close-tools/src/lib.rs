//! Close CRM request construction and response rendering.
//!
//! This crate is used by `close-mcp-server`. It knows how to turn tool arguments into Close REST
//! requests, how to send them, and how to render the JSON that comes back as text. It contains
//! **no** MCP protocol handling.

pub mod query;
pub mod render;
pub mod request;
pub mod resource;
pub mod runtime;

pub use query::{FilterField, QueryFilter, ValueKind, fields};
pub use render::{Layout, RenderError, layout_for, pretty_json, render_envelope, render_record};
pub use request::{ApiRequest, Operation};
pub use resource::ResourceKind;
pub use runtime::{CloseClient, CloseError, DEFAULT_BASE_URL, basic_auth_value};
