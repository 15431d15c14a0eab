//! Invocation surface: context and result types, event loading for
//! standalone runs, and a local HTTP invocation endpoint.

pub mod invocation;
pub mod loader;
pub mod server;

pub use invocation::{InvocationContext, InvocationResponse};
pub use loader::load_event;
pub use server::{build_router, run_server, AppState, ConfigSource, ServerConfig, INVOKE_PATH};
