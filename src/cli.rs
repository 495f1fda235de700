//! CLI domain: parse, route, and output only.
//! No hashing logic here; the route table dispatches to collector and builder.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use route::RunContext;
