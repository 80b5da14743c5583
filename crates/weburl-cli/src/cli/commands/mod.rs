//! CLI command handlers, one per file.

mod build;
mod codec;
mod docs;
mod normalize;
mod parse;

pub use build::{run_build, BuildArgs};
pub use codec::{run_decode, run_encode};
pub use docs::{run_completions, run_man};
pub use normalize::run_normalize;
pub use parse::run_parse;
