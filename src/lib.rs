pub mod backend;
pub mod cli;
pub mod context;
pub mod document;
pub mod error;
pub mod picker;
pub mod workflow;

pub use error::{Error, Result};
pub use workflow::{pull_file, FilePullWorkflow, PullOptions, PullOutcome};

/// Identifier of the pull command as registered with an editor.
pub const PULL_FILE_COMMAND: &str = "pullfile.pull";
