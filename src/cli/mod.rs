//! Command-line interface module.

mod args;
pub mod export;
pub mod init;
pub mod post;
pub mod prompt;
pub mod publish;
pub mod validate;

pub use args::{
    Cli, Commands, ExportArgs, PostAction, PostAddArgs, PublishArgs, ValidateArgs,
};
