pub mod batch;
pub mod check;
mod context;
pub mod export;
pub mod init;
pub mod key;

pub use context::CommandContext;
