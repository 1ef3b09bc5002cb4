//! CLI commands

pub mod completion;
pub mod decode;
pub mod resolve;
pub mod share;
