//! Pieces shared by every crate in the workspace: pagination parameters and
//! tracing subscriber setup.

pub mod pagination;
pub mod utils;
