pub mod project;
pub mod task;

pub use project::*;
pub use task::*;
