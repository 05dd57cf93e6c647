pub mod clock;
pub mod project;
pub mod task;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use project::ProjectService;
pub use task::{TaskService, DEFAULT_PRIORITY, DEFAULT_STATUS};
