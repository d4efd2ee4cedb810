pub mod aggregator;
pub mod grid;
pub mod sprint;


pub use aggregator::LeaveAggregator;
pub use sprint::{SprintAnchor, SprintCalendar};
