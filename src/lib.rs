pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::LeaveCalError;
pub use services::{LeaveAggregator, SprintAnchor, SprintCalendar};

/// The constructed computation services, grouped for the rendering layer.
pub struct CalendarState {
    pub sprint_calendar: SprintCalendar,
    pub aggregator: LeaveAggregator,
}

impl CalendarState {
    pub fn new(config: &Config) -> Self {
        CalendarState {
            sprint_calendar: SprintCalendar::new(config.sprint_anchor()),
            aggregator: LeaveAggregator::new(),
        }
    }
}
