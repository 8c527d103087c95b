pub mod duration_report;
pub mod station_report;
pub mod time_report;
pub mod traits;
pub mod user_report;
