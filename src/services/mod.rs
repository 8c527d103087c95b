pub mod console;
pub mod csv_service;
pub mod filter_service;
pub mod reports;
pub mod session;
pub mod stats;
