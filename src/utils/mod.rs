//! Small helpers shared by the fetchers and the console output

pub mod helper;

pub use helper::{lamports_to_sol, parse_address};
