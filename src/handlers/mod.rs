//! Presentation of valuation results

pub mod console;

// Re-export for convenience
pub use console::ConsoleEventHandler;
