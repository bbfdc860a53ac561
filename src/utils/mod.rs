pub mod config;
pub mod platform;

// Re-export commonly used items for convenience
pub use config::Config;
