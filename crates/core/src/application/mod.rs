// Application Layer - Use Cases and the interaction loop

pub mod menu;
pub mod messages;
pub mod session;

// Re-exports
pub use menu::MenuChoice;
pub use session::Session;
