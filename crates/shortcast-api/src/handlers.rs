//! Request handlers.

pub mod cleanup;
pub mod health;
pub mod process;
pub mod system;

pub use cleanup::cleanup_files;
pub use health::health;
pub use process::process_podcast;
pub use system::system_info;
