//! Filesystem-facing implementations for the helpdesk client: the
//! file-backed session store and config loading.

mod config_loader;
mod file_session_store;

pub use config_loader::{config_file_path, load_config, load_config_from};
pub use file_session_store::FileSessionStore;
