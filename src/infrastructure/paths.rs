//! Path utilities for the Zellij sandbox environment.

use std::path::PathBuf;

/// Returns the data directory for Zontacts trace output.
///
/// The directory is located at `/host/.local/share/zellij/zontacts` in the
/// Zellij sandbox. In Zellij's plugin environment, `/host` points to the cwd
/// of the last focused terminal, or the folder where Zellij was started if
/// that's not available.
///
/// This typically resolves to the user's home directory when Zellij is started
/// from a home directory terminal, making the actual path
/// `~/.local/share/zellij/zontacts`.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zontacts")
}
