//! Process adapters.

mod recording;
mod system;

pub use recording::{RecordedCall, RecordingRunner};
pub use system::SystemCommandRunner;
