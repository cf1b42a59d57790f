//! Command runner adapters.

pub mod scripted;
pub mod system;

pub use scripted::{RecordedCall, ScriptedRunner};
pub use system::SystemRunner;
