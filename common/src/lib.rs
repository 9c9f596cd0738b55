//! # astview-common
//!
//! Types shared by every crate in the workspace.
//!
//! * [`value`]: the [`Value`] union and the insertion-ordered [`ResultMap`] scanners produce.
//! * [`settings`]: opaque scanner [`Settings`] forwarded verbatim to a scanner factory.
//! * [`config`]: the runtime [`Config`] assembled by the command line.

pub mod config;
pub mod settings;
pub mod value;

pub use config::Config;
pub use settings::{Settings, SettingsError};
pub use value::{ResultMap, Value};
