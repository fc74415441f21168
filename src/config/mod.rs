//! Optional TOML configuration and command-line overrides.

mod loader;
mod model;

pub use loader::{ConfigLoader, FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{ChartConfig, ConfigOverrides, ReportConfig};
