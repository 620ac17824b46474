//! Configuration management module

pub mod builder;
pub mod loader;
pub mod settings;

pub use builder::SettingsBuilder;
pub use loader::ConfigFile;
pub use settings::Settings;
