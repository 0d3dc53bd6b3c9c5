pub mod config;
pub mod driver;
pub mod errors;
pub mod settings;

pub use config::ZoomConfig;
pub use driver::ZoomDriver;
pub use errors::ZoomConfigError;
pub use settings::ZoomSettings;
