pub mod digest;
pub mod manifest;
pub mod models;
pub mod templating;

pub use manifest::sanitize_name;
pub use models::SetupConfig;
