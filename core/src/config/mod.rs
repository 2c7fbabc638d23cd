mod load;
mod types;

pub use load::{data_dir, load_default, load_from};
pub use types::{AppConfig, LoggingConfig};
