mod config_cmd;
mod product;

pub use config_cmd::ConfigCommand;
pub use product::ProductCommand;
