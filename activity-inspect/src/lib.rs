mod config;
pub use config::Config;

mod error;
pub use error::{Error, Result};

pub mod inspect;
