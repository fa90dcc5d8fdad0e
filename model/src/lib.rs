mod snowflake;
pub use snowflake::Snowflake;

mod error;
pub use error::{ModelError, Result};

pub mod user;

mod util;
