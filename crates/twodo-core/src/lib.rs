pub mod config;
pub mod error;
pub mod recall;
pub mod result;

pub use config::AppConfig;
pub use error::{CommandError, LogicError, ParseError, TwoDoError};
pub use recall::InputRecall;
pub use result::TwoDoResult;
