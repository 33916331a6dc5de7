pub mod dial;
pub mod engine;
pub mod parser;

pub use crate::domain::model::{
    DialReport, DialSettings, DialVariant, Instructions, Turn, VariantOutcome,
};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
