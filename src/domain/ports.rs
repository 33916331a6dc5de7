use crate::domain::model::{DialSettings, OutputFormat, VariantSelection};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn dial_settings(&self) -> DialSettings;
    fn variant_selection(&self) -> VariantSelection;
    fn output_format(&self) -> OutputFormat;
}
