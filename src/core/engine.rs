use crate::core::dial::run_with_settings;
use crate::core::parser::parse_bytes;
use crate::core::{
    ConfigProvider, DialReport, DialVariant, Instructions, Storage, VariantOutcome,
};
use crate::utils::error::Result;

pub struct DialEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> DialEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub async fn extract(&self) -> Result<Vec<u8>> {
        let path = self.config.input_path();
        tracing::debug!("Reading instructions from: {}", path);
        self.storage.read_file(path).await
    }

    pub fn transform(&self, raw: &[u8]) -> Result<Instructions> {
        let instructions = parse_bytes(raw)?;
        if instructions.is_empty() {
            tracing::warn!("Input contains no turns");
        }
        Ok(instructions)
    }

    pub fn load(&self, instructions: &Instructions) -> DialReport {
        let settings = self.config.dial_settings();
        let mut report = DialReport {
            turns: instructions.len(),
            settings,
            landing: None,
            crossing: None,
        };

        for &variant in self.config.variant_selection().variants() {
            let dial = run_with_settings(variant, settings, instructions.turns());
            let outcome = VariantOutcome {
                zero_count: dial.zero_count(),
                final_position: dial.reduced_position(),
            };
            tracing::debug!(
                "Part {} ({:?}): {} zeros, final position {}",
                variant.part(),
                variant,
                outcome.zero_count,
                outcome.final_position
            );
            match variant {
                DialVariant::Landing => report.landing = Some(outcome),
                DialVariant::Crossing => report.crossing = Some(outcome),
            }
        }

        report
    }

    pub async fn run(&self) -> Result<DialReport> {
        tracing::info!("Starting dial run");

        let raw = self.extract().await?;
        tracing::info!("Read {} bytes", raw.len());

        let instructions = self.transform(&raw)?;
        tracing::info!("Parsed {} turns", instructions.len());

        let report = self.load(&instructions);
        tracing::info!("Dial run finished");

        Ok(report)
    }
}
