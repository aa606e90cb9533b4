//! Serializable configuration for the axis and color pipelines.

use serde::{Deserialize, Serialize};

use crate::color::{DEFAULT_PALETTE, Palette};
use crate::core::{DEFAULT_PADDING_FRACTION, DEFAULT_ZERO_SPAN_HALF_WIDTH, DomainTuning};
use crate::error::{ChartError, ChartResult};
use crate::format::FormatOptions;

pub const TRANSFORM_CONFIG_JSON_SCHEMA_V1: u32 = 1;

/// Default requested number of axis ticks.
pub const DEFAULT_TARGET_TICK_COUNT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub padding_fraction: f64,
    pub zero_span_half_width: f64,
    pub target_tick_count: usize,
    /// Hex color stops; parsed and checked by [`TransformConfig::palette`].
    pub palette: Vec<String>,
    /// Value label options. Axis tick labels stay compact; pass this to
    /// [`ValueAxis::value_labels`](crate::api::ValueAxis::value_labels) or
    /// [`format_value`](crate::format::format_value) for unit-bearing labels.
    pub format: FormatOptions,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            padding_fraction: DEFAULT_PADDING_FRACTION,
            zero_span_half_width: DEFAULT_ZERO_SPAN_HALF_WIDTH,
            target_tick_count: DEFAULT_TARGET_TICK_COUNT,
            palette: DEFAULT_PALETTE.iter().map(|hex| (*hex).to_owned()).collect(),
            format: FormatOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: TransformConfig,
}

impl TransformConfig {
    #[must_use]
    pub fn with_padding_fraction(mut self, padding_fraction: f64) -> Self {
        self.padding_fraction = padding_fraction;
        self
    }

    #[must_use]
    pub fn with_target_tick_count(mut self, target_tick_count: usize) -> Self {
        self.target_tick_count = target_tick_count;
        self
    }

    #[must_use]
    pub fn with_palette<S: AsRef<str>>(mut self, palette: &[S]) -> Self {
        self.palette = palette.iter().map(|hex| hex.as_ref().to_owned()).collect();
        self
    }

    #[must_use]
    pub fn with_format(mut self, format: FormatOptions) -> Self {
        self.format = format;
        self
    }

    pub fn domain_tuning(&self) -> ChartResult<DomainTuning> {
        DomainTuning {
            padding_fraction: self.padding_fraction,
            zero_span_half_width: self.zero_span_half_width,
        }
        .validate()
        .map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    pub fn palette(&self) -> ChartResult<Palette> {
        Palette::from_hex(&self.palette).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.domain_tuning()?;
        self.palette()?;
        if self.target_tick_count == 0 {
            return Err(ChartError::InvalidConfig(
                "target tick count must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = TransformConfigJsonContractV1 {
            schema_version: TRANSFORM_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Parses either a bare config object or a versioned v1 contract, then validates it.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config = Self::parse_json_compat(input)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_json_compat(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config json: {e}")))?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value)
                .map_err(|e| ChartError::InvalidConfig(format!("invalid config json: {e}")));
        }

        let payload: TransformConfigJsonContractV1 = serde_json::from_value(value).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse config json payload: {e}"))
        })?;
        if payload.schema_version != TRANSFORM_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidConfig(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
