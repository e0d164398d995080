use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::DensityChartConfig;

pub const DENSITY_CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: DensityChartConfig,
}

impl DensityChartConfig {
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = DensityChartConfigJsonContractV1 {
            schema_version: DENSITY_CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts either a bare config object or the versioned v1 envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;

        if value.get("schema_version").is_none() {
            return serde_json::from_value(value).map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json: {e}"))
            });
        }

        let payload: DensityChartConfigJsonContractV1 = serde_json::from_value(value)
            .map_err(|e| {
                ChartError::InvalidData(format!("failed to parse config json payload: {e}"))
            })?;
        if payload.schema_version != DENSITY_CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
