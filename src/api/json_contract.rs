use serde::{Deserialize, Serialize};

use crate::error::{TickerError, TickerResult};
use crate::render::StripRenderer;

use super::{TickerEngine, TickerSnapshot};

pub const TICKER_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickerSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: TickerSnapshot,
}

impl TickerSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> TickerResult<String> {
        let payload = TickerSnapshotJsonContractV1 {
            schema_version: TICKER_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: *self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TickerError::InvalidConfig(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned v1 contract payload.
    pub fn from_json_compat_str(input: &str) -> TickerResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<TickerSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: TickerSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TickerError::InvalidConfig(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != TICKER_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(TickerError::InvalidConfig(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: StripRenderer> TickerEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> TickerResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
