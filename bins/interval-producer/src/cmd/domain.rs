use serde::Serialize;

use producer_api::{epoch_timestamp, PartitionedRecord};

/// Payload marker every heartbeat carries.
pub const HEARTBEAT_DATA: &str = "5 seconds";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeartbeatRecord {
    pub timestamp: String,
    pub data: String,
}

impl HeartbeatRecord {
    pub fn now() -> Self {
        Self {
            timestamp: epoch_timestamp(),
            data: HEARTBEAT_DATA.to_string(),
        }
    }
}

impl PartitionedRecord for HeartbeatRecord {
    fn partition_key(&self) -> &str {
        &self.timestamp
    }
}
