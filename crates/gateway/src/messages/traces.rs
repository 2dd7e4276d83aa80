use serde::{Deserialize, Serialize};
use slotwatch_core::{Role, Slot, TraceRecord};
use slotwatch_ports::TraceQuery;

/// Request body: `{"from": .., "to": .., "roles": [..]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceRequest {
    pub from: Slot,
    pub to: Slot,
    pub roles: Vec<Role>,
}

impl From<&TraceQuery> for TraceRequest {
    fn from(query: &TraceQuery) -> Self {
        TraceRequest {
            from: query.from(),
            to: query.to(),
            roles: query.roles().to_vec(),
        }
    }
}

/// Response body: `{"data": [..]}`; `data` may be null
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraceResponse {
    #[serde(default)]
    pub data: Option<Vec<TraceRecord>>,
}

impl TraceResponse {
    pub fn into_records(self) -> Vec<TraceRecord> {
        self.data.unwrap_or_default()
    }
}
