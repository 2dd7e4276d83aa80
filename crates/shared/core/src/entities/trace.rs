use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::values::Slot;

/// Protocol messages observed for one validator / role / committee in a slot
///
/// Field names follow the exporter's JSON. Timestamps are kept as the raw
/// RFC 3339 strings the exporter sends; parsing happens where they are used
/// so a malformed value is reported against the record it came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceRecord {
    #[serde(default)]
    pub slot: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub validator: String,
    #[serde(rename = "committeeID", default)]
    pub committee_id: String,
    /// Consensus rounds in ascending order (index 0 is round 1)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub consensus: Vec<ConsensusRound>,
    /// Opaque; null or an exporter-defined structure
    #[serde(default)]
    pub decideds: Value,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pre: Vec<PrePostMessage>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub post: Vec<PrePostMessage>,
    #[serde(default)]
    pub proposal_data: String,
}

impl TraceRecord {
    /// Slot number of this record, if the exporter sent a numeric slot
    pub fn slot_number(&self) -> Option<Slot> {
        self.slot.parse().ok()
    }

    /// Total number of timestamped messages in the record
    pub fn message_count(&self) -> usize {
        self.pre.len()
            + self.post.len()
            + self
                .consensus
                .iter()
                .map(ConsensusRound::message_count)
                .sum::<usize>()
    }
}

/// Messages exchanged during one consensus round
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsensusRound {
    #[serde(default)]
    pub proposal: Option<Proposal>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub prepares: Vec<Prepare>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub commits: Vec<Commit>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub round_changes: Vec<RoundChange>,
}

impl ConsensusRound {
    pub fn message_count(&self) -> usize {
        usize::from(self.proposal.is_some())
            + self.prepares.len()
            + self.commits.len()
            + self.round_changes.len()
    }
}

/// Pre- or post-consensus partial signature message
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrePostMessage {
    #[serde(default)]
    pub ssv_root: String,
    #[serde(default)]
    pub signer: u64,
    #[serde(default)]
    pub time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub ssv_root: String,
    #[serde(default)]
    pub leader: u64,
    #[serde(default)]
    pub round_change_justifications: Value,
    #[serde(default)]
    pub prepare_justifications: Value,
    #[serde(default)]
    pub time: String,
}

/// Signed round message; prepares and commits share this shape
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundMessage {
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub ssv_root: String,
    #[serde(default)]
    pub signer: u64,
    #[serde(default)]
    pub time: String,
}

pub type Prepare = RoundMessage;
pub type Commit = RoundMessage;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundChange {
    #[serde(default)]
    pub round: u64,
    #[serde(default)]
    pub ssv_root: String,
    #[serde(default)]
    pub signer: u64,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub prepared_round: u64,
    #[serde(default)]
    pub prepare_messages: Value,
}

// The exporter sends `null` instead of `[]` for empty lists
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
