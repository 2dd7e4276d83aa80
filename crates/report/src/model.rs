use chrono::Duration;
use slotwatch_core::{Slot, Timestamp};

/// Offset of one message from the start of the target slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageOffset {
    /// Signer of the message (leader for proposals)
    pub signer: u64,
    /// Negative when the message was seen before the slot started
    pub offset: Duration,
}

impl MessageOffset {
    /// Whole milliseconds, truncated toward zero
    pub fn millis(&self) -> i64 {
        self.offset.num_milliseconds()
    }
}

/// Offsets for one consensus round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoundTiming {
    /// 1-based round number (position in the consensus list)
    pub round: usize,
    pub proposal: Option<MessageOffset>,
    pub prepares: Vec<MessageOffset>,
    pub commits: Vec<MessageOffset>,
    pub round_changes: Vec<MessageOffset>,
}

/// Offsets for every message of one trace record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTiming {
    pub slot: String,
    pub role: String,
    pub validator: String,
    pub committee_id: String,
    pub pre: Vec<MessageOffset>,
    pub rounds: Vec<RoundTiming>,
    pub post: Vec<MessageOffset>,
}

impl RecordTiming {
    /// All offsets in report order
    pub fn offsets(&self) -> Vec<MessageOffset> {
        let mut all = self.pre.clone();
        for round in &self.rounds {
            all.extend(round.proposal);
            all.extend(round.prepares.iter().copied());
            all.extend(round.commits.iter().copied());
            all.extend(round.round_changes.iter().copied());
        }
        all.extend(self.post.iter().copied());
        all
    }
}

/// A record dropped under `ErrorPolicy::SkipRecord`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// Position in the fetched list
    pub index: usize,
    pub validator: String,
    pub reason: String,
}

/// Timing report for one target slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotReport {
    pub chain: String,
    pub target_slot: Slot,
    pub slot_start: Timestamp,
    pub records: Vec<RecordTiming>,
    pub skipped: Vec<SkippedRecord>,
}
