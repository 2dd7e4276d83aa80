use slotwatch_clock::Chain;
use slotwatch_core::{ConsensusRound, Slot, TraceRecord};

use crate::error::ReportResult;
use crate::model::{MessageOffset, RecordTiming, RoundTiming, SkippedRecord, SlotReport};
use crate::timestamp::parse_timestamp;

/// What to do when a record contains a bad timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Fail the whole report on the first error
    #[default]
    Abort,
    /// Drop the offending record, log it, and carry on
    SkipRecord,
}

/// Turns fetched trace records into offsets from one target slot
pub struct ReportBuilder<'a> {
    chain: &'a Chain,
    target_slot: Slot,
    policy: ErrorPolicy,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(chain: &'a Chain, target_slot: Slot) -> Self {
        ReportBuilder {
            chain,
            target_slot,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn target_slot(&self) -> Slot {
        self.target_slot
    }

    /// Build the report for all records
    ///
    /// An unusable target slot fails the report under either policy since
    /// no record could be measured against it.
    pub fn build(&self, records: &[TraceRecord]) -> ReportResult<SlotReport> {
        let slot_start = self.chain.slot_start_time(self.target_slot)?;
        let mut timings = Vec::with_capacity(records.len());
        let mut skipped = Vec::new();

        for (index, record) in records.iter().enumerate() {
            match self.record_timing(record) {
                Ok(timing) => timings.push(timing),
                Err(err) if self.policy == ErrorPolicy::SkipRecord => {
                    log::warn!(
                        "Skipping record #{} (validator {}): {}",
                        index,
                        record.validator,
                        err
                    );
                    skipped.push(SkippedRecord {
                        index,
                        validator: record.validator.clone(),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok(SlotReport {
            chain: self.chain.name().to_string(),
            target_slot: self.target_slot,
            slot_start,
            records: timings,
            skipped,
        })
    }

    /// Offsets for a single record, in report order
    pub fn record_timing(&self, record: &TraceRecord) -> ReportResult<RecordTiming> {
        let pre = record
            .pre
            .iter()
            .map(|m| self.offset(m.signer, &m.time))
            .collect::<ReportResult<Vec<_>>>()?;

        let rounds = record
            .consensus
            .iter()
            .enumerate()
            .map(|(i, round)| self.round_timing(i + 1, round))
            .collect::<ReportResult<Vec<_>>>()?;

        let post = record
            .post
            .iter()
            .map(|m| self.offset(m.signer, &m.time))
            .collect::<ReportResult<Vec<_>>>()?;

        Ok(RecordTiming {
            slot: record.slot.clone(),
            role: record.role.clone(),
            validator: record.validator.clone(),
            committee_id: record.committee_id.clone(),
            pre,
            rounds,
            post,
        })
    }

    fn round_timing(&self, round: usize, step: &ConsensusRound) -> ReportResult<RoundTiming> {
        let proposal = step
            .proposal
            .as_ref()
            .map(|p| self.offset(p.leader, &p.time))
            .transpose()?;
        let prepares = step
            .prepares
            .iter()
            .map(|m| self.offset(m.signer, &m.time))
            .collect::<ReportResult<Vec<_>>>()?;
        let commits = step
            .commits
            .iter()
            .map(|m| self.offset(m.signer, &m.time))
            .collect::<ReportResult<Vec<_>>>()?;
        let round_changes = step
            .round_changes
            .iter()
            .map(|m| self.offset(m.signer, &m.time))
            .collect::<ReportResult<Vec<_>>>()?;

        Ok(RoundTiming {
            round,
            proposal,
            prepares,
            commits,
            round_changes,
        })
    }

    fn offset(&self, signer: u64, time: &str) -> ReportResult<MessageOffset> {
        let observed = parse_timestamp(time)?;
        let offset = self.chain.time_into_slot(self.target_slot, observed)?;
        Ok(MessageOffset { signer, offset })
    }
}
