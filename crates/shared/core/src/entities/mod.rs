mod trace;

pub use trace::{
    Commit, ConsensusRound, PrePostMessage, Prepare, Proposal, RoundChange, RoundMessage,
    TraceRecord,
};
