//! Report pipeline tests
//!
//! Drives plan_report / run_report with an in-memory TraceFetcher so the
//! wiring between configuration, chain clock, fetch port and report builder
//! is exercised without an exporter.

use async_trait::async_trait;
use chrono::{DateTime, Duration};
use slotwatch_clock::{ClockError, FixedClock};
use slotwatch_core::{Slot, TraceRecord};
use slotwatch_ports::{FetchError, FetchResult, TraceFetcher, TraceQuery};
use slotwatch_report::{ErrorPolicy, ReportError, to_text};
use slotwatch_runner::config::{load_config_from_str, load_default_config};
use slotwatch_runner::{ReportArgs, RunnerError, plan_report, run_report};
use std::sync::Mutex;

// hoodi slot 100 starts at 2025-03-17T12:30:00Z
const RECORDS: &str = r#"[
    {
        "slot": "100",
        "role": "PROPOSER",
        "validator": "42",
        "committeeID": "cafe",
        "consensus": [
            {
                "proposal": {"round": 1, "ssvRoot": "0x1", "leader": 2,
                             "roundChangeJustifications": null, "prepareJustifications": null,
                             "time": "2025-03-17T12:30:02.000Z"},
                "prepares": [
                    {"round": 1, "ssvRoot": "0x1", "signer": 1, "time": "2025-03-17T12:30:02.120Z"}
                ],
                "commits": [
                    {"round": 1, "ssvRoot": "0x1", "signer": 1, "time": "2025-03-17T12:30:02.260Z"}
                ],
                "roundChanges": null
            }
        ],
        "decideds": null,
        "pre": [{"ssvRoot": "0x2", "signer": 3, "time": "2025-03-17T12:29:59.950Z"}],
        "post": [{"ssvRoot": "0x3", "signer": 3, "time": "2025-03-17T12:30:02.500Z"}],
        "proposalData": ""
    },
    {
        "slot": "100",
        "role": "PROPOSER",
        "validator": "43",
        "committeeID": "beef",
        "consensus": null,
        "decideds": null,
        "pre": [{"ssvRoot": "0x4", "signer": 5, "time": "not a time"}],
        "post": null,
        "proposalData": ""
    }
]"#;

/// Serves canned records and remembers every query it was asked
struct FakeFetcher {
    response: FetchResult<Vec<TraceRecord>>,
    queries: Mutex<Vec<TraceQuery>>,
}

impl FakeFetcher {
    fn returning(response: FetchResult<Vec<TraceRecord>>) -> Self {
        FakeFetcher {
            response,
            queries: Mutex::new(Vec::new()),
        }
    }

    fn queries(&self) -> Vec<TraceQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TraceFetcher for FakeFetcher {
    async fn fetch_traces(&self, query: &TraceQuery) -> FetchResult<Vec<TraceRecord>> {
        self.queries.lock().unwrap().push(query.clone());
        self.response.clone()
    }

    fn name(&self) -> &str {
        "FakeFetcher"
    }
}

fn records() -> Vec<TraceRecord> {
    serde_json::from_str(RECORDS).unwrap()
}

fn hoodi_args(slot: u64) -> ReportArgs {
    ReportArgs {
        chain: Some("hoodi".to_string()),
        slot: Some(slot),
        ..ReportArgs::default()
    }
}

fn hoodi_clock() -> FixedClock {
    // hoodi slot 250, 3.5s in
    FixedClock::new(DateTime::from_timestamp(1_742_213_400 + 250 * 12 + 3, 500_000_000).unwrap())
}

#[test]
fn test_plan_uses_config_defaults() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let args = ReportArgs {
        slot: Some(13_119_734),
        ..ReportArgs::default()
    };

    let plan = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap();
    assert_eq!(plan.chain.name(), "mainnet");
    assert_eq!(plan.target, Slot::new(13_119_734));
    assert_eq!(plan.query.from(), Slot::new(13_119_734));
    assert_eq!(plan.query.to(), Slot::new(13_119_734));
    assert_eq!(plan.query.roles(), ["PROPOSER".to_string()]);
    assert_eq!(plan.policy, ErrorPolicy::Abort);
}

#[test]
fn test_plan_with_overrides() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let args = ReportArgs {
        roles: vec!["COMMITTEE".to_string()],
        to: Some(105),
        skip_invalid: true,
        ..hoodi_args(100)
    };

    let plan = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap();
    assert_eq!(plan.chain.name(), "hoodi");
    assert_eq!(plan.query.slot_count(), 6);
    assert_eq!(plan.query.roles(), ["COMMITTEE".to_string()]);
    assert_eq!(plan.policy, ErrorPolicy::SkipRecord);
}

#[test]
fn test_plan_target_from_instant_and_clock() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();

    let at = DateTime::from_timestamp(1_742_213_400 + 100 * 12, 0).unwrap() + Duration::milliseconds(11_999);
    let args = ReportArgs {
        chain: Some("hoodi".to_string()),
        at: Some(at),
        ..ReportArgs::default()
    };
    let plan = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap();
    assert_eq!(plan.target, Slot::new(100));

    let args = ReportArgs {
        chain: Some("hoodi".to_string()),
        ..ReportArgs::default()
    };
    let plan = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap();
    assert_eq!(plan.target, Slot::new(250));
}

#[test]
fn test_plan_with_configured_chain() {
    let config = load_config_from_str(
        r#"{
            "default_chain": "devnet",
            "chains": [{"name": "devnet", "genesis_time": 1700000000, "slot_duration_ms": 4000}]
        }"#,
    )
    .unwrap();
    config.validate().unwrap();
    let registry = config.registry().unwrap();

    let clock = FixedClock::new(DateTime::from_timestamp(1_700_000_041, 0).unwrap());
    let plan = plan_report(&config, &registry, &ReportArgs::default(), &clock).unwrap();
    assert_eq!(plan.chain.name(), "devnet");
    assert_eq!(plan.target, Slot::new(10));
}

#[test]
fn test_plan_errors() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let clock = hoodi_clock();

    let unknown = ReportArgs {
        chain: Some("Hoodi".to_string()),
        ..ReportArgs::default()
    };
    assert!(matches!(
        plan_report(&config, &registry, &unknown, &clock),
        Err(RunnerError::Clock(ClockError::UnknownChain(name))) if name == "Hoodi"
    ));

    let inverted = ReportArgs {
        to: Some(99),
        ..hoodi_args(100)
    };
    assert!(matches!(
        plan_report(&config, &registry, &inverted, &clock),
        Err(RunnerError::Fetch(FetchError::InvalidRange { .. }))
    ));

    let before_genesis = ReportArgs {
        chain: Some("hoodi".to_string()),
        at: Some(DateTime::from_timestamp(1_742_213_399, 0).unwrap()),
        ..ReportArgs::default()
    };
    assert!(matches!(
        plan_report(&config, &registry, &before_genesis, &clock),
        Err(RunnerError::Clock(ClockError::TimeBeforeGenesis { .. }))
    ));
}

#[tokio::test]
async fn test_run_report_end_to_end() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let plan = plan_report(&config, &registry, &hoodi_args(100), &hoodi_clock()).unwrap();

    let fetcher = FakeFetcher::returning(Ok(records()[..1].to_vec()));
    let report = run_report(&fetcher, &plan).await.unwrap();

    assert_eq!(fetcher.queries(), vec![plan.query.clone()]);
    let expected = "\
Target slot 100 on hoodi (start 2025-03-17T12:30:00.000Z)

Slot 100 | Validator 42 | Role PROPOSER | Committee cafe
Pre:
  -50 ms

Consensus:
----------[round=1]----------
  proposal:
    2000 ms
  prepare:
    2120 ms
  commit:
    2260 ms
  round-change:
----------------------------

Post:
  2500 ms
";
    assert_eq!(to_text(&report).unwrap(), expected);
}

#[tokio::test]
async fn test_run_report_policies() {
    let _ = env_logger::try_init();
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let fetcher = FakeFetcher::returning(Ok(records()));

    let abort = plan_report(&config, &registry, &hoodi_args(100), &hoodi_clock()).unwrap();
    assert!(matches!(
        run_report(&fetcher, &abort).await,
        Err(RunnerError::Report(ReportError::InvalidTimestamp { .. }))
    ));

    let args = ReportArgs {
        skip_invalid: true,
        ..hoodi_args(100)
    };
    let skip = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap();
    let report = run_report(&fetcher, &skip).await.unwrap();
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].index, 1);
    assert_eq!(report.skipped[0].validator, "43");
}

#[tokio::test]
async fn test_run_report_fetch_failure() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let plan = plan_report(&config, &registry, &hoodi_args(100), &hoodi_clock()).unwrap();

    let fetcher = FakeFetcher::returning(Err(FetchError::Status {
        status: 503,
        body: "unavailable".to_string(),
    }));
    let err = run_report(&fetcher, &plan).await.unwrap_err();
    assert!(matches!(
        err,
        RunnerError::Fetch(FetchError::Status { status: 503, .. })
    ));
}

#[test]
fn test_target_beyond_range_rejected_before_fetch() {
    let config = load_default_config().unwrap();
    let registry = config.registry().unwrap();
    let fetcher = FakeFetcher::returning(Ok(Vec::new()));

    // Past the signed bound and past the mainnet limit of 768_614_336 slots
    for slot in [u64::MAX, 768_614_337] {
        let args = ReportArgs {
            slot: Some(slot),
            ..ReportArgs::default()
        };
        let err = plan_report(&config, &registry, &args, &hoodi_clock()).unwrap_err();
        assert!(
            matches!(
                err,
                RunnerError::Clock(ClockError::SlotOutOfRange { slot: s, .. }) if s == Slot::new(slot)
            ),
            "{err}"
        );
    }

    // The last representable slot still plans
    let args = ReportArgs {
        slot: Some(768_614_336),
        ..ReportArgs::default()
    };
    assert!(plan_report(&config, &registry, &args, &hoodi_clock()).is_ok());
    assert!(fetcher.queries().is_empty());
}
