use chrono::{DateTime, SecondsFormat};
use slotwatch_clock::{Chain, ChainRegistry, SystemClock};
use slotwatch_core::Slot;
use slotwatch_gateway::{ExporterClient, ExporterConfig};
use slotwatch_ports::{Clock, FetchError, TraceFetcher, TraceQuery};
use slotwatch_report::{ErrorPolicy, ReportBuilder, SlotReport, render_text};
use std::io::{self, Write};
use std::time::Duration;

use crate::cli::{Cli, Command, ReportArgs};
use crate::config::{ConfigError, SlotwatchConfig, load_config, load_default_config};
use crate::error::RunnerResult;
use crate::target::TargetSlot;

/// Everything one report run needs, resolved from config and arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPlan {
    pub chain: Chain,
    pub target: Slot,
    pub query: TraceQuery,
    pub policy: ErrorPolicy,
}

/// Resolve chain, target slot, and query for a report run
///
/// Command line values take precedence over the configuration. The fetched
/// range starts at the target slot and ends at `--to`, or at the target
/// slot when no end is given.
pub fn plan_report(
    config: &SlotwatchConfig,
    registry: &ChainRegistry,
    args: &ReportArgs,
    clock: &dyn Clock,
) -> RunnerResult<ReportPlan> {
    let chain_name = args.chain.as_deref().unwrap_or(&config.default_chain);
    let chain = registry.lookup(chain_name)?;

    let target = TargetSlot::from_args(args.slot, args.at).resolve(&chain, clock)?;
    // Reject an unusable target before anything is sent to the exporter
    chain.slot_start_time(target)?;
    let to = args.to.map(Slot::new).unwrap_or(target);
    let roles = if args.roles.is_empty() {
        config.exporter.roles.clone()
    } else {
        args.roles.clone()
    };
    let query = TraceQuery::new(target, to, roles)?;

    let policy = if args.skip_invalid {
        ErrorPolicy::SkipRecord
    } else {
        ErrorPolicy::Abort
    };

    log::debug!(
        "Planned report on {} for slot {} (range {}..={})",
        chain.name(),
        target,
        query.from(),
        query.to()
    );

    Ok(ReportPlan {
        chain,
        target,
        query,
        policy,
    })
}

/// Exporter settings with command line overrides applied
///
/// The merged settings are checked again since overrides bypass
/// `SlotwatchConfig::validate`.
pub fn exporter_config(
    config: &SlotwatchConfig,
    args: &ReportArgs,
) -> RunnerResult<ExporterConfig> {
    let mut exporter = config.exporter.to_exporter_config();
    if let Some(url) = &args.exporter_url {
        exporter.base_url = url.clone();
    }
    if let Some(timeout_ms) = args.timeout_ms {
        exporter.timeout = Duration::from_millis(timeout_ms);
    }

    if exporter.base_url.trim().is_empty() {
        return Err(ConfigError::EmptyBaseUrl.into());
    }
    if exporter.timeout.is_zero() {
        return Err(ConfigError::ZeroTimeout.into());
    }
    Ok(exporter)
}

/// Fetch the planned range and build the report
pub async fn run_report(fetcher: &dyn TraceFetcher, plan: &ReportPlan) -> RunnerResult<SlotReport> {
    log::info!(
        "Fetching traces for slots {}..={} from {}",
        plan.query.from(),
        plan.query.to(),
        fetcher.name()
    );
    let records = fetcher.fetch_traces(&plan.query).await?;
    log::info!("Received {} trace record(s)", records.len());

    let report = ReportBuilder::new(&plan.chain, plan.target)
        .with_policy(plan.policy)
        .build(&records)?;
    Ok(report)
}

/// Write one line per registered chain
pub fn write_chains<W: Write>(registry: &ChainRegistry, out: &mut W) -> RunnerResult<()> {
    for config in registry.iter() {
        let genesis = DateTime::from_timestamp(config.genesis_time, 0)
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_else(|| config.genesis_time.to_string());
        writeln!(
            out,
            "{:<12} genesis {} slot {}ms",
            config.name, genesis, config.slot_duration_ms
        )?;
    }
    Ok(())
}

/// Run one CLI invocation
pub async fn execute(cli: Cli) -> RunnerResult<()> {
    let config = match &cli.config {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            load_config(path)?
        }
        None => load_default_config()?,
    };
    config.validate()?;
    let registry = config.registry()?;

    match &cli.command {
        Command::Chains => {
            let stdout = io::stdout();
            write_chains(&registry, &mut stdout.lock())?;
        }
        Command::Report(args) => {
            let plan = plan_report(&config, &registry, args, &SystemClock::new())?;
            let exporter = exporter_config(&config, args)?;
            let client = ExporterClient::new(&exporter).map_err(FetchError::from)?;
            let report = run_report(&client, &plan).await?;

            let stdout = io::stdout();
            render_text(&report, &mut stdout.lock())?;
        }
    }
    Ok(())
}
