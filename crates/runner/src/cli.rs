use clap::{Args, Parser, Subcommand};
use slotwatch_core::Timestamp;
use std::path::PathBuf;

/// Consensus message timing relative to slot start
#[derive(Parser, Debug)]
#[command(name = "slotwatch", version, about)]
pub struct Cli {
    /// JSON configuration file; the embedded defaults are used when omitted
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch validator traces and print message offsets from the target slot start
    Report(ReportArgs),

    /// List known chains
    Chains,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Chain name (exact match); defaults to the configured default chain
    #[arg(long)]
    pub chain: Option<String>,

    /// Exporter base URL, overrides the configuration
    #[arg(long)]
    pub exporter_url: Option<String>,

    /// Exporter request timeout in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Role to request; repeatable
    #[arg(long = "role", value_name = "ROLE")]
    pub roles: Vec<String>,

    /// Target slot
    #[arg(long, conflicts_with = "at")]
    pub slot: Option<u64>,

    /// Target the slot containing this RFC 3339 instant
    #[arg(long, value_parser = parse_rfc3339)]
    pub at: Option<Timestamp>,

    /// Last slot of the fetched range; defaults to the target slot
    #[arg(long)]
    pub to: Option<u64>,

    /// Skip records with malformed timestamps instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

fn parse_rfc3339(value: &str) -> Result<Timestamp, String> {
    slotwatch_report::parse_timestamp(value).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report_with_slot() {
        let cli = Cli::try_parse_from([
            "slotwatch", "report", "--chain", "hoodi", "--slot", "120", "--to", "122",
            "--role", "PROPOSER", "--role", "COMMITTEE", "--skip-invalid",
        ])
        .unwrap();

        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.chain.as_deref(), Some("hoodi"));
        assert_eq!(args.slot, Some(120));
        assert_eq!(args.to, Some(122));
        assert_eq!(args.roles, vec!["PROPOSER", "COMMITTEE"]);
        assert!(args.skip_invalid);
        assert!(args.at.is_none());
    }

    #[test]
    fn test_parse_at_and_global_flags() {
        let cli = Cli::try_parse_from([
            "slotwatch", "report", "--at", "2025-03-17T12:10:24.500Z", "-v", "--config", "a.json",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("a.json")));
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.at.unwrap().timestamp(), 1_742_213_424);
    }

    #[test]
    fn test_slot_conflicts_with_at() {
        let result = Cli::try_parse_from([
            "slotwatch", "report", "--slot", "1", "--at", "2025-03-17T12:10:24Z",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = Cli::try_parse_from(["slotwatch", "report", "--timeout-ms", "0"]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from(["slotwatch", "report", "--timeout-ms", "250"]).unwrap();
        let Command::Report(args) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.timeout_ms, Some(250));
    }

    #[test]
    fn test_invalid_at_rejected() {
        let result = Cli::try_parse_from(["slotwatch", "report", "--at", "yesterday"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_chains() {
        let cli = Cli::try_parse_from(["slotwatch", "chains"]).unwrap();
        assert!(matches!(cli.command, Command::Chains));
    }
}
