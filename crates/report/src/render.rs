use chrono::SecondsFormat;
use std::io::{self, Write};

use crate::error::ReportResult;
use crate::model::{MessageOffset, RecordTiming, SlotReport};

const INDENT: &str = "  ";

/// Write the report as plain text
///
/// Per record: pre-consensus offsets, each round (proposal, prepares,
/// commits, round-changes), then post-consensus offsets.
pub fn render_text<W: Write>(report: &SlotReport, out: &mut W) -> ReportResult<()> {
    let start = report.slot_start.to_rfc3339_opts(SecondsFormat::Millis, true);
    writeln!(
        out,
        "Target slot {} on {} (start {})",
        report.target_slot, report.chain, start
    )?;

    for record in &report.records {
        writeln!(out)?;
        render_record(record, out)?;
    }

    if !report.skipped.is_empty() {
        writeln!(out)?;
        writeln!(out, "Skipped {} record(s):", report.skipped.len())?;
        for skipped in &report.skipped {
            writeln!(
                out,
                "{INDENT}#{} validator {}: {}",
                skipped.index, skipped.validator, skipped.reason
            )?;
        }
    }
    Ok(())
}

/// Render into a `String`
pub fn to_text(report: &SlotReport) -> ReportResult<String> {
    let mut buf = Vec::new();
    render_text(report, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub fn render_record<W: Write>(record: &RecordTiming, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Slot {} | Validator {} | Role {} | Committee {}",
        record.slot, record.validator, record.role, record.committee_id
    )?;

    writeln!(out, "Pre:")?;
    write_offsets(out, INDENT, &record.pre)?;
    writeln!(out)?;

    writeln!(out, "Consensus:")?;
    let nested = format!("{INDENT}{INDENT}");
    for round in &record.rounds {
        writeln!(out, "----------[round={}]----------", round.round)?;
        writeln!(out, "{INDENT}proposal:")?;
        write_offsets(out, &nested, round.proposal.as_slice())?;
        writeln!(out, "{INDENT}prepare:")?;
        write_offsets(out, &nested, &round.prepares)?;
        writeln!(out, "{INDENT}commit:")?;
        write_offsets(out, &nested, &round.commits)?;
        writeln!(out, "{INDENT}round-change:")?;
        write_offsets(out, &nested, &round.round_changes)?;
    }
    writeln!(out, "----------------------------")?;
    writeln!(out)?;

    writeln!(out, "Post:")?;
    write_offsets(out, INDENT, &record.post)
}

fn write_offsets<W: Write>(out: &mut W, prefix: &str, offsets: &[MessageOffset]) -> io::Result<()> {
    for offset in offsets {
        writeln!(out, "{}{} ms", prefix, offset.millis())?;
    }
    Ok(())
}
