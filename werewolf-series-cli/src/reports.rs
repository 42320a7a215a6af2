use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use werewolf_series::{CampTally, SeriesChannel, SeriesRecord, SeriesReport};

/// First `top` rows of a list; `0` keeps every row.
pub fn visible(records: &[SeriesRecord], top: usize) -> &[SeriesRecord] {
    if top == 0 {
        records
    } else {
        &records[..records.len().min(top)]
    }
}

/// Copy of the report with every list cut to `top` rows.
pub fn limit_report(report: &SeriesReport, top: usize) -> SeriesReport {
    let mut limited = report.clone();
    if top > 0 {
        for channel in SeriesChannel::ALL {
            limited.channels[channel].best.truncate(top);
            limited.channels[channel].active.truncate(top);
        }
    }
    limited
}

/// "Villager 3, Other 1" in tally order, empty when there is no breakdown.
pub fn format_tally(tally: Option<&CampTally>) -> String {
    tally
        .map(|counts| {
            counts
                .iter()
                .map(|(label, count)| format!("{label} {count}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

fn span(record: &SeriesRecord) -> String {
    if record.start_game == record.end_game {
        format!("{} ({})", record.start_game, record.start_date)
    } else {
        format!(
            "{} ({}) → {} ({})",
            record.start_game, record.start_date, record.end_game, record.end_date
        )
    }
}

pub fn generate_console_report(
    out: &mut dyn Write,
    report: &SeriesReport,
    top: usize,
) -> Result<()> {
    writeln!(out, "{}", "🐺 Werewolf Series Report".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())?;
    writeln!(out, "Games analyzed: {}", report.total_games_analyzed)?;
    writeln!(out, "Players: {}", report.total_players_count)?;

    for (channel, section) in report.channels.iter() {
        let stats = &section.stats;
        writeln!(out)?;
        writeln!(out, "{}", channel.title().bright_yellow().bold())?;
        writeln!(out, "{}", "-".repeat(30).yellow())?;
        writeln!(out, "Average best: {:.1}", stats.average_best)?;
        writeln!(
            out,
            "Elite (≥ {}): {}",
            stats.elite_threshold,
            stats.elite_count.to_string().green()
        )?;
        writeln!(
            out,
            "Active: {}   Record in progress: {}",
            stats.active_count, stats.ongoing_count
        )?;

        if section.best.is_empty() {
            writeln!(out, "   No series recorded.")?;
            continue;
        }
        for (rank, record) in visible(&section.best, top).iter().enumerate() {
            let marker = if record.is_ongoing {
                " 🔥 ongoing".red().to_string()
            } else {
                String::new()
            };
            writeln!(
                out,
                "{:>3}. {} - {} games{}",
                rank + 1,
                record.player_name.bold(),
                record.series_length,
                marker
            )?;
            writeln!(out, "     {}", span(record))?;
            let composition = format_tally(record.camp_counts.as_ref());
            if !composition.is_empty() {
                writeln!(out, "     {}", composition.dimmed())?;
            }
        }

        if !section.active.is_empty() {
            let running: Vec<String> = visible(&section.active, top)
                .iter()
                .map(|record| format!("{} ({})", record.player_name, record.series_length))
                .collect();
            writeln!(out, "Running now: {}", running.join(", "))?;
        }
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, report: &SeriesReport, top: usize) -> Result<()> {
    let json_output = serde_json::to_string_pretty(&limit_report(report, top))?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    report: &SeriesReport,
    top: usize,
) -> Result<()> {
    writeln!(out, "# Werewolf Series Report\n")?;
    writeln!(out, "- **Games analyzed**: {}", report.total_games_analyzed)?;
    writeln!(out, "- **Players**: {}\n", report.total_players_count)?;

    for (channel, section) in report.channels.iter() {
        let stats = &section.stats;
        writeln!(out, "## {}\n", channel.title())?;
        writeln!(out, "- **Average best**: {:.1}", stats.average_best)?;
        writeln!(
            out,
            "- **Elite (≥ {})**: {}",
            stats.elite_threshold, stats.elite_count
        )?;
        writeln!(out, "- **Active**: {}", stats.active_count)?;
        writeln!(out, "- **Record in progress**: {}\n", stats.ongoing_count)?;

        if section.best.is_empty() {
            writeln!(out, "_No series recorded._\n")?;
            continue;
        }

        writeln!(out, "| # | Player | Length | Games | Composition | Ongoing |")?;
        writeln!(out, "|---|---|---|---|---|---|")?;
        for (rank, record) in visible(&section.best, top).iter().enumerate() {
            writeln!(
                out,
                "| {} | {} | {} | {} | {} | {} |",
                rank + 1,
                record.player_name,
                record.series_length,
                span(record),
                format_tally(record.camp_counts.as_ref()),
                if record.is_ongoing { "🔥" } else { "" }
            )?;
        }
        writeln!(out)?;

        if !section.active.is_empty() {
            writeln!(out, "**Running now**:\n")?;
            for record in visible(&section.active, top) {
                writeln!(
                    out,
                    "- {}: {} since {}",
                    record.player_name, record.series_length, record.start_game
                )?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
