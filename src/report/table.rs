use std::fmt::Write;

use crate::{
    apportion::{Apportionment, format_percent},
    region::PartisanLean,
    report::{SweepPoint, Summary, format_thousands},
};

/// Format an integer with thousands separators (`39,538,223`).
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(',') }
        out.push(ch);
    }
    out
}

fn signed(value: i64) -> String {
    if value > 0 { format!("+{value}") } else { value.to_string() }
}

/// Render the state-by-state comparison in display order.
///
/// `limit` keeps only the first rows; the totals always cover every region.
pub fn render_comparison(apportionment: &Apportionment, limit: Option<usize>) -> String {
    let rows = apportionment.sorted_by_change();
    let shown = limit.unwrap_or(rows.len()).min(rows.len());
    let name_width = rows.iter().map(|row| row.region.name().len()).max().unwrap_or(5).max(5);

    let mut out = String::new();
    let _ = writeln!(
        out, "{:<name_width$} {:>4} {:>12} {:>8} {:>8} {:>14} {:>10} {:>9}",
        "State", "Lean", "Population", "Current", "Rule", "Change", "Per seat", "EV",
    );
    for row in &rows[..shown] {
        let lean = row.region.lean().map(|lean| lean.code()).unwrap_or("-");
        let change = format!("{} ({})", signed(row.seat_change), row.percent_change_display());
        let per_seat = row.people_per_seat.map(format_count).unwrap_or_else(|| "n/a".to_string());
        let electoral = format!("{}->{}", row.current_electoral_votes, row.apportioned_electoral_votes);
        let _ = writeln!(
            out, "{:<name_width$} {:>4} {:>12} {:>8} {:>8} {:>14} {:>10} {:>9}",
            row.region.name(), lean, format_count(row.region.population()),
            row.region.current_seats(), row.apportioned_seats, change, per_seat, electoral,
        );
    }
    if shown < rows.len() {
        let _ = writeln!(out, "... {} more (use --all to show every region)", rows.len() - shown);
    }

    let totals = apportionment.totals();
    let _ = writeln!(out);
    let _ = writeln!(
        out, "Total seats: {} -> {} ({})",
        totals.total_current_seats, totals.total_apportioned_seats, signed(totals.total_seat_change),
    );
    for lean in PartisanLean::order() {
        if let Some(gain) = totals.gains_by_lean.get(&lean) {
            let _ = writeln!(out, "Seats gained by {lean} states: +{gain}");
        }
    }
    let _ = writeln!(
        out, "Electoral votes: {} (majority {}), currently {} (majority {})",
        totals.total_electoral_votes, totals.majority_threshold,
        totals.current_electoral_votes, totals.current_majority_threshold,
    );
    out
}

/// Render the three overview cards plus the electoral college line.
pub fn render_summary(summary: &Summary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Current system     {:>6} seats   {} people per district", summary.current_house_size, format_thousands(summary.current_district_size));
    let _ = writeln!(out, "Wyoming Rule       {:>6} seats   {} people per district", summary.rule_house_size, format_thousands(summary.rule_district_size));
    let _ = writeln!(
        out, "Difference         {:>6} seats   {} House size, {} smaller districts",
        signed(summary.seat_difference), format_percent(summary.percent_increase, 0), format_percent(summary.district_shrink, 0).trim_start_matches('+'),
    );
    let _ = writeln!(
        out, "Electoral college  {} -> {} votes, majority {} -> {}",
        summary.current_electoral_votes, summary.rule_electoral_votes,
        summary.current_majority_threshold, summary.rule_majority_threshold,
    );
    out
}

/// Render a divisor sweep as a table.
pub fn render_sweep(points: &[SweepPoint]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>12} {:>8} {:>12} {:>6} {:>9}", "Divisor", "Seats", "Per seat", "EV", "Majority");
    for point in points {
        let per_seat = point.average_district.map(format_count).unwrap_or_else(|| "n/a".to_string());
        let _ = writeln!(
            out, "{:>12} {:>8} {:>12} {:>6} {:>9}",
            format_count(point.divisor), point.house_seats, per_seat, point.electoral_votes, point.majority_threshold,
        );
    }
    out
}
