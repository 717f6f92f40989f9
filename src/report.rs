use crate::error::Result;
use crate::stats::{mean, percentile};
use crate::ticket::Ticket;
use crate::time::Minutes;
use std::fmt;
use tabled::Tabled;
use tabled::settings::{Alignment, Style};
use tracing::info;

/// Average and percentile of a duration series, truncated to whole minutes.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub average: Minutes,
    pub percent: f64,
    pub percentile: Minutes,
}

impl Summary {
    pub fn from_durations(durations: &[Minutes], percent: f64) -> Result<Summary> {
        let mut values: Vec<i64> = durations.iter().map(|d| d.0).collect();
        let average = mean(&values)?;
        values.sort_unstable();
        let percentile = percentile(&values, percent, true)?;
        info!(average, percentile, percent, "computed summary");

        Ok(Summary {
            average: Minutes::truncated(average),
            percent,
            percentile: Minutes::truncated(percentile),
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average = {}", self.average)?;
        write!(f, "{}-percentile = {}", self.percent, self.percentile)
    }
}

#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Route")]
    route: String,
    #[tabled(rename = "Departure")]
    departure: String,
    #[tabled(rename = "Arrival")]
    arrival: String,
    #[tabled(rename = "Duration")]
    duration: Minutes,
}

fn route(ticket: &Ticket) -> String {
    let origin = ticket.origin.as_deref().unwrap_or("?");
    let destination = ticket.destination.as_deref().unwrap_or("?");
    match ticket.carrier.as_deref() {
        Some(carrier) => format!("{origin}-{destination} ({carrier})"),
        None => format!("{origin}-{destination}"),
    }
}

/// One row per ticket, in archive order.
pub fn ticket_table(tickets: &[Ticket], durations: &[Minutes]) -> String {
    let rows: Vec<TicketRow> = tickets
        .iter()
        .zip(durations)
        .enumerate()
        .map(|(i, (ticket, duration))| TicketRow {
            index: i + 1,
            route: route(ticket),
            departure: ticket.departure(),
            arrival: ticket.arrival(),
            duration: *duration,
        })
        .collect();

    let mut table = tabled::Table::new(&rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}
