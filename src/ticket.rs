use crate::error::{Result, TicketsError};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Ticket {
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub destination: Option<String>,
    #[serde(default)]
    pub carrier: Option<String>,
}

impl Ticket {
    pub fn departure(&self) -> String {
        format!("{} {}", self.departure_date, self.departure_time)
    }

    pub fn arrival(&self) -> String {
        format!("{} {}", self.arrival_date, self.arrival_time)
    }
}

#[derive(Deserialize)]
pub struct FlightArchive {
    #[serde(default)]
    tickets: Option<Vec<Ticket>>,
}

impl FlightArchive {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Vec<Ticket>> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let tickets = Self::parse(&data)?;
        info!(path = %path.display(), tickets = tickets.len(), "loaded flight archive");
        Ok(tickets)
    }

    pub fn parse(data: &str) -> Result<Vec<Ticket>> {
        let data = data.trim_start_matches('\u{feff}');
        if data.trim().is_empty() {
            return Err(TicketsError::EmptyArchive);
        }

        let archive: Option<FlightArchive> = serde_json::from_str(data)?;
        match archive.and_then(|a| a.tickets) {
            None => Err(TicketsError::EmptyArchive),
            Some(tickets) if tickets.is_empty() => Err(TicketsError::NoTickets),
            Some(tickets) => Ok(tickets),
        }
    }
}
