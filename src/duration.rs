use crate::error::{Result, TicketsError};
use crate::ticket::Ticket;
use crate::time::Minutes;
use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Zone every departure date-time is written in.
pub const DEPARTURE_ZONE: Tz = chrono_tz::Asia::Vladivostok;
/// Zone every arrival date-time is written in.
pub const ARRIVAL_ZONE: Tz = chrono_tz::Asia::Tel_Aviv;

/// `dd.MM.yy H:mm`, digit counts enforced; chrono alone accepts `1.5.18 9:5`.
static DATE_TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2})\.([0-9]{2})\.([0-9]{2}) ([0-9]{1,2}):([0-9]{2})$")
        .expect("date-time pattern is valid")
});

/// Applied after the two-digit year has been widened to `20yy`.
const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Turns ticket wall-clock times into elapsed flight minutes.
#[derive(Debug, Clone, Copy)]
pub struct DurationExtractor {
    departure_zone: Tz,
    arrival_zone: Tz,
}

impl Default for DurationExtractor {
    fn default() -> Self {
        DurationExtractor::new(DEPARTURE_ZONE, ARRIVAL_ZONE)
    }
}

impl DurationExtractor {
    pub fn new(departure_zone: Tz, arrival_zone: Tz) -> DurationExtractor {
        DurationExtractor {
            departure_zone,
            arrival_zone,
        }
    }

    /// Arrival instant minus departure instant. Negative when the ticket
    /// lands before it takes off once both ends are in absolute time.
    pub fn compute(&self, ticket: &Ticket) -> Result<Minutes> {
        let departure = Self::to_instant(&ticket.departure(), self.departure_zone)?;
        let arrival = Self::to_instant(&ticket.arrival(), self.arrival_zone)?;
        let duration = Minutes::between(departure, arrival);

        debug!(%departure, %arrival, minutes = duration.0, "computed flight duration");
        if duration.is_negative() {
            warn!(
                departure = %ticket.departure(),
                arrival = %ticket.arrival(),
                "arrival precedes departure"
            );
        }
        Ok(duration)
    }

    pub fn compute_all(&self, tickets: &[Ticket]) -> Result<Vec<Minutes>> {
        tickets.iter().map(|t| self.compute(t)).collect()
    }

    fn to_instant(text: &str, zone: Tz) -> Result<DateTime<Utc>> {
        let naive = parse_local(text)?;
        match zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            // clocks went back: the first occurrence wins
            LocalResult::Ambiguous(first, second) => Ok(first.min(second).with_timezone(&Utc)),
            // clocks went forward: keep the offset in force before the gap
            LocalResult::None => {
                let before = zone
                    .offset_from_utc_datetime(&(naive - TimeDelta::days(1)))
                    .fix();
                // years are 2000-2099, so shifting by an offset stays in range
                let utc = naive - TimeDelta::seconds(before.local_minus_utc() as i64);
                Ok(utc.and_utc())
            }
        }
    }
}

/// Parses `dd.MM.yy H:mm`; two-digit years always land in 2000-2099.
fn parse_local(text: &str) -> Result<NaiveDateTime> {
    let caps = DATE_TIME_PATTERN
        .captures(text)
        .ok_or_else(|| TicketsError::Malformed {
            input: text.to_string(),
        })?;
    let widened = format!(
        "{}.{}.20{} {}:{}",
        &caps[1], &caps[2], &caps[3], &caps[4], &caps[5]
    );
    NaiveDateTime::parse_from_str(&widened, DATE_TIME_FORMAT).map_err(|source| {
        TicketsError::Parse {
            input: text.to_string(),
            source,
        }
    })
}
