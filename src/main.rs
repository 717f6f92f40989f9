use crate::duration::DurationExtractor;
use crate::error::{Result, TicketsError};
use crate::logger::init_logger;
use crate::report::{ticket_table, Summary};
use crate::ticket::FlightArchive;
use clap::error::ErrorKind;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

mod duration;
mod error;
mod logger;
mod report;
mod stats;
mod ticket;
mod time;

const PERCENT: f64 = 90.0;

const USAGE: &str = "Wrong parameter
Usage: flight-stats <filepath>
<filepath> - path to the valid json file.
";

#[derive(Parser)]
#[command(version, about = "Average and percentile flight time from a ticket archive")]
struct Args {
    /// Path to the JSON ticket archive
    #[arg(value_name = "FILEPATH")]
    path: PathBuf,

    /// Percentile to report
    #[arg(short, long, default_value_t = PERCENT, allow_negative_numbers = true)]
    percent: f64,

    /// Print every ticket with its duration before the summary
    #[arg(short, long)]
    list: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Help and version requests go through clap; every other parse failure
/// gets the short usage text.
fn is_usage_error(e: &clap::Error) -> bool {
    !matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

fn run(args: &Args, out: &mut impl Write) -> Result<()> {
    let tickets = FlightArchive::load_from_file(&args.path)?;
    let durations = DurationExtractor::default().compute_all(&tickets)?;

    if args.list {
        writeln!(out, "{}", ticket_table(&tickets, &durations))?;
    }

    let summary = Summary::from_durations(&durations, args.percent)?;
    writeln!(out, "{}", summary)?;
    Ok(())
}

fn failure_message(e: &TicketsError) -> String {
    if e.is_empty_archive() {
        e.to_string()
    } else {
        format!("Error! -- {}", e)
    }
}

/// Runs once and reports any failure on `out`; only a failed write escapes.
fn execute(args: &Args, out: &mut impl Write) -> std::io::Result<()> {
    if let Err(e) = run(args, out) {
        tracing::debug!(error = ?e, "run failed");
        writeln!(out, "{}", failure_message(&e))?;
    }
    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if is_usage_error(&e) => {
            print!("{}", USAGE);
            return;
        }
        Err(e) => e.exit(),
    };
    init_logger(args.verbose);

    let stdout = std::io::stdout();
    if let Err(e) = execute(&args, &mut stdout.lock()) {
        // a closed pipe just means nobody is reading the report
        if e.kind() != std::io::ErrorKind::BrokenPipe {
            eprintln!("Error writing report: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{execute, is_usage_error, Args, PERCENT};
    use clap::Parser;
    use std::io::Write;
    use std::path::{Path, PathBuf};
    use tempfile::NamedTempFile;

    fn args(path: impl Into<PathBuf>, percent: f64, list: bool) -> Args {
        Args {
            path: path.into(),
            percent,
            list,
            verbose: false,
        }
    }

    fn output(args: &Args) -> String {
        let mut out = Vec::new();
        execute(args, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn write_archive(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn sample_archive() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/tickets.json")
    }

    fn single_ticket(departure_date: &str) -> String {
        format!(
            r#"{{"tickets": [{{"departure_date": "{}", "departure_time": "16:20", "arrival_date": "12.05.18", "arrival_time": "22:10"}}]}}"#,
            departure_date
        )
    }

    #[test]
    fn test_wrong_argument_count_gets_usage() {
        let none = Args::try_parse_from(["flight-stats"]).err().unwrap();
        assert!(is_usage_error(&none));

        let two = Args::try_parse_from(["flight-stats", "a.json", "b.json"])
            .err()
            .unwrap();
        assert!(is_usage_error(&two));

        let help = Args::try_parse_from(["flight-stats", "--help"]).err().unwrap();
        assert!(!is_usage_error(&help));
    }

    #[test]
    fn test_single_path_parses_with_defaults() {
        let args = Args::try_parse_from(["flight-stats", "tickets.json"]).unwrap();
        assert_eq!(PathBuf::from("tickets.json"), args.path);
        assert_eq!(PERCENT, args.percent);
        assert!(!args.list);

        let args = Args::try_parse_from(["flight-stats", "-p", "-5", "tickets.json"]).unwrap();
        assert_eq!(-5.0, args.percent);
    }

    #[test]
    fn test_sample_archive_report() {
        assert_eq!(
            "Average = 14 h, 6 min\n90-percentile = 15 h, 45 min\n",
            output(&args(sample_archive(), PERCENT, false))
        );
    }

    #[test]
    fn test_list_prints_table_before_summary() {
        let text = output(&args(sample_archive(), PERCENT, true));
        let table_at = text.find("VVO-TLV (TK)").unwrap();
        let summary_at = text.find("Average = ").unwrap();
        assert!(table_at < summary_at);
    }

    #[test]
    fn test_missing_file_is_prefixed_error() {
        let dir = tempfile::tempdir().unwrap();
        let text = output(&args(dir.path().join("missing.json"), PERCENT, false));
        assert!(text.starts_with("Error! -- "), "{}", text);
        assert_eq!(1, text.lines().count());
    }

    #[test]
    fn test_malformed_json_is_prefixed_error() {
        let file = write_archive("{ tickets");
        let text = output(&args(file.path(), PERCENT, false));
        assert!(text.starts_with("Error! -- "), "{}", text);
    }

    #[test]
    fn test_empty_archives_are_reported_bare() {
        let file = write_archive("");
        assert_eq!("File is empty\n", output(&args(file.path(), PERCENT, false)));

        let file = write_archive(r#"{"tickets": []}"#);
        assert_eq!(
            "File contains no tickets\n",
            output(&args(file.path(), PERCENT, false))
        );
    }

    #[test]
    fn test_bad_ticket_text_is_prefixed_error() {
        let file = write_archive(&single_ticket("1.05.18"));
        let text = output(&args(file.path(), PERCENT, false));
        assert!(
            text.starts_with("Error! -- Text '1.05.18 16:20' could not be parsed"),
            "{}",
            text
        );

        let file = write_archive(&single_ticket("32.05.18"));
        let text = output(&args(file.path(), PERCENT, false));
        assert!(
            text.starts_with("Error! -- Text '32.05.18 16:20' could not be parsed"),
            "{}",
            text
        );
    }

    #[test]
    fn test_percent_over_hundred_is_prefixed_error() {
        assert_eq!(
            "Error! -- percent can't be greater than 100 (provided 101)\n",
            output(&args(sample_archive(), 101.0, false))
        );
    }
}
