use anyhow::{bail, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use nowruz_calendar::fmt::{format_persian_date, format_persian_datetime};
use nowruz_calendar::PersianDate;
use nowruz_ephemeris::Method;
use nowruz_predict::resolver::SHAMSI_TO_GREGORIAN_YEARS;
use nowruz_predict::{NowruzResolver, Phase, PhaseObserver, Prediction};
use nowruz_time::ZoneOffset;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const YEAR_RANGE: RangeInclusive<i32> = 1300..=1500;

/// Crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["nowruz_predict", "nowruz_ephemeris", "nowruz_calendar"];

#[derive(Parser)]
#[command(name = "nowruz")]
#[command(about = "Predict the vernal equinox moment and the date of Nowruz")]
#[command(version)]
struct Cli {
    /// Shamsi year to predict (1300-1500); omit for the interactive prompt
    year: Option<i32>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn history_path() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".nowruz_history")
}

struct BarObserver {
    bar: ProgressBar,
}

impl BarObserver {
    fn new() -> Self {
        let bar = ProgressBar::new(3);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        Self { bar }
    }
}

impl PhaseObserver for BarObserver {
    fn on_phase(&self, phase: Phase) {
        if phase == Phase::Done {
            self.bar.finish_with_message(phase.describe());
        } else {
            self.bar.set_message(phase.describe());
            self.bar.inc(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let resolver = NowruzResolver::with_default_source();
    println!("nowruz v{}", env!("CARGO_PKG_VERSION"));
    match resolver.method() {
        Method::Ephemeris => println!("Equinox source: {}\n", Method::Ephemeris),
        Method::Polynomial => {
            println!("Reference data unavailable; using the {}\n", Method::Polynomial)
        }
    }

    match cli.year {
        Some(year) => {
            if !YEAR_RANGE.contains(&year) {
                bail!(
                    "year {year} outside supported range {}-{}",
                    YEAR_RANGE.start(),
                    YEAR_RANGE.end()
                );
            }
            run_prediction(&resolver, year);
        }
        None => interactive_loop(&resolver)?,
    }
    Ok(())
}

fn interactive_loop(resolver: &NowruzResolver) -> Result<()> {
    println!("Enter a Shamsi year (e.g. 1403, 1404); Ctrl-D or `quit` to exit\n");

    let mut rl = DefaultEditor::new()?;
    let history = history_path();
    let _ = rl.load_history(&history);

    loop {
        match rl.readline("Year: ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                    break;
                }
                let _ = rl.add_history_entry(line);
                match parse_year(line) {
                    Some(year) => run_prediction(resolver, year),
                    None => println!(
                        "Please enter a whole year between {} and {}",
                        YEAR_RANGE.start(),
                        YEAR_RANGE.end()
                    ),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("Error: {e}");
                break;
            }
        }
    }

    let _ = rl.save_history(&history);
    println!("نوروزتان پیروز - Happy Nowruz!");
    Ok(())
}

fn parse_year(input: &str) -> Option<i32> {
    input
        .parse::<i32>()
        .ok()
        .filter(|year| YEAR_RANGE.contains(year))
}

fn run_prediction(resolver: &NowruzResolver, year: i32) {
    println!("\nCalculating the year transition for {year}...");
    let observer = BarObserver::new();
    let prediction = resolver.predict_observed(year, &observer);
    print_results(&prediction);
}

fn print_results(p: &Prediction) {
    let line = "=".repeat(64);

    println!("\n{line}");
    println!("Exact vernal equinox (لحظه تحویل سال)");
    println!("  UTC:      {}", p.equinox_utc);
    println!(
        "  Tehran:   {} ({})",
        p.equinox_tehran,
        ZoneOffset::TEHRAN
    );
    println!("  Persian:  {}", format_persian_datetime(&p.equinox_tehran));
    println!("  Decision: {}", p.rule.describe());

    let nowruz_persian = PersianDate::from_gregorian(p.nowruz);
    println!("\nNowruz - 1st of Farvardin");
    println!("  Gregorian: {}", p.nowruz);
    println!("  Persian:   {}", format_persian_date(&nowruz_persian));

    println!("\nTechnical details");
    println!("  Shamsi year:    {}", p.shamsi_year);
    println!(
        "  Gregorian year: {}",
        p.shamsi_year + SHAMSI_TO_GREGORIAN_YEARS
    );
    println!("  Method:         {}", p.method);

    println!("\nInternational times");
    for (city, offset) in [
        ("New York", ZoneOffset::NEW_YORK),
        ("London", ZoneOffset::LONDON),
        ("Tokyo", ZoneOffset::TOKYO),
        ("Tehran", ZoneOffset::TEHRAN),
    ] {
        println!(
            "  {:<9} {} ({})",
            city,
            p.equinox_utc.to_offset(offset),
            offset
        );
    }
    println!("{line}");
}
