mod reports;
mod scenarios;
mod timing;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use scenarios::{Scenario, ScenarioContext, ScenarioResult};

#[derive(Debug, Parser)]
#[command(name = "flexicars-tester", version)]
#[command(about = "Automated QA checks for the FlexiCars listing, forms and notices")]
struct Args {
    /// Scenarios to run (comma-separated, or "all")
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Multiplier applied to every simulated delay (1.0 = real time)
    #[arg(long, default_value_t = 0.01)]
    delay_scale: f64,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let ctx = ScenarioContext::bundled(args.delay_scale, args.verbose)?;
    let mut results = Vec::new();
    for scenario in expand_scenarios(&args.scenarios) {
        if args.verbose {
            println!("▶ {}", scenario.key().bright_yellow());
        }
        results.push(scenarios::run(scenario, &ctx).await);
    }

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for scenario in Scenario::ALL {
        writeln!(
            output_target.writer(),
            "  {:25} - {}",
            scenario.key(),
            scenario.description()
        )?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🚗 FlexiCars Automated Tester".bright_cyan().bold());
    println!("{}", "=============================".cyan());
}

fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<Scenario> {
    let mut scenarios = Vec::new();
    for name in split_csv(scenarios_arg) {
        if name.eq_ignore_ascii_case("all") {
            scenarios.extend(Scenario::ALL);
        } else if let Some(scenario) = Scenario::from_key(&name) {
            scenarios.push(scenario);
        } else {
            eprintln!("⚠️  Unknown scenario: {}", name.yellow());
        }
    }
    let mut seen = Vec::new();
    scenarios.retain(|scenario| {
        if seen.contains(scenario) {
            false
        } else {
            seen.push(*scenario);
            true
        }
    });
    scenarios
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => reports::generate_json_report(&mut output_target, results)?,
        "markdown" => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# FlexiCars QA Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        _ => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(
                    &mut output_target,
                    results,
                    start_time.elapsed(),
                )?;
            }
        }
    }

    if args.report != "json" {
        let duration = start_time.elapsed();
        writeln!(&mut output_target)?;
        writeln!(&mut output_target, "🏁 Total time: {duration:?}")?;
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["flexicars-tester"]).expect("defaults parse");
        assert_eq!(args.scenarios, "all");
        assert_eq!(args.report, "console");
        assert!((args.delay_scale - 0.01).abs() < f64::EPSILON);
        assert!(args.output.is_none());
    }

    #[test]
    fn args_reject_unknown_report() {
        assert!(Args::try_parse_from(["flexicars-tester", "--report", "csv"]).is_err());
    }

    #[test]
    fn expand_all_and_dedupe() {
        assert_eq!(expand_scenarios("all"), Scenario::ALL.to_vec());
        assert_eq!(
            expand_scenarios("forms, listing,forms,,bogus"),
            vec![Scenario::Forms, Scenario::Listing]
        );
        assert_eq!(expand_scenarios("contact,all").len(), Scenario::ALL.len());
    }

    #[test]
    fn split_csv_trims_and_drops_empties() {
        assert_eq!(split_csv(" a, ,b "), vec!["a", "b"]);
    }

    #[test]
    fn json_report_goes_to_file() {
        let path = std::env::temp_dir().join(format!(
            "flexicars-report-{}.json",
            std::process::id()
        ));
        let args = Args::try_parse_from([
            "flexicars-tester",
            "--report",
            "json",
            "--output",
            path.to_str().expect("utf8 temp path"),
        ])
        .expect("args parse");
        write_reports(&args, &[], Instant::now()).expect("report writes");
        let written = std::fs::read_to_string(&path).expect("report file");
        assert_eq!(written.trim(), "[]");
        let _ = std::fs::remove_file(path);
    }
}
