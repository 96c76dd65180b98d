use clap::{ArgAction, Parser, ValueEnum};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use wordfreq::input::{self, Input};
use wordfreq::{normalize, report, zipf};
use wordfreq::{Error, FrequencyTable, InputError, Precision};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Count word frequencies in a file or stdin and rank them.
///
/// Words are split on whitespace, lowercased, and stripped of punctuation
/// and digits. Each output line is `<word> <count> <percent of all words>`.
#[derive(Parser, Debug)]
#[command(name = "wordfreq", version, about, long_about = None)]
struct Args {
    /// Text file to read. Reads stdin when omitted.
    #[arg(conflicts_with = "zipf")]
    path: Option<PathBuf>,

    /// Print only the N most frequent words
    #[arg(short = 'n', long, value_name = "N")]
    top: Option<usize>,

    /// Fixed number of decimal places for percentages
    #[arg(short, long, value_name = "DIGITS")]
    precision: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Summarize saved reports: top two counts per file and their ratio
    #[arg(long, value_name = "REPORT", num_args = 1..)]
    zipf: Vec<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn precision(&self) -> Precision {
        self.precision.map_or(Precision::Shortest, Precision::Fixed)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn count<W: Write>(args: &Args, input: Input, out: &mut W) -> Result<(), Error> {
    debug!(target: "wordfreq::input", source = input.name(), "Reading words");

    let mut failure: Option<InputError> = None;
    let words = input
        .words()
        .map_while(|w| w.map_err(|e| failure = Some(e)).ok());
    let table: FrequencyTable = normalize::tokens(words).collect();
    if let Some(e) = failure {
        return Err(e.into());
    }
    info!(
        target: "wordfreq::count",
        tokens = table.total(),
        distinct = table.distinct(),
        "Counted words"
    );

    let mut ranking = report::rank(table);
    if let Some(n) = args.top {
        ranking.truncate(n);
    }
    match args.format {
        Format::Text => {
            report::write_text(out, &ranking, args.precision()).map_err(Error::Output)?
        }
        Format::Json => report::write_json(out, &ranking)?,
    }
    Ok(())
}

fn summarize_reports<W: Write>(args: &Args, out: &mut W) -> Result<(), Error> {
    zipf::write_header(out).map_err(Error::Output)?;
    for path in &args.zipf {
        let row = zipf::summarize(path)?;
        debug!(
            target: "wordfreq::zipf",
            report = %path.display(),
            first = row.first,
            second = row.second,
            "Summarized report"
        );
        zipf::write_row(out, &row).map_err(Error::Output)?;
    }
    Ok(())
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Error> {
    if args.zipf.is_empty() {
        let input = input::open(args.path.as_deref())?;
        count(args, input, out)?;
    } else {
        summarize_reports(args, out)?;
    }
    out.flush().map_err(Error::Output)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match run(&args, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_broken_pipe() => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wordfreq: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
