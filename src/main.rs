use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing::{info, warn, Level};

use tst_complete::normalize::normalize_text;
use tst_complete::terminal::{self, Completer, RawMode};
use tst_complete::{Alphabet, FileFormat, Wordlist};

/// Prefix completion over a compressed ternary search trie.
#[derive(StructOpt)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences), global = true)]
    verbose: u8,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Normalize free text into one lowercase word per line
    Words {
        /// Text file to read
        #[structopt(parse(from_os_str))]
        input: PathBuf,
        #[structopt(short, long, parse(from_os_str), default_value = "words.txt")]
        output: PathBuf,
    },
    /// Load a word list and complete prefixes interactively
    Complete {
        #[structopt(short, long, parse(from_os_str), default_value = "words.txt")]
        words: PathBuf,
        /// Field delimiter for lists with several columns per line
        #[structopt(long)]
        delimiter: Option<char>,
        /// Column holding the word when a delimiter is set
        #[structopt(long)]
        column: Option<usize>,
        /// Sort completions instead of listing them in trie order
        #[structopt(long)]
        sorted: bool,
        /// Print the load report and letter statistics as JSON
        #[structopt(long)]
        json: bool,
        /// Only load and report, skip the interactive prompt
        #[structopt(long)]
        no_prompt: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match args.cmd {
        Command::Words { input, output } => words(input, output),
        Command::Complete { words, delimiter, column, sorted, json, no_prompt } => {
            let format = FileFormat::builder().delimiter(delimiter).word_column(column).build();
            complete(words, &format, sorted, json, no_prompt)
        }
    }
}

fn words(input: PathBuf, output: PathBuf) -> Result<()> {
    let reader = File::open(&input)
        .with_context(|| format!("Failed to open the input file {:?}", input))?;
    let writer = File::create(&output)
        .with_context(|| format!("Failed to open the output file {:?}", output))?;

    let report = normalize_text(BufReader::new(reader), BufWriter::new(writer), &Alphabet::default())
        .context("Failed to normalize text")?;
    println!("Generated {:?} with {} lowercase words ({} skipped)",
             output, report.written, report.skipped);
    Ok(())
}

fn complete(path: PathBuf, format: &FileFormat, sorted: bool, json: bool, no_prompt: bool) -> Result<()> {
    let mut wl = Wordlist::new(Alphabet::default());
    let report = wl.load_file(&path, format)?;
    let stats = wl.bucket_stats();

    if json {
        let out = serde_json::json!({ "load": report, "letters": stats });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{} words read: {} inserted, {} skipped",
                 report.read, wl.count(), report.skipped);
        stats.iter().for_each(|s| println!("{}: {}", s.letter, s.words));
    }

    if no_prompt {
        return Ok(());
    }

    let _raw = match RawMode::enable() {
        Ok(raw) => Some(raw),
        Err(e) => {
            warn!(%e, "could not switch the terminal to raw mode; input is line buffered");
            None
        }
    };
    let mut completer = Completer::new(wl.trie(), sorted);
    terminal::run(&mut completer, io::stdin().lock(), io::stdout().lock())
        .context("Terminal I/O failed")?;
    info!("bye");
    Ok(())
}
