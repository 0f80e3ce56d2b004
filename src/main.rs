//! Command-line interface for resegment-rs
//!
//! Usage:
//!   resegment [OPTIONS] <TEXT>
//!   echo "I left and I came back" | resegment
//!   resegment -i            # every input line replaces the previous one

use clap::Parser;
use log::LevelFilter;
use serde::Serialize;
use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;
use std::process;

use resegment::{Config, ResegmentSession, SentenceResegmenter, UnicodeWordTokenizer, WordTokenizer};

/// Split run-on sentences at language-specific trigger words
#[derive(Parser, Debug)]
#[command(name = "resegment", version, about)]
#[command(after_help = "EXAMPLES:
    resegment \"I left, and I came back\"
    resegment -l es \"ven si quieres\"
    resegment -t extra.tsv -j \"je pars et je reviens\"
    resegment -i")]
struct Args {
    /// Text to resegment (read from stdin when omitted)
    text: Option<String>,

    /// Skip detection and use this language code
    #[arg(short, long, value_name = "CODE")]
    lang: Option<String>,

    /// Extra trigger words (TSV: code<TAB>word<TAB>word...)
    #[arg(short, long = "triggers", value_name = "FILE")]
    triggers: Vec<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(short, long)]
    json: bool,

    /// Treat each stdin line as a new value of the input and print the live output
    #[arg(short, long)]
    interactive: bool,

    /// Print the tokens instead of resegmenting
    #[arg(long)]
    tokens: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Serialize)]
struct Report<'a> {
    input: &'a str,
    language: Option<String>,
    output: String,
    breaks: usize,
}

fn main() {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let pipeline = build_pipeline(&args)?;

    if args.interactive {
        return run_interactive(pipeline, args.json);
    }

    // Read from stdin if no text provided
    let input_text = match args.text {
        Some(ref t) => t.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf.trim_end_matches(&['\n', '\r'][..]).to_string()
        }
    };

    if input_text.is_empty() {
        return Err("no input text provided".into());
    }

    if args.tokens {
        let tokens = UnicodeWordTokenizer::new().tokenize(&input_text);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        } else {
            for token in &tokens {
                println!("{}\t{}\t{:?}", token.start, token.category.as_str(), token.text);
            }
        }
        return Ok(());
    }

    let outcome = pipeline.process(&input_text)?;
    if args.json {
        let report = Report {
            input: &input_text,
            language: outcome.language,
            output: outcome.output,
            breaks: outcome.breaks,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", outcome.output);
    }

    Ok(())
}

fn build_pipeline(args: &Args) -> Result<SentenceResegmenter, Box<dyn std::error::Error>> {
    let mut config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.lang.is_some() {
        config.language = args.lang.clone();
    }
    config.triggers.files.extend(args.triggers.iter().cloned());

    Ok(SentenceResegmenter::from_config(&config)?)
}

fn run_interactive(
    pipeline: SentenceResegmenter,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = ResegmentSession::new(pipeline);
    let stdout = io::stdout();

    for line in io::stdin().lock().lines() {
        let line = line?;
        session.update(Some(&line));

        let mut out = stdout.lock();
        if json {
            let outcome = session.outcome();
            let report = Report {
                input: session.input(),
                language: outcome.language.clone(),
                output: outcome.output.clone(),
                breaks: outcome.breaks,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        } else {
            writeln!(out, "{}", session.output())?;
        }
        out.flush()?;
    }

    Ok(())
}
