mod corpus;

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use verba_parser::{analyze_source, check_program, tiny, ParseResult};
use verba_protocol::{DocumentId, NGramCorpus};
use verba_suggest::{load_archived, Order, SuggestionEngine, DEFAULT_LIMIT};
use verba_text::{tokenize, DocumentAnalysis};

#[derive(Parser)]
#[command(author, version, about = "Word statistics, next-word suggestions and source scanning")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyze text files and write their n-gram corpus as an rkyv archive
    Index {
        #[arg(short, long = "input", value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Also write the corpus as JSON
        #[arg(long, value_name = "FILE")]
        json: Option<PathBuf>,
    },
    /// Compile a JSON corpus to an rkyv archive
    Compile {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,
    },
    /// Word counts and most frequent keywords of a text file
    Stats {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        #[arg(long, default_value_t = 20)]
        top: usize,
    },
    /// Suggest the word that follows a phrase
    Suggest {
        #[arg(short, long, value_name = "FILE")]
        corpus: PathBuf,

        /// Model arity: 2 (bigrams) or 3 (trigrams)
        #[arg(short = 'n', long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(2..=3))]
        order: u8,

        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        #[arg(required = true)]
        phrase: Vec<String>,
    },
    /// Scan source code and print its tokens as JSON
    Lex {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Comma-separated reserved words
        #[arg(short, long, value_delimiter = ',')]
        reserved: Vec<String>,
    },
    /// Check that a file is a valid TINY program
    Tiny {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,

        /// Print the token stream before checking
        #[arg(long)]
        tokens: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Index { inputs, output, json } => {
            let texts = inputs
                .iter()
                .map(|path| corpus::read_text(path))
                .collect::<anyhow::Result<Vec<_>>>()?;
            let corpus = corpus::build_corpus(texts.iter().map(String::as_str));

            if let Some(json_path) = json {
                fs::write(&json_path, serde_json::to_string_pretty(&corpus)?)
                    .with_context(|| format!("writing {}", json_path.display()))?;
            }
            write_archive(&corpus, &output)?;
        }
        Command::Compile { input, output } => {
            info!(path = %input.display(), "reading JSON corpus");
            let input_data = fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;
            let raw: NGramCorpus = serde_json::from_str(&input_data)?;
            write_archive(&corpus::normalize(raw), &output)?;
        }
        Command::Stats { input, top } => {
            let text = corpus::read_text(&input)?;
            let analysis = DocumentAnalysis::analyze(DocumentId::new(1), &text);

            println!("words: {}", analysis.total_words());
            println!("unique words: {}", analysis.unique_words());
            for (word, count) in analysis.keywords.most_common(top) {
                println!("{count:>8}  {word}");
            }
        }
        Command::Suggest { corpus: corpus_path, order, limit, phrase } => {
            let order = Order::from_arity(usize::from(order))
                .context("order must be 2 or 3")?;
            let bytes = corpus::read_archive(&corpus_path)?;
            let archived = load_archived(&bytes)?;

            let context = tokenize(&phrase.join(" "));
            let suggestions = SuggestionEngine::new(archived)
                .with_limit(limit)
                .suggest(&context, order);
            println!("{}", serde_json::to_string_pretty(&suggestions)?);
        }
        Command::Lex { input, reserved } => {
            let source = corpus::read_text(&input)?;
            let reserved: Vec<&str> = reserved.iter().map(|w| w.trim()).collect();
            let tokens = analyze_source(&source, &reserved);
            println!("{}", serde_json::to_string_pretty(&tokens)?);
        }
        Command::Tiny { input, tokens } => {
            let source = corpus::read_text(&input)?;
            if tokens {
                // Scanning stops at the first bad character; the check below reports it
                if let Ok(stream) = tiny::tokenize(&source) {
                    for token in stream {
                        println!("{:>6}  {token}", token.span.start);
                    }
                }
            }

            return Ok(match check_program(&source) {
                ParseResult::Accepted => {
                    println!("Accepted");
                    ExitCode::SUCCESS
                }
                ParseResult::Rejected { reason, position } => {
                    println!("Rejected at byte {position}: {reason}");
                    ExitCode::FAILURE
                }
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn write_archive(corpus: &NGramCorpus, output: &Path) -> anyhow::Result<()> {
    info!(
        version = corpus.version,
        unigrams = corpus.unigrams.len(),
        bigrams = corpus.bigrams.len(),
        trigrams = corpus.trigrams.len(),
        "compiling corpus"
    );
    let bytes = corpus::encode(corpus)?;
    fs::write(output, bytes.as_slice()).with_context(|| format!("writing {}", output.display()))?;
    println!("Corpus written to {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_suggest_order_is_range_checked() {
        assert!(Cli::try_parse_from(["verba", "suggest", "-c", "c.rkyv", "-n", "3", "el", "perro"]).is_ok());
        assert!(Cli::try_parse_from(["verba", "suggest", "-c", "c.rkyv", "-n", "4", "el"]).is_err());
    }

    #[test]
    fn test_reserved_words_split_on_commas() {
        let cli = Cli::try_parse_from(["verba", "lex", "-i", "a.c", "-r", "if,while,return"])
            .expect("arguments should parse");
        match cli.command {
            Command::Lex { reserved, .. } => assert_eq!(reserved, vec!["if", "while", "return"]),
            _ => panic!("Expected lex command"),
        }
    }
}
