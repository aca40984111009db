use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use bagofwords::{
    CountVectorizer, RegexTokenizer, SimpleTokenizer, Strategy, Tokenizer, TokenizerConfig,
    Vectorizer, load_raw_text_data,
};

const DEMO_SENTENCES: [&str; 3] = [
    "Hello, world! This is a test.",
    "NLP is fascinating... isn't it?",
    "Let's see how it handles 123 numbers and punctuation!",
];

const DEMO_CORPUS: [&str; 3] = [
    "I love NLP.",
    "I love programming.",
    "NLP is a subfield of AI.",
];

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Simple,
    Regex,
}

/// Tokenize a text file and print its bag-of-words matrix, one document per line.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Text file to load; a built-in sample is used if it does not exist
    #[arg(short, long, default_value = "./sample.txt")]
    input: PathBuf,

    #[arg(short, long, value_enum, default_value_t = StrategyArg::Regex)]
    strategy: StrategyArg,

    /// Custom pattern for the regex strategy
    #[arg(short, long)]
    pattern: Option<String>,

    /// Keep original casing
    #[arg(long)]
    no_lower: bool,

    /// Run both tokenizers on fixed sentences and vectorize a fixed corpus instead
    #[arg(long)]
    demo: bool,
}

impl Args {
    fn tokenizer_config(&self) -> TokenizerConfig {
        let strategy = match self.strategy {
            StrategyArg::Simple => Strategy::Simple { punctuation: None },
            StrategyArg::Regex => Strategy::Regex {
                pattern: self.pattern.clone(),
            },
        };
        TokenizerConfig {
            strategy,
            lower: !self.no_lower,
        }
    }
}

fn run(args: &Args) -> bagofwords::Result<()> {
    let text = load_raw_text_data(&args.input)?;
    let tokenizer = args.tokenizer_config().build()?;

    let tokens = tokenizer.tokenize(&text);
    info!(tokens = tokens.len(), "tokenized input");
    println!("First 20 tokens: {:?}", &tokens[..tokens.len().min(20)]);

    let documents: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let mut vectorizer = CountVectorizer::new(tokenizer);
    let matrix = vectorizer.fit_transform(&documents)?;

    println!("Vocabulary size: {}", vectorizer.vocabulary_size());
    for (token, idx) in vectorizer.vocabulary().iter() {
        println!("  {idx:>4}  {token:?}");
    }
    for (i, row) in matrix.iter().enumerate() {
        println!("Document {i}: {row:?}");
    }
    Ok(())
}

/// Tokenizes the demo sentences with both strategies, then fits and prints
/// the demo corpus.
fn demo<W: Write>(out: &mut W) -> bagofwords::Result<()> {
    let simple = SimpleTokenizer::new(true);
    let regex = RegexTokenizer::new(true);

    for (i, sentence) in DEMO_SENTENCES.iter().enumerate() {
        writeln!(out, "Sentence {}: {sentence}", i + 1)?;
        let tokens = simple.tokenize(sentence);
        writeln!(out, "  simple ({}): {tokens:?}", tokens.len())?;
        let tokens = regex.tokenize(sentence);
        writeln!(out, "  regex  ({}): {tokens:?}", tokens.len())?;
    }

    let mut vectorizer = CountVectorizer::new(&regex);
    let matrix = vectorizer.fit_transform(&DEMO_CORPUS)?;

    writeln!(out, "Vocabulary size: {}", vectorizer.vocabulary_size())?;
    for (token, idx) in vectorizer.vocabulary().iter() {
        writeln!(out, "  {idx:>4}  {token:?}")?;
    }
    for (i, (document, row)) in DEMO_CORPUS.iter().zip(&matrix).enumerate() {
        writeln!(out, "Document {i} {document:?}: {row:?}")?;
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let result = if args.demo {
        demo(&mut io::stdout().lock())
    } else {
        run(&args)
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "vectorization failed");
            ExitCode::FAILURE
        }
    }
}
