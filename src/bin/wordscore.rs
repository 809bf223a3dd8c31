//! Finds the highest-scoring words of a word list.
//!
//! `wordscore --values VALUES --dict WORDS [--strategy greedy|prefix-walk]
//! [--no-lowercase] [--parallel] [--format text|json]`
//!
//! Logging is controlled by `WORDSCORE_LOG` (e.g. `WORDSCORE_LOG=debug`).

use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Arg, ArgAction, ArgMatches, Command};

use wordscore::scoring::{RankConfig, Strategy, WordRanker};
use wordscore::trie::{LookupTrie, TokenLookup};
use wordscore::types::{Leaderboard, ScoreReport};
use wordscore::vocabulary::{read_candidates_from_path, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug)]
struct Options {
    values: PathBuf,
    dict: PathBuf,
    format: OutputFormat,
    config: RankConfig,
}

fn make_options_parser() -> Command {
    Command::new("wordscore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scores words by greedy longest-match against a token value table")
        .arg(
            Arg::new("values")
                .short('v')
                .long("values")
                .value_name("FILE")
                .help("Token value table, one `<token> <integer>` per line")
                .required(true),
        )
        .arg(
            Arg::new("dict")
                .short('d')
                .long("dict")
                .value_name("FILE")
                .help("Candidate words, one per line")
                .required(true),
        )
        .arg(
            Arg::new("strategy")
                .short('s')
                .long("strategy")
                .default_value("greedy")
                .value_parser(["greedy", "prefix-walk"]),
        )
        .arg(
            Arg::new("no-lowercase")
                .long("no-lowercase")
                .help("Score candidates exactly as written")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("parallel")
                .short('p')
                .long("parallel")
                .help("Score candidates on all cores")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .default_value("text")
                .value_parser(["text", "json"]),
        )
}

impl Options {
    fn from_matches(matches: &ArgMatches) -> Result<Self> {
        let required_path = |name: &str| -> Result<PathBuf> {
            matches
                .get_one::<String>(name)
                .map(PathBuf::from)
                .with_context(|| format!("--{name} not specified"))
        };

        let strategy: Strategy = matches
            .get_one::<String>("strategy")
            .map(String::as_str)
            .unwrap_or("greedy")
            .parse()?;

        let format = match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        Ok(Options {
            values: required_path("values")?,
            dict: required_path("dict")?,
            format,
            config: RankConfig {
                lowercase_candidates: !matches.get_flag("no-lowercase"),
                parallel: matches.get_flag("parallel"),
                strategy,
            },
        })
    }
}

fn main() {
    let env = env_logger::Env::new()
        .filter_or("WORDSCORE_LOG", "warn")
        .write_style("WORDSCORE_LOG_STYLE");
    env_logger::init_from_env(env);

    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let started = Instant::now();
    let matches = make_options_parser().get_matches();
    let options = Options::from_matches(&matches)?;
    log::debug!("options: {options:?}");

    let vocabulary = Vocabulary::from_path(&options.values)
        .with_context(|| format!("loading values from {}", options.values.display()))?;
    let trie: LookupTrie = vocabulary.build();
    log::info!(
        "built trie with {} tokens from {} records",
        trie.len(),
        vocabulary.len()
    );

    let candidates = read_candidates_from_path(&options.dict)
        .with_context(|| format!("reading candidates from {}", options.dict.display()))?;

    let ranker = WordRanker::from_config(&options.config);
    let leaderboard = ranker.rank(&trie, &candidates);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match options.format {
        OutputFormat::Text => write_text(&mut out, &leaderboard)?,
        OutputFormat::Json => {
            let report = ScoreReport {
                vocabulary_version: vocabulary.version.clone(),
                vocabulary_tokens: trie.len(),
                config: options.config.clone(),
                generated_at: Utc::now(),
                leaderboard,
            };
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }

    log::info!("finished in {:.3}s", started.elapsed().as_secs_f64());
    Ok(())
}

fn write_text(out: &mut impl Write, leaderboard: &Leaderboard) -> Result<()> {
    for winner in &leaderboard.winners {
        writeln!(out, "{} {}", winner.candidate, winner.score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordscore::types::ScoredCandidate;

    fn parse(args: &[&str]) -> Result<Options> {
        let matches = make_options_parser().try_get_matches_from(args)?;
        Options::from_matches(&matches)
    }

    #[test]
    fn flags_map_onto_rank_config() {
        let options = parse(&[
            "wordscore",
            "--values",
            "v",
            "--dict",
            "d",
            "--no-lowercase",
            "--strategy",
            "prefix-walk",
            "--parallel",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(options.values, PathBuf::from("v"));
        assert_eq!(options.dict, PathBuf::from("d"));
        assert_eq!(options.format, OutputFormat::Json);
        assert_eq!(
            options.config,
            RankConfig {
                lowercase_candidates: false,
                parallel: true,
                strategy: Strategy::PrefixWalk,
            }
        );
    }

    #[test]
    fn defaults_match_v0_config() {
        let options = parse(&["wordscore", "-v", "v", "-d", "d"]).unwrap();
        assert_eq!(options.config, RankConfig::v0());
        assert_eq!(options.format, OutputFormat::Text);
    }

    #[test]
    fn missing_dict_is_an_error() {
        let err = make_options_parser()
            .try_get_matches_from(["wordscore", "--values", "v"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert!(parse(&["wordscore", "--values", "v"]).is_err());
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(parse(&["wordscore", "-v", "v", "-d", "d", "--strategy", "fastest"]).is_err());
    }

    #[test]
    fn text_output_lists_one_winner_per_line() {
        let leaderboard = Leaderboard {
            highest_score: Some(22),
            candidates_considered: 5,
            winners: vec![
                ScoredCandidate {
                    candidate: "Bushwhacker".to_string(),
                    score: 22,
                },
                ScoredCandidate {
                    candidate: "hackers".to_string(),
                    score: 22,
                },
            ],
        };

        let mut out = Vec::new();
        write_text(&mut out, &leaderboard).unwrap();
        assert_eq!(out, b"Bushwhacker 22\nhackers 22\n");
    }

    #[test]
    fn text_output_is_empty_without_winners() {
        let mut out = Vec::new();
        write_text(&mut out, &Leaderboard::default()).unwrap();
        assert!(out.is_empty());
    }
}
