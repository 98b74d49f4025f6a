use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pasvortgardo::analyzer::{AnalyzeError, Analyzer, Status};
use pasvortgardo::config::AnalyzerConfig;
use pasvortgardo::corpus;
use pasvortgardo::index::CorpusIndex;
use pasvortgardo::output;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("analyze") => run_analyze(&args[2..]),
        Some("suggest") => run_suggest(&args[2..]),
        Some("--help" | "-h") => {
            print_usage();
            0
        }
        Some(cmd) => {
            eprintln!("[ERROR] unknown command: {}", cmd);
            eprintln!();
            print_usage();
            2
        }
        None => {
            print_usage();
            2
        }
    }
}

fn print_usage() {
    eprintln!("pasvortgardo - password strength and breach-similarity analyzer");
    eprintln!();
    eprintln!("usage:");
    eprintln!("  pasvortgardo analyze --corpus <file>   analyze a password read from stdin");
    eprintln!("  pasvortgardo suggest --corpus <file>   print generated strong passwords");
    eprintln!("  pasvortgardo --help                    show this help");
    eprintln!();
    eprintln!("flags:");
    eprintln!("  --corpus <file>    newline-delimited compromised-password corpus (required)");
    eprintln!("  --config <file>    TOML config overriding the built-in defaults");
    eprintln!("  --count <n>        number of suggestions (suggest only)");
    eprintln!();
    eprintln!("the password is always read from stdin, never from the command line,");
    eprintln!("so it cannot land in shell history or process listings.");
    eprintln!();
    eprintln!("exit codes: 0 = done, 1 = password rejected, 2 = error");
}

/// shared flag parsing for both subcommands.
/// returns (corpus path, config, optional count) or an error message.
/// `--count` only makes sense for suggest; analyze rejects it loudly
/// instead of silently dropping it.
fn parse_flags(
    args: &[String],
    allow_count: bool,
) -> Result<(PathBuf, AnalyzerConfig, Option<usize>), String> {
    let mut corpus_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;
    let mut count: Option<usize> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--corpus" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--corpus requires a file path".to_string())?;
                corpus_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--config" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--config requires a file path".to_string())?;
                config_path = Some(PathBuf::from(value));
                i += 2;
            }
            "--count" => {
                if !allow_count {
                    return Err("--count is only valid for the suggest command".to_string());
                }
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--count requires a number".to_string())?;
                let n = value
                    .parse::<usize>()
                    .map_err(|_| format!("invalid --count value: {}", value))?;
                count = Some(n);
                i += 2;
            }
            other => return Err(format!("unknown flag: {}", other)),
        }
    }

    let corpus_path = corpus_path.ok_or_else(|| "--corpus is required".to_string())?;

    let config = match config_path {
        Some(p) => AnalyzerConfig::load(&p).map_err(|e| e.to_string())?,
        None => AnalyzerConfig::default(),
    };

    Ok((corpus_path, config, count))
}

/// load the corpus and build the process-wide index. fatal on failure:
/// without a corpus every similarity answer would be meaningless.
fn build_analyzer(corpus_path: &Path, config: AnalyzerConfig) -> Result<Analyzer, String> {
    let entries = corpus::load(corpus_path).map_err(|e| e.to_string())?;
    let index = CorpusIndex::build(entries);
    eprintln!("[OK] corpus indexed ({} entries)", index.len());
    Ok(Analyzer::new(Arc::new(index), config))
}

fn run_analyze(args: &[String]) -> i32 {
    let (corpus_path, config, _) = match parse_flags(args, false) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return 2;
        }
    };

    let analyzer = match build_analyzer(&corpus_path, config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return 2;
        }
    };

    // stdin, first line only; the plaintext never goes anywhere else
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        eprintln!("[ERROR] failed to read password from stdin: {}", e);
        return 2;
    }
    let password = input.lines().next().unwrap_or("");

    match analyzer.analyze(password) {
        Ok(result) => {
            println!("{}", output::render(&result));
            if result.status == Status::Reject {
                1
            } else {
                0
            }
        }
        Err(e @ AnalyzeError::InvalidInput(_)) => {
            println!("{}", output::render_error(&e));
            2
        }
        Err(e) => {
            println!("{}", output::render_error(&e));
            eprintln!("[ERROR] {}", e);
            2
        }
    }
}

fn run_suggest(args: &[String]) -> i32 {
    let (corpus_path, config, count) = match parse_flags(args, true) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return 2;
        }
    };

    let count = count.unwrap_or(config.suggestion_count);
    let analyzer = match build_analyzer(&corpus_path, config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return 2;
        }
    };

    let pool = analyzer.suggest_pool(count);
    if pool.len() < count {
        eprintln!(
            "[WARN] generated {} of {} requested suggestions before exhausting retries",
            pool.len(),
            count
        );
    }
    println!("{}", output::render_pool(&pool));
    0
}
