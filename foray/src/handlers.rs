use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use foray_core::report::{generate_scan_report, to_json, to_tsv};
use foray_core::scan::{ScanOptions, execute_scan};
use foray_core::wordlist::{default_wordlist, load_wordlist};
use foray_scanner::{ProbeResult, ScanConfig};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Resolve the candidate list: a supplied wordlist file (tilde-expanded)
/// when given, the built-in default list otherwise. An existing but empty
/// file also falls back to the defaults.
pub fn resolve_wordlist(wordlist_file: Option<&PathBuf>) -> Result<Vec<String>> {
    let Some(path) = wordlist_file else {
        debug!("No wordlist supplied, using built-in list");
        return Ok(default_wordlist());
    };

    let expanded = shellexpand::tilde(&path.display().to_string()).to_string();
    let entries = load_wordlist(Path::new(&expanded))?;
    if entries.is_empty() {
        eprintln!(
            "{} Wordlist {} has no entries, using built-in list",
            "⚠".yellow(),
            expanded
        );
        return Ok(default_wordlist());
    }
    Ok(entries)
}

pub async fn handle_scan(args: &ArgMatches) -> Result<()> {
    tracing_subscriber::fmt::init();

    let url = args.get_one::<Url>("url").unwrap();
    let wordlist_file = args.get_one::<PathBuf>("wordlist-file");
    let threads = *args.get_one::<usize>("threads").unwrap();
    let timeout = *args.get_one::<u64>("timeout").unwrap();
    let output = args.get_one::<PathBuf>("output");
    let format = args.get_one::<String>("format").unwrap();

    let wordlist = resolve_wordlist(wordlist_file)?;

    println!(
        "\n{} {}",
        "Scanning".bright_cyan().bold(),
        url.as_str().bright_white()
    );
    println!(
        "Candidates: {}   Workers: {}   Timeout: {}s\n",
        wordlist.len(),
        threads,
        timeout
    );

    let config = ScanConfig {
        concurrency: threads,
        timeout: Duration::from_secs(timeout),
        ..ScanConfig::default()
    };
    let options = ScanOptions {
        target: url.as_str().to_string(),
        wordlist,
        config,
        show_progress_bars: true,
    };

    // Hits are mirrored out-of-band so an interrupt still leaves us with
    // everything completed up to that point.
    let collected: Arc<StdMutex<Vec<ProbeResult>>> = Arc::new(StdMutex::new(Vec::new()));
    let sink = collected.clone();
    let result_callback = Arc::new(move |result: ProbeResult| {
        sink.lock().unwrap().push(result);
    });

    let (results, interrupted) = tokio::select! {
        scan = execute_scan(options, Some(result_callback)) => (scan?, false),
        _ = tokio::signal::ctrl_c() => {
            let partial = collected.lock().unwrap().clone();
            (partial, true)
        }
    };

    if interrupted {
        println!(
            "\n{} Scan interrupted; reporting the {} paths confirmed so far",
            "⚠".yellow().bold(),
            results.len()
        );
    }

    print!("{}", generate_scan_report(url.as_str(), &results));

    if let Some(path) = output {
        let serialized = match format.as_str() {
            "json" => serde_json::to_string_pretty(&to_json(url.as_str(), &results))?,
            _ => to_tsv(&results),
        };
        fs::write(path, serialized)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!(
            "\n{} Results saved to {}",
            "✓".green().bold(),
            path.display()
        );
    }

    Ok(())
}
