// Result reporting and serialization

use foray_scanner::ProbeResult;
use serde_json::json;
use std::collections::HashMap;

/// Generate a human-readable report, grouped by status code.
pub fn generate_scan_report(target: &str, results: &[ProbeResult]) -> String {
    let mut report = String::new();

    report.push_str(&"━".repeat(60));
    report.push('\n');
    report.push_str(&format!("Scan results for {target}\n"));
    report.push_str(&format!(
        "Generated: {}\n",
        chrono::Utc::now().to_rfc3339()
    ));
    report.push_str(&format!("Reachable paths: {}\n", results.len()));
    report.push_str(&"━".repeat(60));
    report.push('\n');

    if results.is_empty() {
        report.push_str("\nNo interesting items found.\n");
        return report;
    }

    let mut by_status: HashMap<u16, Vec<&ProbeResult>> = HashMap::new();
    for result in results {
        by_status.entry(result.status_code).or_default().push(result);
    }
    let mut status_codes: Vec<u16> = by_status.keys().copied().collect();
    status_codes.sort_unstable();

    for status_code in status_codes {
        let Some(status_results) = by_status.get(&status_code) else {
            continue;
        };
        let status_label = match status_code {
            200..=299 => format!("[{status_code}] Success"),
            300..=399 => format!("[{status_code}] Redirect"),
            _ => format!("[{status_code}]"),
        };
        report.push_str(&format!(
            "\n{} ({} findings)\n",
            status_label,
            status_results.len()
        ));

        for result in status_results.iter() {
            report.push_str(&format!("  {}", result.url));
            if !result.content_type.is_empty() {
                let short_ct = result
                    .content_type
                    .split(';')
                    .next()
                    .unwrap_or(&result.content_type);
                report.push_str(&format!(" [{short_ct}]"));
            }
            report.push('\n');
        }
    }

    report
}

/// One `url<TAB>status<TAB>content-type` line per result.
pub fn to_tsv(results: &[ProbeResult]) -> String {
    results
        .iter()
        .map(|r| format!("{}\t{}\t{}\n", r.url, r.status_code, r.content_type))
        .collect()
}

/// JSON document with the result list and a generation stamp.
pub fn to_json(target: &str, results: &[ProbeResult]) -> serde_json::Value {
    json!({
        "target": target,
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "results": results,
    })
}
