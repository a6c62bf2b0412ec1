use crate::aggregator::AggregateStats;
use std::fmt::Write;
use tracing::debug;

/// Renders the statistics table printed after a run.
pub fn render_stats(stats: &AggregateStats, tokens_per_request: usize) -> String {
    debug!("Rendering statistics for {} files", stats.files);

    let totals = vec![
        ("Total Files:".to_owned(), stats.files.to_string()),
        ("Total Lines:".to_owned(), stats.lines.to_string()),
        ("Total Words:".to_owned(), stats.words.to_string()),
        ("Total Chars:".to_owned(), stats.chars.to_string()),
    ];
    let languages: Vec<(String, String)> = stats
        .extensions
        .iter()
        .map(|(ext, count)| (format!("{}:", extension_label(ext)), count.to_string()))
        .collect();
    let tokens = vec![("Total Tokens:".to_owned(), stats.tokens.to_string())];
    let requests = vec![
        (
            "Tokens per Request:".to_owned(),
            group_thousands(tokens_per_request),
        ),
        (
            "Estimated Requests:".to_owned(),
            format!("{:.2}", stats.estimated_requests(tokens_per_request)),
        ),
    ];

    let width = totals
        .iter()
        .chain(&languages)
        .chain(&tokens)
        .chain(&requests)
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0)
        + 1;

    let mut out = String::new();
    out.push_str("Statistics:\n-----------\n");
    write_rows(&mut out, &totals, width);
    out.push_str("\nLanguages:\n-----------\n");
    write_rows(&mut out, &languages, width);
    out.push_str("\nToken Count:\n");
    write_rows(&mut out, &tokens, width);
    out.push_str("\nEstimated Requirements:\n");
    write_rows(&mut out, &requests, width);
    out
}

fn write_rows(out: &mut String, rows: &[(String, String)], width: usize) {
    for (label, value) in rows {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{:<width$}{}", label, value, width = width);
    }
}

fn extension_label(ext: &str) -> &str {
    if ext.is_empty() {
        "(none)"
    } else {
        ext
    }
}

fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
