use crate::types::AnalysisRecord;

pub const BAR_WIDTH: usize = 30;

/// Horizontal bar for a 0-100 relevance score
pub fn relevance_bar(relevance: f64, width: usize) -> String {
    let ratio = (relevance / 100.0).clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Share of `value` in `total` as a whole percentage in 0-100, 0 when nothing
/// was measured
pub fn percentage(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total * 100.0).round().clamp(0.0, 100.0)
    } else {
        0.0
    }
}

fn push_list(output: &mut String, items: &[String]) {
    if items.is_empty() {
        output.push_str("None reported.\n");
    }
    for item in items {
        output.push_str(&format!("• {}\n", item));
    }
    output.push('\n');
}

pub fn format_record_readable(record: &AnalysisRecord) -> String {
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", record.title));
    output.push_str(&format!("**Thumbnail:** {}\n\n", record.thumbnail_url));

    output.push_str("## Summary\n\n");
    output.push_str(&record.summary);
    output.push_str("\n\n");

    output.push_str("## Detailed analysis\n\n");
    output.push_str(&record.description);
    output.push_str("\n\n");

    output.push_str("## Key points\n\n");
    push_list(&mut output, &record.key_points);

    output.push_str("## Topics\n\n");
    if record.topics.is_empty() {
        output.push_str("None reported.\n");
    }
    let name_width = record
        .topics
        .iter()
        .map(|t| t.name.chars().count())
        .max()
        .unwrap_or(0);
    for topic in &record.topics {
        output.push_str(&format!(
            "{:<width$}  {} {:>3.0}\n",
            topic.name,
            relevance_bar(topic.relevance, BAR_WIDTH),
            topic.relevance,
            width = name_width
        ));
    }
    output.push('\n');

    output.push_str("## Insights\n\n");
    push_list(&mut output, &record.insights);

    output.push_str("## Sentiment\n\n");
    let total: f64 = record.sentiment.iter().map(|s| s.value).sum();
    for slice in &record.sentiment {
        output.push_str(&format!(
            "• {}: {:.0}%\n",
            slice.name,
            percentage(slice.value, total)
        ));
    }

    output
}
