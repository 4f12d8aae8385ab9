// Colored terminal output for match results.
//
// main.rs delegates here for everything it prints about scores.

use colored::Colorize;

use crate::features::signature::Signature;
use crate::scoring::matcher::Match;

/// Widest label shown in the ranking table.
const LABEL_WIDTH: usize = 36;

/// Print the winning candidate.
pub fn display_best_match(best: &Match) {
    println!(
        "best author match: {} with score {}",
        best.label.trim().bold(),
        best.score
    );
}

/// Print the closest `top` candidates as a table.
pub fn display_ranking(ranked: &[Match], top: usize) {
    if ranked.is_empty() || top == 0 {
        return;
    }
    let shown = top.min(ranked.len());

    println!(
        "\n{}",
        format!("=== Closest {shown} of {} candidates ===", ranked.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<width$} {:>10}",
        "Rank".dimmed(),
        "Label".dimmed(),
        "Distance".dimmed(),
        width = LABEL_WIDTH + 3
    );
    println!("  {}", "-".repeat(LABEL_WIDTH + 19).dimmed());

    for (i, m) in ranked.iter().take(shown).enumerate() {
        let label = super::truncate_chars(m.label.trim(), LABEL_WIDTH);
        let line = format!(
            "  {:>4}. {:<width$} {:>10.4}",
            i + 1,
            label,
            m.score,
            width = LABEL_WIDTH + 3
        );
        if i == 0 {
            println!("{}", line.bright_green());
        } else {
            println!("{line}");
        }
    }
    println!();
}

/// Print the distance between two signatures, feature by feature.
pub fn display_comparison(a: &Signature, b: &Signature, score: f64) {
    println!(
        "\n{}",
        format!("=== {} vs {} ===", a.label.trim(), b.label.trim()).bold()
    );
    println!();
    for ((name, x), y) in crate::features::signature::FEATURE_NAMES
        .iter()
        .zip(a.features.as_array())
        .zip(b.features.as_array())
    {
        println!("  {:<26} {:>10.4} {:>10.4}", name, x, y);
    }
    println!();
    println!("  Distance: {}", format!("{score:.4}").bold());
}
