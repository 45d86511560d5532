use crate::filter::FilterOutcome;
use common::models::AcceptedCoin;

/// Print per-gate rejection counts and the accepted total.
pub fn print_filter_summary(outcome: &FilterOutcome) {
    println!("\nFiltering Results:");
    println!(
        "Skipped due to invalid/missing data: {}",
        outcome.rejections.invalid_data
    );
    println!(
        "Skipped due to market cap (<1M USD): {}",
        outcome.rejections.market_cap
    );
    println!(
        "Skipped due to volume (<150K USD): {}",
        outcome.rejections.volume
    );
    println!(
        "Skipped due to no Tier-1/Tier-2 listings: {}",
        outcome.rejections.exchanges
    );
    println!(
        "Total coins passing all criteria: {}",
        outcome.accepted.len()
    );
}

/// Up to `n` accepted coins with the smallest market caps, ascending.
pub fn bottom_by_market_cap(accepted: &[AcceptedCoin], n: usize) -> Vec<&AcceptedCoin> {
    let mut sorted = sorted_by_market_cap(accepted);
    sorted.truncate(n);
    sorted
}

/// Up to `n` accepted coins with the largest market caps, descending.
pub fn top_by_market_cap(accepted: &[AcceptedCoin], n: usize) -> Vec<&AcceptedCoin> {
    let mut sorted = sorted_by_market_cap(accepted);
    sorted.reverse();
    sorted.truncate(n);
    sorted
}

fn sorted_by_market_cap(accepted: &[AcceptedCoin]) -> Vec<&AcceptedCoin> {
    let mut sorted: Vec<&AcceptedCoin> = accepted.iter().collect();
    sorted.sort_by(|a, b| a.market_cap_usd.total_cmp(&b.market_cap_usd));
    sorted
}

/// Print the bottom-10 and top-10 market-cap rankings with 1-based ranks.
/// An empty accepted set prints a notice instead of empty rank lists.
pub fn print_rankings(accepted: &[AcceptedCoin]) {
    if accepted.is_empty() {
        println!("\nNo coins found matching all criteria.");
        return;
    }

    println!("\nBottom 10 coins by market cap (ascending):");
    for (i, coin) in bottom_by_market_cap(accepted, 10).iter().enumerate() {
        println!(
            "{}. {} - Market Cap: ${}",
            i + 1,
            coin.symbol,
            format_usd(coin.market_cap_usd)
        );
    }

    println!("\nTop 10 coins by market cap (descending):");
    for (i, coin) in top_by_market_cap(accepted, 10).iter().enumerate() {
        println!(
            "{}. {} - Market Cap: ${}",
            i + 1,
            coin.symbol,
            format_usd(coin.market_cap_usd)
        );
    }
}

/// Format a USD amount with thousands separators and two decimals,
/// e.g. `1234567.891` -> `"1,234,567.89"`.
pub fn format_usd(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}
