use std::str::FromStr;

use chrono::{DateTime, Utc};
use solana_sdk::pubkey::Pubkey;

use crate::error::InvalidAddress;

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: f64 = 1e9;

/// Parse a wallet address, trimming surrounding whitespace first
pub fn parse_address(s: &str) -> Result<Pubkey, InvalidAddress> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(InvalidAddress {
            address: s.to_string(),
            reason: "address is empty".to_string(),
        });
    }
    Pubkey::from_str(trimmed).map_err(|e| InvalidAddress {
        address: trimmed.to_string(),
        reason: e.to_string(),
    })
}

/// Format lamports as SOL
pub fn lamports_to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL
}

/// Signed lamport delta as SOL
pub fn lamport_delta_to_sol(pre: u64, post: u64) -> f64 {
    (post as i128 - pre as i128) as f64 / LAMPORTS_PER_SOL
}

/// Shorten a string to `head...tail`; strings too short to shorten are returned as-is
pub fn truncate_middle(s: &str, head: usize, tail: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= head + tail {
        return s.to_string();
    }
    let start: String = chars[..head].iter().collect();
    let end: String = chars[chars.len() - tail..].iter().collect();
    format!("{}...{}", start, end)
}

/// Format an address for display (truncated)
pub fn format_address(address: &str) -> String {
    truncate_middle(address, 4, 4)
}

/// Format a transaction signature for display (truncated)
pub fn format_signature(signature: &str) -> String {
    truncate_middle(signature, 6, 6)
}

/// USD with two decimals and thousands separators, e.g. `$12,345.68`
pub fn format_usd(value: f64) -> String {
    let rounded = format!("{:.2}", value.abs());
    let (whole, frac) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, frac)
}

/// Token amount with four decimals
pub fn format_token_amount(amount: f64) -> String {
    format!("{:.4}", amount)
}

/// Relative age of a unix timestamp, e.g. `3d ago`
pub fn format_relative_time(timestamp: i64, now: DateTime<Utc>) -> String {
    if timestamp <= 0 {
        return "unknown".to_string();
    }

    let seconds = (now.timestamp() - timestamp).max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("{}d ago", days)
    } else if hours > 0 {
        format!("{}h ago", hours)
    } else if minutes > 0 {
        format!("{}m ago", minutes)
    } else {
        format!("{}s ago", seconds)
    }
}
