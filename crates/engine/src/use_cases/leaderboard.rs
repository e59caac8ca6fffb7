//! Wealth leaderboard: top players by cash plus bank balance.

use serde::Serialize;

use crate::app::App;
use crate::infrastructure::ports::SourceError;

pub const LEADERBOARD_LIMIT: u32 = 50;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub username: String,
    /// Formatted wealth, e.g. "$1,250,000".
    pub stat: String,
    pub avatar_url: String,
    pub trend: &'static str,
}

pub async fn wealth_top(app: &App) -> Result<Vec<LeaderboardEntry>, SourceError> {
    let rows = app.records.wealth_leaderboard(LEADERBOARD_LIMIT).await?;

    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let wealth = row.int("Money") + row.int("Bank");
            let username = row.text("Name");
            let avatar = row.text("avatar_image_url");
            LeaderboardEntry {
                rank: index as u32 + 1,
                username: if username.is_empty() {
                    "Unknown".to_string()
                } else {
                    username
                },
                stat: format_usd(wealth),
                avatar_url: if avatar.is_empty() {
                    format!("https://i.pravatar.cc/150?u={index}")
                } else {
                    avatar
                },
                trend: "same",
            }
        })
        .collect())
}

/// Whole-dollar currency formatting with thousands separators.
fn format_usd(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
