//! Roster-wide aggregates: best country by win ratio, average BMI and median height.

use std::collections::HashMap;

use roster_types::{
    Result,
    errors::PlayerError,
    player::{Player, Statistics},
};

/// Reported as best country when the roster has no country groups.
pub const NO_COUNTRY: &str = "N/A";

/// Computes every aggregate. Fails with `NoPlayers` on an empty roster.
pub fn compute(players: &[Player]) -> Result<Statistics> {
    if players.is_empty() {
        return Err(PlayerError::NoPlayers);
    }

    Ok(Statistics {
        best_country: best_country(players),
        average_bmi: average_bmi(players)?,
        median_height: median_height(players).ok_or(PlayerError::NoPlayers)?,
    })
}

/// Country code with the highest win ratio.
///
/// Groups are visited in first-seen order and a later group only wins on a
/// strictly greater ratio, so ties go to the country met first in the roster.
pub fn best_country(players: &[Player]) -> String {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, usize)> = Vec::new();

    for player in players {
        let code = player.country.code.as_str();
        let slot = *index.entry(code).or_insert_with(|| {
            groups.push((code, 0, 0));
            groups.len() - 1
        });
        groups[slot].1 += player.data.wins();
        groups[slot].2 += player.data.matches();
    }

    let mut best: Option<(&str, f64)> = None;
    for (code, wins, total) in groups {
        let ratio = if total > 0 {
            wins as f64 / total as f64
        } else {
            0.0
        };
        match best {
            Some((_, best_ratio)) if ratio <= best_ratio => {}
            _ => best = Some((code, ratio)),
        }
    }

    best.map_or_else(|| NO_COUNTRY.to_string(), |(code, _)| code.to_string())
}

/// Body-mass index of a single player, from grams and centimeters.
pub fn bmi(player: &Player) -> Result<f64> {
    let weight_kg = player.data.weight as f64 / 1000.0;
    let height_m = player.data.height as f64 / 100.0;

    if height_m <= 0.0 {
        return Err(PlayerError::update_failed(
            player.id,
            "invalid height for BMI",
        ));
    }

    Ok(weight_kg / (height_m * height_m))
}

/// Mean BMI over the roster, rounded to two decimals half away from zero.
pub fn average_bmi(players: &[Player]) -> Result<f64> {
    if players.is_empty() {
        return Err(PlayerError::NoPlayers);
    }

    let mut sum = 0.0;
    for player in players {
        sum += bmi(player)?;
    }

    Ok(round_to_cents(sum / players.len() as f64))
}

/// Median of player heights in centimeters. `None` on an empty roster.
pub fn median_height(players: &[Player]) -> Option<f64> {
    let mut heights: Vec<i32> = players.iter().map(|p| p.data.height).collect();
    if heights.is_empty() {
        return None;
    }
    heights.sort_unstable();

    let n = heights.len();
    let median = if n % 2 == 1 {
        heights[n / 2] as f64
    } else {
        (heights[n / 2 - 1] as f64 + heights[n / 2] as f64) / 2.0
    };

    Some(median)
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
