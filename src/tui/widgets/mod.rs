pub mod home;
pub mod quiz;
pub mod results;
pub mod setup;
pub mod stats;

use ratatui::style::Color;

use crate::models::Difficulty;
use crate::report::ScoreTier;

pub fn difficulty_color(d: Difficulty) -> Color {
    match d {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Yellow,
        Difficulty::Hard => Color::Red,
    }
}

pub fn score_color(pct: f64) -> Color {
    match ScoreTier::from_percentage(pct) {
        ScoreTier::High => Color::Green,
        ScoreTier::Mid => Color::Yellow,
        ScoreTier::Low => Color::Red,
    }
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("GDP", 10), "GDP");
    }

    #[test]
    fn truncate_long_string() {
        assert_eq!(truncate("International Trade", 10), "Interna...");
    }

    #[test]
    fn colors_follow_score_tiers() {
        assert_eq!(score_color(75.0), Color::Green);
        assert_eq!(score_color(55.0), Color::Yellow);
        assert_eq!(score_color(10.0), Color::Red);
    }
}
