use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::destination::{BudgetLevel, Climate, Destination, ScoredDestination};

/// Countries recognised in free-text queries, in detection order.
pub const KNOWN_COUNTRIES: [&str; 13] = [
    "india",
    "france",
    "usa",
    "united states",
    "china",
    "peru",
    "australia",
    "egypt",
    "brazil",
    "japan",
    "italy",
    "uk",
    "germany",
];

/// Query words already handled by the climate, water and budget rules.
const CONSUMED_KEYWORDS: [&str; 4] = ["warm", "cold", "beach", "cheap"];

const MAX_REASONS: usize = 3;
const DEFAULT_REASON: &str = "Possible match";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuitabilityWeights {
    /// Bonus for destinations in the country named by the query
    pub country_bonus: f64,
    /// Penalty for destinations outside the country named by the query
    pub country_penalty: f64,
    /// Bonus for coastal destinations on beach/sea/ocean queries
    pub water_bonus: f64,
    /// Penalty for dry destinations on beach/sea/ocean queries
    pub water_penalty: f64,
    pub hot_bonus: f64,
    pub cold_bonus: f64,
    pub cold_penalty: f64,
    pub budget_bonus: f64,
    pub budget_penalty: f64,
    /// Bonus per query word found in the destination text
    pub keyword_bonus: f64,
    /// Bonus when the query and destination name contain each other
    pub name_bonus: f64,
    pub noise_min: f64,
    pub noise_max: f64,
    pub score_cap: f64,
}

impl Default for SuitabilityWeights {
    fn default() -> Self {
        Self {
            country_bonus: 0.5,
            country_penalty: 1.0,
            water_bonus: 0.4,
            water_penalty: 0.5,
            hot_bonus: 0.3,
            cold_bonus: 0.4,
            cold_penalty: 0.3,
            budget_bonus: 0.3,
            budget_penalty: 0.2,
            keyword_bonus: 0.15,
            name_bonus: 1.0,
            noise_min: 0.05,
            noise_max: 0.10,
            score_cap: 0.99,
        }
    }
}

fn env_weight(key: &str, default: f64) -> f64 {
    std::env::var(key)
        .ok()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(default)
}

impl SuitabilityWeights {
    /// Create weights from environment variables or use defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            country_bonus: env_weight("SUITABILITY_COUNTRY_BONUS", defaults.country_bonus),
            country_penalty: env_weight("SUITABILITY_COUNTRY_PENALTY", defaults.country_penalty),
            water_bonus: env_weight("SUITABILITY_WATER_BONUS", defaults.water_bonus),
            water_penalty: env_weight("SUITABILITY_WATER_PENALTY", defaults.water_penalty),
            hot_bonus: env_weight("SUITABILITY_HOT_BONUS", defaults.hot_bonus),
            cold_bonus: env_weight("SUITABILITY_COLD_BONUS", defaults.cold_bonus),
            cold_penalty: env_weight("SUITABILITY_COLD_PENALTY", defaults.cold_penalty),
            budget_bonus: env_weight("SUITABILITY_BUDGET_BONUS", defaults.budget_bonus),
            budget_penalty: env_weight("SUITABILITY_BUDGET_PENALTY", defaults.budget_penalty),
            keyword_bonus: env_weight("SUITABILITY_KEYWORD_BONUS", defaults.keyword_bonus),
            name_bonus: env_weight("SUITABILITY_NAME_BONUS", defaults.name_bonus),
            noise_min: env_weight("SUITABILITY_NOISE_MIN", defaults.noise_min),
            noise_max: env_weight("SUITABILITY_NOISE_MAX", defaults.noise_max),
            score_cap: env_weight("SUITABILITY_SCORE_CAP", defaults.score_cap),
        }
    }
}

/// Ranks destinations against a free-text travel query.
///
/// Scoring is a fixed sequence of additive rules (geography, water, climate,
/// budget, keywords, name). The raw score is clamped at zero, zero scores get
/// a little noise when the query named no country, and the result is capped.
#[derive(Debug, Clone, Default)]
pub struct SuitabilityScorer {
    pub weights: SuitabilityWeights,
}

impl SuitabilityScorer {
    pub fn new() -> Self {
        let weights = SuitabilityWeights::from_env();
        log::info!("SuitabilityScorer initialized with weights: {:?}", weights);
        Self { weights }
    }

    pub fn with_weights(weights: SuitabilityWeights) -> Self {
        Self { weights }
    }

    /// Score every destination and return them sorted by score, highest first.
    pub fn score<R: Rng>(
        &self,
        query: &str,
        destinations: &[Destination],
        rng: &mut R,
    ) -> Vec<ScoredDestination> {
        let query = query.to_lowercase();
        let target_country = detect_country(&query);

        let mut scored: Vec<ScoredDestination> = destinations
            .iter()
            .map(|destination| self.score_destination(&query, target_country, destination, rng))
            .collect();

        // Stable, so equal scores keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        debug!(
            "Scored {} destinations for query '{}' (country: {:?})",
            scored.len(),
            query,
            target_country
        );

        scored
    }

    fn score_destination<R: Rng>(
        &self,
        query: &str,
        target_country: Option<&str>,
        destination: &Destination,
        rng: &mut R,
    ) -> ScoredDestination {
        let weights = &self.weights;
        let mut score = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        let name = destination.name.to_lowercase();
        let country = destination.country.to_lowercase();
        let activities = destination.activities.join(" ").to_lowercase();
        let description = destination.description.to_lowercase();
        let full_text = format!("{} {} {} {}", name, country, activities, description);

        if let Some(target) = target_country {
            if country_matches(&country, target) {
                score += weights.country_bonus;
                reasons.push(format!("Located in {}", destination.country));
            } else {
                score -= weights.country_penalty;
            }
        }

        if query.contains("beach") || query.contains("sea") || query.contains("ocean") {
            let has_water = activities.contains("beach")
                || activities.contains("water")
                || description.contains("coastal")
                || description.contains("island");
            if has_water {
                score += weights.water_bonus;
                reasons.push("Has beaches/water".to_string());
            } else {
                score -= weights.water_penalty;
            }
        }

        if query.contains("warm") || query.contains("hot") {
            if destination.climate == Climate::Hot {
                score += weights.hot_bonus;
                push_unique(&mut reasons, "Perfect hot climate");
            }
        } else if query.contains("cold") || query.contains("snow") {
            if destination.climate == Climate::Cold {
                score += weights.cold_bonus;
                reasons.push("Cold climate".to_string());
            } else {
                score -= weights.cold_penalty;
            }
        }

        if query.contains("cheap") || query.contains("budget") {
            match destination.budget_level {
                BudgetLevel::Low => {
                    score += weights.budget_bonus;
                    reasons.push("Budget friendly".to_string());
                }
                BudgetLevel::High => score -= weights.budget_penalty,
                BudgetLevel::Medium => {}
            }
        }

        let hits = query
            .split_whitespace()
            .filter(|word| is_interest_keyword(word))
            .filter(|word| full_text.contains(*word))
            .count();
        if hits > 0 {
            score += weights.keyword_bonus * hits as f64;
            reasons.push("Matches specific interests".to_string());
        }

        if names_overlap(&name, query) {
            score += weights.name_bonus;
            reasons.push("Exact match".to_string());
        }

        if score < 0.0 {
            score = 0.0;
        }
        if score == 0.0 && target_country.is_none() {
            score = self.noise(rng);
        }
        // Final score always lands in [0, cap], whatever the weights
        score = if score.is_finite() {
            score.min(weights.score_cap).max(0.0)
        } else {
            0.0
        };

        ScoredDestination {
            id: destination.id.clone(),
            score: round_to_cents(score),
            match_reason: if reasons.is_empty() {
                DEFAULT_REASON.to_string()
            } else {
                reasons
                    .iter()
                    .take(MAX_REASONS)
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            },
            name: destination.name.clone(),
            city: destination.city.clone(),
            country: destination.country.clone(),
        }
    }

    fn noise<R: Rng>(&self, rng: &mut R) -> f64 {
        let (low, high) = (self.weights.noise_min, self.weights.noise_max);
        if low.is_finite() && high.is_finite() && high > low {
            rng.gen_range(low..=high)
        } else {
            low
        }
    }
}

/// First known country contained in the (lowercased) query.
pub fn detect_country(query: &str) -> Option<&'static str> {
    KNOWN_COUNTRIES
        .iter()
        .copied()
        .find(|country| query.contains(country))
}

fn country_matches(country: &str, target: &str) -> bool {
    country.contains(target)
        || (target == "usa" && country.contains("united states"))
        || (target == "united states" && country.contains("usa"))
}

fn is_interest_keyword(word: &str) -> bool {
    word.chars().count() > 3
        && !KNOWN_COUNTRIES.contains(&word)
        && !CONSUMED_KEYWORDS.contains(&word)
}

// Either string containing the other; an empty side never counts.
fn names_overlap(name: &str, query: &str) -> bool {
    !name.is_empty() && !query.is_empty() && (name.contains(query) || query.contains(name))
}

fn push_unique(reasons: &mut Vec<String>, reason: &str) {
    if !reasons.iter().any(|r| r == reason) {
        reasons.push(reason.to_string());
    }
}

fn round_to_cents(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}
