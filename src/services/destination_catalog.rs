use std::{fs, path::Path};

use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use rand::Rng;

use crate::error::ApiError;
use crate::models::destination::{Destination, PreferenceFilter, ScoredDestination};
use crate::services::suitability::SuitabilityScorer;

pub const DESTINATIONS_COLLECTION: &str = "Destinations";
pub const BROWSE_LIMIT: usize = 12;
pub const FILTER_LIMIT: usize = 6;

/// Read-only list of destinations shared by the handlers.
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    destinations: Vec<Destination>,
}

impl DestinationCatalog {
    pub fn from_destinations(destinations: Vec<Destination>) -> Self {
        Self { destinations }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ApiError> {
        let destinations: Vec<Destination> = serde_json::from_str(json)?;
        Ok(Self::from_destinations(destinations))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ApiError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| {
            ApiError::Catalog(format!("Failed to read {}: {}", path.display(), err))
        })?;
        let catalog = Self::from_json_str(&contents)?;
        log::info!(
            "Loaded {} destinations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub async fn from_mongo(client: &Client, database: &str) -> Result<Self, ApiError> {
        let collection: mongodb::Collection<Destination> =
            client.database(database).collection(DESTINATIONS_COLLECTION);
        let cursor = collection.find(doc! {}).await?;
        let destinations: Vec<Destination> = cursor.try_collect().await?;
        log::info!("Loaded {} destinations from MongoDB", destinations.len());
        Ok(Self::from_destinations(destinations))
    }

    /// Use the seeded collection when it has data, the JSON file otherwise.
    pub async fn load(client: &Client, database: &str, json_path: &str) -> Result<Self, ApiError> {
        match Self::from_mongo(client, database).await {
            Ok(catalog) if !catalog.is_empty() => Ok(catalog),
            Ok(_) => {
                log::info!("Destinations collection is empty, using {}", json_path);
                Self::from_json_file(json_path)
            }
            Err(err) => {
                log::warn!("Failed to read destinations from MongoDB: {}", err);
                Self::from_json_file(json_path)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn all(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn browse(&self, limit: usize) -> Vec<Destination> {
        self.destinations.iter().take(limit).cloned().collect()
    }

    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Exact budget/climate filter plus any-of activities, ranked by how many
    /// requested activities each destination offers.
    pub fn filter(&self, preferences: &PreferenceFilter) -> Vec<Destination> {
        let requested = preferences
            .activities
            .as_deref()
            .filter(|activities| !activities.is_empty());

        let mut matches: Vec<(usize, &Destination)> = self
            .destinations
            .iter()
            .filter(|d| preferences.budget.map_or(true, |budget| d.budget_level == budget))
            .filter(|d| preferences.climate.map_or(true, |climate| d.climate == climate))
            .map(|d| (requested.map_or(0, |wanted| matching_activities(d, wanted)), d))
            .filter(|(count, _)| requested.is_none() || *count > 0)
            .collect();

        matches.sort_by(|a, b| b.0.cmp(&a.0));

        matches
            .into_iter()
            .take(FILTER_LIMIT)
            .map(|(_, d)| d.clone())
            .collect()
    }

    pub fn score<R: Rng>(
        &self,
        query: &str,
        scorer: &SuitabilityScorer,
        rng: &mut R,
    ) -> Vec<ScoredDestination> {
        scorer.score(query, &self.destinations, rng)
    }
}

fn matching_activities(destination: &Destination, wanted: &[String]) -> usize {
    wanted
        .iter()
        .filter(|activity| destination.activities.contains(activity))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::destination::{BudgetLevel, Climate};
    use rand::{rngs::StdRng, SeedableRng};

    const CATALOG_JSON: &str = r#"[
        {
            "id": "bali",
            "name": "Bali",
            "country": "Indonesia",
            "city": "Denpasar",
            "description": "Tropical island with temples and rice terraces.",
            "climate": "hot",
            "activities": ["Beach", "Surfing", "Culture"],
            "budgetLevel": "low"
        },
        {
            "id": "swiss-alps",
            "name": "Swiss Alps",
            "country": "Switzerland",
            "climate": "cold",
            "activities": ["Skiing", "Hiking"],
            "budgetLevel": "high"
        },
        {
            "id": "lisbon",
            "name": "Lisbon",
            "country": "Portugal",
            "climate": "moderate",
            "activities": ["Culture", "Food"],
            "budgetLevel": "medium"
        },
        {
            "id": "phuket",
            "name": "Phuket",
            "country": "Thailand",
            "climate": "hot",
            "activities": ["Beach", "Diving", "Nightlife", "Culture"],
            "budgetLevel": "low"
        }
    ]"#;

    fn catalog() -> DestinationCatalog {
        DestinationCatalog::from_json_str(CATALOG_JSON).unwrap()
    }

    fn ids(destinations: &[Destination]) -> Vec<&str> {
        destinations.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_parses_catalog() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.find("lisbon").unwrap().climate, Climate::Moderate);
        assert!(catalog.find("atlantis").is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = DestinationCatalog::from_json_str("{ not json");
        assert!(matches!(result, Err(ApiError::Json(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let result = DestinationCatalog::from_json_file("does/not/exist.json");
        assert!(matches!(result, Err(ApiError::Catalog(_))));
    }

    #[test]
    fn test_browse_limits_results() {
        assert_eq!(ids(&catalog().browse(2)), vec!["bali", "swiss-alps"]);
        assert_eq!(catalog().browse(BROWSE_LIMIT).len(), 4);
    }

    #[test]
    fn test_empty_filter_returns_catalog_order() {
        let results = catalog().filter(&PreferenceFilter::default());
        assert_eq!(ids(&results), vec!["bali", "swiss-alps", "lisbon", "phuket"]);
    }

    #[test]
    fn test_filter_by_budget_and_climate() {
        let filter = PreferenceFilter {
            budget: Some(BudgetLevel::Low),
            climate: Some(Climate::Hot),
            activities: None,
        };
        assert_eq!(ids(&catalog().filter(&filter)), vec!["bali", "phuket"]);
    }

    #[test]
    fn test_filter_ranks_by_activity_overlap() {
        let filter = PreferenceFilter {
            budget: None,
            climate: None,
            activities: Some(vec![
                "Culture".to_string(),
                "Diving".to_string(),
                "Nightlife".to_string(),
            ]),
        };
        assert_eq!(ids(&catalog().filter(&filter)), vec!["phuket", "bali", "lisbon"]);
    }

    #[test]
    fn test_filter_activity_match_is_exact() {
        let filter = PreferenceFilter {
            activities: Some(vec!["culture".to_string()]),
            ..PreferenceFilter::default()
        };
        assert!(catalog().filter(&filter).is_empty());
    }

    #[test]
    fn test_filter_caps_results() {
        let destinations: Vec<Destination> = (0..10)
            .map(|i| {
                let mut d = catalog().all()[0].clone();
                d.id = format!("bali-{i}");
                d
            })
            .collect();
        let catalog = DestinationCatalog::from_destinations(destinations);
        assert_eq!(catalog.filter(&PreferenceFilter::default()).len(), FILTER_LIMIT);
    }

    #[test]
    fn test_score_delegates_to_scorer() {
        let mut rng = StdRng::seed_from_u64(42);
        let results = catalog().score("phuket", &SuitabilityScorer::default(), &mut rng);
        assert_eq!(results[0].id, "phuket");
        assert_eq!(results[0].score, 0.99);
    }
}
