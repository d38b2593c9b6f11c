use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::destination::{BudgetLevel, Climate};

pub const DEFAULT_TRIP_DURATION_DAYS: u32 = 7;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItineraryDay {
    pub day: u32,
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SavedTrip {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub destination_id: String,
    pub title: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: BudgetLevel,
    pub duration: u32,
    pub climate: Climate,
    pub activities: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST /api/saved-trips`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSavedTrip {
    pub destination_id: String,
    pub title: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub budget: BudgetLevel,
    pub duration: Option<u32>,
    pub climate: Climate,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
    pub notes: Option<String>,
}

impl NewSavedTrip {
    pub fn into_saved_trip(self, user_id: String, now: DateTime<Utc>) -> SavedTrip {
        SavedTrip {
            id: None,
            user_id,
            destination_id: self.destination_id,
            title: self.title.trim().to_string(),
            start_date: self.start_date,
            end_date: self.end_date,
            budget: self.budget,
            duration: self
                .duration
                .filter(|days| *days > 0)
                .unwrap_or(DEFAULT_TRIP_DURATION_DAYS),
            climate: self.climate,
            activities: self.activities,
            itinerary: self.itinerary,
            notes: self.notes.map(|notes| notes.trim().to_string()),
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}

/// Saved trip as returned to the client.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedTripView {
    pub id: String,
    pub destination_id: String,
    pub title: String,
    pub budget: BudgetLevel,
    pub duration: String,
    pub climate: Climate,
    pub activities: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
}

impl From<SavedTrip> for SavedTripView {
    fn from(trip: SavedTrip) -> Self {
        Self {
            id: trip.id.map(|id| id.to_hex()).unwrap_or_default(),
            destination_id: trip.destination_id,
            title: trip.title,
            budget: trip.budget,
            duration: trip.duration.to_string(),
            climate: trip.climate,
            activities: trip.activities,
            itinerary: trip.itinerary,
            notes: trip.notes,
            created_at: trip.created_at.map(|at| at.to_rfc3339()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_trip(duration: Option<u32>) -> NewSavedTrip {
        NewSavedTrip {
            destination_id: "kyoto".to_string(),
            title: "  Autumn in Kyoto ".to_string(),
            start_date: None,
            end_date: None,
            budget: BudgetLevel::Medium,
            duration,
            climate: Climate::Moderate,
            activities: vec!["Temples".to_string()],
            itinerary: Vec::new(),
            notes: None,
        }
    }

    #[test]
    fn test_missing_duration_defaults_to_a_week() {
        let trip = new_trip(None).into_saved_trip("user-1".to_string(), Utc::now());
        assert_eq!(trip.duration, DEFAULT_TRIP_DURATION_DAYS);
        assert_eq!(trip.title, "Autumn in Kyoto");
        assert!(trip.created_at.is_some());
    }

    #[test]
    fn test_explicit_duration_is_kept() {
        let trip = new_trip(Some(3)).into_saved_trip("user-1".to_string(), Utc::now());
        assert_eq!(trip.duration, 3);
    }

    #[test]
    fn test_view_stringifies_duration() {
        let mut trip = new_trip(Some(10)).into_saved_trip("user-1".to_string(), Utc::now());
        trip.id = Some(ObjectId::new());
        let view = SavedTripView::from(trip);
        assert_eq!(view.duration, "10");
        assert_eq!(view.id.len(), 24);
    }

    #[test]
    fn test_new_trip_accepts_camel_case_body() {
        let body = serde_json::json!({
            "destinationId": "bali",
            "title": "Beach week",
            "budget": "low",
            "climate": "hot",
            "itinerary": [{ "day": 1, "activities": ["Surfing"] }]
        });
        let trip: NewSavedTrip = serde_json::from_value(body).unwrap();
        assert_eq!(trip.destination_id, "bali");
        assert!(trip.activities.is_empty());
        assert_eq!(trip.itinerary[0].day, 1);
    }
}
