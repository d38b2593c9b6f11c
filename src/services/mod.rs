pub mod currency_service;
pub mod destination_catalog;
pub mod hotel_search_service;
pub mod offer_service;
pub mod suitability;
pub mod weather_service;
pub mod wikipedia_service;
