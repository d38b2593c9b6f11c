pub mod currency;
pub mod destination;
pub mod hotel_search;
pub mod offers;
pub mod saved_trip;
pub mod user;
pub mod weather;
pub mod wikipedia;
