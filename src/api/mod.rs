//! API Module
//!
//! Remote fetcher for the PokeAPI REST endpoints.
//!
//! # Endpoints
//! - `GET location-area/` - Paginated location area listing
//! - `GET location-area/{name}` - One location area with its encounters
//! - `GET pokemon/{name}` - One creature

pub mod client;

pub use client::PokeApiClient;
