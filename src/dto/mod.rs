pub mod accounts;
pub mod comments;
pub mod favorites;
pub mod locations;
pub mod lookups;
pub mod products;
pub mod reels;
pub mod stores;
pub mod videos;
