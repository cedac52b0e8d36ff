pub mod cache;
pub mod fetcher;
pub mod sold_search;
