pub mod catalog_queries;
pub mod playlist_queries;
pub mod user_queries;
