pub mod artist_models;
pub mod playlist_models;
pub mod search_models;
pub mod song_models;
pub mod user_models;
