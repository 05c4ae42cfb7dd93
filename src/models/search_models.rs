use serde::{Deserialize, Serialize};

use crate::models::artist_models::Artist;
use crate::models::song_models::SongResponse;

pub const SONG_RESULT_LIMIT: i64 = 20;
pub const ARTIST_RESULT_LIMIT: i64 = 10;

#[derive(Deserialize, Debug)]
pub struct SearchQuery {
    pub q: Option<String>,
}

#[derive(Serialize, Debug, Default, PartialEq)]
pub struct SearchResponse {
    pub songs: Vec<SongResponse>,
    pub artists: Vec<Artist>,
}
