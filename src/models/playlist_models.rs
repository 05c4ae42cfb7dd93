use chrono::NaiveDateTime;
use diesel::prelude::{Insertable, QueryableByName};
use diesel::sql_types::{BigInt, Integer, Nullable, Text, Timestamp};
use serde::{Deserialize, Serialize};

/// Accent used for playlists created without an explicit color.
pub const DEFAULT_COLOR_HEX: &str = "#a855f7";

/// Position given to songs added without an explicit `track_order`, so they
/// land after anything ordered by hand.
pub const DEFAULT_TRACK_ORDER: i32 = 999;

// --------------------- Playlist Models ---------------------
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct PlaylistResponse {
    #[diesel(sql_type = Integer)]
    pub id: i32,
    #[diesel(sql_type = Integer)]
    pub user_id: i32,
    #[diesel(sql_type = Text)]
    pub name: String,
    #[diesel(sql_type = Text)]
    pub description: String,
    #[diesel(sql_type = Text)]
    pub color_hex: String,
    #[diesel(sql_type = BigInt)]
    pub count: i64,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::playlists)]
pub struct NewPlaylist {
    pub user_id: i32,
    pub name: String,
    pub description: String,
    pub color_hex: String,
}

#[derive(Deserialize, Debug)]
pub struct CreatePlaylistRequest {
    pub user_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub color_hex: Option<String>,
}

impl CreatePlaylistRequest {
    /// Check required fields and fill in the defaults.
    pub fn into_new_playlist(self) -> Option<NewPlaylist> {
        let user_id = self.user_id?;
        let name = self.name.filter(|n| !n.trim().is_empty())?;
        Some(NewPlaylist {
            user_id,
            name,
            description: self.description.unwrap_or_default(),
            color_hex: self
                .color_hex
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_COLOR_HEX.to_string()),
        })
    }
}

// --------------------- Playlist Songs Models ---------------------
#[derive(QueryableByName, Serialize, Debug, Clone, PartialEq)]
pub struct PlaylistSongResponse {
    #[diesel(sql_type = Integer)]
    pub playlist_song_id: i32,
    #[diesel(sql_type = Integer)]
    pub song_id: i32,
    #[diesel(sql_type = Text)]
    pub title: String,
    #[diesel(sql_type = Integer)]
    pub artist_id: i32,
    #[diesel(sql_type = Text)]
    pub artist: String,
    #[diesel(sql_type = Text)]
    pub duration: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub genre: Option<String>,
    #[diesel(sql_type = Integer)]
    pub track_order: i32,
    #[diesel(sql_type = Nullable<Timestamp>)]
    pub added_at: Option<NaiveDateTime>,
}

#[derive(Deserialize, Debug)]
pub struct AddSongRequest {
    pub song_id: Option<i32>,
    pub track_order: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::playlist_songs)]
pub struct NewPlaylistSong {
    pub playlist_id: i32,
    pub song_id: i32,
    pub track_order: i32,
}
