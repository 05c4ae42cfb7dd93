//! Fixtures shared by the query and handler tests: the demo catalog and the
//! two demo accounts, loaded into a fresh in-memory database.

use std::time::Duration;

use actix_web::web;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::SqliteConnection;

use crate::config::AppConfig;
use crate::db::{register_functions, run_migrations, ConnectionOptions, DbPool};
use crate::schema::{artists, songs, users};
use crate::utils::auth_utils::hash_password;

pub const DEMO_ARTISTS: &[(i32, &str)] = &[
    (1, "Ava Lumen"),
    (2, "Violet Drive"),
    (3, "Kairo"),
    (4, "Sky Lanterns"),
    (5, "North & Pine"),
    (6, "Quiet Harbor"),
];

/// Artist with no songs.
pub const SILENT_ARTIST_ID: i32 = 6;

pub const DEMO_SONGS: &[(i32, &str, i32, &str)] = &[
    (1, "Neon Nights", 1, "3:21"),
    (2, "Midnight Engine", 2, "4:08"),
    (3, "Glass River", 3, "2:59"),
    (4, "Orbiting", 4, "3:42"),
    (5, "Paper Kites", 5, "3:10"),
];

pub const DEMO_USER_ID: i32 = 1;
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password123";
pub const TEST_EMAIL: &str = "test@example.com";

pub fn seed_fixtures(conn: &mut SqliteConnection) {
    for &(id, name) in DEMO_ARTISTS {
        diesel::insert_into(artists::table)
            .values((artists::id.eq(id), artists::name.eq(name), artists::bio.eq(format!("{name} bio"))))
            .execute(conn)
            .expect("seed artist");
    }
    for &(id, title, artist_id, duration) in DEMO_SONGS {
        diesel::insert_into(songs::table)
            .values((
                songs::id.eq(id),
                songs::title.eq(title),
                songs::artist_id.eq(artist_id),
                songs::duration.eq(duration),
                songs::genre.eq("Indie"),
                songs::release_year.eq(2023),
            ))
            .execute(conn)
            .expect("seed song");
    }
    for (id, email, username, password) in [
        (DEMO_USER_ID, DEMO_EMAIL, "demouser", DEMO_PASSWORD),
        (2, TEST_EMAIL, "testuser", "hunter22"),
    ] {
        diesel::insert_into(users::table)
            .values((
                users::id.eq(id),
                users::email.eq(email),
                users::username.eq(username),
                users::password_hash.eq(hash_password(password).expect("hash")),
            ))
            .execute(conn)
            .expect("seed user");
    }
}

/// Add an artist and `count` songs whose titles share `prefix`.
pub fn seed_bulk_songs(conn: &mut SqliteConnection, artist_name: &str, prefix: &str, count: usize) -> i32 {
    let artist_id = diesel::insert_into(artists::table)
        .values(artists::name.eq(artist_name))
        .returning(artists::id)
        .get_result::<i32>(conn)
        .expect("seed bulk artist");
    for n in 0..count {
        diesel::insert_into(songs::table)
            .values((
                songs::title.eq(format!("{prefix} {n:02}")),
                songs::artist_id.eq(artist_id),
                songs::duration.eq("3:00"),
            ))
            .execute(conn)
            .expect("seed bulk song");
    }
    artist_id
}

pub fn seeded_conn() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    conn.batch_execute("PRAGMA foreign_keys = ON;").expect("pragma");
    register_functions(&mut conn).expect("sql functions");
    run_migrations(&mut conn).expect("migrations");
    seed_fixtures(&mut conn);
    conn
}

/// Single-connection pool over an in-memory database. One connection means
/// every checkout sees the same data.
pub fn test_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new(":memory:");
    let pool = r2d2::Pool::builder()
        .max_size(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)
        .expect("test pool");
    {
        let mut conn = pool.get().expect("test connection");
        run_migrations(&mut conn).expect("migrations");
        seed_fixtures(&mut conn);
    }
    pool
}

/// Pool whose database can never be opened.
pub fn unreachable_pool() -> DbPool {
    let manager = ConnectionManager::<SqliteConnection>::new("/nonexistent-music-dir/never/music.db");
    r2d2::Pool::builder()
        .max_size(1)
        .connection_timeout(Duration::from_millis(250))
        .build_unchecked(manager)
}

pub fn test_config(legacy_login: bool) -> web::Data<AppConfig> {
    web::Data::new(AppConfig { legacy_login, ..AppConfig::default() })
}

/// Service with the full route table over `$pool`.
macro_rules! test_app {
    ($pool:expr) => {
        test_app!($pool, false)
    };
    ($pool:expr, $legacy_login:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($pool))
                .app_data($crate::test_utils::test_config($legacy_login))
                .configure($crate::routes::configure),
        )
        .await
    };
}

pub(crate) use test_app;
