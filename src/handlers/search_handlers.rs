use actix_web::{web, HttpResponse, Responder};

use crate::db::{self, DbPool};
use crate::models::search_models::{SearchQuery, SearchResponse};
use crate::queries::catalog_queries;

pub async fn search(pool: web::Data<DbPool>, query: web::Query<SearchQuery>) -> impl Responder {
    let term = query.into_inner().q.unwrap_or_default();

    // Blank searches never reach the database.
    if catalog_queries::is_blank_term(&term) {
        return HttpResponse::Ok().json(SearchResponse::default());
    }

    match db::run(&pool, move |conn| catalog_queries::search(conn, &term)).await {
        Ok(result) => HttpResponse::Ok().json(result),
        Err(e) => e.respond("Search failed"),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::{json, Value};

    use crate::test_utils::{seed_bulk_songs, test_app, test_pool, unreachable_pool};

    #[actix_web::test]
    async fn neon_scenario() {
        let app = test_app!(test_pool());
        let req = test::TestRequest::get().uri("/api/search?q=neon").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["songs"][0]["title"], "Neon Nights");
        assert_eq!(body["songs"].as_array().unwrap().len(), 1);
        assert_eq!(body["artists"], json!([]));
    }

    // The pool cannot connect, so any store access would fail the request.
    #[actix_web::test]
    async fn blank_query_skips_the_store() {
        let app = test_app!(unreachable_pool());
        for uri in ["/api/search", "/api/search?q=", "/api/search?q=%20%20%20"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);
            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body, json!({ "songs": [], "artists": [] }));
        }
    }

    #[actix_web::test]
    async fn accented_term_matches_any_case() {
        let pool = test_pool();
        {
            let mut conn = pool.get().unwrap();
            seed_bulk_songs(&mut conn, "Émilie Simon", "Ça Ira", 1);
        }
        let app = test_app!(pool);
        // "émilie", percent-encoded.
        let req = test::TestRequest::get().uri("/api/search?q=%C3%A9milie").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["artists"][0]["name"], "Émilie Simon");
        assert_eq!(body["songs"][0]["title"], "Ça Ira 00");
    }

    #[actix_web::test]
    async fn artist_hit() {
        let app = test_app!(test_pool());
        let req = test::TestRequest::get().uri("/api/search?q=Lantern").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["artists"][0]["name"], "Sky Lanterns");
        assert_eq!(body["songs"][0]["title"], "Orbiting");
    }
}
