//! HTTP-level integration tests for the public catalog, including its
//! cache-or-compute behavior.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::PgPool;

use scherzo_db::models::course::CreateCourse;
use scherzo_db::models::module::CreateModule;
use scherzo_db::models::track::{CreateTrack, Track};
use scherzo_db::repositories::{CourseRepo, ModuleRepo, TrackRepo};

async fn seed_track(pool: &PgPool, title: &str, slug: &str) -> Track {
    TrackRepo::create(
        pool,
        &CreateTrack {
            title: title.to_string(),
            slug: slug.to_string(),
        },
    )
    .await
    .unwrap()
}

async fn seed_course(pool: &PgPool, owner_id: i64, track_id: i64, slug: &str) -> i64 {
    CourseRepo::create(
        pool,
        owner_id,
        &CreateCourse {
            track_id,
            title: format!("Course {slug}"),
            slug: slug.to_string(),
            overview: "An overview.".to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_catalog_lists_nothing(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/courses").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["tracks"].as_array().unwrap().len(), 0);
    assert_eq!(json["courses"].as_array().unwrap().len(), 0);
    assert!(json["track"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn catalog_lists_tracks_with_course_counts(pool: PgPool) {
    let (owner, _) = common::seed_instructor(&pool, "ada").await;
    let beginner = seed_track(&pool, "Beginner", "beginner").await;
    let advanced = seed_track(&pool, "Advanced", "advanced").await;
    seed_course(&pool, owner.id, beginner.id, "scales-1").await;
    seed_course(&pool, owner.id, beginner.id, "chords-1").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tracks = json["tracks"].as_array().unwrap();
    assert_eq!(tracks.len(), 2);
    // Ordered by title: Advanced before Beginner.
    assert_eq!(tracks[0]["slug"], advanced.slug);
    assert_eq!(tracks[0]["course_count"], 0);
    assert_eq!(tracks[1]["slug"], beginner.slug);
    assert_eq!(tracks[1]["course_count"], 2);

    assert_eq!(json["courses"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn track_filter_restricts_the_listing(pool: PgPool) {
    let (owner, _) = common::seed_instructor(&pool, "ada").await;
    let beginner = seed_track(&pool, "Beginner", "beginner").await;
    let advanced = seed_track(&pool, "Advanced", "advanced").await;
    seed_course(&pool, owner.id, beginner.id, "scales-1").await;
    let in_advanced = seed_course(&pool, owner.id, advanced.id, "fugues-1").await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/courses/track/advanced").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["track"]["slug"], "advanced");
    let courses = json["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["id"], in_advanced);
    // The track list itself stays unfiltered.
    assert_eq!(json["tracks"].as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_track_slug_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/courses/track/never-heard-of-it").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_detail_includes_modules_in_order(pool: PgPool) {
    let (owner, _) = common::seed_instructor(&pool, "ada").await;
    let track = seed_track(&pool, "Beginner", "beginner").await;
    let course_id = seed_course(&pool, owner.id, track.id, "scales-1").await;
    for title in ["Warmup", "Main piece"] {
        ModuleRepo::create(
            &pool,
            course_id,
            &CreateModule {
                title: title.to_string(),
                description: String::new(),
                sort_order: None,
            },
        )
        .await
        .unwrap();
    }

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{course_id}/scales-1")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["course"]["slug"], "scales-1");
    let modules = json["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 2);
    assert_eq!(modules[0]["title"], "Warmup");
    assert_eq!(modules[0]["sort_order"], 0);
    assert_eq!(modules[1]["title"], "Main piece");
    assert_eq!(modules[1]["sort_order"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn course_detail_with_wrong_slug_is_404(pool: PgPool) {
    let (owner, _) = common::seed_instructor(&pool, "ada").await;
    let track = seed_track(&pool, "Beginner", "beginner").await;
    let course_id = seed_course(&pool, owner.id, track.id, "scales-1").await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/courses/{course_id}/wrong-slug")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// The listing populates the cache on first read and keeps serving the
/// cached value afterwards: a course written between the two reads does
/// not appear. Staleness here is specified behavior, not a bug.
#[sqlx::test(migrations = "../../db/migrations")]
async fn track_listing_is_cached_and_stale_after_writes(pool: PgPool) {
    let (owner, _) = common::seed_instructor(&pool, "ada").await;
    let track = seed_track(&pool, "Beginner", "beginner").await;
    seed_course(&pool, owner.id, track.id, "scales-1").await;

    // One app instance; clones share the in-process cache.
    let app = common::build_test_app(pool.clone());

    let first = body_json(get(app.clone(), "/api/v1/courses/track/beginner").await).await;
    assert_eq!(first["courses"].as_array().unwrap().len(), 1);

    // Write through the store, bypassing the cache (no write invalidates).
    seed_course(&pool, owner.id, track.id, "chords-1").await;

    let second = body_json(get(app, "/api/v1/courses/track/beginner").await).await;
    assert_eq!(
        second["courses"].as_array().unwrap().len(),
        1,
        "cached listing must not see the new course yet"
    );
}
