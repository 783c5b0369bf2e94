//! Repository-level tests for scoped auto-ordering and the polymorphic
//! content reference.

use sqlx::PgPool;

use scherzo_core::content::ContentKind;
use scherzo_core::types::DbId;
use scherzo_db::models::content::CreateContent;
use scherzo_db::models::course::CreateCourse;
use scherzo_db::models::item::{ItemBody, NewItem};
use scherzo_db::models::module::CreateModule;
use scherzo_db::models::track::CreateTrack;
use scherzo_db::models::user::CreateUser;
use scherzo_db::repositories::{
    ContentRepo, CourseRepo, ItemRepo, ModuleRepo, RoleRepo, TrackRepo, UserRepo,
};

async fn seed_instructor(pool: &PgPool, username: &str) -> DbId {
    let role = RoleRepo::find_by_name(pool, "instructor")
        .await
        .unwrap()
        .expect("instructor role is seeded");
    let user = UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "irrelevant".to_string(),
            role_id: role.id,
        },
    )
    .await
    .unwrap();
    user.id
}

async fn seed_course(pool: &PgPool, owner_id: DbId, slug: &str) -> DbId {
    let track = TrackRepo::create(
        pool,
        &CreateTrack {
            title: format!("Track for {slug}"),
            slug: format!("track-{slug}"),
        },
    )
    .await
    .unwrap();
    let course = CourseRepo::create(
        pool,
        owner_id,
        &CreateCourse {
            track_id: track.id,
            title: format!("Course {slug}"),
            slug: slug.to_string(),
            overview: "An overview.".to_string(),
        },
    )
    .await
    .unwrap();
    course.id
}

fn unordered_module(title: &str) -> CreateModule {
    CreateModule {
        title: title.to_string(),
        description: String::new(),
        sort_order: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn first_module_in_empty_course_gets_zero(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;
    let course = seed_course(&pool, owner, "scales-1").await;

    let a = ModuleRepo::create(&pool, course, &unordered_module("Warmup"))
        .await
        .unwrap();
    assert_eq!(a.sort_order, 0);

    let b = ModuleRepo::create(&pool, course, &unordered_module("Main piece"))
        .await
        .unwrap();
    assert_eq!(b.sort_order, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn explicit_position_passes_through(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;
    let course = seed_course(&pool, owner, "scales-1").await;

    let pinned = ModuleRepo::create(
        &pool,
        course,
        &CreateModule {
            title: "Pinned".to_string(),
            description: String::new(),
            sort_order: Some(5),
        },
    )
    .await
    .unwrap();
    assert_eq!(pinned.sort_order, 5);

    // The next unordered insert continues from the explicit maximum.
    let next = ModuleRepo::create(&pool, course, &unordered_module("After"))
        .await
        .unwrap();
    assert_eq!(next.sort_order, 6);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn module_positions_are_scoped_per_course(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;
    let first = seed_course(&pool, owner, "scales-1").await;
    let second = seed_course(&pool, owner, "chords-1").await;

    let a = ModuleRepo::create(&pool, first, &unordered_module("A"))
        .await
        .unwrap();
    let b = ModuleRepo::create(&pool, first, &unordered_module("B"))
        .await
        .unwrap();
    // A fresh scope starts over at zero.
    let c = ModuleRepo::create(&pool, second, &unordered_module("C"))
        .await
        .unwrap();

    assert_eq!((a.sort_order, b.sort_order, c.sort_order), (0, 1, 0));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn content_positions_are_scoped_per_module(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;
    let course = seed_course(&pool, owner, "scales-1").await;
    let module = ModuleRepo::create(&pool, course, &unordered_module("M"))
        .await
        .unwrap();
    let other = ModuleRepo::create(&pool, course, &unordered_module("N"))
        .await
        .unwrap();

    for expected in 0..2 {
        let item = ItemRepo::create(
            &pool,
            owner,
            &NewItem {
                title: format!("Notes {expected}"),
                body: ItemBody::Text {
                    content: "C D E F G".to_string(),
                },
            },
        )
        .await
        .unwrap();
        let content = ContentRepo::create(
            &pool,
            &CreateContent {
                module_id: module.id,
                item_kind: item.kind(),
                item_id: item.id(),
                sort_order: None,
            },
        )
        .await
        .unwrap();
        assert_eq!(content.sort_order, expected);
    }

    let item = ItemRepo::create(
        &pool,
        owner,
        &NewItem {
            title: "Video".to_string(),
            body: ItemBody::Video {
                url: "https://example.com/lesson.mp4".to_string(),
            },
        },
    )
    .await
    .unwrap();
    let in_other = ContentRepo::create(
        &pool,
        &CreateContent {
            module_id: other.id,
            item_kind: item.kind(),
            item_id: item.id(),
            sort_order: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(in_other.sort_order, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn reference_resolves_to_the_right_table(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;

    let text = ItemRepo::create(
        &pool,
        owner,
        &NewItem {
            title: "Reading".to_string(),
            body: ItemBody::Text {
                content: "Largo means slow.".to_string(),
            },
        },
    )
    .await
    .unwrap();

    // The id only resolves under its own kind.
    let found = ItemRepo::find(&pool, ContentKind::Text, text.id())
        .await
        .unwrap();
    assert!(found.is_some());
    assert_eq!(found.unwrap().kind(), ContentKind::Text);

    let wrong_kind = ItemRepo::find(&pool, ContentKind::Video, text.id())
        .await
        .unwrap();
    assert!(wrong_kind.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_wrapper_keeps_the_item(pool: PgPool) {
    let owner = seed_instructor(&pool, "ada").await;
    let course = seed_course(&pool, owner, "scales-1").await;
    let module = ModuleRepo::create(&pool, course, &unordered_module("M"))
        .await
        .unwrap();

    let item = ItemRepo::create(
        &pool,
        owner,
        &NewItem {
            title: "Keep me".to_string(),
            body: ItemBody::File {
                file_path: "files/fingering-chart.pdf".to_string(),
            },
        },
    )
    .await
    .unwrap();
    let content = ContentRepo::create(
        &pool,
        &CreateContent {
            module_id: module.id,
            item_kind: item.kind(),
            item_id: item.id(),
            sort_order: None,
        },
    )
    .await
    .unwrap();

    assert!(ContentRepo::delete(&pool, content.id).await.unwrap());
    let still_there = ItemRepo::find(&pool, ContentKind::File, item.id())
        .await
        .unwrap();
    assert!(still_there.is_some());
}
