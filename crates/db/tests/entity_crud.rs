//! Repository CRUD against a real database: create, full and partial
//! update, delete, and the constraints behind them.

use assert_matches::assert_matches;
use sqlx::PgPool;

use campus_db::models::event::EventInput;
use campus_db::models::friend::FriendInput;
use campus_db::models::friend_status::FriendStatusInput;
use campus_db::models::global_chat::GlobalChatInput;
use campus_db::models::school::SchoolInput;
use campus_db::models::user::CreateUser;
use campus_db::models::user_config::UserConfigInput;
use campus_db::models::user_school::UserSchoolInput;
use campus_db::repositories::{
    EventRepo, FriendRepo, FriendStatusRepo, GlobalChatRepo, SchoolRepo, UserConfigRepo,
    UserRepo, UserSchoolRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_user(login: &str) -> CreateUser {
    CreateUser {
        id: None,
        login: login.to_string(),
        email: None,
        first_name: None,
        last_name: None,
        activated: None,
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

fn is_fk_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23503"))
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_create_defaults_to_activated(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("alice")).await.unwrap();
    assert!(user.activated);
    assert_eq!(user.login, "alice");

    let found = UserRepo::find_by_id(&pool, user.id).await.unwrap().unwrap();
    assert_eq!(found.login, "alice");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn user_duplicate_login_is_rejected(pool: PgPool) {
    UserRepo::create(&pool, &new_user("bob")).await.unwrap();
    let err = UserRepo::create(&pool, &new_user("bob")).await.unwrap_err();
    assert!(is_unique_violation(&err), "expected 23505, got {err:?}");
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_full_update_clears_absent_fields(pool: PgPool) {
    let created = EventRepo::create(
        &pool,
        &EventInput {
            header: Some("Party".into()),
            description: Some("Rooftop".into()),
            latitude: Some(46.52),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let updated = EventRepo::update(
        &pool,
        created.id,
        &EventInput {
            id: Some(created.id),
            header: Some("Picnic".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.header.as_deref(), Some("Picnic"));
    assert_eq!(updated.description, None);
    assert_eq!(updated.latitude, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_partial_update_keeps_absent_fields(pool: PgPool) {
    let created = EventRepo::create(
        &pool,
        &EventInput {
            header: Some("Party".into()),
            description: Some("Rooftop".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let patched = EventRepo::partial_update(
        &pool,
        created.id,
        EventInput {
            id: Some(created.id),
            description: Some("Basement".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(patched.header.as_deref(), Some("Party"));
    assert_eq!(patched.description.as_deref(), Some("Basement"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn update_of_missing_row_returns_none(pool: PgPool) {
    let input = EventInput {
        id: Some(999),
        ..Default::default()
    };
    assert!(EventRepo::update(&pool, 999, &input).await.unwrap().is_none());
    assert!(EventRepo::partial_update(&pool, 999, input)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn event_header_length_is_checked_by_database(pool: PgPool) {
    let err = EventRepo::create(
        &pool,
        &EventInput {
            header: Some("x".repeat(51)),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert_matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23514"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let created = EventRepo::create(&pool, &EventInput::default()).await.unwrap();
    assert!(EventRepo::exists(&pool, created.id).await.unwrap());

    assert!(EventRepo::delete(&pool, created.id).await.unwrap());
    assert!(!EventRepo::delete(&pool, created.id).await.unwrap());
    assert!(!EventRepo::exists(&pool, created.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_creator_nulls_event_reference(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("carol")).await.unwrap();
    let event = EventRepo::create(
        &pool,
        &EventInput {
            created_by_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    UserRepo::delete(&pool, user.id).await.unwrap();

    let event = EventRepo::find_by_id(&pool, event.id).await.unwrap().unwrap();
    assert_eq!(event.created_by_id, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_is_ordered_by_id(pool: PgPool) {
    for header in ["c", "a", "b"] {
        EventRepo::create(
            &pool,
            &EventInput {
                header: Some(header.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }

    let events = EventRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(events.len(), 3);
}

// ---------------------------------------------------------------------------
// Friendships
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn friend_status_is_owned_by_one_friendship(pool: PgPool) {
    let status = FriendStatusRepo::create(
        &pool,
        &FriendStatusInput {
            status: Some("PENDING".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let input = FriendInput {
        status_id: Some(status.id),
        ..Default::default()
    };
    FriendRepo::create(&pool, &input).await.unwrap();
    let err = FriendRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_unique_violation(&err), "expected 23505, got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn friend_with_unknown_user_is_rejected(pool: PgPool) {
    let err = FriendRepo::create(
        &pool,
        &FriendInput {
            user1_id: Some(424242),
            ..Default::default()
        },
    )
    .await
    .unwrap_err();
    assert!(is_fk_violation(&err), "expected 23503, got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn friend_status_partial_update_changes_status(pool: PgPool) {
    let status = FriendStatusRepo::create(
        &pool,
        &FriendStatusInput {
            status: Some("PENDING".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let patched = FriendStatusRepo::partial_update(
        &pool,
        status.id,
        FriendStatusInput {
            status: Some("ACTIVE".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(patched.status.as_deref(), Some("ACTIVE"));
}

// ---------------------------------------------------------------------------
// Chat, schools and settings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn global_chat_round_trip(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("dave")).await.unwrap();
    let chat = GlobalChatRepo::create(
        &pool,
        &GlobalChatInput {
            message: Some("hello".into()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let all = GlobalChatRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, chat.id);
    assert_eq!(all[0].user_id, Some(user.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_school_keeps_membership(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("erin")).await.unwrap();
    let school = SchoolRepo::create(
        &pool,
        &SchoolInput {
            name: Some("EPFL".into()),
            email_domain: Some("epfl.ch".into()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let membership = UserSchoolRepo::create(
        &pool,
        &UserSchoolInput {
            status: Some("ACTIVE".into()),
            user_id: Some(user.id),
            school_id: Some(school.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(SchoolRepo::delete(&pool, school.id).await.unwrap());

    let membership = UserSchoolRepo::find_by_id(&pool, membership.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(membership.school_id, None);
    assert_eq!(membership.user_id, Some(user.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn one_config_per_user(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("frank")).await.unwrap();
    let input = UserConfigInput {
        share_location: Some(true),
        language: Some("FRENCH".into()),
        user_id: Some(user.id),
        ..Default::default()
    };

    UserConfigRepo::create(&pool, &input).await.unwrap();
    let err = UserConfigRepo::create(&pool, &input).await.unwrap_err();
    assert!(is_unique_violation(&err), "expected 23505, got {err:?}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_user_keeps_config_and_membership(pool: PgPool) {
    let user = UserRepo::create(&pool, &new_user("grace")).await.unwrap();
    let config = UserConfigRepo::create(
        &pool,
        &UserConfigInput {
            language: Some("ENGLISH".into()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let membership = UserSchoolRepo::create(
        &pool,
        &UserSchoolInput {
            status: Some("ACTIVE".into()),
            user_id: Some(user.id),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(UserRepo::delete(&pool, user.id).await.unwrap());

    let config = UserConfigRepo::find_by_id(&pool, config.id)
        .await
        .unwrap()
        .expect("config survives its user");
    assert_eq!(config.user_id, None);
    assert_eq!(config.language.as_deref(), Some("ENGLISH"));

    let membership = UserSchoolRepo::find_by_id(&pool, membership.id)
        .await
        .unwrap()
        .expect("membership survives its user");
    assert_eq!(membership.user_id, None);
    assert_eq!(membership.status.as_deref(), Some("ACTIVE"));
}
