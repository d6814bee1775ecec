//! Eager loading of the event attendance users association against a real
//! database.

use campus_core::eager::{self, EagerLoadError, Identified};
use campus_core::pagination::PageRequest;
use campus_core::types::DbId;
use sqlx::PgPool;

use campus_db::models::event::EventInput;
use campus_db::models::event_user::{EventUser, EventUserInput};
use campus_db::models::user::CreateUser;
use campus_db::repositories::{EventRepo, EventUserRepo, EventUserUsersLoader, UserRepo};

async fn user(pool: &PgPool, login: &str) -> DbId {
    let input = CreateUser {
        id: None,
        login: login.to_string(),
        email: None,
        first_name: None,
        last_name: None,
        activated: None,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

async fn event_user(pool: &PgPool, user_ids: Vec<DbId>) -> DbId {
    let input = EventUserInput {
        user_ids: Some(user_ids),
        ..Default::default()
    };
    EventUserRepo::create(pool, &input).await.unwrap().event_user.id
}

fn user_ids(row: &campus_db::models::event_user::EventUserWithUsers) -> Vec<DbId> {
    row.users.iter().map(|u| u.id).collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_users_sorted_by_id(pool: PgPool) {
    let a = user(&pool, "a").await;
    let b = user(&pool, "b").await;
    let event = EventRepo::create(&pool, &EventInput::default()).await.unwrap();

    let created = EventUserRepo::create(
        &pool,
        &EventUserInput {
            event_id: Some(event.id),
            user_ids: Some(vec![b, a, b]),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(created.event_user.event_id, Some(event.id));
    assert_eq!(user_ids(&created), vec![a, b]);
    assert_eq!(
        EventUserRepo::user_ids_for(&pool, created.id()).await.unwrap(),
        vec![a, b]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_many_preserves_caller_order(pool: PgPool) {
    let u1 = user(&pool, "u1").await;
    let u2 = user(&pool, "u2").await;
    let first = event_user(&pool, vec![u1]).await;
    let second = event_user(&pool, vec![]).await;
    let third = event_user(&pool, vec![u1, u2]).await;

    // Caller-chosen order, unrelated to id order.
    let mut primary = Vec::new();
    for id in [second, third, first] {
        primary.push(EventUserRepo::find_by_id(&pool, id).await.unwrap().unwrap());
    }

    let loader = EventUserUsersLoader::new(&pool);
    let loaded = eager::fetch_many(&loader, primary).await.unwrap();

    let ids: Vec<DbId> = loaded.iter().map(Identified::id).collect();
    assert_eq!(ids, vec![second, third, first]);
    assert!(loaded[0].users.is_empty());
    assert_eq!(user_ids(&loaded[1]), vec![u1, u2]);
    assert_eq!(user_ids(&loaded[2]), vec![u1]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_many_drops_rows_deleted_in_between(pool: PgPool) {
    let keep = event_user(&pool, vec![]).await;
    let gone = event_user(&pool, vec![]).await;
    let primary: Vec<EventUser> = EventUserRepo::list(&pool).await.unwrap();

    EventUserRepo::delete(&pool, gone).await.unwrap();

    let loaded = eager::fetch_many(&EventUserUsersLoader::new(&pool), primary)
        .await
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id(), keep);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fetch_many_rejects_duplicate_input(pool: PgPool) {
    let id = event_user(&pool, vec![]).await;
    let row = EventUserRepo::find_by_id(&pool, id).await.unwrap().unwrap();

    let result = eager::fetch_many(&EventUserUsersLoader::new(&pool), vec![row.clone(), row]).await;
    assert!(matches!(result, Err(EagerLoadError::DuplicateId(dup)) if dup == id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_all_with_eager_relationships_on_empty_table(pool: PgPool) {
    let all = EventUserRepo::find_all_with_eager_relationships(&pool)
        .await
        .unwrap();
    assert!(all.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_one_with_eager_relationships(pool: PgPool) {
    let u = user(&pool, "solo").await;
    let id = event_user(&pool, vec![u]).await;

    let found = EventUserRepo::find_one_with_eager_relationships(&pool, id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.users.len(), 1);
    assert_eq!(found.users[0].login, "solo");

    let missing = EventUserRepo::find_one_with_eager_relationships(&pool, id + 1000)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn page_keeps_metadata_and_order(pool: PgPool) {
    let u = user(&pool, "p").await;
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(event_user(&pool, vec![u]).await);
    }

    let page = EventUserRepo::find_page_with_eager_relationships(
        &pool,
        PageRequest::new(Some(1), Some(2)),
    )
    .await
    .unwrap();

    assert_eq!(page.total_elements, 5);
    assert_eq!(page.request.page, 1);
    assert_eq!(page.request.size, 2);
    assert_eq!(page.total_pages(), 3);
    let got: Vec<DbId> = page.content.iter().map(Identified::id).collect();
    assert_eq!(got, ids[2..4].to_vec());
    assert!(page.content.iter().all(|row| user_ids(row) == vec![u]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pages_cover_every_row_exactly_once(pool: PgPool) {
    let u = user(&pool, "walker").await;
    let mut ids = Vec::new();
    for _ in 0..5 {
        ids.push(event_user(&pool, vec![u]).await);
    }

    let mut seen = Vec::new();
    for page_number in 0..3 {
        let page = EventUserRepo::list_page(&pool, PageRequest::new(Some(page_number), Some(2)))
            .await
            .unwrap();
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.is_last(), page_number == 2);
        seen.extend(page.content.iter().map(|row| row.id));
    }
    assert_eq!(seen, ids);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn count_and_rows_share_a_snapshot(pool: PgPool) {
    let u = user(&pool, "snap").await;
    event_user(&pool, vec![u]).await;
    event_user(&pool, vec![u]).await;

    let mut tx = pool.begin().await.unwrap();
    sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
        .execute(&mut *tx)
        .await
        .unwrap();
    assert_eq!(EventUserRepo::count(&mut *tx).await.unwrap(), 2);

    // Committed after the snapshot was taken.
    event_user(&pool, vec![u]).await;

    assert_eq!(EventUserRepo::count(&mut *tx).await.unwrap(), 2);
    assert_eq!(EventUserRepo::count(&pool).await.unwrap(), 3);
    tx.commit().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn full_update_without_user_ids_clears_association(pool: PgPool) {
    let u = user(&pool, "x").await;
    let id = event_user(&pool, vec![u]).await;

    let updated = EventUserRepo::update(
        &pool,
        id,
        &EventUserInput {
            id: Some(id),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(updated.users.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_update_without_user_ids_keeps_association(pool: PgPool) {
    let u = user(&pool, "y").await;
    let id = event_user(&pool, vec![u]).await;
    let event = EventRepo::create(&pool, &EventInput::default()).await.unwrap();

    let patched = EventUserRepo::partial_update(
        &pool,
        id,
        EventUserInput {
            id: Some(id),
            event_id: Some(event.id),
            user_ids: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(patched.event_user.event_id, Some(event.id));
    assert_eq!(user_ids(&patched), vec![u]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn set_users_replaces_association(pool: PgPool) {
    let a = user(&pool, "s1").await;
    let b = user(&pool, "s2").await;
    let id = event_user(&pool, vec![a]).await;

    EventUserRepo::set_users(&pool, id, &[b]).await.unwrap();
    assert_eq!(EventUserRepo::user_ids_for(&pool, id).await.unwrap(), vec![b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_user_removes_it_from_association(pool: PgPool) {
    let a = user(&pool, "d1").await;
    let b = user(&pool, "d2").await;
    let id = event_user(&pool, vec![a, b]).await;

    UserRepo::delete(&pool, a).await.unwrap();
    assert_eq!(EventUserRepo::user_ids_for(&pool, id).await.unwrap(), vec![b]);
}
