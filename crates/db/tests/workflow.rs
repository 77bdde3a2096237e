//! Integration tests for the article approval workflow at the repository
//! layer: creation defaults, the authoring allow-list, the conditional
//! review update, queue ordering, and edit-history scoping.

use sqlx::PgPool;

use copydesk_core::article::{STATUS_APPROVED, STATUS_PENDING_REVIEW, STATUS_REJECTED};
use copydesk_db::models::article::{CreateArticle, UpdateArticle};
use copydesk_db::models::writer::{CreateWriter, Writer};
use copydesk_db::repositories::{ArticleRepo, WriterRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_writer(pool: &PgPool, username: &str, is_editor: bool) -> Writer {
    let writer = WriterRepo::create(
        pool,
        &CreateWriter {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            name: username.to_string(),
            password_hash: "$argon2id$test-not-a-real-hash".to_string(),
        },
    )
    .await
    .expect("writer insert should succeed");

    if is_editor {
        WriterRepo::set_editor(pool, writer.id, true)
            .await
            .expect("set_editor should succeed");
    }
    writer
}

fn new_article(title: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        content: format!("{title} body"),
    }
}

// ---------------------------------------------------------------------------
// Creation defaults
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn new_article_is_pending_and_unedited(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;

    let article = ArticleRepo::create(&pool, writer.id, &new_article("First"))
        .await
        .unwrap();

    assert_eq!(article.status, STATUS_PENDING_REVIEW);
    assert_eq!(article.written_by, Some(writer.id));
    assert_eq!(article.edited_by, None);
}

// ---------------------------------------------------------------------------
// Authoring updates never touch status
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn update_changes_only_title_and_content(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let editor = new_writer(&pool, "ed", true).await;

    let article = ArticleRepo::create(&pool, writer.id, &new_article("Draft"))
        .await
        .unwrap();
    let approved = ArticleRepo::review(&pool, article.id, STATUS_APPROVED, editor.id)
        .await
        .unwrap()
        .expect("first review should win");
    assert_eq!(approved.status, STATUS_APPROVED);

    let updated = ArticleRepo::update(
        &pool,
        article.id,
        &UpdateArticle {
            title: "Revised".to_string(),
            content: "Revised body".to_string(),
        },
    )
    .await
    .unwrap()
    .expect("article exists");

    assert_eq!(updated.title, "Revised");
    assert_eq!(updated.content, "Revised body");
    // Update is reachable after resolution, but the status and the
    // attribution survive untouched.
    assert_eq!(updated.status, STATUS_APPROVED);
    assert_eq!(updated.edited_by, Some(editor.id));
    assert_eq!(updated.created_at, article.created_at);
}

#[sqlx::test(migrations = "../../migrations")]
async fn update_of_missing_article_returns_none(pool: PgPool) {
    let result = ArticleRepo::update(
        &pool,
        9999,
        &UpdateArticle {
            title: "x".to_string(),
            content: "y".to_string(),
        },
    )
    .await
    .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Review: conditional update, winner-take-all
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn review_sets_status_and_attribution(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let editor = new_writer(&pool, "ed", true).await;

    let article = ArticleRepo::create(&pool, writer.id, &new_article("Pending"))
        .await
        .unwrap();

    let reviewed = ArticleRepo::review(&pool, article.id, STATUS_APPROVED, editor.id)
        .await
        .unwrap()
        .expect("pending article should be reviewable");

    assert_eq!(reviewed.status, STATUS_APPROVED);
    assert_eq!(reviewed.edited_by, Some(editor.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn second_review_of_same_article_loses(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let ed_a = new_writer(&pool, "ed_a", true).await;
    let ed_b = new_writer(&pool, "ed_b", true).await;

    let article = ArticleRepo::create(&pool, writer.id, &new_article("Contested"))
        .await
        .unwrap();

    let first = ArticleRepo::review(&pool, article.id, STATUS_APPROVED, ed_a.id)
        .await
        .unwrap();
    assert!(first.is_some());

    // The row no longer matches `status = 'pending_review'`.
    let second = ArticleRepo::review(&pool, article.id, STATUS_REJECTED, ed_b.id)
        .await
        .unwrap();
    assert!(second.is_none());

    // The winner's decision stands.
    let current = ArticleRepo::find_by_id(&pool, article.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(current.status, STATUS_APPROVED);
    assert_eq!(current.edited_by, Some(ed_a.id));
}

#[sqlx::test(migrations = "../../migrations")]
async fn review_of_missing_article_returns_none(pool: PgPool) {
    let editor = new_writer(&pool, "ed", true).await;
    let result = ArticleRepo::review(&pool, 424242, STATUS_APPROVED, editor.id)
        .await
        .unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Pending queue
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn pending_list_excludes_resolved_and_orders_by_creation(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let editor = new_writer(&pool, "ed", true).await;

    let a = ArticleRepo::create(&pool, writer.id, &new_article("a")).await.unwrap();
    let b = ArticleRepo::create(&pool, writer.id, &new_article("b")).await.unwrap();
    let c = ArticleRepo::create(&pool, writer.id, &new_article("c")).await.unwrap();

    ArticleRepo::review(&pool, b.id, STATUS_REJECTED, editor.id)
        .await
        .unwrap()
        .expect("review should win");

    let pending = ArticleRepo::list_pending(&pool).await.unwrap();
    let ids: Vec<_> = pending.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![a.id, c.id]);
    assert!(pending.iter().all(|a| a.status == STATUS_PENDING_REVIEW));
}

// ---------------------------------------------------------------------------
// Edit history scoping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn edit_history_is_scoped_to_one_editor(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let ed_a = new_writer(&pool, "ed_a", true).await;
    let ed_b = new_writer(&pool, "ed_b", true).await;

    let one = ArticleRepo::create(&pool, writer.id, &new_article("one")).await.unwrap();
    let two = ArticleRepo::create(&pool, writer.id, &new_article("two")).await.unwrap();
    let three = ArticleRepo::create(&pool, writer.id, &new_article("three")).await.unwrap();

    ArticleRepo::review(&pool, one.id, STATUS_APPROVED, ed_a.id).await.unwrap();
    ArticleRepo::review(&pool, two.id, STATUS_REJECTED, ed_b.id).await.unwrap();
    ArticleRepo::review(&pool, three.id, STATUS_APPROVED, ed_a.id).await.unwrap();

    let history_a = ArticleRepo::list_edited_by(&pool, ed_a.id).await.unwrap();
    let ids_a: Vec<_> = history_a.iter().map(|a| a.id).collect();
    assert_eq!(ids_a, vec![one.id, three.id]);

    let history_b = ArticleRepo::list_edited_by(&pool, ed_b.id).await.unwrap();
    let ids_b: Vec<_> = history_b.iter().map(|a| a.id).collect();
    assert_eq!(ids_b, vec![two.id]);
}

// ---------------------------------------------------------------------------
// Weak ownership references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../migrations")]
async fn deleting_a_writer_leaves_articles_unattributed(pool: PgPool) {
    let writer = new_writer(&pool, "alice", false).await;
    let article = ArticleRepo::create(&pool, writer.id, &new_article("Orphan"))
        .await
        .unwrap();

    assert!(WriterRepo::delete(&pool, writer.id).await.unwrap());

    let survivor = ArticleRepo::find_by_id(&pool, article.id)
        .await
        .unwrap()
        .expect("article must survive writer deletion");
    assert_eq!(survivor.written_by, None);
    assert_eq!(survivor.title, "Orphan");
}

#[sqlx::test(migrations = "../../migrations")]
async fn duplicate_username_violates_unique_constraint(pool: PgPool) {
    new_writer(&pool, "alice", false).await;

    let result = WriterRepo::create(
        &pool,
        &CreateWriter {
            username: "alice".to_string(),
            email: "other@example.com".to_string(),
            name: "Alice Two".to_string(),
            password_hash: "$argon2id$test".to_string(),
        },
    )
    .await;

    let err = result.expect_err("duplicate username must be rejected");
    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.constraint(), Some("uq_writers_username"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}
