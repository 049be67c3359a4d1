//! Runs against a real Postgres when `DATABASE_URL` is set; skipped otherwise.

use catalog_infra::{DocumentStore, PostgresDocumentStore};
use catalog_products::{NewProduct, ProductPatch};

async fn connect() -> Option<PostgresDocumentStore> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set; skipping Postgres store test");
        return None;
    };
    Some(
        PostgresDocumentStore::connect(&url)
            .await
            .expect("failed to connect to DATABASE_URL"),
    )
}

#[tokio::test]
async fn insert_returns_the_stored_document() {
    let Some(store) = connect().await else {
        return;
    };

    let draft = NewProduct::new("Pen", 2.0, "http://x/p.png").validate().unwrap();
    let created = store.insert(draft).await.unwrap();

    let stored = store
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .find(|p| p.id == created.id)
        .expect("created product is listed");
    assert_eq!(created, stored);

    let updated = store
        .find_by_id_and_update(created.id, ProductPatch::default().price(3.0))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    let deleted = store.find_by_id_and_delete(created.id).await.unwrap();
    assert_eq!(deleted, Some(updated));
}
