use fertibase_application::use_cases::{
    CreateRecordUseCase, DeleteRecordUseCase, GetRecordsUseCase, SeedCatalogUseCase,
    UpdateRecordUseCase,
};
use fertibase_domain::{DomainError, JobListing, Product};
use std::sync::Arc;

mod helpers;
use helpers::{job, product, MockCatalogRepository, MockStaticCatalog};

// ── CreateRecordUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_create_assigns_new_id() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    let use_case = CreateRecordUseCase::new(repo.clone());

    let created = use_case
        .execute(product("client-id", "NitroBase", None))
        .await
        .unwrap();

    assert_eq!(created.id.as_str(), "1");
    assert_eq!(repo.len(), 1);
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    let use_case = CreateRecordUseCase::new(repo.clone());

    let result = use_case.execute(Product::default()).await;

    assert!(matches!(result, Err(DomainError::InvalidRecord(_))));
    assert_eq!(repo.len(), 0);
}

// ── GetRecordsUseCase ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_by_id_found_and_missing() {
    let repo = Arc::new(MockCatalogRepository::<JobListing>::new());
    CreateRecordUseCase::new(repo.clone())
        .execute(job("x", "Agronomist", Some("Field")))
        .await
        .unwrap();
    let use_case = GetRecordsUseCase::new(repo);

    let found = use_case.get_by_id("1").await.unwrap();
    let missing = use_case.get_by_id("2").await.unwrap();
    let malformed = use_case.get_by_id("not/an/id").await.unwrap();

    assert_eq!(found.unwrap().title, "Agronomist");
    assert!(missing.is_none());
    assert!(malformed.is_none());
}

#[tokio::test]
async fn test_get_all_lists_everything() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    let create = CreateRecordUseCase::new(repo.clone());
    create.execute(product("a", "NitroBase", None)).await.unwrap();
    create.execute(product("b", "CarboMax", None)).await.unwrap();

    let all = GetRecordsUseCase::new(repo).get_all().await.unwrap();

    assert_eq!(all.len(), 2);
}

// ── UpdateRecordUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_replaces_document_and_keeps_path_id() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    CreateRecordUseCase::new(repo.clone())
        .execute(product("a", "NitroBase", None))
        .await
        .unwrap();

    let updated = UpdateRecordUseCase::new(repo.clone())
        .execute("1", product("body-id", "NitroBase Plus", Some("Biofertilizer")))
        .await
        .unwrap();

    assert_eq!(updated.id.as_str(), "1");
    assert_eq!(updated.name, "NitroBase Plus");
    let stored = GetRecordsUseCase::new(repo).get_by_id("1").await.unwrap().unwrap();
    assert_eq!(stored.category.as_deref(), Some("Biofertilizer"));
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());

    let result = UpdateRecordUseCase::new(repo)
        .execute("9", product("9", "Ghost", None))
        .await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

// ── DeleteRecordUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_delete_then_missing() {
    let repo = Arc::new(MockCatalogRepository::<JobListing>::new());
    CreateRecordUseCase::new(repo.clone())
        .execute(job("x", "Driver", None))
        .await
        .unwrap();
    let delete = DeleteRecordUseCase::new(repo.clone());

    assert!(delete.execute("1").await.is_ok());
    assert!(matches!(
        delete.execute("1").await,
        Err(DomainError::NotFound(_))
    ));
    assert_eq!(repo.len(), 0);
}

#[tokio::test]
async fn test_delete_malformed_id_is_not_found() {
    let repo = Arc::new(MockCatalogRepository::<JobListing>::new());

    let result = DeleteRecordUseCase::new(repo).execute("a b").await;

    assert!(matches!(result, Err(DomainError::NotFound(_))));
}

// ── SeedCatalogUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_seed_fills_empty_store_with_new_ids() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    let source = Arc::new(MockStaticCatalog::new(vec![
        product("nitrobase", "NitroBase", None),
        product("carbomax", "CarboMax", None),
    ]));

    let inserted = SeedCatalogUseCase::new(repo.clone(), source)
        .execute()
        .await
        .unwrap();

    assert_eq!(inserted, 2);
    let ids: Vec<_> = GetRecordsUseCase::new(repo)
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[tokio::test]
async fn test_seed_skips_populated_store() {
    let repo = Arc::new(MockCatalogRepository::<Product>::new());
    CreateRecordUseCase::new(repo.clone())
        .execute(product("a", "Existing", None))
        .await
        .unwrap();
    let source = Arc::new(MockStaticCatalog::new(vec![product("n", "NitroBase", None)]));

    let inserted = SeedCatalogUseCase::new(repo.clone(), source)
        .execute()
        .await
        .unwrap();

    assert_eq!(inserted, 0);
    assert_eq!(repo.len(), 1);
}
