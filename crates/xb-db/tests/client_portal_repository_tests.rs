mod common;

use common::{create_test_pool, create_test_portal, create_test_user};

use xb_db::ClientPortalRepository;

use googletest::prelude::*;
use uuid::Uuid;

#[tokio::test]
async fn given_portals_for_two_users_when_listing_then_scoped_to_owner() {
    // Given: Portals granted to two different users
    let pool = create_test_pool().await;
    let owner = Uuid::new_v4();
    let other = Uuid::new_v4();
    create_test_user(&pool, owner).await;
    create_test_user(&pool, other).await;

    let repo = ClientPortalRepository::new(pool);
    repo.create(&create_test_portal(owner, "sam-law")).await.unwrap();
    repo.create(&create_test_portal(owner, "veilrift")).await.unwrap();
    repo.create(&create_test_portal(other, "dreamcatcher"))
        .await
        .unwrap();

    // When: Listing the first user's portals
    let portals = repo.find_by_user(owner).await.unwrap();

    // Then: Only that user's grants come back
    assert_that!(portals.len(), eq(2));
    assert!(portals.iter().all(|p| p.user_id == owner));
}

#[tokio::test]
async fn given_no_portals_when_listing_then_empty() {
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let repo = ClientPortalRepository::new(pool);
    let portals = repo.find_by_user(user_id).await.unwrap();

    assert_that!(portals.len(), eq(0));
}

#[tokio::test]
async fn given_created_portal_when_listed_then_fields_round_trip() {
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    create_test_user(&pool, user_id).await;

    let repo = ClientPortalRepository::new(pool);
    let mut portal = create_test_portal(user_id, "sam-law");
    portal.portal_data = Some(r#"{"matter":"case-114"}"#.to_string());
    repo.create(&portal).await.unwrap();

    let found = &repo.find_by_user(user_id).await.unwrap()[0];

    assert_that!(found.id, eq(portal.id));
    assert_that!(found.portal_type, eq("sam-law"));
    assert_that!(found.portal_data, some(eq(r#"{"matter":"case-114"}"#)));
    assert_that!(found.access_level, eq("basic"));
}
