use catalog_sync::catalog_store;
use catalog_sync::clients::{ActorClient, CatalogClient};
use catalog_sync::detail::{DetailError, DetailPhase, DetailSynchronizer, Notice};
use catalog_sync::framework::mock::MockRemote;
use catalog_sync::model::{Comment, CommentId, Product, ProductDraft, ProductId, Size};
use catalog_sync::remote::RemoteError;

fn clock() -> String {
    "3/4/2024, 9:15:00 AM".to_string()
}

fn start(mock: &MockRemote<Product>) -> CatalogClient {
    let (actor, client) = catalog_store::new(mock.remote(), 10);
    tokio::spawn(actor.run());
    client
}

fn comment(id: i64, product: i64, text: &str) -> Comment {
    Comment::new(CommentId::from(id), ProductId::from(product), text, "earlier")
}

fn comment_ids(product: &Product) -> Vec<CommentId> {
    product.comments.iter().map(|c| c.id.clone()).collect()
}

/// Load a synchronizer for `product`, answering the GET from the mock.
async fn open(mock: &mut MockRemote<Product>, product: &Product) -> DetailSynchronizer {
    mock.expect_get(product.id.clone())
        .return_ok(Some(product.clone()));
    let mut detail = DetailSynchronizer::new(start(mock), product.id.clone()).with_clock(clock);
    detail.load().await.expect("load");
    detail
}

#[tokio::test]
async fn test_load_transitions() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2);
    let detail = open(&mut mock, &product).await;

    assert_eq!(detail.phase(), DetailPhase::Loaded);
    assert_eq!(detail.product(), Some(&product));
    assert_eq!(detail.error(), None);
}

#[tokio::test]
async fn test_load_error_is_reported() {
    let mut mock = MockRemote::<Product>::new();
    mock.expect_get(ProductId::from(1))
        .return_err(RemoteError::Transport("timed out".into()));
    let mut detail = DetailSynchronizer::new(start(&mock), 1);

    let result = detail.load().await;

    assert_eq!(result, Err(DetailError::Load("timed out".into())));
    assert_eq!(detail.phase(), DetailPhase::LoadError);
    assert_eq!(detail.error(), Some("timed out"));
    assert_eq!(detail.take_notice(), Some(Notice::error("Failed to load product")));
}

/// Adding "nice" to a product without comments submits exactly one comment.
#[tokio::test]
async fn test_add_comment_submits_whole_product() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product {
        size: Size::new(10.0, 20.0),
        ..Product::new(1, "Lamp", 2)
    };
    let mut detail = open(&mut mock, &product).await;
    let confirmed = product
        .clone()
        .with_comments(vec![Comment::new(
            CommentId::from(1),
            ProductId::from(1),
            "nice",
            clock(),
        )]);
    mock.expect_replace(ProductId::from(1)).return_ok(confirmed.clone());

    let saved = detail.add_comment("nice").await.unwrap();

    let submitted = mock.replacements().remove(0);
    assert_eq!(submitted.comments.len(), 1);
    assert_eq!(submitted.comments[0].description, "nice");
    assert_eq!(submitted.comments[0].product_id, ProductId::from(1));
    assert_eq!(submitted.comments[0].date, clock());
    assert_eq!(submitted.size, product.size);
    assert_eq!(saved, confirmed);
    assert_eq!(detail.product(), Some(&confirmed));
    assert_eq!(detail.take_notice(), Some(Notice::success("Comment added")));
    mock.verify();
}

#[tokio::test]
async fn test_empty_comment_makes_no_request() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2);
    let mut detail = open(&mut mock, &product).await;

    let result = detail.add_comment("   ").await;

    assert_eq!(result, Err(DetailError::EmptyComment));
    assert_eq!(detail.phase(), DetailPhase::Loaded);
    assert_eq!(
        detail.take_notice(),
        Some(Notice::error("Comment cannot be empty"))
    );
    assert_eq!(mock.calls().len(), 1);
    mock.verify();
}

/// Removing 10 from [10, 11] submits [11].
#[tokio::test]
async fn test_remove_comment_submits_the_rest() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2)
        .with_comments(vec![comment(10, 1, "a"), comment(11, 1, "b")]);
    let mut detail = open(&mut mock, &product).await;
    let confirmed = Product::new(1, "Lamp", 2).with_comments(vec![comment(11, 1, "b")]);
    mock.expect_replace(ProductId::from(1)).return_ok(confirmed.clone());

    detail.remove_comment(&CommentId::from(10)).await.unwrap();

    assert_eq!(comment_ids(&mock.replacements()[0]), vec![CommentId::from(11)]);
    assert_eq!(comment_ids(detail.product().unwrap()), vec![CommentId::from(11)]);
    assert_eq!(detail.take_notice(), Some(Notice::success("Comment deleted")));
}

/// A failed write leaves the local product untouched and the next action still works.
#[tokio::test]
async fn test_failure_isolation_then_retry() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2).with_comments(vec![comment(1, 1, "first")]);
    let mut detail = open(&mut mock, &product).await;
    mock.expect_replace(ProductId::from(1))
        .return_err(RemoteError::from_status(503, r#"{"message":"try later"}"#));

    let result = detail.add_comment("second").await;

    assert_eq!(result, Err(DetailError::Save("try later".into())));
    assert_eq!(detail.phase(), DetailPhase::SaveError);
    assert_eq!(detail.product(), Some(&product));
    assert_eq!(detail.take_notice(), Some(Notice::error("Failed to add comment")));

    let confirmed = product
        .clone()
        .with_comments(vec![comment(1, 1, "first"), comment(2, 1, "second")]);
    mock.expect_replace(ProductId::from(1)).return_ok(confirmed.clone());

    detail.add_comment("second").await.unwrap();

    assert_eq!(detail.phase(), DetailPhase::Loaded);
    assert_eq!(detail.error(), None);
    assert_eq!(comment_ids(&mock.replacements()[1]), vec![CommentId::from(1), CommentId::from(2)]);
    mock.verify();
}

#[tokio::test]
async fn test_save_product_keeps_comments() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2).with_comments(vec![comment(4, 1, "bright")]);
    let mut detail = open(&mut mock, &product).await;
    let confirmed = Product::new(1, "Desk lamp", 3).with_comments(vec![comment(4, 1, "bright")]);
    mock.expect_replace(ProductId::from(1)).return_ok(confirmed.clone());

    let draft = detail.begin_edit().unwrap();
    let edited = ProductDraft {
        name: "  Desk lamp ".into(),
        count: 3,
        comments: Vec::new(),
        ..draft
    };
    detail.save_product(edited).await.unwrap();

    let submitted = mock.replacements().remove(0);
    assert_eq!(submitted.name, "Desk lamp");
    assert_eq!(submitted.count, 3);
    assert_eq!(comment_ids(&submitted), vec![CommentId::from(4)]);
    assert_eq!(detail.phase(), DetailPhase::Loaded);
    assert_eq!(detail.take_notice(), Some(Notice::success("Product updated")));
}

/// The store's copy follows the synchronizer's confirmed writes.
#[tokio::test]
async fn test_store_item_follows_detail_writes() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2);
    mock.expect_list().return_ok(vec![product.clone()]);
    mock.expect_get(ProductId::from(1)).return_ok(Some(product.clone()));
    let confirmed = product.clone().with_comments(vec![comment(1, 1, "ok")]);
    mock.expect_replace(ProductId::from(1)).return_ok(confirmed.clone());

    let catalog = start(&mock);
    catalog.fetch_all().await.unwrap();
    let mut detail = DetailSynchronizer::new(catalog.clone(), 1).with_clock(clock);
    detail.load().await.unwrap();
    detail.add_comment("ok").await.unwrap();

    let state = catalog.snapshot().await.unwrap();
    assert_eq!(state.items, vec![confirmed]);
}

/// Two synchronizers on one product: no version check, the later write wins.
#[tokio::test]
async fn test_concurrent_synchronizers_last_write_wins() {
    let mut mock = MockRemote::<Product>::new();
    let product = Product::new(1, "Lamp", 2);
    mock.expect_get(ProductId::from(1)).return_ok(Some(product.clone()));
    mock.expect_get(ProductId::from(1)).return_ok(Some(product.clone()));
    let catalog = start(&mock);

    let mut left = DetailSynchronizer::new(catalog.clone(), 1).with_clock(clock);
    let mut right = DetailSynchronizer::new(catalog.clone(), 1).with_clock(clock);
    left.load().await.unwrap();
    right.load().await.unwrap();

    let from_left = product.clone().with_comments(vec![comment(1, 1, "left")]);
    let from_right = product.clone().with_comments(vec![comment(1, 1, "right")]);
    mock.expect_replace(ProductId::from(1)).return_ok(from_left.clone());
    mock.expect_replace(ProductId::from(1)).return_ok(from_right.clone());

    left.add_comment("left").await.unwrap();
    right.add_comment("right").await.unwrap();

    let submitted = mock.replacements();
    assert_eq!(submitted[1].comments.len(), 1);
    assert_eq!(submitted[1].comments[0].description, "right");
    assert_eq!(left.product(), Some(&from_left));
    assert_eq!(right.product(), Some(&from_right));
    mock.verify();
}

#[tokio::test]
async fn test_actions_need_a_loaded_product() {
    let mock = MockRemote::<Product>::new();
    let mut detail = DetailSynchronizer::new(start(&mock), 1);

    assert_eq!(
        detail.add_comment("hello").await,
        Err(DetailError::InvalidPhase {
            action: "add a comment",
            phase: "unloaded"
        })
    );
    assert!(detail.begin_edit().is_err());
    assert!(mock.calls().is_empty());
}

/// Server copies with blank comments, repeated comment ids or no name still take new comments.
#[tokio::test]
async fn test_add_comment_to_legacy_records() {
    let legacy: Vec<Product> = serde_json::from_value(serde_json::json!([
        {
            "id": 1,
            "name": "Lamp",
            "comments": [{ "id": 5, "productId": 1, "description": null }]
        },
        {
            "id": 2,
            "name": "Desk",
            "comments": [
                { "id": 1700000000000_i64, "productId": 2, "description": "a", "date": "" },
                { "id": 1700000000000_i64, "productId": 2, "description": "b", "date": "" }
            ]
        },
        { "id": 3, "name": null, "comments": [] }
    ]))
    .unwrap();

    for product in legacy {
        let mut mock = MockRemote::<Product>::new();
        let mut detail = open(&mut mock, &product).await;
        let mut comments = product.comments.clone();
        comments.push(comment(99, 0, "nice"));
        let confirmed = product.clone().with_comments(comments);
        mock.expect_replace(product.id.clone()).return_ok(confirmed.clone());

        let saved = detail.add_comment("nice").await;

        assert_eq!(saved, Ok(confirmed), "product {}", product.id);
        let submitted = mock.replacements().remove(0);
        assert_eq!(submitted.comments[..product.comments.len()], product.comments[..]);
        assert_eq!(submitted.comments.last().map(|c| c.description.as_str()), Some("nice"));
        assert_eq!(detail.phase(), DetailPhase::Loaded);
        mock.verify();
    }
}
