//! Integration tests for concurrent item fetching and story pages.

use std::time::{Duration, Instant};

use dothn::error::Error;
use dothn::item::Items;
use dothn::story::{StoryCategory, StoryIds};
use dothn::Client;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

fn client_for(server: &MockServer) -> Client {
    Client::builder()
        .base_url(format!("{}/v0", server.uri()))
        .build()
        .expect("Failed to build client")
}

/// Answers `item/{id}.json` with a story carrying that ID.
///
/// Lower IDs answer more slowly so completion order differs from request order.
struct EchoItem;

impl Respond for EchoItem {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let id: u64 = request
            .url
            .path()
            .trim_start_matches("/v0/item/")
            .trim_end_matches(".json")
            .parse()
            .expect("item id in path");
        let body = format!(r#"{{"id": {id}, "type": "story", "title": "story {id}", "time": 1700000000}}"#);
        let delay = Duration::from_millis(20_u64.saturating_sub(id % 20));
        ResponseTemplate::new(200)
            .set_body_string(body)
            .set_delay(delay)
    }
}

async fn mount_items(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/v0/item/\d+\.json$"))
        .respond_with(EchoItem)
        .mount(server)
        .await;
}

async fn mount_story_ids(server: &MockServer, category: StoryCategory, count: u64) {
    let ids: Vec<u64> = (1..=count).map(|i| i * 10).collect();
    Mock::given(method("GET"))
        .and(path(format!("/v0/{category}stories.json")))
        .respond_with(ResponseTemplate::new(200).set_body_json(ids))
        .mount(server)
        .await;
}

async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .len()
}

fn ids_of(items: &Items) -> Vec<u64> {
    items.iter().map(dothn::item::Item::id).collect()
}

#[tokio::test]
async fn returns_one_item_per_id_in_request_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_items(&server).await;

    let ids = [3, 1, 19, 7, 2, 11];
    let items = Items::new(&client_for(&server), &ids).await?;

    assert_eq!(ids_of(&items), ids);
    assert!(items.iter().all(|item| item.title() == Some(&*format!("story {}", item.id()))));
    assert_eq!(request_count(&server).await, ids.len());
    Ok(())
}

#[tokio::test]
async fn empty_ids_make_no_requests() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_items(&server).await;

    let items = Items::new(&client_for(&server), &[]).await?;

    assert!(items.is_empty());
    assert_eq!(request_count(&server).await, 0);
    Ok(())
}

#[tokio::test]
async fn one_missing_item_fails_the_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/2.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_items(&server).await;

    let result = Items::new(&client_for(&server), &[1, 2, 3]).await;

    match result {
        Err(Error::NotFound { url }) => assert!(url.ends_with("item/2.json")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn one_failing_item_fails_a_large_batch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/50.json"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_items(&server).await;

    let ids: Vec<u64> = (1..=100).collect();
    let result = Items::new(&client_for(&server), &ids).await;

    assert!(matches!(result, Err(Error::UnexpectedStatus(_))), "got {result:?}");
}

#[tokio::test]
async fn first_failure_returns_without_waiting_for_slow_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/item/1.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("null"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/item/2.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"id": 2, "type": "story"}"#)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let started = Instant::now();
    let result = Items::new(&client_for(&server), &[2, 1]).await;
    let elapsed = started.elapsed();

    assert!(matches!(result, Err(Error::NotFound { .. })), "got {result:?}");
    assert!(elapsed < Duration::from_secs(2), "took {elapsed:?}");
}

#[tokio::test]
async fn empty_listing_fetches_no_items() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Ask, 0).await;
    mount_items(&server).await;

    let items = Items::stories(&client_for(&server), StoryCategory::Ask).await?;

    assert!(items.is_empty());
    assert_eq!(request_count(&server).await, 1);
    Ok(())
}

#[tokio::test]
async fn story_ids_keep_server_order() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v0/beststories.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[30, 10, 20]"))
        .mount(&server)
        .await;

    let ids = StoryIds::new(&client_for(&server), StoryCategory::Best).await?;

    assert_eq!(ids.category(), StoryCategory::Best);
    assert_eq!(*ids, vec![30, 10, 20]);
    Ok(())
}

#[tokio::test]
async fn top_limit_above_500_fails_before_any_request() {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Top, 500).await;
    mount_items(&server).await;

    for category in [StoryCategory::Top, StoryCategory::New] {
        let result = Items::stories_page(&client_for(&server), category, 501, 0).await;
        match result {
            Err(Error::LimitExceeded { category: c, max }) => {
                assert_eq!(c, category);
                assert_eq!(max, 500);
            }
            other => panic!("expected LimitExceeded, got {other:?}"),
        }
    }
    assert_eq!(request_count(&server).await, 0);
}

#[tokio::test]
async fn top_limit_of_500_succeeds() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Top, 500).await;
    mount_items(&server).await;

    let items = Items::stories_page(&client_for(&server), StoryCategory::Top, 500, 0).await?;

    assert_eq!(items.len(), 500);
    assert_eq!(items.first().map(dothn::item::Item::id), Some(10));
    assert_eq!(items.last().map(dothn::item::Item::id), Some(5000));
    Ok(())
}

#[tokio::test]
async fn ask_show_job_cap_at_200() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    for category in [StoryCategory::Ask, StoryCategory::Show, StoryCategory::Job] {
        mount_story_ids(&server, category, 200).await;
    }
    mount_items(&server).await;
    let client = client_for(&server);

    for category in [StoryCategory::Ask, StoryCategory::Show, StoryCategory::Job] {
        let result = Items::stories_page(&client, category, 201, 0).await;
        assert!(
            matches!(result, Err(Error::LimitExceeded { max: 200, .. })),
            "got {result:?}"
        );

        let items = Items::stories_page(&client, category, 200, 0).await?;
        assert_eq!(items.len(), 200);
    }
    Ok(())
}

#[tokio::test]
async fn page_returns_window_of_listing() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::New, 10).await;
    mount_items(&server).await;

    let items = Items::stories_page(&client_for(&server), StoryCategory::New, 3, 4).await?;

    assert_eq!(ids_of(&items), vec![50, 60, 70]);
    Ok(())
}

#[tokio::test]
async fn page_offset_applies_to_short_listing() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Show, 5).await;
    mount_items(&server).await;
    let client = client_for(&server);

    let all = Items::stories_page(&client, StoryCategory::Show, 10, 0).await?;
    assert_eq!(ids_of(&all), vec![10, 20, 30, 40, 50]);

    let tail = Items::stories_page(&client, StoryCategory::Show, 10, 3).await?;
    assert_eq!(ids_of(&tail), vec![40, 50]);

    let past_end = Items::stories_page(&client, StoryCategory::Show, 10, 9).await?;
    assert!(past_end.is_empty());
    Ok(())
}

#[tokio::test]
async fn best_has_no_limit() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Best, 4).await;
    mount_items(&server).await;

    let items = Items::stories_page(&client_for(&server), StoryCategory::Best, 10_000, 0).await?;

    assert_eq!(ids_of(&items), vec![10, 20, 30, 40]);
    Ok(())
}

#[tokio::test]
async fn fetches_all_stories_of_category() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    mount_story_ids(&server, StoryCategory::Job, 7).await;
    mount_items(&server).await;

    let items = Items::stories(&client_for(&server), StoryCategory::Job).await?;

    assert_eq!(ids_of(&items), vec![10, 20, 30, 40, 50, 60, 70]);
    Ok(())
}
