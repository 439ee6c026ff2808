//! Behavior-driven tests for the provider adapters
//!
//! These tests verify HOW the adapters treat upstream answers: what is
//! requested, how payloads become records and how failures are classified.

use schedlr_core::{FilterSpec, HttpError, HttpResponse, MetricKind, SourceErrorKind};
use schedlr_tests::{
    linkedin_adapter, linkedin_data_url, pinterest_adapter, pinterest_url, posts_json,
    sample_posts, FakeUpstream, LINKEDIN_URL, PINTEREST_URL,
};

// =============================================================================
// LinkedIn: fetching
// =============================================================================

#[tokio::test]
async fn when_upstream_returns_posts_they_come_back_unchanged() {
    // Given: LinkedIn serves three posts
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), posts_json(&sample_posts()));
    let adapter = linkedin_adapter(&upstream);

    // When: All data is fetched
    let posts = adapter.fetch_all().await.expect("fetch should succeed");

    // Then: Records arrive in upstream order, from exactly one call
    assert_eq!(posts, sample_posts());
    assert_eq!(upstream.request_count(), 1);
}

#[tokio::test]
async fn when_upstream_returns_empty_array_result_is_empty() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), "[]");

    let posts = linkedin_adapter(&upstream)
        .fetch_all()
        .await
        .expect("empty array is not an error");

    assert!(posts.is_empty());
}

#[tokio::test]
async fn when_upstream_returns_500_user_receives_client_error_with_message() {
    // Given: LinkedIn fails with a server error
    let upstream = FakeUpstream::new();
    upstream.respond(
        linkedin_data_url(),
        Ok(HttpResponse::new(500, "internal upstream failure")),
    );

    // When: Data is fetched
    let error = linkedin_adapter(&upstream)
        .fetch_all()
        .await
        .expect_err("500 should fail");

    // Then: The failure is an upstream client error carrying the message
    assert_eq!(error.kind(), SourceErrorKind::UpstreamClient);
    assert_eq!(error.status(), Some(500));
    assert_eq!(error.message(), "internal upstream failure");
}

#[tokio::test]
async fn when_upstream_is_unreachable_user_receives_unavailable_error() {
    let upstream = FakeUpstream::new();
    upstream.respond(linkedin_data_url(), Err(HttpError::new("request timeout")));

    let error = linkedin_adapter(&upstream)
        .fetch_all()
        .await
        .expect_err("timeout should fail");

    assert_eq!(error.kind(), SourceErrorKind::UpstreamUnavailable);
    assert!(error.message().contains("request timeout"));
}

#[tokio::test]
async fn when_payload_is_not_a_record_list_user_receives_unknown_error() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), r#"{"elements": []}"#);

    let error = linkedin_adapter(&upstream)
        .fetch_all()
        .await
        .expect_err("object payload should fail");

    assert_eq!(error.kind(), SourceErrorKind::UpstreamUnknown);
}

#[tokio::test]
async fn when_an_item_has_no_id_the_rest_of_the_list_still_arrives() {
    // Given: LinkedIn serves one post without an id among valid ones
    let upstream = FakeUpstream::new();
    upstream.respond_json(
        linkedin_data_url(),
        r#"[{"content":"draft"},{"id":"41","content":"Rust launch"}]"#,
    );

    // When: All data is fetched
    let posts = linkedin_adapter(&upstream)
        .fetch_all()
        .await
        .expect("sparse item should not fail the list");

    // Then: The sparse item carries an empty id and the others are intact
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, "");
    assert_eq!(posts[1].id, "41");
}

// =============================================================================
// LinkedIn: derived operations
// =============================================================================

#[tokio::test]
async fn lookup_by_id_finds_existing_record() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), posts_json(&sample_posts()));

    let post = linkedin_adapter(&upstream)
        .fetch_by_id("42")
        .await
        .expect("42 exists");

    assert_eq!(post.content, "Quarterly launch recap");
    assert_eq!(post.impressions, 900);
}

#[tokio::test]
async fn lookup_by_id_fails_with_not_found_for_missing_record() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), posts_json(&sample_posts()));

    let error = linkedin_adapter(&upstream)
        .fetch_by_id("404")
        .await
        .expect_err("404 is absent");

    assert_eq!(error.kind(), SourceErrorKind::NotFound);
    assert_eq!(error.message(), "Data not found for ID: 404");
}

#[tokio::test]
async fn delete_confirms_presence_and_leaves_upstream_list_untouched() {
    // Given: LinkedIn serves the sample posts
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), posts_json(&sample_posts()));
    let adapter = linkedin_adapter(&upstream);

    // When: An existing and a missing id are deleted, twice each
    let first = adapter.delete_by_id("41").await.expect("delete");
    let second = adapter.delete_by_id("41").await.expect("delete");
    let missing = adapter.delete_by_id("nope").await.expect("delete");

    // Then: Results reflect presence only and the list is unchanged
    assert!(first && second);
    assert!(!missing);
    assert_eq!(adapter.fetch_all().await.expect("fetch"), sample_posts());
}

#[tokio::test]
async fn filtered_fetch_combines_keyword_and_date() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(linkedin_data_url(), posts_json(&sample_posts()));

    let posts = linkedin_adapter(&upstream)
        .fetch_filtered(&FilterSpec::new().with_keyword("Rust").with_date("2024-03-02"))
        .await
        .expect("fetch");

    let ids: Vec<_> = posts.iter().map(|post| post.id.as_str()).collect();
    assert_eq!(ids, vec!["43"]);
}

#[tokio::test]
async fn health_check_reflects_base_url_reachability() {
    let upstream = FakeUpstream::new();
    let adapter = linkedin_adapter(&upstream);

    // Unrouted base URL behaves like a refused connection
    assert!(!adapter.is_healthy().await);

    upstream.respond(LINKEDIN_URL, Ok(HttpResponse::new(503, "")));
    assert!(!adapter.is_healthy().await);

    upstream.respond(LINKEDIN_URL, Ok(HttpResponse::new(200, "anything")));
    assert!(adapter.is_healthy().await);

    let urls: Vec<_> = upstream.requests().into_iter().map(|r| r.url).collect();
    assert!(urls.iter().all(|url| url == LINKEDIN_URL));
}

// =============================================================================
// Pinterest
// =============================================================================

#[tokio::test]
async fn pinterest_metrics_come_from_their_own_endpoints() {
    let upstream = FakeUpstream::new();
    for kind in MetricKind::ALL {
        upstream.respond_json(
            pinterest_url(kind.path()),
            format!(r#"[{{"id":"{kind}-1","pinId":"p1","date":"2024-04-01","count":5}}]"#),
        );
    }
    let adapter = pinterest_adapter(&upstream);

    let likes = adapter.likes().await.expect("likes");
    let shares = adapter.shares().await.expect("shares");
    let comments = adapter.comments().await.expect("comments");

    assert_eq!(likes[0].id, "likes-1");
    assert_eq!(shares[0].id, "shares-1");
    assert_eq!(comments[0].id, "comments-1");
    assert_eq!(comments[0].pin_id.as_deref(), Some("p1"));
}

#[tokio::test]
async fn pinterest_null_body_is_an_empty_list() {
    let upstream = FakeUpstream::new();
    upstream.respond_json(pinterest_url("pins/likes"), "null");

    let likes = pinterest_adapter(&upstream).likes().await.expect("null is empty");
    assert!(likes.is_empty());
}

#[tokio::test]
async fn pinterest_failures_follow_linkedin_taxonomy() {
    let upstream = FakeUpstream::new();
    upstream.respond(
        pinterest_url("pins/shares"),
        Ok(HttpResponse::new(403, "forbidden")),
    );
    let adapter = pinterest_adapter(&upstream);

    let error = adapter.shares().await.expect_err("403 should fail");
    assert_eq!(error.kind(), SourceErrorKind::UpstreamClient);

    let error = adapter.comments().await.expect_err("unrouted should fail");
    assert_eq!(error.kind(), SourceErrorKind::UpstreamUnavailable);

    upstream.respond(PINTEREST_URL, Ok(HttpResponse::new(200, "")));
    assert!(adapter.is_healthy().await);
}
