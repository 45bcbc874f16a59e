use std::collections::HashSet;

use httpmock::MockServer;
use metrics_util::debugging::DebuggingRecorder;
use uuid::Uuid;

use folio::application::{
    METRIC_CACHE_HIT, METRIC_CACHE_INVALIDATE, METRIC_CACHE_MISS, METRIC_CACHE_REVALIDATE,
    Portfolio,
};
use folio::cache::CacheConfig;
use folio::client::ApiClient;
use folio::infra::telemetry;

fn post_body(uuid: Uuid) -> String {
    format!(
        r#"{{
            "id": 1,
            "uuid": "{uuid}",
            "title": "Metrics Test Post",
            "content": "",
            "image": null,
            "tags": [],
            "likes_count": 0,
            "comments_count": 0,
            "comments": [],
            "created_at": "2024-05-01T10:00:00Z",
            "updated_at": "2024-05-01T10:00:00Z"
        }}"#
    )
}

#[tokio::test]
async fn cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");
    telemetry::describe_metrics();

    let server = MockServer::start();
    let uuid = Uuid::new_v4();
    server.mock(|when, then| {
        when.method("GET").path("/api/posts/");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!("[{}]", post_body(uuid)));
    });
    server.mock(|when, then| {
        when.method("POST").path(format!("/api/posts/{uuid}/like/"));
        then.status(204);
    });

    let client = ApiClient::new(&server.base_url()).expect("client should build");
    let portfolio = Portfolio::new(client, CacheConfig::default());

    // Miss, then hit, then invalidate via a like, then stale-serve with
    // background revalidation.
    portfolio.posts().await.expect("miss read");
    portfolio.posts().await.expect("fresh hit");
    portfolio.like_post(uuid).await.expect("like");
    portfolio.posts().await.expect("stale read");

    let names: HashSet<String> = snapshotter
        .snapshot()
        .into_vec()
        .into_iter()
        .map(|(composite_key, _, _, _)| composite_key.key().name().to_string())
        .collect();

    let expected = [
        METRIC_CACHE_HIT,
        METRIC_CACHE_MISS,
        METRIC_CACHE_REVALIDATE,
        METRIC_CACHE_INVALIDATE,
    ];

    for metric in expected {
        assert!(names.contains(metric), "missing metric: {metric}");
    }
}
