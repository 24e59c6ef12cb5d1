//! Fetch, enrichment and pipeline tests against a local HTTP server
use serde_json::json;
use sift_core::answer::{AnthropicAnswer, DemoAnswer, OpenAiAnswer};
use sift_core::fetch::DEFAULT_USER_AGENT;
use sift_core::search::{BraveSearch, DemoSearch};
use sift_core::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn article_page(topic: &str) -> String {
    let paragraph = format!("{topic} is explained here in enough detail to pass the minimum length. ").repeat(5);
    format!(
        "<html><head><script>track()</script></head><body><nav>Menu</nav><article><p>{paragraph}</p></article></body></html>"
    )
}

async fn mount_page(server: &MockServer, route: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_http_fetcher_returns_body_and_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("User-Agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>hello</p>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let body = fetcher.fetch(&format!("{}/page", server.uri())).await.unwrap();
    assert_eq!(body, "<p>hello</p>");
}

#[tokio::test]
async fn test_http_fetcher_rejects_non_ok_status() {
    let server = MockServer::start().await;
    mount_page(&server, "/gone", 404, "not here".into()).await;

    let url = format!("{}/gone", server.uri());
    let err = fetch_url(&url, &FetchConfig::default()).await.unwrap_err();
    assert!(matches!(err, SiftError::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_http_fetcher_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = FetchConfig { timeout: 1, ..Default::default() };
    let err = fetch_url(&server.uri(), &config).await.unwrap_err();
    assert!(matches!(err, SiftError::Timeout { timeout: 1 }));
}

#[tokio::test]
async fn test_enrich_over_http_isolates_failures() {
    let server = MockServer::start().await;
    mount_page(&server, "/ok", 200, article_page("Ownership")).await;
    mount_page(&server, "/missing", 404, String::new()).await;
    mount_page(&server, "/scripts", 200, "<html><body><script>app()</script></body></html>".into()).await;

    let results = vec![
        SearchResult::new("ok", format!("{}/ok", server.uri()), "first"),
        SearchResult::new("missing", format!("{}/missing", server.uri()), "second"),
        SearchResult::new("scripts", format!("{}/scripts", server.uri()), "third"),
        SearchResult::new("bad", "not a url", "fourth"),
    ];

    let enricher = Enricher::http(&FetchConfig::default(), ExtractConfig::default(), EnrichConfig::default()).unwrap();
    let enriched = enricher.enrich(results.clone()).await;

    assert_eq!(enriched.len(), 4);
    let content = enriched[0].content.as_deref().unwrap();
    assert!(content.starts_with("Ownership is explained here"));
    assert!(!content.contains("Menu"));
    for (before, after) in results.iter().zip(&enriched).skip(1) {
        assert_eq!(before, after);
    }
}

#[tokio::test]
async fn test_pipeline_with_brave_and_failing_openai() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "web": {"results": [
                {"title": "Guide", "url": format!("{}/guide", server.uri()), "description": "Guide snippet"},
                {"title": "Down", "url": format!("{}/down", server.uri()), "description": "Down snippet"}
            ]}
        })))
        .mount(&server)
        .await;
    mount_page(&server, "/guide", 200, article_page("Borrowing")).await;
    mount_page(&server, "/down", 503, String::new()).await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": {"message": "boom"}})))
        .expect(1)
        .mount(&server)
        .await;

    let search = SearchService::new(vec![SearchBackend::Brave(
        BraveSearch::new(Some("k".into())).with_base_url(server.uri()),
    )]);
    let answer = AnswerService::new(vec![
        AnswerBackend::OpenAi(OpenAiAnswer::new(Some("k".into())).with_base_url(server.uri())),
        AnswerBackend::Demo(DemoAnswer),
    ]);
    let enricher = Enricher::http(&FetchConfig::default(), ExtractConfig::default(), EnrichConfig::default()).unwrap();
    let pipeline = Pipeline::new(search, enricher, answer);

    let response = pipeline.run("borrowing").await.unwrap();

    assert_eq!(response.answer, PLACEHOLDER_ANSWER);
    assert!(response.related_questions.is_empty());
    assert_eq!(response.sources.len(), 2);
    assert_eq!(response.sources[0].title, "Guide");
    assert!(response.sources[0].content.as_deref().unwrap().starts_with("Borrowing is explained"));
    assert_eq!(response.sources[1].content, None);
}

#[tokio::test]
async fn test_pipeline_search_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let search = SearchService::new(vec![
        SearchBackend::Brave(BraveSearch::new(Some("k".into())).with_base_url(server.uri())),
        SearchBackend::Demo(DemoSearch),
    ]);
    let enricher = Enricher::http(&FetchConfig::default(), ExtractConfig::default(), EnrichConfig::default()).unwrap();
    let pipeline = Pipeline::new(search, enricher, AnswerService::new(vec![AnswerBackend::Demo(DemoAnswer)]));

    let err = pipeline.run("rust").await.unwrap_err();
    assert!(matches!(err, SiftError::Provider { provider: "Brave Search", .. }));
}

#[tokio::test]
async fn test_pipeline_anthropic_answer_with_related_questions() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{"type": "text", "text": "Rust is fast [1].\n\n- Is Rust safe?\n- Is Rust hard?"}]
        })))
        .mount(&server)
        .await;

    let answer = AnswerService::new(vec![
        AnswerBackend::OpenAi(OpenAiAnswer::new(None)),
        AnswerBackend::Anthropic(AnthropicAnswer::new(Some("k".into())).with_base_url(server.uri())),
    ]);
    let enricher = Enricher::http(&FetchConfig::default(), ExtractConfig::default(), EnrichConfig::default()).unwrap();
    let pipeline = Pipeline::new(SearchService::new(vec![SearchBackend::Demo(DemoSearch)]), enricher, answer)
        .without_enrichment();

    let response = pipeline.run("rust").await.unwrap();
    assert_eq!(response.answer, "Rust is fast [1].\n\n- Is Rust safe?\n- Is Rust hard?");
    assert_eq!(response.related_questions, vec!["Is Rust safe?", "Is Rust hard?"]);
    assert_eq!(response.sources, DemoSearch.results("rust"));
}

#[tokio::test]
async fn test_five_mocked_results_and_failing_answer_backend() {
    let server = MockServer::start().await;
    let mocked: Vec<_> = (1..=5)
        .map(|i| json!({"title": format!("Result {i}"), "url": format!("https://r{i}.example"), "description": format!("Snippet {i}")}))
        .collect();
    Mock::given(method("GET"))
        .and(path("/res/v1/web/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"web": {"results": mocked}})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = Config::builder().brave_api_key("k").openai_api_key("k").build();
    let search = SearchService::new(vec![SearchBackend::Brave(
        BraveSearch::new(config.brave_api_key.clone()).with_base_url(server.uri()),
    )]);
    let answer = AnswerService::new(vec![AnswerBackend::OpenAi(
        OpenAiAnswer::new(config.openai_api_key.clone()).with_base_url(server.uri()),
    )]);
    let enricher = Enricher::http(&config.fetch, config.extract.clone(), config.enrich.clone()).unwrap();
    let pipeline = Pipeline::new(search, enricher, answer).without_enrichment();

    let response = pipeline.run("test").await.unwrap();

    let expected: Vec<SearchResult> = (1..=5)
        .map(|i| SearchResult::new(format!("Result {i}"), format!("https://r{i}.example"), format!("Snippet {i}")))
        .collect();
    assert_eq!(response.query, "test");
    assert_eq!(response.answer, "Unable to generate AI summary at this time.");
    assert_eq!(response.sources, expected);
    assert!(response.related_questions.is_empty());
}
