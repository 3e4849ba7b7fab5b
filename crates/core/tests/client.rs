use std::time::Duration;

use anyhow::Result;
use clipsight_core::{
    AnalysisClient, ClipsightError, Configuration, SAMPLE_DELAY, default_sentiment, sample_record,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LINK: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn webhook_config(server: &MockServer) -> Configuration {
    Configuration {
        endpoint_url: format!("{}/webhook/analyze", server.uri()),
        use_sample_data: false,
    }
}

/// An address nothing listens on.
fn closed_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/webhook")
}

#[tokio::test(start_paused = true)]
async fn test_sample_mode_returns_sample_after_delay() -> Result<()> {
    let config = Configuration {
        endpoint_url: closed_endpoint(),
        use_sample_data: true,
    };

    let started = tokio::time::Instant::now();
    let record = AnalysisClient::new().analyze(LINK, &config).await?;

    assert_eq!(record, sample_record());
    assert!(started.elapsed() >= SAMPLE_DELAY);
    Ok(())
}

#[tokio::test]
async fn test_sample_mode_makes_no_request() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = Configuration {
        use_sample_data: true,
        ..webhook_config(&server)
    };
    let client = AnalysisClient::new().with_sample_delay(Duration::ZERO);

    assert_eq!(client.analyze(LINK, &config).await?, sample_record());
    Ok(())
}

#[tokio::test]
async fn test_empty_endpoint_is_configuration_error() {
    let config = Configuration {
        endpoint_url: "   ".to_string(),
        use_sample_data: false,
    };

    let result = AnalysisClient::new().analyze(LINK, &config).await;

    let err = result.unwrap_err();
    assert!(matches!(err, ClipsightError::Configuration));
    assert!(err.to_string().starts_with("Webhook URL is missing"));
}

#[tokio::test]
async fn test_posts_link_as_json_and_normalizes_reply() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/webhook/analyze"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "url": LINK })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "body": {
                "videoTitle": "Never Gonna Give You Up",
                "tldr": "A classic.",
                "points": "catchy\n\nmemorable",
                "tags": ["music", {"label": "80s", "relevance": 90}],
                "sentiment": [{"name": "Positive", "value": 100}]
            }
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let record = AnalysisClient::new()
        .analyze(LINK, &webhook_config(&server))
        .await?;

    assert_eq!(record.title, "Never Gonna Give You Up");
    assert_eq!(record.summary, "A classic.");
    assert_eq!(record.description, "A classic.");
    assert_eq!(record.key_points, vec!["catchy", "memorable"]);
    assert_eq!(record.topics.len(), 2);
    assert_eq!(record.topics[1].name, "80s");
    assert_eq!(record.topics[1].relevance, 90.0);
    assert_eq!(record.sentiment.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&server)
        .await;

    let err = AnalysisClient::new()
        .analyze(LINK, &webhook_config(&server))
        .await
        .unwrap_err();

    assert!(matches!(err, ClipsightError::Transport { status: 502 }));
    assert_eq!(err.to_string(), "Webhook failed with status: 502");
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let config = Configuration {
        endpoint_url: closed_endpoint(),
        use_sample_data: false,
    };

    let err = AnalysisClient::new()
        .analyze(LINK, &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ClipsightError::Network { .. }));
    assert!(err.to_string().contains("Check CORS settings"));
}

#[tokio::test]
async fn test_malformed_endpoint_is_not_reported_as_network_error() {
    let config = Configuration {
        endpoint_url: "not a url".to_string(),
        use_sample_data: false,
    };

    let err = AnalysisClient::new()
        .analyze(LINK, &config)
        .await
        .unwrap_err();

    assert!(matches!(err, ClipsightError::Unknown { .. }));
}

#[tokio::test]
async fn test_non_json_body_yields_defaulted_record() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>Workflow started</html>"))
        .mount(&server)
        .await;

    let record = AnalysisClient::new()
        .analyze(LINK, &webhook_config(&server))
        .await?;

    assert_eq!(record.title, "Analyzed Video");
    assert_eq!(record.summary, "No summary available.");
    assert!(record.key_points.is_empty());
    assert_eq!(record.sentiment, default_sentiment());
    Ok(())
}

#[tokio::test]
async fn test_empty_body_yields_defaulted_record() -> Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let record = AnalysisClient::new()
        .analyze(LINK, &webhook_config(&server))
        .await?;

    assert_eq!(record.title, "Analyzed Video");
    Ok(())
}
