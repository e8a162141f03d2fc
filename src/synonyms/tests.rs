//! Synonym Module Tests
//!
//! The HTTP client is exercised against an in-process Axum server that plays the
//! upstream thesaurus, so no test leaves the loopback interface.

#[cfg(test)]
mod tests {
    use crate::error::SynonymLookupError;
    use crate::synonyms::datamuse::DatamuseProvider;
    use crate::synonyms::provider::{StaticSynonyms, SynonymProvider};
    use crate::synonyms::types::SynonymEntry;

    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::{Json, Router, routing::get};
    use std::collections::HashMap;
    use std::time::Duration;

    async fn spawn_upstream(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn thesaurus(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        let word = params.get("rel_syn").cloned().unwrap_or_default();
        let body = match word.as_str() {
            "fast" => serde_json::json!([
                {"word": "quick", "score": 1200},
                {"word": "rapid", "score": 900},
                {"word": "quick", "score": 10}
            ]),
            "car" => serde_json::json!([{"word": "auto", "synonyms": ["automobile"]}]),
            "big" => serde_json::json!([
                {"word": "large", "score": 12.75},
                {"word": "huge", "score": -1}
            ]),
            _ => serde_json::json!([]),
        };
        Json(body)
    }

    // Answers with the word it was asked about, to check query encoding.
    async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
        let word = params.get("rel_syn").cloned().unwrap_or_default();
        Json(serde_json::json!([{ "word": word }]))
    }

    fn provider(base_url: &str) -> DatamuseProvider {
        DatamuseProvider::new(base_url, Duration::from_secs(2)).unwrap()
    }

    // ============================================================
    // STATIC PROVIDER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_static_synonyms_lookup() {
        let synonyms = StaticSynonyms::new().with("fast", &["quick", "rapid"]);

        assert_eq!(synonyms.len(), 1);
        assert_eq!(
            synonyms.lookup("fast").await.unwrap(),
            vec!["quick".to_string(), "rapid".to_string()]
        );
        assert!(synonyms.lookup("slow").await.unwrap().is_empty());
    }

    // ============================================================
    // WIRE FORMAT TESTS
    // ============================================================

    #[test]
    fn test_synonym_entry_tolerates_missing_and_extra_fields() {
        let entries: Vec<SynonymEntry> = serde_json::from_str(
            r#"[{"word":"quick","score":1.5},{"word":"rapid","score":-3,"tags":["syn"]},{"word":"swift"}]"#,
        )
        .unwrap();

        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["quick", "rapid", "swift"]);
        assert!(entries[2].synonyms.is_empty());
    }

    #[test]
    fn test_synonym_entry_requires_word() {
        let result: Result<Vec<SynonymEntry>, _> = serde_json::from_str(r#"[{"score":5}]"#);
        assert!(result.is_err());
    }

    // ============================================================
    // DATAMUSE CLIENT TESTS
    // ============================================================

    #[tokio::test]
    async fn test_datamuse_returns_words_in_order() {
        let base = spawn_upstream(Router::new().route("/words", get(thesaurus))).await;

        let synonyms = provider(&base).lookup("fast").await.unwrap();

        // Duplicates from the provider are passed through.
        assert_eq!(synonyms, vec!["quick", "rapid", "quick"]);
    }

    #[tokio::test]
    async fn test_datamuse_uses_word_field_only() {
        let base = spawn_upstream(Router::new().route("/words", get(thesaurus))).await;

        let synonyms = provider(&base).lookup("car").await.unwrap();
        assert_eq!(synonyms, vec!["auto"]);
    }

    #[tokio::test]
    async fn test_datamuse_ignores_odd_scores() {
        let base = spawn_upstream(Router::new().route("/words", get(thesaurus))).await;

        let synonyms = provider(&base).lookup("big").await.unwrap();
        assert_eq!(synonyms, vec!["large", "huge"]);
    }

    #[tokio::test]
    async fn test_datamuse_empty_result() {
        let base = spawn_upstream(Router::new().route("/words", get(thesaurus))).await;

        let synonyms = provider(&base).lookup("zxqv").await.unwrap();
        assert!(synonyms.is_empty());
    }

    #[tokio::test]
    async fn test_datamuse_encodes_word() {
        let base = spawn_upstream(Router::new().route("/words", get(echo))).await;

        let synonyms = provider(&base).lookup("rock & roll").await.unwrap();
        assert_eq!(synonyms, vec!["rock & roll"]);
    }

    #[tokio::test]
    async fn test_datamuse_trims_trailing_slash() {
        let base = spawn_upstream(Router::new().route("/words", get(thesaurus))).await;

        let client = provider(&format!("{}/", base));
        assert_eq!(client.base_url(), base);
        assert_eq!(client.lookup("car").await.unwrap(), vec!["auto"]);
    }

    #[tokio::test]
    async fn test_datamuse_non_success_status() {
        let app = Router::new().route(
            "/words",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
        );
        let base = spawn_upstream(app).await;

        let result = provider(&base).lookup("fast").await;

        match result {
            Err(SynonymLookupError::Status { word, status }) => {
                assert_eq!(word, "fast");
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_datamuse_invalid_payload() {
        let app = Router::new().route("/words", get(|| async { "definitely not json" }));
        let base = spawn_upstream(app).await;

        let result = provider(&base).lookup("fast").await;
        assert!(matches!(result, Err(SynonymLookupError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_datamuse_unreachable_service() {
        // Grab a free port, then release it so nothing is listening there.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = provider(&format!("http://{}", addr)).lookup("fast").await;

        let err = result.unwrap_err();
        assert!(matches!(err, SynonymLookupError::Transport { .. }));
        assert!(err.to_string().contains("'fast'"));
    }

    #[tokio::test]
    async fn test_datamuse_request_timeout() {
        let app = Router::new().route(
            "/words",
            get(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(serde_json::json!([{"word": "late"}]))
            }),
        );
        let base = spawn_upstream(app).await;

        let slow_client = DatamuseProvider::new(&base, Duration::from_millis(50)).unwrap();
        let result = slow_client.lookup("fast").await;

        assert!(matches!(result, Err(SynonymLookupError::Transport { .. })));
    }
}
