//! Health endpoint integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, url};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_report_running() {
        let response = client().get(url("/health")).send().await.expect("request");

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_return_not_found_for_unknown_route() {
        let response = client()
            .get(url("/api/unknown"))
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 404);
    }
}
