//! Conversion endpoint integration tests.

#[cfg(test)]
mod tests {
    use crate::{client, url, valid_record};

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_convert_valid_record() {
        let response = client()
            .post(url("/api/convert"))
            .json(&valid_record())
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 200);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["success"], true);

        let xml = body["xmlContent"].as_str().expect("xml content");
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<Title>Test Document</Title>"));
        assert!(xml.contains("<Countries>US,CA</Countries>"));
        assert!(xml.contains("<PersonGroup sequence=\"1\">"));
        assert!(xml.contains("<Name>Analytical Contacts</Name>"));
        assert!(xml.contains("<DisplayName>John Doe</DisplayName>"));
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_wrong_status() {
        let mut record = valid_record();
        record["Status"] = serde_json::json!(2);

        let response = client()
            .post(url("/api/convert"))
            .json(&record)
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["success"], false);
        assert_eq!(body["errorMessage"], "Status must be equal to 3");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_early_publish_date() {
        let mut record = valid_record();
        record["PublishDate"] = serde_json::json!("2023-12-31");

        let response = client()
            .post(url("/api/convert"))
            .json(&record)
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 400);
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body["errorMessage"], "Publish date must be on or after 2024-01-01");
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_reject_malformed_body() {
        let response = client()
            .post(url("/api/convert"))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    #[ignore = "requires running server"]
    async fn test_should_download_xml_file() {
        let response = client()
            .post(url("/api/convert/file"))
            .json(&valid_record())
            .send()
            .await
            .expect("request");

        assert_eq!(response.status(), 200);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/xml")
        );
        assert!(
            response
                .headers()
                .get("content-disposition")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v.contains("attachment"))
        );

        let xml = response.text().await.expect("body");
        assert!(xml.starts_with("<?xml"));
    }
}
