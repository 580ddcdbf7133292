//! Incident API operations

use crate::config::api;
use crate::kuma::envelope::Outcome;
use crate::kuma::models::{EventQuery, EventRow};
use crate::kuma::KumaClient;

use super::models::{Incident, IncidentsPage};

impl KumaClient {
    /// List incidents matching the filters, across all pages
    pub async fn list_incidents(&self, query: &EventQuery) -> Outcome<Vec<EventRow>> {
        self.fetch_all_pages::<Incident, IncidentsPage>(
            api::INCIDENTS,
            &query.to_query(),
            "incidents",
        )
        .await
        .map(|incidents| incidents.into_iter().map(EventRow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_list_incidents_reads_nested_key() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/incidents"))
            .and(query_param("page", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "incidents": [
                    {
                        "id": "i-1",
                        "name": "Phishing wave",
                        "status": "assigned",
                        "createdAt": "2024-05-01T10:00:00Z",
                        "updatedAt": "2024-05-02T09:00:00Z",
                        "assigneeName": "soc-l1",
                        "tenantName": "Main",
                        "tenantID": "t-1"
                    }
                ]
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let outcome = client.list_incidents(&EventQuery::default()).await;

        assert!(outcome.is_ok());
        assert_eq!(outcome.payload.len(), 1);
        let row = &outcome.payload[0];
        assert_eq!(row.name, "Phishing wave");
        assert_eq!(row.first_seen, "2024-05-01T10:00:00Z");
        assert_eq!(row.last_seen, "2024-05-02T09:00:00Z");
        assert_eq!(row.assignee, "soc-l1");
    }

    #[tokio::test]
    async fn test_list_incidents_rejects_bare_array() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/incidents"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&mock_server)
            .await;

        let outcome = client.list_incidents(&EventQuery::default()).await;

        assert!(!outcome.is_ok());
        assert!(outcome.envelope.details().contains("Failed to parse incidents"));
    }

    #[tokio::test]
    async fn test_list_incidents_status_filter() {
        let mock_server = MockServer::start().await;
        let client = KumaClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/incidents"))
            .and(query_param("status", "open"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "incidents": [] })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let query = EventQuery {
            statuses: vec!["open".to_string()],
            ..Default::default()
        };
        let outcome = client.list_incidents(&query).await;

        assert!(outcome.is_ok());
        assert!(outcome.payload.is_empty());
    }
}
