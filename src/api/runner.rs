//! The `fetchJson` effect runner.
//!
//! One GET per descriptor: no retry, no timeout, no cancellation. Every
//! outcome becomes an `Action`, so failures reach the state instead of
//! vanishing.

use log::{info, warn};

use super::client::JsonFetcher;
use super::error::FetchError;
use crate::core::action::{Action, Completion, FetchJson};
use crate::core::person::{PersonDetail, PersonSummary};

/// Run a fetch descriptor and return the action to dispatch with its result.
pub async fn fetch_json(fetcher: &dyn JsonFetcher, request: &FetchJson) -> Action {
    info!("Fetching {} for {}", request.url, request.action);
    match fetch_and_decode(fetcher, request).await {
        Ok(action) => action,
        Err(e) => {
            warn!("Fetch for {} failed: {}", request.action, e);
            Action::FetchFailed {
                action: request.action,
                message: e.to_string(),
            }
        }
    }
}

async fn fetch_and_decode(
    fetcher: &dyn JsonFetcher,
    request: &FetchJson,
) -> Result<Action, FetchError> {
    let data = fetcher.get_json(&request.url).await?;
    decode(request.action, data)
}

/// Fold a decoded payload into the completion action it was fetched for.
pub fn decode(completion: Completion, data: serde_json::Value) -> Result<Action, FetchError> {
    match completion {
        Completion::GotNames => serde_json::from_value::<Vec<PersonSummary>>(data)
            .map(Action::GotNames)
            .map_err(|e| FetchError::Parse(e.to_string())),
        Completion::GotBio => serde_json::from_value::<PersonDetail>(data)
            .map(Action::GotBio)
            .map_err(|e| FetchError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubFetcher;
    use serde_json::json;

    #[test]
    fn test_decode_names() {
        let data = json!([{"id": 1, "name": "A"}, {"id": 2, "name": "B", "email": "b@x"}]);
        let action = decode(Completion::GotNames, data).unwrap();
        match action {
            Action::GotNames(people) => {
                assert_eq!(people.len(), 2);
                assert_eq!(people[1].name, "B");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn test_decode_bio_missing_company_is_parse_error() {
        let data = json!({"id": 1, "name": "A"});
        let err = decode(Completion::GotBio, data).unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_json_success_dispatches_completion() {
        let fetcher = StubFetcher::ok(json!({
            "id": 3,
            "name": "Clementine Bauch",
            "company": {"name": "Romaguera-Jacobson", "bs": "e-enable strategic applications"}
        }));
        let request = FetchJson {
            url: "http://api.test/users/3".to_string(),
            action: Completion::GotBio,
        };

        let action = fetch_json(&fetcher, &request).await;

        match action {
            Action::GotBio(person) => assert_eq!(person.company.bs, "e-enable strategic applications"),
            other => panic!("unexpected action: {other:?}"),
        }
        assert_eq!(fetcher.requested(), vec!["http://api.test/users/3".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_json_failure_becomes_fetch_failed() {
        let fetcher = StubFetcher::err(FetchError::Network("connection refused".to_string()));
        let request = FetchJson {
            url: "http://api.test/users".to_string(),
            action: Completion::GotNames,
        };

        let action = fetch_json(&fetcher, &request).await;

        assert_eq!(
            action,
            Action::FetchFailed {
                action: Completion::GotNames,
                message: "network error: connection refused".to_string(),
            }
        );
    }
}
