//! HTTP [`Endpoint`] implementation.

use std::time;

use common::operations::{By, Select};
use derive_more::{Display, Error as StdError};
use reqwest::StatusCode;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{employee, promotion::Eligibility},
    infra::{endpoint, Endpoint},
};

/// [`Http`] client configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the promotion eligibility service.
    pub base_url: String,

    /// Timeout of a single request.
    pub timeout: time::Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5057".to_owned(),
            timeout: time::Duration::from_secs(10),
        }
    }
}

/// HTTP client of the promotion eligibility service.
#[derive(Clone, Debug)]
pub struct Http {
    /// Underlying HTTP client.
    client: reqwest::Client,

    /// Base URL requests are sent to, without a trailing slash.
    base_url: String,
}

impl Http {
    /// Creates a new [`Http`] client with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If failed to build the underlying HTTP client.
    pub fn new(conf: &Config) -> Result<Self, Traced<endpoint::Error>> {
        let client = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(|e| tracerr::new!(Error::Client(e)))
            .map_err(tracerr::map_from)?;
        Ok(Self {
            client,
            base_url: conf.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Returns URL of the eligibility of the [`Employee`] with the provided
    /// ID.
    ///
    /// [`Employee`]: crate::domain::Employee
    fn eligibility_url(&self, id: employee::Id) -> String {
        format!("{}/api/promotioneligibilities/{id}", self.base_url)
    }
}

impl Endpoint<Select<By<Eligibility, employee::Id>>> for Http {
    type Ok = Eligibility;
    type Err = Traced<endpoint::Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Eligibility, employee::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        let url = self.eligibility_url(by.into_inner());
        log::debug!("checking promotion eligibility at `{url}`");

        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))
            .map_err(tracerr::map_from)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::map_from(tracerr::new!(
                Error::UnexpectedStatus(status)
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| tracerr::new!(Error::Request(e)))
            .map_err(tracerr::map_from)?;
        serde_json::from_slice(&body)
            .map_err(|e| tracerr::new!(Error::MalformedBody(e)))
            .map_err(tracerr::map_from)
    }
}

/// [`Http`] endpoint error.
#[derive(Debug, Display, StdError)]
pub enum Error {
    /// Failed to build the HTTP client.
    #[display("failed to build HTTP client: {_0}")]
    Client(reqwest::Error),

    /// Request failed to complete.
    #[display("request failed: {_0}")]
    Request(reqwest::Error),

    /// Response has a non-success status.
    #[display("unexpected response status: {_0}")]
    UnexpectedStatus(#[error(not(source))] StatusCode),

    /// Response body is not a valid [`Eligibility`].
    #[display("malformed response body: {_0}")]
    MalformedBody(serde_json::Error),
}

#[cfg(test)]
mod spec {
    use std::time;

    use axum::{extract::Path, http::StatusCode, routing::get, Router};
    use common::{
        operations::{By, Select},
        Handler as _,
    };
    use tokio::net::TcpListener;
    use tracerr::Traced;

    use crate::{
        domain::{employee, promotion::Eligibility},
        infra::endpoint,
    };

    use super::{Config, Error, Http};

    /// Spawns a server answering eligibility requests with the provided
    /// status and body, returning its base URL.
    async fn serve(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/api/promotioneligibilities/:id",
            get(move |Path(id): Path<String>| async move {
                assert!(id.parse::<employee::Id>().is_ok(), "{id}");
                (status, [("content-type", "application/json")], body)
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        }));
        format!("http://{addr}/")
    }

    fn client(base_url: String) -> Http {
        Http::new(&Config {
            base_url,
            timeout: time::Duration::from_secs(5),
        })
        .unwrap()
    }

    async fn check(
        http: &Http,
    ) -> Result<Eligibility, Traced<endpoint::Error>> {
        http.execute(Select(By::new(employee::Id::new()))).await
    }

    #[tokio::test]
    async fn reads_eligibility() {
        let http = client(
            serve(StatusCode::OK, r#"{"eligibleForPromotion":true}"#).await,
        );

        assert_eq!(
            check(&http).await.unwrap(),
            Eligibility {
                eligible_for_promotion: true,
            },
        );
    }

    #[tokio::test]
    async fn fails_on_non_success_status() {
        let http = client(
            serve(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"eligibleForPromotion":true}"#,
            )
            .await,
        );

        let err = check(&http).await.unwrap_err();
        let endpoint::Error::Http(err): &endpoint::Error = err.as_ref();
        assert!(
            matches!(err, Error::UnexpectedStatus(s) if s.as_u16() == 500),
            "{err}",
        );
    }

    #[tokio::test]
    async fn fails_on_malformed_body() {
        let http = client(serve(StatusCode::OK, r#"{"eligible":"yes"}"#).await);

        let err = check(&http).await.unwrap_err();
        let endpoint::Error::Http(err): &endpoint::Error = err.as_ref();
        assert!(matches!(err, Error::MalformedBody(_)), "{err}");
    }

    #[tokio::test]
    async fn fails_when_unreachable() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let http = client(format!("http://{addr}"));

        let err = check(&http).await.unwrap_err();
        let endpoint::Error::Http(err): &endpoint::Error = err.as_ref();
        assert!(matches!(err, Error::Request(_)), "{err}");
    }
}
