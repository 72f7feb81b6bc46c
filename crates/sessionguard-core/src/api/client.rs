//! API client for the web app's backend.
//!
//! `AuthClient` owns the HTTP connection pool and cookie store and works
//! against an injected `Session` and `Navigator`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, Request, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::message::extract_message;
use super::ApiError;
use crate::auth::Session;
use crate::config::Config;
use crate::messages;
use crate::models::AuthResponse;
use crate::router::{Navigator, LOGIN_PATH};

// ============================================================================
// Constants
// ============================================================================

const REGISTER_ENDPOINT: &str = "/api/auth/register";
const LOGIN_ENDPOINT: &str = "/api/auth/login";
const REFRESH_ENDPOINT: &str = "/api/auth/refresh";

/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    config: Config,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl AuthClient {
    /// Create a new client. Cookies set by the backend are kept and sent
    /// back on every request, including refresh.
    pub fn new(
        config: Config,
        session: Arc<Session>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let mut builder = Client::builder().cookie_store(true);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            config,
            session,
            navigator,
        })
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Start a request to a path on the configured backend.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.config.endpoint(path))
    }

    // ===== Auth Endpoints =====

    /// Create an account. Stores the access token if the server returns one.
    pub async fn register<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, REGISTER_ENDPOINT)
            .json(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let mut message = extract_message(response).await;
            if message.is_empty() {
                message = match status {
                    StatusCode::CONFLICT => messages::REGISTER_CONFLICT,
                    StatusCode::FORBIDDEN => messages::REGISTER_FORBIDDEN,
                    _ => messages::REGISTER_FAILED,
                }
                .to_string();
            }
            return Err(ApiError::rejected(status, &message));
        }

        let auth = Self::parse_auth(response).await?;
        self.store_token(&auth);
        info!("Registered");
        Ok(auth)
    }

    /// Log in. Stores the access token if the server returns one.
    pub async fn login<P: Serialize + ?Sized>(
        &self,
        payload: &P,
    ) -> Result<AuthResponse, ApiError> {
        let response = self
            .request(Method::POST, LOGIN_ENDPOINT)
            .json(payload)
            .send()
            .await?;
        let response = Self::check_response(response, messages::LOGIN_FAILED).await?;

        let auth = Self::parse_auth(response).await?;
        self.store_token(&auth);
        info!("Logged in");
        Ok(auth)
    }

    /// Renew the session from the refresh cookie. Stores the new access
    /// token if the server returns one; otherwise the current one is kept.
    pub async fn refresh(&self) -> Result<AuthResponse, ApiError> {
        let response = self.request(Method::POST, REFRESH_ENDPOINT).send().await?;
        let response = Self::check_response(response, messages::REFRESH_FAILED).await?;

        let auth = Self::parse_auth(response).await?;
        self.store_token(&auth);
        info!(renewed = auth.token().is_some(), "Session refreshed");
        Ok(auth)
    }

    /// Forget the local token. The server session is left to expire.
    pub fn logout(&self) {
        self.session.clear_token();
        info!("Logged out");
    }

    // ===== Authenticated Requests =====

    /// Send `request` with the current bearer token.
    ///
    /// Any status other than 401 is returned as is. On 401 the session is
    /// refreshed once and the request retried once, and the retry's response
    /// is returned whatever it is. If the refresh fails the token is cleared,
    /// the user is sent to the login route and the original 401 is returned.
    /// A request whose body cannot be replayed still refreshes the session
    /// but returns the original 401 instead of retrying.
    pub async fn auth_fetch(&self, mut request: Request) -> Result<Response, ApiError> {
        // Taken before the token is attached so the retry starts from the
        // caller's own headers
        let replay = request.try_clone();
        self.attach_token(&mut request)?;

        debug!(method = %request.method(), url = %request.url(), "Sending request");
        let response = self.client.execute(request).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        debug!(url = %response.url(), "Got 401, refreshing session");
        if let Err(e) = self.refresh().await {
            warn!(error = %e, "Session refresh failed, logging out");
            self.session.clear_token();
            self.session.stage_message(messages::TOKEN_EXPIRED);
            self.navigator.redirect_to(LOGIN_PATH);
            return Ok(response);
        }

        let Some(mut retry) = replay else {
            warn!(url = %response.url(), "Session refreshed but the request cannot be replayed");
            return Ok(response);
        };
        self.attach_token(&mut retry)?;
        debug!(url = %retry.url(), "Retrying with renewed token");
        Ok(self.client.execute(retry).await?)
    }

    /// Build and send through `auth_fetch`.
    pub async fn auth_send(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        self.auth_fetch(builder.build()?).await
    }

    /// Pass successful responses through; turn failures into a localized
    /// `ApiError::Rejected`, using `fallback` when the response says nothing.
    pub async fn check_response(
        response: Response,
        fallback: &str,
    ) -> Result<Response, ApiError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let message = extract_message(response).await;
        let message = if message.is_empty() { fallback } else { &message };
        Err(ApiError::rejected(status, message))
    }

    fn attach_token(&self, request: &mut Request) -> Result<(), ApiError> {
        if let Some(token) = self.session.get_token() {
            let mut value = header::HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            request.headers_mut().insert(header::AUTHORIZATION, value);
        }
        Ok(())
    }

    fn store_token(&self, auth: &AuthResponse) {
        if let Some(token) = auth.token() {
            self.session.set_token(token);
        }
    }

    async fn parse_auth(response: Response) -> Result<AuthResponse, ApiError> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("Failed to parse auth response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LoginRequest, RegisterRequest};
    use crate::router::{RecordingNavigator, Router};
    use tokio::sync::broadcast::error::TryRecvError;
    use wiremock::matchers::{bearer_token, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Harness {
        server: MockServer,
        session: Arc<Session>,
        navigator: Arc<RecordingNavigator>,
        client: AuthClient,
    }

    async fn harness() -> Harness {
        let server = MockServer::start().await;
        let session = Arc::new(Session::in_memory());
        let navigator = Arc::new(RecordingNavigator::default());
        let config = Config {
            base_url: server.uri(),
            ..Config::default()
        };
        let client = AuthClient::new(config, session.clone(), navigator.clone()).unwrap();
        Harness {
            server,
            session,
            navigator,
            client,
        }
    }

    fn count_events(rx: &mut tokio::sync::broadcast::Receiver<crate::SessionChanged>) -> usize {
        let mut count = 0;
        while rx.try_recv().is_ok() {
            count += 1;
        }
        assert_eq!(rx.try_recv(), Err(TryRecvError::Empty));
        count
    }

    async fn get_problems(client: &AuthClient) -> Response {
        client
            .auth_send(client.request(Method::GET, "/api/problems"))
            .await
            .unwrap()
    }

    fn token_response(token: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "accessToken": token }))
    }

    #[tokio::test]
    async fn test_success_passes_through_without_refresh() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(method("GET"))
            .and(path("/api/problems"))
            .and(bearer_token("old"))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_other_failures_pass_through() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(h.session.is_logged_in());
    }

    #[tokio::test]
    async fn test_no_token_sends_no_authorization() {
        let h = harness().await;

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&h.server)
            .await;

        h.client.auth_send(h.client.request(Method::GET, "/api/problems")).await.unwrap();

        let requests = h.server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("authorization").is_none());
    }

    #[tokio::test]
    async fn test_401_refreshes_once_and_retries_with_new_token() {
        let h = harness().await;
        h.session.set_token("old");
        let mut events = h.session.subscribe();

        Mock::given(path("/api/problems"))
            .and(bearer_token("old"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/auth/refresh"))
            .respond_with(token_response("new"))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/problems"))
            .and(bearer_token("new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("fresh"))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.text().await.unwrap(), "fresh");
        assert_eq!(h.session.get_token().as_deref(), Some("new"));
        assert_eq!(count_events(&mut events), 1);
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_retry_result_is_returned_even_if_401() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(path("/api/problems"))
            .and(bearer_token("old"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(token_response("new"))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/problems"))
            .and(bearer_token("new"))
            .respond_with(ResponseTemplate::new(401).set_body_string("still no"))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.text().await.unwrap(), "still no");
        // The retry's 401 does not log the user out
        assert_eq!(h.session.get_token().as_deref(), Some("new"));
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_retry_replays_method_and_body() {
        let h = harness().await;
        h.session.set_token("old");
        let submission = serde_json::json!({"problemId": 3, "answer": "42"});

        Mock::given(method("POST"))
            .and(path("/api/check"))
            .and(bearer_token("old"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(token_response("new"))
            .mount(&h.server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/check"))
            .and(bearer_token("new"))
            .and(body_json(&submission))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&h.server)
            .await;

        let builder = h.client.request(Method::POST, "/api/check").json(&submission);
        let response = h.client.auth_send(builder).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_refresh_without_token_keeps_current_one() {
        let h = harness().await;
        h.session.set_token("old");
        let mut events = h.session.subscribe();

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(401))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/problems"))
            .and(bearer_token("old"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(h.session.get_token().as_deref(), Some("old"));
        assert_eq!(count_events(&mut events), 0);
    }

    #[tokio::test]
    async fn test_refresh_failure_logs_out_and_returns_original() {
        let h = harness().await;
        h.session.set_token("old");
        let mut events = h.session.subscribe();

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(401).set_body_string("original"))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.text().await.unwrap(), "original");

        assert!(!h.session.is_logged_in());
        assert_eq!(count_events(&mut events), 1);
        assert_eq!(h.session.take_message().as_deref(), Some("토큰이 만료되었습니다."));
        assert_eq!(h.navigator.history(), vec!["/login"]);
    }

    #[tokio::test]
    async fn test_refresh_transport_failure_logs_out() {
        let server = MockServer::start().await;
        let session = Arc::new(Session::in_memory());
        let navigator = Arc::new(RecordingNavigator::default());
        let config = Config {
            base_url: server.uri(),
            request_timeout_secs: Some(1),
            ..Config::default()
        };
        let client = AuthClient::new(config, session.clone(), navigator.clone()).unwrap();
        session.set_token("old");

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(401).set_body_string("original"))
            .expect(1)
            .mount(&server)
            .await;
        // Refresh never answers in time, so the client gives up on it
        Mock::given(path("/api/auth/refresh"))
            .respond_with(token_response("new").set_delay(Duration::from_secs(3)))
            .expect(1)
            .mount(&server)
            .await;

        let response = get_problems(&client).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.text().await.unwrap(), "original");

        assert!(!session.is_logged_in());
        assert_eq!(session.take_message().as_deref(), Some("토큰이 만료되었습니다."));
        assert_eq!(navigator.history(), vec!["/login"]);
    }

    #[tokio::test]
    async fn test_unreplayable_request_still_refreshes() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(path("/api/check"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(token_response("new"))
            .expect(1)
            .mount(&h.server)
            .await;

        let chunks: Vec<Result<&'static str, std::io::Error>> = vec![Ok("answer")];
        let body = reqwest::Body::wrap_stream(futures::stream::iter(chunks));
        let builder = h.client.request(Method::POST, "/api/check").body(body);

        let response = h.client.auth_send(builder).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(h.session.get_token().as_deref(), Some("new"));
        assert!(h.navigator.history().is_empty());
    }

    #[tokio::test]
    async fn test_unreplayable_request_logs_out_when_refresh_fails() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(path("/api/check"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;

        let chunks: Vec<Result<&'static str, std::io::Error>> = vec![Ok("answer")];
        let body = reqwest::Body::wrap_stream(futures::stream::iter(chunks));
        let builder = h.client.request(Method::POST, "/api/check").body(body);

        let response = h.client.auth_send(builder).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!h.session.is_logged_in());
        assert_eq!(h.session.take_message().as_deref(), Some("토큰이 만료되었습니다."));
        assert_eq!(h.navigator.last().as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_refresh_failure_moves_router_to_login() {
        let server = MockServer::start().await;
        let session = Arc::new(Session::in_memory());
        let router = Arc::new(Router::with_app_routes(session.clone()));
        let config = Config {
            base_url: server.uri(),
            ..Config::default()
        };
        let client = AuthClient::new(config, session.clone(), router.clone()).unwrap();

        session.set_token("old");
        router.navigate("/problem").unwrap();

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        get_problems(&client).await;
        assert_eq!(router.current().unwrap().path, "/login");
        // Navigating back to a guarded page now bounces
        assert_eq!(router.navigate("/problem").unwrap().path, "/login");
    }

    #[tokio::test]
    async fn test_login_stores_token() {
        let h = harness().await;
        let mut events = h.session.subscribe();
        let request = LoginRequest {
            username: "kim".to_string(),
            password: "pw".to_string(),
        };

        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(&request))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"accessToken": "tok", "nickname": "kim"})),
            )
            .expect(1)
            .mount(&h.server)
            .await;

        let auth = h.client.login(&request).await.unwrap();
        assert_eq!(auth.extra.get("nickname"), Some(&serde_json::json!("kim")));
        assert!(h.session.is_logged_in());
        assert_eq!(count_events(&mut events), 1);

        h.client.logout();
        assert!(!h.session.is_logged_in());
        assert_eq!(count_events(&mut events), 1);
    }

    #[tokio::test]
    async fn test_login_failure_messages() {
        let h = harness().await;
        let request = LoginRequest {
            username: "kim".to_string(),
            password: "wrong".to_string(),
        };

        Mock::given(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(serde_json::json!({"message": "비밀번호가 틀렸습니다."})),
            )
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/login"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&h.server)
            .await;

        let err = h.client.login(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "비밀번호가 틀렸습니다.");
        assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

        let err = h.client.login(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "로그인에 실패했습니다.");
        assert!(!h.session.is_logged_in());
    }

    #[tokio::test]
    async fn test_register_failure_messages() {
        let h = harness().await;
        let request = RegisterRequest {
            username: "kim".to_string(),
            email: "kim@example.com".to_string(),
            password: "pw".to_string(),
            nickname: None,
        };

        Mock::given(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(409))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(403))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&h.server)
            .await;

        // 409 already has a status default, so the registration-specific text never shows
        let err = h.client.register(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "이미 사용 중인 정보가 있습니다.");

        let err = h.client.register(&request).await.unwrap_err();
        assert_eq!(err.to_string(), messages::REGISTER_FORBIDDEN);

        let err = h.client.register(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "회원가입에 실패했습니다.");
    }

    #[tokio::test]
    async fn test_register_success_without_token() {
        let h = harness().await;

        Mock::given(method("POST"))
            .and(path("/api/auth/register"))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1})))
            .mount(&h.server)
            .await;

        let request = serde_json::json!({"username": "kim", "password": "pw"});
        let auth = h.client.register(&request).await.unwrap();
        assert_eq!(auth.token(), None);
        assert!(!h.session.is_logged_in());
    }

    #[tokio::test]
    async fn test_refresh_fallback_and_invalid_body() {
        let h = harness().await;

        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(403))
            .up_to_n_times(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&h.server)
            .await;

        let err = h.client.refresh().await.unwrap_err();
        assert_eq!(err.to_string(), "세션 갱신에 실패했습니다.");

        let err = h.client.refresh().await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unparseable_refresh_counts_as_failure() {
        let h = harness().await;
        h.session.set_token("old");

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(401))
            .expect(1)
            .mount(&h.server)
            .await;
        Mock::given(path("/api/auth/refresh"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(!h.session.is_logged_in());
        assert_eq!(h.navigator.last().as_deref(), Some("/login"));
    }

    #[tokio::test]
    async fn test_check_response() {
        let h = harness().await;

        Mock::given(path("/api/problems"))
            .respond_with(ResponseTemplate::new(400))
            .mount(&h.server)
            .await;

        let response = get_problems(&h.client).await;
        let err = AuthClient::check_response(response, "문제를 불러오지 못했습니다.")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "요청 값이 올바르지 않습니다.");
    }

    #[tokio::test]
    async fn test_network_failure_is_an_error() {
        let session = Arc::new(Session::in_memory());
        let navigator = Arc::new(RecordingNavigator::default());
        let config = Config {
            // Reserved port nothing listens on
            base_url: "http://127.0.0.1:9".to_string(),
            ..Config::default()
        };
        let client = AuthClient::new(config, session, navigator).unwrap();

        let err = client
            .auth_send(client.request(Method::GET, "/api/problems"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
    }
}
