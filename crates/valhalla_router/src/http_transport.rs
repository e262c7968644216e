use std::time::Duration;

use futures::{FutureExt, future::BoxFuture};
use reqwest::Url;
use tracing::debug;

use crate::{
    error::TransportError,
    route_request::RouteRequest,
    transport::{Transport, TransportResponse},
};

pub const DEFAULT_ENDPOINT: &str = "https://valhalla1.openstreetmap.de";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const ROUTE_API_PATH: &str = "/route";

const ENDPOINT_ENV_VAR: &str = "VALHALLA_ENDPOINT";
const API_KEY_ENV_VAR: &str = "VALHALLA_API_KEY";
const TIMEOUT_ENV_VAR: &str = "VALHALLA_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct HttpTransportParams {
    /// Base URL of the routing service, `/route` is appended to it
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpTransportParams {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl HttpTransportParams {
    pub fn from_env() -> Result<Self, TransportError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, TransportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_ENV_VAR) {
            params.endpoint = endpoint;
        }

        params.api_key = lookup(API_KEY_ENV_VAR).filter(|key| !key.is_empty());

        if let Some(timeout) = lookup(TIMEOUT_ENV_VAR) {
            let seconds = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| TransportError::InvalidTimeout(timeout.clone()))?;
            params.timeout = Duration::from_secs(seconds);
        }

        Ok(params)
    }
}

/// [`Transport`] posting requests to a Valhalla HTTP endpoint.
#[derive(Clone)]
pub struct HttpTransport {
    route_url: Url,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(params: HttpTransportParams) -> Result<Self, TransportError> {
        let route_url = route_url(&params.endpoint)?;
        let client = reqwest::Client::builder()
            .timeout(params.timeout)
            .user_agent(concat!("valhalla_router/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            route_url,
            api_key: params.api_key,
            client,
        })
    }

    pub fn route_url(&self) -> &Url {
        &self.route_url
    }
}

fn route_url(endpoint: &str) -> Result<Url, TransportError> {
    let url = format!("{}{}", endpoint.trim_end_matches('/'), ROUTE_API_PATH);

    Url::parse(&url).map_err(|err| TransportError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: err.to_string(),
    })
}

impl Transport for HttpTransport {
    fn request_route(
        &self,
        request: RouteRequest,
    ) -> BoxFuture<'static, Result<TransportResponse, TransportError>> {
        let mut builder = self.client.post(self.route_url.clone()).json(&request);
        if let Some(api_key) = &self.api_key {
            builder = builder.query(&[("api_key", api_key)]);
        }

        async move {
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;

            debug!("Routing service responded {} ({} bytes)", status, body.len());

            Ok(TransportResponse::new(
                status,
                Some(body).filter(|body| !body.is_empty()),
            ))
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::{TcpListener, TcpStream},
        task::JoinHandle,
    };

    use super::{HttpTransport, HttpTransportParams};
    use crate::{
        error::TransportError,
        locale::Locale,
        request_builder::RequestBuilder,
        route_dispatcher::ValhallaRouter,
        test_utils::{ROUTE_FIXTURE, channel_callback},
        transport::Transport,
    };

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut data = Vec::new();
        let mut buffer = [0u8; 1024];

        loop {
            let read = socket.read(&mut buffer).await.unwrap();
            if read == 0 {
                break;
            }
            data.extend_from_slice(&buffer[..read]);

            let text = String::from_utf8_lossy(&data);
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        if name.eq_ignore_ascii_case("content-length") {
                            value.trim().parse::<usize>().ok()
                        } else {
                            None
                        }
                    })
                    .unwrap_or(0);

                if data.len() >= header_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&data).into_owned()
    }

    /// Answers a single request, returning the raw request it received.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();

        let task = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();

            request
        });

        (format!("http://{address}"), task)
    }

    fn params(endpoint: String) -> HttpTransportParams {
        HttpTransportParams {
            endpoint,
            api_key: None,
            timeout: Duration::from_secs(5),
        }
    }

    fn request() -> crate::route_request::RouteRequest {
        let mut builder = RequestBuilder::new();
        builder
            .set_locale(Locale::new("en", Some("US")))
            .set_location([40.659241, -73.983776])
            .set_location([40.671773, -73.981115]);
        builder.build_request().unwrap()
    }

    #[test]
    fn test_route_url_keeps_endpoint_path() {
        let transport = HttpTransport::new(params("http://localhost:8002/test/".to_string())).unwrap();
        assert_eq!(
            transport.route_url().as_str(),
            "http://localhost:8002/test/route"
        );
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = HttpTransport::new(params("not a url".to_string()));
        assert!(matches!(
            result,
            Err(TransportError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_params_from_lookup() {
        let params = HttpTransportParams::from_lookup(|name| match name {
            "VALHALLA_ENDPOINT" => Some("http://localhost:8002".to_string()),
            "VALHALLA_API_KEY" => Some("secret".to_string()),
            "VALHALLA_TIMEOUT_SECS" => Some("7".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(params.endpoint, "http://localhost:8002");
        assert_eq!(params.api_key.as_deref(), Some("secret"));
        assert_eq!(params.timeout, Duration::from_secs(7));

        let defaults = HttpTransportParams::from_lookup(|_| None).unwrap();
        assert_eq!(defaults.endpoint, super::DEFAULT_ENDPOINT);
        assert_eq!(defaults.api_key, None);

        let invalid = HttpTransportParams::from_lookup(|name| {
            (name == "VALHALLA_TIMEOUT_SECS").then(|| "soon".to_string())
        });
        assert!(matches!(invalid, Err(TransportError::InvalidTimeout(_))));
    }

    #[tokio::test]
    async fn test_posts_request_document() {
        let (endpoint, server) = serve_once("200 OK", ROUTE_FIXTURE).await;
        let transport = HttpTransport::new(HttpTransportParams {
            api_key: Some("secret".to_string()),
            ..params(format!("{endpoint}/test"))
        })
        .unwrap();

        let response = transport.request_route(request()).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.usable_body(), Some(ROUTE_FIXTURE));

        let raw_request = server.await.unwrap();
        assert!(raw_request.starts_with("POST /test/route?api_key=secret HTTP/1.1"));
        assert!(raw_request.contains(r#""costing":"auto""#));
        assert!(raw_request.contains(r#""lat":40.659241"#));
    }

    #[tokio::test]
    async fn test_error_status_is_a_response() {
        let (endpoint, server) = serve_once("404 Not Found", "").await;
        let transport = HttpTransport::new(params(endpoint)).unwrap();

        let response = transport.request_route(request()).await.unwrap();
        assert_eq!(response.status, 404);
        assert_eq!(response.body, None);
        assert!(!response.is_success());

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_refused_is_a_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let transport = HttpTransport::new(params(format!("http://{address}"))).unwrap();
        let result = transport.request_route(request()).await;
        assert!(matches!(result, Err(TransportError::Request(_))));
    }

    #[tokio::test]
    async fn test_fetch_through_http() {
        let (endpoint, server) = serve_once("200 OK", ROUTE_FIXTURE).await;
        let transport = HttpTransport::new(params(endpoint)).unwrap();
        let (sender, mut outcomes) = channel_callback();

        let mut router = ValhallaRouter::new();
        router
            .set_transport(Arc::new(transport))
            .set_locale(Locale::new("en", Some("US")))
            .set_location([40.659241, -73.983776])
            .set_location([40.671773, -73.981115])
            .set_callback(Arc::new(sender));

        let handle = router.fetch().unwrap();
        let route = outcomes.recv().await.unwrap().unwrap();
        assert!(route.found_route());
        assert_eq!(route.maneuvers().count(), 3);

        assert!(handle.join().await);
        server.await.unwrap();
    }
}
