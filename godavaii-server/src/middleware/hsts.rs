//! HSTS (HTTP Strict Transport Security) middleware.
//!
//! By default every response carries the header, matching a deployment that
//! always sits behind TLS. With `https_only` the header is attached only when
//! the request is known to be HTTPS, either from the URI scheme or, when
//! proxy headers are trusted, from `X-Forwarded-Proto`/`X-Forwarded-Ssl`.

use axum::http::{HeaderValue, Request, Response, header};
use godavaii_config::HstsLayerConfig;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};
use tracing::debug;

/// Configuration for HSTS middleware
#[derive(Clone, Debug)]
pub struct HstsConfig {
    /// max-age in seconds (default: 63072000 = 2 years)
    pub max_age: u64,
    pub include_subdomains: bool,
    pub preload: bool,
    /// Only attach the header to HTTPS requests.
    pub https_only: bool,
    /// Believe `X-Forwarded-*` headers when deciding whether a request is HTTPS.
    pub trust_proxy_headers: bool,
}

impl Default for HstsConfig {
    fn default() -> Self {
        Self {
            max_age: 63_072_000,
            include_subdomains: true,
            preload: false,
            https_only: false,
            trust_proxy_headers: false,
        }
    }
}

impl HstsConfig {
    pub fn new(max_age: u64) -> Self {
        Self {
            max_age,
            ..Default::default()
        }
    }

    pub fn with_include_subdomains(mut self, include: bool) -> Self {
        self.include_subdomains = include;
        self
    }

    pub fn with_preload(mut self) -> Self {
        self.preload = true;
        self
    }

    pub fn https_only(mut self, trust_proxy_headers: bool) -> Self {
        self.https_only = true;
        self.trust_proxy_headers = trust_proxy_headers;
        self
    }
}

impl From<&HstsLayerConfig> for HstsConfig {
    fn from(value: &HstsLayerConfig) -> Self {
        Self {
            max_age: value.max_age,
            include_subdomains: value.include_subdomains,
            preload: value.preload,
            https_only: value.https_only,
            trust_proxy_headers: value.trust_proxy_headers,
        }
    }
}

/// Layer for HSTS middleware
#[derive(Clone, Debug)]
pub struct HstsLayer {
    config: HstsConfig,
    header_value: HeaderValue,
}

impl HstsLayer {
    pub fn new() -> Self {
        Self::with_config(HstsConfig::default())
    }

    pub fn with_config(config: HstsConfig) -> Self {
        let header_value = Self::build_header_value(&config);
        Self {
            config,
            header_value,
        }
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.header_value
    }

    fn build_header_value(config: &HstsConfig) -> HeaderValue {
        match (config.max_age, config.include_subdomains, config.preload) {
            (63_072_000, true, false) => {
                HeaderValue::from_static("max-age=63072000; includeSubDomains")
            }
            (63_072_000, true, true) => HeaderValue::from_static(
                "max-age=63072000; includeSubDomains; preload",
            ),
            _ => {
                let mut directives =
                    vec![format!("max-age={}", config.max_age)];

                if config.include_subdomains {
                    directives.push("includeSubDomains".to_string());
                }

                if config.preload {
                    directives.push("preload".to_string());
                }

                // Digits, ASCII words and "; " only, always a valid value.
                HeaderValue::from_str(&directives.join("; ")).unwrap_or_else(
                    |_| HeaderValue::from_static("max-age=63072000"),
                )
            }
        }
    }
}

impl Default for HstsLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Layer<S> for HstsLayer {
    type Service = HstsMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        debug!(config = ?self.config, "installing HSTS middleware layer");
        HstsMiddleware {
            inner,
            header_value: self.header_value.clone(),
            https_only: self.config.https_only,
            trust_proxy_headers: self.config.trust_proxy_headers,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HstsMiddleware<S> {
    inner: S,
    header_value: HeaderValue,
    https_only: bool,
    trust_proxy_headers: bool,
}

impl<S> HstsMiddleware<S> {
    fn is_https<B>(&self, req: &Request<B>) -> bool {
        if req.uri().scheme_str() == Some("https") {
            return true;
        }

        if !self.trust_proxy_headers {
            return false;
        }

        if let Some(proto) = req.headers().get("x-forwarded-proto")
            && let Ok(proto_str) = proto.to_str()
        {
            return proto_str.eq_ignore_ascii_case("https");
        }

        // Used by some load balancers
        if let Some(ssl) = req.headers().get("x-forwarded-ssl")
            && let Ok(ssl_str) = ssl.to_str()
        {
            return ssl_str.eq_ignore_ascii_case("on");
        }

        false
    }
}

impl<S, ReqBody, ResBody> Service<Request<ReqBody>> for HstsMiddleware<S>
where
    S: Service<Request<ReqBody>, Response = Response<ResBody>>
        + Send
        + Clone
        + 'static,
    S::Future: Send + 'static,
    ReqBody: Send + 'static,
    ResBody: Send + 'static,
{
    type Response = Response<ResBody>;
    type Error = S::Error;
    type Future = Pin<
        Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(
        &mut self,
        cx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<ReqBody>) -> Self::Future {
        let attach = !self.https_only || self.is_https(&req);

        // The ready service is the one that must handle this request.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let header_value = self.header_value.clone();

        Box::pin(async move {
            let mut response = inner.call(req).await?;

            if attach {
                response
                    .headers_mut()
                    .insert(header::STRICT_TRANSPORT_SECURITY, header_value);
            }

            Ok(response)
        })
    }
}
