use crate::error::{snippet, Error, Result, SNIPPET_LIMIT};
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;

/// 共享客户端的默认端点，相对地址会拼接到这里
const DEFAULT_ENDPOINT: &str = "http://localhost";

static SHARED: OnceLock<HttpClient> = OnceLock::new();

/// 客户端配置
#[derive(Clone, Debug)]
pub struct HttpClientOption {
    endpoint: Url,                  // 端点 URL
    timeout: Duration,              // 整体请求超时
    connect_timeout: Duration,      // 连接超时
    read_timeout: Duration,         // 读取超时
    headers: Vec<(String, String)>, // 基础请求头
}

impl HttpClientOption {
    pub fn builder() -> HttpClientOptionBuilder {
        HttpClientOptionBuilder::default()
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

impl Default for HttpClientOption {
    fn default() -> Self {
        HttpClientOption {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("Valid default endpoint"),
            timeout: Duration::from_secs(6),
            connect_timeout: Duration::from_secs(6),
            read_timeout: Duration::from_secs(6),
            // User-Agent: netreq/{version}
            headers: vec![(
                String::from("User-Agent"),
                format!("netreq/{}", env!("CARGO_PKG_VERSION")),
            )],
        }
    }
}

/// HttpClientOption 的构建器，未设置的项沿用默认值
#[derive(Clone, Debug, Default)]
pub struct HttpClientOptionBuilder {
    // 使用 String 持有 endpoint，在 build() 时统一解析为 Url
    endpoint: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl HttpClientOptionBuilder {
    pub fn endpoint(mut self, endpoint: impl AsRef<str>) -> Self {
        self.endpoint = Some(endpoint.as_ref().to_string());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    pub fn read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = Some(read_timeout);
        self
    }

    /// 追加一个基础请求头
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// 构建最终配置
    ///
    /// - endpoint 为空字符串时返回 [`Error::InvalidArgument`]
    /// - endpoint 不是合法 URL 时返回 [`Error::UrlParse`]
    pub fn build(self) -> Result<HttpClientOption> {
        let mut opt = HttpClientOption::default();

        if let Some(ep) = self.endpoint {
            if ep.trim().is_empty() {
                return Err(Error::InvalidArgument("Endpoint cannot be empty".to_string()));
            }
            opt.endpoint = Url::parse(&ep)?;
        }
        if let Some(t) = self.timeout {
            opt.timeout = t;
        }
        if let Some(ct) = self.connect_timeout {
            opt.connect_timeout = ct;
        }
        if let Some(rt) = self.read_timeout {
            opt.read_timeout = rt;
        }
        opt.headers.extend(self.headers);

        Ok(opt)
    }
}

/// HTTP 客户端封装，基于 reqwest 实现
pub struct HttpClient {
    inner: Client,
    option: HttpClientOption,
}

impl HttpClient {
    pub fn new(option: HttpClientOption) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        for (name, value) in &option.headers {
            headers.insert(
                reqwest::header::HeaderName::from_bytes(name.as_bytes())?,
                reqwest::header::HeaderValue::from_str(value)?,
            );
        }

        let inner = Client::builder()
            .default_headers(headers)
            .timeout(option.timeout)
            .connect_timeout(option.connect_timeout)
            .read_timeout(option.read_timeout)
            .build()?;

        Ok(Self { inner, option })
    }

    pub fn with_endpoint(endpoint: impl AsRef<str>) -> Result<Self> {
        Self::new(HttpClientOption::builder().endpoint(endpoint).build()?)
    }

    /// 复用已有的 reqwest 客户端，其余配置取默认值
    pub fn from_reqwest(inner: Client, endpoint: impl AsRef<str>) -> Result<Self> {
        let option = HttpClientOption::builder().endpoint(endpoint).build()?;
        Ok(Self { inner, option })
    }

    /// 进程级共享客户端，首次调用时按默认配置构建
    pub fn shared() -> Result<&'static HttpClient> {
        if let Some(client) = SHARED.get() {
            return Ok(client);
        }
        let client = HttpClient::new(HttpClientOption::default())?;
        // 并发初始化时以先写入者为准
        Ok(SHARED.get_or_init(|| client))
    }

    pub fn client(&self) -> &Client {
        &self.inner
    }

    pub fn endpoint(&self) -> &Url {
        &self.option.endpoint
    }

    pub fn options(&self) -> &HttpClientOption {
        &self.option
    }

    /// 相对地址拼接到 endpoint 上，绝对地址原样返回
    pub fn resolve(&self, url: &str) -> Result<Url> {
        Ok(self.option.endpoint.join(url)?)
    }

    /// 发起 GET 请求，返回最终 URL 与响应体
    ///
    /// 非 2xx 状态码转换为 [`Error::Http`]，响应体截断后放入错误消息。
    pub async fn fetch(&self, url: &str) -> Result<(Url, Vec<u8>)> {
        let url = self.resolve(url)?;
        tracing::debug!(url = %url, "sending request");

        let resp = self.inner.get(url).send().await?;
        let status = resp.status();
        let final_url = resp.url().clone();
        let body = resp.bytes().await?.to_vec();
        tracing::debug!(url = %final_url, status = %status, len = body.len(), "received response");

        if !status.is_success() {
            tracing::warn!(url = %final_url, status = %status, "request failed");
            return Err(Error::Http {
                url: final_url.to_string(),
                status,
                body_snippet: snippet(&String::from_utf8_lossy(&body), SNIPPET_LIMIT),
            });
        }

        Ok((final_url, body))
    }
}
