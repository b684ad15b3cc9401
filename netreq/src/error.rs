use thiserror::Error;

/// 错误消息中响应体片段的最大长度
pub const SNIPPET_LIMIT: usize = 256;

/// 定义错误类型
#[derive(Debug, Error)]
pub enum Error {
    // 传输层/超时/DNS 等，直接透传 reqwest::Error 的错误
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    // 非 2xx 状态码 附带 URL、状态码和响应体片段
    #[error("HTTP error: {status} for URL: {url}\nResponse body (truncated): {body_snippet}")]
    Http {
        url: String,
        status: reqwest::StatusCode,
        body_snippet: String,
    },

    // 响应体无法解码为目标类型
    #[error("Invalid data from URL: {url}\nSource error: {source}\nResponse body (truncated): {body_snippet}")]
    InvalidData {
        url: String,
        #[source]
        source: serde_json::Error,
        body_snippet: String,
    },

    // URL 解析错误，附带源错误
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    // 请求头错误，附带源错误
    #[error("Invalid header: {0}")]
    HeaderName(#[from] reqwest::header::InvalidHeaderName),

    // 请求头值错误，附带源错误
    #[error("Invalid header value: {0}")]
    HeaderValue(#[from] reqwest::header::InvalidHeaderValue),

    // 非法参数错误，附带描述信息
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// 生成代码在反序列化失败时调用
    pub fn invalid_data(url: &url::Url, source: serde_json::Error, body: &[u8]) -> Self {
        Error::InvalidData {
            url: url.to_string(),
            source,
            body_snippet: snippet(&String::from_utf8_lossy(body), SNIPPET_LIMIT),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// 截取响应体的前 N 个字符用于错误消息 避免过长导致日志臃肿
pub fn snippet(s: &str, limit: usize) -> String {
    const ELLIPSIS: &str = "…";
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        let mut out = s.chars().take(limit).collect::<String>();
        out.push_str(ELLIPSIS);
        out
    }
}
