//! netreq 的常用导出集合（建议用户 `use netreq::prelude::*;`）
//! 只导出高频、稳定的对外 API，避免污染命名空间。

pub use crate::{
    client::{HttpClient, HttpClientOption, HttpClientOptionBuilder},
    codable::Codable,
    error::{Error, Result},
};

#[cfg(feature = "macros")]
pub use netreq_macros::{network_request, Codable};
