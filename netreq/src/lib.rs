pub mod client;
pub mod codable;
pub mod error;
pub mod prelude;

pub use prelude::*;

// 供宏生成代码使用
pub use reqwest;
pub use serde;
pub use serde_json;
pub use url::Url;
