use serde::{de::DeserializeOwned, Serialize};

/// 可被 `#[network_request]` 展开的类型所需的能力。
///
/// 通过 `#[derive(Codable)]` 实现；类型本身还需要 serde 的 `Serialize` 与 `Deserialize`。
pub trait Codable: Serialize + DeserializeOwned {}
