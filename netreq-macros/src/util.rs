//! 宏内部的通用工具。
//!
//! - 将 derive 路径规范化为可比较的名字
//! - 把多条 `syn::Error` 合并为一条

use syn::{ext::IdentExt, Path};

/// 取路径最后一段作为规范名：`::netreq::Codable`、`netreq :: Codable` 都得到 `Codable`。
pub fn canonical_name(path: &Path) -> Option<String> {
    let seg = path.segments.last()?;
    Some(seg.ident.unraw().to_string())
}

/// 合并多条错误，编译器会逐条报告
pub fn combine_errors(errors: impl IntoIterator<Item = syn::Error>) -> Option<syn::Error> {
    errors.into_iter().reduce(|mut acc, e| {
        acc.combine(e);
        acc
    })
}
