//! 结构约定校验。
//!
//! 顺序即优先级：类别 → 是否有能力 → 第一项能力是否为 `Codable`。
//! 只看第一项能力，`#[derive(Debug, Codable)]` 同样会被拒绝。

use crate::model::{DeclKind, Declaration};
use proc_macro2::Ident;

/// 目标能力的规范名
pub const REQUIRED_CAPABILITY: &str = "Codable";

/// 一次校验的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid { ident: Ident },
    WrongKind { actual: DeclKind },
    NoCapabilities,
    WrongCapability { found: String },
}

pub fn validate(decl: &Declaration) -> ValidationOutcome {
    if decl.kind != DeclKind::Struct {
        return ValidationOutcome::WrongKind { actual: decl.kind };
    }
    let Some(first) = decl.capabilities.first() else {
        return ValidationOutcome::NoCapabilities;
    };
    if first.name != REQUIRED_CAPABILITY {
        return ValidationOutcome::WrongCapability { found: first.name.clone() };
    }
    ValidationOutcome::Valid { ident: decl.ident.clone() }
}
