//! 被检查声明的内存表示。
//!
//! 每次展开构造一次，展开结束即丢弃；只读，不含逻辑。

use proc_macro2::{Ident, Span};
use std::fmt;

/// 声明类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Struct,
    Enum,
    Union,
    Trait,
    Other,
}

impl DeclKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclKind::Struct => "struct",
            DeclKind::Enum => "enum",
            DeclKind::Union => "union",
            DeclKind::Trait => "trait",
            DeclKind::Other => "item",
        }
    }
}

impl fmt::Display for DeclKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// derive 列表中的一项能力
#[derive(Debug, Clone)]
pub struct Capability {
    pub name: String, // 规范化后的名字（路径最后一段）
    pub span: Span,   // 源码中该路径的位置，供修复建议定位
}

/// 一个待展开的声明
#[derive(Debug, Clone)]
pub struct Declaration {
    pub kind: DeclKind,
    pub ident: Ident,
    /// 按源码顺序排列，只有第一项参与校验
    pub capabilities: Vec<Capability>,
}

#[cfg(test)]
impl Declaration {
    pub fn capability_names(&self) -> Vec<&str> {
        self.capabilities.iter().map(|c| c.name.as_str()).collect()
    }

    /// 测试用：直接由名字构造
    pub fn new<'a>(kind: DeclKind, ident: &str, capabilities: impl IntoIterator<Item = &'a str>) -> Self {
        Declaration {
            kind,
            ident: Ident::new(ident, Span::call_site()),
            capabilities: capabilities
                .into_iter()
                .map(|name| Capability { name: name.to_string(), span: Span::call_site() })
                .collect(),
        }
    }
}
