//! 宏展开入口与分发。
//!
//! 流程：
//! 1) 解析 `#[network_request(...)]` 参数（url / name）
//! 2) 检查被标注的声明，得到类别、名字与 derive 列表
//! 3) 校验：必须是 struct，且第一个 derive 为 `Codable`
//! 4) 通过则生成 `get_request` / `get_request_with`，否则原样输出声明并附带诊断

mod codable;
mod network_request;

/// 宏输入类型枚举
pub enum MacroForm {
    /// #[proc_macro_attribute]
    ///
    /// #[network_request(url = "...", ...)]
    Attribute {
        attr: proc_macro2::TokenStream,
        item: proc_macro2::TokenStream,
    },
    /// #[proc_macro_derive]
    /// #[derive(Codable)]
    Derive {
        item: proc_macro2::TokenStream,
    },
}

/// 具体使用的宏枚举
pub enum MacroKind {
    NetworkRequest,
    Codable,
}

/// 宏调用信息结构体
pub struct MacroCall {
    pub kind: MacroKind,
    pub form: MacroForm,
}

impl MacroCall {
    pub fn new(kind: MacroKind, form: MacroForm) -> Self {
        Self { kind, form }
    }
}

/// 展开器 trait
pub trait Expander {
    fn expand(&self, call: MacroCall) -> syn::Result<proc_macro2::TokenStream>;
}

/// dispatch 宏展开
pub fn dispatch(call: MacroCall) -> proc_macro2::TokenStream {
    let expander: Box<dyn Expander> = match call.kind {
        MacroKind::NetworkRequest => Box::new(network_request::NetworkRequestExpander {}),
        MacroKind::Codable => Box::new(codable::CodableExpander {}),
    };
    expander.expand(call).unwrap_or_else(|e| e.to_compile_error())
}
