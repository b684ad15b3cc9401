use proc_macro::TokenStream;

mod diagnostic;
mod engine;
mod expand;
mod model;
mod parser;
mod synth;
mod util;
mod validate;

/// 结构体宏入口：`#[network_request(...)]`
///
/// 必须写在 `#[derive(...)]` 之上，且第一个 derive 必须是 `Codable`：
///
/// ```ignore
/// #[network_request(url = "https://api/get")]
/// #[derive(Codable, Serialize, Deserialize)]
/// struct NetworkResponse {
///     id: String,
/// }
///
/// let res = NetworkResponse::get_request().await?;
/// ```
///
/// 只在入口使用 `proc_macro::TokenStream`，内部统一用 `proc_macro2::TokenStream`
#[proc_macro_attribute]
pub fn network_request(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = expand::MacroForm::Attribute { attr: attr.into(), item: item.into() };
    let call = expand::MacroCall::new(expand::MacroKind::NetworkRequest, input);
    expand::dispatch(call).into()
}

/// `#[derive(Codable)]`：为类型实现 `netreq::Codable` 标记 trait
#[proc_macro_derive(Codable)]
pub fn derive_codable(item: TokenStream) -> TokenStream {
    let input = expand::MacroForm::Derive { item: item.into() };
    let call = expand::MacroCall::new(expand::MacroKind::Codable, input);
    expand::dispatch(call).into()
}
