use proc_macro2::{Ident, Span, TokenStream};
use syn::{parse::Parser as _, LitStr};

/// 未指定 url 时的默认请求地址
pub const DEFAULT_URL: &str = "https://api/get";
/// 未指定 name 时生成的方法名
pub const DEFAULT_NAME: &str = "get_request";

// `#[network_request(...)]` 上的属性解析器
pub struct RequestAttributeParser;

/// 解析后的宏参数
#[derive(Debug, Clone)]
pub struct RequestAttributes {
    pub url: String, // 请求地址，相对地址会拼接到客户端 endpoint 上
    pub name: Ident, // 生成的方法名
}

impl Default for RequestAttributes {
    fn default() -> Self {
        RequestAttributes {
            url: DEFAULT_URL.to_string(),
            name: Ident::new(DEFAULT_NAME, Span::call_site()),
        }
    }
}

impl crate::parser::Parser<TokenStream> for RequestAttributeParser {
    type Output = RequestAttributes;

    fn parse(input: &TokenStream) -> syn::Result<Self::Output> {
        let mut attributes = RequestAttributes::default();

        let parser = syn::meta::parser(|meta| {
            let Some(ident) = meta.path.get_ident() else {
                return Err(meta.error("Expected identifier"));
            };
            match ident.to_string().as_str() {
                "url" => {
                    let lit: LitStr = meta.value()?.parse()?;
                    attributes.url = lit.value();
                }
                "name" => {
                    // 字符串里必须是合法的 Rust 标识符
                    let lit: LitStr = meta.value()?.parse()?;
                    let mut name: Ident = syn::parse_str(&lit.value()).map_err(|_| {
                        syn::Error::new(lit.span(), format!("`{}` is not a valid function name", lit.value()))
                    })?;
                    name.set_span(lit.span());
                    attributes.name = name;
                }
                other => {
                    return Err(meta.error(format!(
                        "unsupported network_request argument `{}`, expected `url` or `name`",
                        other
                    )));
                }
            }
            Ok(())
        });

        parser.parse2(input.clone())?;
        Ok(attributes)
    }
}
