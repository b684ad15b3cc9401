// 解析器

mod declaration;
mod request_attribute;

pub use declaration::DeclarationInspector;
pub use request_attribute::{RequestAttributeParser, RequestAttributes};

/// 解析器 trait
pub trait Parser<I> {
    type Output;

    fn parse(input: &I) -> syn::Result<Self::Output>;
}
