use super::MacroCall;
use crate::{
    diagnostic::Diagnostic,
    engine::{self, ExpansionResult},
    parser::{Parser, RequestAttributeParser},
    util::combine_errors,
};
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Item;

pub struct NetworkRequestExpander;

impl super::Expander for NetworkRequestExpander {
    fn expand(&self, call: MacroCall) -> syn::Result<TokenStream> {
        match call.form {
            super::MacroForm::Attribute { attr, item } => {
                // 无论成功与否，原始声明都原样保留，错误只追加在其后
                let tail = expand_attribute(&attr, &item).unwrap_or_else(|e| e.to_compile_error());
                Ok(quote! {
                    #item
                    #tail
                })
            }
            _ => Err(syn::Error::new(
                Span::call_site(),
                "Unsupported macro form for NetworkRequestExpander",
            )),
        }
    }
}

/// 返回需要追加在原始声明之后的内容：生成的代码或诊断
fn expand_attribute(attr: &TokenStream, item: &TokenStream) -> syn::Result<TokenStream> {
    // 解析宏参数
    let attributes = RequestAttributeParser::parse(attr)?;

    let parsed: Item = syn::parse2(item.clone())?;

    match engine::expand(&parsed, &attributes) {
        ExpansionResult::Generated(code) => Ok(code),
        ExpansionResult::Diagnosed(diagnostics) => Ok(combine_errors(diagnostics.iter().map(Diagnostic::to_syn_error))
            .map(|e| e.to_compile_error())
            .unwrap_or_default()),
    }
}
