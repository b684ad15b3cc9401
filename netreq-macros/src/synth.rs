//! 代码生成模板。
//!
//! 给定通过校验的结构体名，生成一个 inherent impl：
//! - `<name>()`：使用进程级共享客户端
//! - `<name>_with(client)`：使用调用方提供的客户端
//!
//! 返回类型与反序列化目标都是该结构体本身。生成过程纯文本，无 I/O。

use crate::parser::RequestAttributes;
use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

pub fn synthesize(ident: &Ident, attrs: &RequestAttributes) -> TokenStream {
    let name = &attrs.name;
    let name_with = format_ident!("{}_with", name);
    let url = &attrs.url;

    quote! {
        impl #ident {
            pub async fn #name() -> ::netreq::Result<#ident> {
                #ident::#name_with(::netreq::HttpClient::shared()?).await
            }

            pub async fn #name_with(client: &::netreq::HttpClient) -> ::netreq::Result<#ident> {
                let (__url, __data) = client.fetch(#url).await?;
                match ::netreq::serde_json::from_slice::<#ident>(&__data) {
                    ::core::result::Result::Ok(__res) => ::core::result::Result::Ok(__res),
                    ::core::result::Result::Err(__err) => {
                        ::core::result::Result::Err(::netreq::Error::invalid_data(&__url, __err, &__data))
                    }
                }
            }
        }
    }
}
