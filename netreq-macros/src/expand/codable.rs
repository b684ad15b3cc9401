use super::MacroCall;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{parse_quote, DeriveInput};

pub struct CodableExpander;

impl super::Expander for CodableExpander {
    fn expand(&self, call: MacroCall) -> syn::Result<TokenStream> {
        match call.form {
            super::MacroForm::Derive { item } => {
                let input: DeriveInput = syn::parse2(item)?;
                let ident = &input.ident;

                // 仅是标记；泛型参数不额外加约束，只要求类型本身可序列化
                let mut generics = input.generics.clone();
                generics.make_where_clause().predicates.push(parse_quote! {
                    Self: ::netreq::serde::Serialize + ::netreq::serde::de::DeserializeOwned
                });
                let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

                Ok(quote! {
                    impl #impl_generics ::netreq::Codable for #ident #ty_generics #where_clause {}
                })
            }
            _ => Err(syn::Error::new(
                Span::call_site(),
                "Unsupported macro form for CodableExpander",
            )),
        }
    }
}
