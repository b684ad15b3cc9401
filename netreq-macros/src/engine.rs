//! 展开引擎：检查 → 校验 → 生成或诊断。
//!
//! 每次调用相互独立，不持有任何共享状态。

use crate::diagnostic::{diagnose, Diagnostic};
use crate::parser::{DeclarationInspector, RequestAttributes};
use crate::synth::synthesize;
use crate::validate::{validate, ValidationOutcome};
use proc_macro2::TokenStream;
use syn::Item;

/// 一次展开的结果，二者必居其一
#[derive(Debug, Clone)]
pub enum ExpansionResult {
    Generated(TokenStream),
    Diagnosed(Vec<Diagnostic>),
}

pub fn expand(item: &Item, attrs: &RequestAttributes) -> ExpansionResult {
    let decl = DeclarationInspector::inspect(item);
    match validate(&decl) {
        ValidationOutcome::Valid { ident } => ExpansionResult::Generated(synthesize(&ident, attrs)),
        outcome => ExpansionResult::Diagnosed(diagnose(&outcome, &decl)),
    }
}
