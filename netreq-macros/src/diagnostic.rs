//! 诊断模型与诊断构建。
//!
//! 校验失败不会走 `syn::Error` 控制流，而是先变成 [`Diagnostic`] 数据，
//! 由展开器统一渲染成 `compile_error!`。修复建议（[`FixIt`]）只是提议，
//! 宏本身从不改写用户代码。

use crate::model::Declaration;
use crate::util::combine_errors;
use crate::validate::{ValidationOutcome, REQUIRED_CAPABILITY};
use proc_macro2::Span;

/// 诊断所属的域，用于拼接限定标识
pub const DOMAIN: &str = "network_request";

/// 严重级别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    #[allow(dead_code)]
    Warning,
}

/// 稳定的诊断标识，供测试和工具匹配，与人类可读消息分开
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticId {
    NotStruct,
    NoConformance,
    WrongConformance,
}

impl DiagnosticId {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticId::NotStruct => "not-struct",
            DiagnosticId::NoConformance => "no-conformance",
            DiagnosticId::WrongConformance => "wrong-conformance",
        }
    }

    pub fn qualified(&self) -> String {
        format!("{}::{}", DOMAIN, self.as_str())
    }
}

/// 结构化替换：把 `span` 处的 `original` 换成 `replacement`
#[derive(Debug, Clone)]
pub struct Replacement {
    pub span: Span,
    pub original: String,
    pub replacement: String,
}

/// 修复建议
#[derive(Debug, Clone)]
pub struct FixIt {
    pub message: String,
    pub replacement: Replacement,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub id: DiagnosticId,
    pub message: String,
    pub span: Span,
    pub fix_its: Vec<FixIt>,
}

impl Diagnostic {
    fn error(id: DiagnosticId, span: Span, message: String) -> Self {
        Diagnostic { severity: Severity::Error, id, message, span, fix_its: Vec::new() }
    }

    fn with_fix_it(mut self, fix_it: FixIt) -> Self {
        self.fix_its.push(fix_it);
        self
    }

    /// 渲染为编译错误：主消息在诊断位置，每条修复建议在其替换目标处追加一条 help
    pub fn to_syn_error(&self) -> syn::Error {
        let message = match self.severity {
            Severity::Error => format!("{} [{}]", self.message, self.id.qualified()),
            // 稳定版过程宏没有警告通道，只能在消息上标注
            Severity::Warning => format!("warning: {} [{}]", self.message, self.id.qualified()),
        };
        let mut err = syn::Error::new(self.span, message);
        let helps = self.fix_its.iter().map(|fix| {
            let r = &fix.replacement;
            syn::Error::new(
                r.span,
                format!("help: {}: replace `{}` with `{}`", fix.message, r.original, r.replacement),
            )
        });
        if let Some(helps) = combine_errors(helps) {
            err.combine(helps);
        }
        err
    }
}

/// 把未通过的校验结果映射为诊断；`Valid` 得到空列表
pub fn diagnose(outcome: &ValidationOutcome, decl: &Declaration) -> Vec<Diagnostic> {
    let ident = &decl.ident;
    match outcome {
        ValidationOutcome::Valid { .. } => Vec::new(),
        ValidationOutcome::WrongKind { actual } => vec![Diagnostic::error(
            DiagnosticId::NotStruct,
            ident.span(),
            format!(
                "declaration needs to be a struct, found {} `{}`; replace it with a struct",
                actual, ident
            ),
        )],
        ValidationOutcome::NoCapabilities => vec![Diagnostic::error(
            DiagnosticId::NoConformance,
            ident.span(),
            format!(
                "struct `{}` has no conformance; add `#[derive({})]`",
                ident, REQUIRED_CAPABILITY
            ),
        )],
        ValidationOutcome::WrongCapability { found } => {
            // 替换目标就是第一项能力
            let span = decl.capabilities.first().map(|c| c.span).unwrap_or_else(|| ident.span());
            vec![Diagnostic::error(
                DiagnosticId::WrongConformance,
                span,
                format!(
                    "struct `{}` does not conform to {}: its first derived capability is `{}`",
                    ident, REQUIRED_CAPABILITY, found
                ),
            )
            .with_fix_it(FixIt {
                message: "Add required capability".to_string(),
                replacement: Replacement {
                    span,
                    original: found.clone(),
                    replacement: REQUIRED_CAPABILITY.to_string(),
                },
            })]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeclKind;
    use crate::validate::validate;
    use pretty_assertions::assert_eq;

    fn run(decl: &Declaration) -> Vec<Diagnostic> {
        diagnose(&validate(decl), decl)
    }

    #[test]
    fn enum_is_not_a_struct() {
        let decl = Declaration::new(DeclKind::Enum, "NetworkResponse", ["Error"]);
        let diags = run(&decl);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].id.as_str(), "not-struct");
        assert_eq!(
            diags[0].message,
            "declaration needs to be a struct, found enum `NetworkResponse`; replace it with a struct"
        );
        assert!(diags[0].fix_its.is_empty());
    }

    #[test]
    fn missing_conformance() {
        let decl = Declaration::new(DeclKind::Struct, "NetworkResponse", Vec::<&str>::new());
        let diags = run(&decl);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].id.as_str(), "no-conformance");
        assert!(diags[0].fix_its.is_empty());
    }

    #[test]
    fn wrong_conformance_offers_one_fix_it() {
        let decl = Declaration::new(DeclKind::Struct, "NetworkResponse", ["View"]);
        let diags = run(&decl);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert_eq!(diags[0].id.as_str(), "wrong-conformance");
        assert_eq!(diags[0].fix_its.len(), 1);

        let fix = &diags[0].fix_its[0];
        assert_eq!(fix.message, "Add required capability");
        assert_eq!(fix.replacement.original, "View");
        assert_eq!(fix.replacement.replacement, "Codable");
    }

    #[test]
    fn valid_outcome_has_no_diagnostics() {
        let decl = Declaration::new(DeclKind::Struct, "NetworkResponse", ["Codable"]);
        assert!(run(&decl).is_empty());
    }

    #[test]
    fn warning_is_labelled_when_rendered() {
        let diag = Diagnostic {
            severity: Severity::Warning,
            id: DiagnosticId::NoConformance,
            message: "struct `NetworkResponse` has no conformance".to_string(),
            span: Span::call_site(),
            fix_its: Vec::new(),
        };
        let messages: Vec<String> = diag.to_syn_error().into_iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec!["warning: struct `NetworkResponse` has no conformance [network_request::no-conformance]".to_string()]
        );
    }

    #[test]
    fn rendered_error_carries_id_and_help() {
        let decl = Declaration::new(DeclKind::Struct, "NetworkResponse", ["View"]);
        let err = run(&decl)[0].to_syn_error();
        let messages: Vec<String> = err.into_iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "struct `NetworkResponse` does not conform to Codable: its first derived capability is `View` [network_request::wrong-conformance]".to_string(),
                "help: Add required capability: replace `View` with `Codable`".to_string(),
            ]
        );
    }
}
