use crate::model::{Capability, DeclKind, Declaration};
use crate::util::canonical_name;
use proc_macro2::Ident;
use syn::{punctuated::Punctuated, spanned::Spanned, Attribute, Item, Path, Token};

// 声明检查器：从宏所附着的 item 中提取 Declaration
pub struct DeclarationInspector;

impl DeclarationInspector {
    /// 永不失败：不认识的结构只会得到空字段，拒绝与否交给校验器
    pub fn inspect(item: &Item) -> Declaration {
        let (kind, ident) = match item {
            Item::Struct(s) => (DeclKind::Struct, s.ident.clone()),
            Item::Enum(e) => (DeclKind::Enum, e.ident.clone()),
            Item::Union(u) => (DeclKind::Union, u.ident.clone()),
            Item::Trait(t) => (DeclKind::Trait, t.ident.clone()),
            other => (DeclKind::Other, other_ident(other)),
        };

        // 只有 struct 才继续看 derive 列表
        let capabilities = match item {
            Item::Struct(s) => derived_capabilities(&s.attrs),
            _ => Vec::new(),
        };

        Declaration { kind, ident, capabilities }
    }
}

/// 按源码顺序收集所有 `#[derive(...)]` 中的路径
fn derived_capabilities(attrs: &[Attribute]) -> Vec<Capability> {
    let mut out = Vec::new();
    for attr in attrs.iter().filter(|a| a.path().is_ident("derive")) {
        // 畸形的 derive 留给编译器自己报错
        let Ok(paths) = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated) else {
            continue;
        };
        for path in &paths {
            if let Some(name) = canonical_name(path) {
                out.push(Capability { name, span: path.span() });
            }
        }
    }
    out
}

fn other_ident(item: &Item) -> Ident {
    let named = match item {
        Item::Const(i) => Some(&i.ident),
        Item::ExternCrate(i) => Some(&i.ident),
        Item::Fn(i) => Some(&i.sig.ident),
        Item::Macro(i) => i.ident.as_ref(),
        Item::Mod(i) => Some(&i.ident),
        Item::Static(i) => Some(&i.ident),
        Item::TraitAlias(i) => Some(&i.ident),
        Item::Type(i) => Some(&i.ident),
        _ => None,
    };
    named
        .cloned()
        .unwrap_or_else(|| Ident::new("item", item.span()))
}
