use syn::{Field, FieldsNamed, Ident, Type};

pub(crate) fn has_field_named(fields_named: &FieldsNamed, name: &Ident) -> bool {
    fields_named
        .named
        .iter()
        .any(|f| f.ident.as_ref().map(|i| i == name).unwrap_or(false))
}

/// 若缺失则在末尾追加字段，已存在时保留原定义（含可见性与属性）
pub(crate) fn ensure_trailing_field(fields_named: &mut FieldsNamed, name: &Ident, ty: &Type) {
    if has_field_named(fields_named, name) {
        return;
    }
    let field: Field = syn::parse_quote! { #name: #ty };
    fields_named.named.push(field);
}
