//! 宏工具函数

use syn::{Field, GenericArgument, PathArguments, Type};

/// 检查字段是否带有指定名称的属性
pub fn field_has_attribute(field: &Field, attr_name: &str) -> bool {
    field.attrs.iter().any(|attr| {
        attr.path()
            .get_ident()
            .map(|ident| ident == attr_name)
            .unwrap_or(false)
    })
}

/// 移除字段上指定名称的属性
pub fn strip_field_attribute(field: &mut Field, attr_name: &str) {
    field.attrs.retain(|attr| {
        attr.path()
            .get_ident()
            .map(|ident| ident != attr_name)
            .unwrap_or(true)
    });
}

/// 提取路径类型最后一段的唯一泛型参数
fn single_generic_argument<'a>(ty: &'a Type, outer: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    if segment.ident != outer {
        return None;
    }
    match &segment.arguments {
        PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// 提取 `Option<Arc<X>>` 中的 `X`
///
/// 可注入字段要求恰好是这个形状；其他形状一律返回 `None`，
/// 由调用方报编译错误。
pub fn option_arc_inner(ty: &Type) -> Option<&Type> {
    let arc = single_generic_argument(ty, "Option")?;
    single_generic_argument(arc, "Arc")
}
