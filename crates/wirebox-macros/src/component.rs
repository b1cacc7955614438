//! 组件标记宏实现

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{
    parse::Parse, parse::ParseStream, punctuated::Punctuated, Expr, Fields, Ident, Item,
    ItemStruct, Lit, LitStr, Meta, Result, Token, Type,
};

use crate::utils::{field_has_attribute, option_arc_inner, strip_field_attribute};

/// 组件标记参数
#[derive(Debug, Clone, Default)]
pub struct ComponentArgs {
    /// 自定义组件名称
    pub name: Option<String>,
    /// 除自身类型外额外发布的绑定类型
    pub provides: Vec<Type>,
    /// 自定义构造函数名（默认走 `Default::default`）
    pub constructor: Option<String>,
    /// 销毁钩子方法名列表
    pub teardown: Vec<String>,
}

/// 钩子方法名：接受裸标识符或字符串字面量两种写法
struct HookName(String);

impl Parse for HookName {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        if input.peek(LitStr) {
            let lit: LitStr = input.parse()?;
            Ok(Self(lit.value()))
        } else {
            let ident: Ident = input.parse()?;
            Ok(Self(ident.to_string()))
        }
    }
}

impl Parse for ComponentArgs {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let mut args = ComponentArgs::default();

        let parsed = Punctuated::<Meta, Token![,]>::parse_terminated(input)?;

        for meta in parsed {
            match meta {
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("name") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.name = Some(lit_str.value());
                            }
                        }
                    } else if nv.path.is_ident("constructor") {
                        if let Expr::Lit(expr_lit) = nv.value {
                            if let Lit::Str(lit_str) = expr_lit.lit {
                                args.constructor = Some(lit_str.value());
                            }
                        }
                    } else {
                        return Err(syn::Error::new_spanned(nv.path, "未知的组件参数"));
                    }
                }
                Meta::List(list) => {
                    if list.path.is_ident("provides") {
                        let types = list
                            .parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                        args.provides = types.into_iter().collect();
                    } else if list.path.is_ident("teardown") {
                        let hooks = list
                            .parse_args_with(Punctuated::<HookName, Token![,]>::parse_terminated)?;
                        args.teardown = hooks.into_iter().map(|hook| hook.0).collect();
                    } else {
                        return Err(syn::Error::new_spanned(list.path, "未知的组件参数"));
                    }
                }
                Meta::Path(path) => {
                    return Err(syn::Error::new_spanned(path, "未知的组件参数"));
                }
            }
        }

        Ok(args)
    }
}

/// 实现 #[component] 宏
pub fn component_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    match expand_component(args.into(), input.into()) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(e) => TokenStream::from(e.to_compile_error()),
    }
}

/// 宏展开主体
///
/// 标记只接受具体结构体：trait、枚举等其他条目一律在编译期拒绝。
fn expand_component(
    args: proc_macro2::TokenStream,
    input: proc_macro2::TokenStream,
) -> Result<proc_macro2::TokenStream> {
    let component_args = if args.is_empty() {
        ComponentArgs::default()
    } else {
        syn::parse2::<ComponentArgs>(args)?
    };

    let item: Item = syn::parse2(input)?;
    let mut input_struct = match item {
        Item::Struct(item_struct) => item_struct,
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "组件标记只能用于具体结构体",
            ));
        }
    };

    if !input_struct.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input_struct.generics,
            "组件不支持泛型参数",
        ));
    }

    let injections = collect_injections(&mut input_struct)?;

    let struct_name = input_struct.ident.clone();
    let struct_name_string = struct_name.to_string();
    let component_name = component_args
        .name
        .clone()
        .unwrap_or_else(|| struct_name_string.clone());

    let component_trait_impl = quote! {
        impl ::wirebox::Component for #struct_name {
            fn name(&self) -> &'static str {
                #component_name
            }
        }
    };

    let stub_impl = generate_stub_impl(&struct_name, &component_args, &injections);
    let registration_code =
        generate_registration_code(&struct_name, &component_name, &component_args, &injections);

    let expanded = quote! {
        #input_struct

        #component_trait_impl

        #stub_impl

        #registration_code
    };

    Ok(expanded)
}

/// 单个可注入字段：字段名加 `Option<Arc<X>>` 中的 `X`
struct Injection {
    field: Ident,
    target: Type,
}

/// 收集并剥离 `#[inject]` 字段标记
fn collect_injections(input_struct: &mut ItemStruct) -> Result<Vec<Injection>> {
    let mut injections = Vec::new();

    match &mut input_struct.fields {
        Fields::Named(fields) => {
            for field in &mut fields.named {
                if !field_has_attribute(field, "inject") {
                    continue;
                }
                let target = option_arc_inner(&field.ty).cloned().ok_or_else(|| {
                    syn::Error::new_spanned(
                        &field.ty,
                        "可注入字段必须是 Option<Arc<X>> 形状",
                    )
                })?;
                strip_field_attribute(field, "inject");
                let ident = field
                    .ident
                    .clone()
                    .ok_or_else(|| syn::Error::new_spanned(field.clone(), "可注入字段缺少名称"))?;
                injections.push(Injection {
                    field: ident,
                    target,
                });
            }
        }
        Fields::Unnamed(fields) => {
            for field in &fields.unnamed {
                if field_has_attribute(field, "inject") {
                    return Err(syn::Error::new_spanned(
                        field,
                        "可注入字段只支持命名字段",
                    ));
                }
            }
        }
        Fields::Unit => {}
    }

    Ok(injections)
}

/// 生成构造、装配、封存与钩子桩函数
fn generate_stub_impl(
    struct_name: &Ident,
    args: &ComponentArgs,
    injections: &[Injection],
) -> proc_macro2::TokenStream {
    let construct_expr = args.constructor.as_ref().map_or_else(
        || quote! { <#struct_name as ::core::default::Default>::default() },
        |constructor| {
            let ctor_ident = Ident::new(constructor, Span::call_site());
            quote! { #struct_name::#ctor_ident() }
        },
    );

    let wire_statements: Vec<proc_macro2::TokenStream> = injections
        .iter()
        .map(|injection| {
            let field = &injection.field;
            let target = &injection.target;
            quote! {
                this.#field = ::core::option::Option::Some(
                    beans.get_unique::<#target>()?,
                );
            }
        })
        .collect();

    let wire_body = if wire_statements.is_empty() {
        quote! {
            let _ = (instance, beans);
            ::core::result::Result::Ok(())
        }
    } else {
        quote! {
            let this = instance
                .downcast_mut::<#struct_name>()
                .ok_or_else(|| ::wirebox::DependencyError::WireFailed {
                    type_name: ::core::any::type_name::<#struct_name>().to_string(),
                    message: "实例类型不匹配".to_string(),
                })?;
            #(#wire_statements)*
            ::core::result::Result::Ok(())
        }
    };

    let provides = &args.provides;
    let trait_bindings: Vec<proc_macro2::TokenStream> = provides
        .iter()
        .map(|provided| {
            quote! {
                ::wirebox::__private::BeanBinding {
                    key: ::wirebox::TypeKey::of::<#provided>(),
                    handle: ::std::boxed::Box::new(
                        ::std::sync::Arc::clone(&arc) as ::std::sync::Arc<#provided>,
                    ),
                }
            }
        })
        .collect();

    let hook_fns: Vec<proc_macro2::TokenStream> = args
        .teardown
        .iter()
        .map(|method| {
            let method_ident = Ident::new(method, Span::call_site());
            let hook_fn_ident = hook_fn_name(method);
            quote! {
                #[doc(hidden)]
                pub fn #hook_fn_ident(
                    handle: &(dyn ::core::any::Any + Send + Sync),
                ) -> ::core::result::Result<(), ::wirebox::BoxError> {
                    let component = handle
                        .downcast_ref::<::std::sync::Arc<#struct_name>>()
                        .ok_or_else(|| {
                            ::wirebox::BoxError::from("注册句柄类型不匹配")
                        })?;
                    ::wirebox::__private::TeardownOutcome::into_result(component.#method_ident())
                }
            }
        })
        .collect();

    quote! {
        impl #struct_name {
            #[doc(hidden)]
            pub fn __wirebox_construct() -> ::core::result::Result<
                ::wirebox::__private::ErasedInstance,
                ::wirebox::BoxError,
            > {
                let instance: #struct_name =
                    ::wirebox::__private::ConstructOutcome::<#struct_name>::into_construct(
                        #construct_expr,
                    )?;
                ::core::result::Result::Ok(::std::boxed::Box::new(instance))
            }

            #[doc(hidden)]
            pub fn __wirebox_wire(
                instance: &mut (dyn ::core::any::Any + Send + Sync),
                beans: &::wirebox::__private::BeanRegistry,
            ) -> ::core::result::Result<(), ::wirebox::DependencyError> {
                #wire_body
            }

            #[doc(hidden)]
            pub fn __wirebox_seal(
                raw: ::wirebox::__private::ErasedInstance,
            ) -> ::core::result::Result<
                ::std::vec::Vec<::wirebox::__private::BeanBinding>,
                ::wirebox::InstantiationError,
            > {
                let instance = raw.downcast::<#struct_name>().map_err(|_| {
                    ::wirebox::InstantiationError::InstanceTypeMismatch {
                        type_name: ::core::any::type_name::<#struct_name>().to_string(),
                    }
                })?;
                let arc: ::std::sync::Arc<#struct_name> = ::std::sync::Arc::from(instance);
                ::core::result::Result::Ok(::std::vec![
                    ::wirebox::__private::BeanBinding {
                        key: ::wirebox::TypeKey::of::<#struct_name>(),
                        handle: ::std::boxed::Box::new(::std::sync::Arc::clone(&arc)),
                    }
                    #(, #trait_bindings)*
                ])
            }

            #(#hook_fns)*
        }
    }
}

/// 生成启动时的描述符注册代码
fn generate_registration_code(
    struct_name: &Ident,
    component_name: &str,
    args: &ComponentArgs,
    injections: &[Injection],
) -> proc_macro2::TokenStream {
    let registration_fn_name = Ident::new(
        &format!(
            "__wirebox_register_{}",
            struct_name.to_string().to_lowercase()
        ),
        Span::call_site(),
    );

    let provides = &args.provides;
    let closure_entries = quote! {
        ::std::vec![
            ::wirebox::TypeKey::of::<#struct_name>()
            #(, ::wirebox::TypeKey::of::<#provides>())*
        ]
    };

    let dependency_entries: Vec<proc_macro2::TokenStream> = injections
        .iter()
        .map(|injection| {
            let field_name = injection.field.to_string();
            let target = &injection.target;
            quote! {
                ::wirebox::__private::DependencyDecl {
                    field: #field_name,
                    key: ::wirebox::TypeKey::of::<#target>(),
                }
            }
        })
        .collect();

    let hook_entries: Vec<proc_macro2::TokenStream> = args
        .teardown
        .iter()
        .map(|method| {
            let hook_fn_ident = hook_fn_name(method);
            quote! {
                ::wirebox::__private::HookDecl {
                    method: #method,
                    invoke: #struct_name::#hook_fn_ident,
                }
            }
        })
        .collect();

    quote! {
        // 程序启动时把描述符写入全局注册表
        #[doc(hidden)]
        #[::wirebox::__private::ctor]
        fn #registration_fn_name() {
            ::wirebox::__private::register_component_descriptor(
                ::wirebox::__private::ComponentDescriptor {
                    key: ::wirebox::TypeKey::of::<#struct_name>(),
                    name: #component_name,
                    module_path: ::core::module_path!(),
                    closure: #closure_entries,
                    dependencies: ::std::vec![#(#dependency_entries),*],
                    hooks: ::std::vec![#(#hook_entries),*],
                    construct: #struct_name::__wirebox_construct,
                    wire: #struct_name::__wirebox_wire,
                    seal: #struct_name::__wirebox_seal,
                },
            );
        }
    }
}

fn hook_fn_name(method: &str) -> Ident {
    Ident::new(&format!("__wirebox_hook_{method}"), Span::call_site())
}
