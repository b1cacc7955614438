//! # Wirebox Macros
//!
//! 这个 crate 提供编译时组件注册的过程宏。
//!
//! ## 核心宏
//!
//! - [`macro@component`] - 组件标记宏，生成注册描述符与装配桩代码
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wirebox_macros::component;
//!
//! pub trait Storage: Send + Sync {
//!     fn kind(&self) -> &'static str;
//! }
//!
//! #[component(provides(dyn Storage))]
//! #[derive(Debug, Default)]
//! pub struct MemoryStore;
//!
//! #[component(teardown(close))]
//! #[derive(Debug, Default)]
//! pub struct Indexer {
//!     #[inject]
//!     storage: Option<Arc<dyn Storage>>,
//! }
//! ```

use proc_macro::TokenStream;

mod component;
mod utils;

/// 组件标记宏
///
/// 为结构体实现 `Component` trait，生成构造、装配、封存与钩子桩函数，
/// 并在程序启动时把组件描述符注册到全局表中。组件所在的模块路径
/// （`module_path!`）被记录为命名空间扫描依据。
///
/// # 参数
///
/// - `name = "custom_name"` - 自定义组件名称（默认为结构体名）
/// - `provides(dyn TraitA, dyn TraitB)` - 除自身类型外额外发布的绑定
/// - `constructor = "new"` - 使用指定的无参关联函数构造（默认为
///   `Default::default`），可返回 `Self` 或 `Result<Self, E>`
/// - `teardown(method_a, method_b)` - 销毁钩子方法，按声明顺序调用，
///   可返回 `()` 或 `Result<(), E>`
///
/// # 字段标记
///
/// `#[inject]` 标记的字段必须是 `Option<Arc<X>>`，`X` 可以是具体类型
/// 或 `dyn Trait`。容器在装配阶段把字段填为 `Some`。
///
/// # 示例
///
/// ```rust,ignore
/// #[component(name = "主存储", provides(dyn Storage), teardown(close))]
/// #[derive(Debug, Default)]
/// pub struct MemoryStore {
///     // 字段
/// }
/// ```
#[proc_macro_attribute]
pub fn component(args: TokenStream, input: TokenStream) -> TokenStream {
    component::component_impl(args, input)
}
