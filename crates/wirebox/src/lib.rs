//! # Wirebox
//!
//! 命名空间作用域的依赖注入容器。
//!
//! ## 使用方式
//!
//! 组件用 `#[component]` 标记（由 `wirebox-macros` 提供），在程序启动时
//! 静态注册到全局描述符表。容器创建时按命名空间筛选描述符、构建类型
//! 索引并一次性实例化全部组件；之后通过 [`Container::get_bean`] 按
//! 具体类型或 `dyn Trait` 查询实例。
//!
//! ```ignore
//! let container = Container::create::<AppMarker>()?;
//! let service: Arc<dyn IGreeter> = container.get_bean::<dyn IGreeter>()?;
//! container.close()?;
//! ```
//!
//! ## 模块划分
//!
//! - [`scanner`] - 命名空间扫描（静态注册表筛选）
//! - [`type_index`] - 类型闭包绑定图
//! - [`resolver`] - 类型到组件的唯一解析
//! - [`instantiate`] - 依赖优先的实例化引擎
//! - [`lifecycle`] - 销毁钩子执行
//! - [`diagnostics`] - 容器诊断快照
//! - [`container`] - 对外容器门面

pub mod container;
pub mod diagnostics;
pub mod instantiate;
pub mod lifecycle;
pub mod resolver;
pub mod scanner;
pub mod type_index;

#[cfg(test)]
pub(crate) mod testing;

pub use container::Container;
pub use diagnostics::{ComponentReport, ContainerSnapshot};
pub use resolver::BindingResolver;
pub use type_index::TypeIndex;

pub use wirebox_core::{
    BoxError, Component, ComponentDescriptor, ComponentError, ContainerError, ContainerResult,
    DependencyError, InstantiationError, LifecycleError, LookupError, TypeKey,
};

pub use wirebox_macros::component;

/// `#[component]` 宏生成代码的内部依赖，不属于公开 API
#[doc(hidden)]
pub mod __private {
    pub use ctor::ctor;
    pub use wirebox_core::{
        register_component_descriptor, BeanBinding, BeanRegistry, ComponentDescriptor,
        ConstructOutcome, DependencyDecl, ErasedInstance, HookDecl, TeardownOutcome,
    };
}
