//! # Wirebox Core
//!
//! Wirebox 依赖注入容器的公共基础 crate。
//!
//! ## 核心内容
//!
//! - [`Component`] - 组件基础 trait
//! - [`ComponentDescriptor`] - 组件描述符（由 `#[component]` 宏注册）
//! - [`BeanRegistry`] - 按类型索引的实例注册表
//! - [`TypeKey`] - 类型身份元数据
//! - 错误类型族与全局描述符表
//!
//! ## 设计原则
//!
//! - 编译期组件发现：描述符在程序启动时经 `ctor` 注册到静态表，
//!   不做任何运行时目录扫描
//! - 容器实例之间互不共享状态：全局表只存放不可变的描述符元数据，
//!   实例注册表由每个容器值独占持有
//! - 快速失败：任何失败都中止当前操作并携带原因向上传播

pub mod component;
pub mod descriptor;
pub mod errors;
pub mod metadata;
pub mod registry;

pub use component::*;
pub use descriptor::*;
pub use errors::*;
pub use metadata::*;
pub use registry::*;

use std::any::TypeId;

/// 全局组件描述符表
///
/// `#[component]` 宏生成的注册函数在程序启动时向此表写入描述符；
/// 启动完成后此表事实上只读。
static COMPONENT_DESCRIPTORS: once_cell::sync::Lazy<
    dashmap::DashMap<TypeId, ComponentDescriptor>,
> = once_cell::sync::Lazy::new(dashmap::DashMap::new);

/// 注册组件描述符
///
/// 由宏生成的 `ctor` 函数调用。闭包按类型身份去重后入表；
/// 同一类型重复注册时保留首次注册的描述符。
pub fn register_component_descriptor(mut descriptor: ComponentDescriptor) {
    descriptor.dedup_closure();
    COMPONENT_DESCRIPTORS
        .entry(descriptor.key.id)
        .or_insert(descriptor);
}

/// 获取全局描述符表的快照
#[must_use]
pub fn descriptors_snapshot() -> Vec<ComponentDescriptor> {
    COMPONENT_DESCRIPTORS
        .iter()
        .map(|entry| entry.value().clone())
        .collect()
}

/// 已注册的描述符数量
#[must_use]
pub fn registered_descriptor_count() -> usize {
    COMPONENT_DESCRIPTORS.len()
}
