//! 组件描述符定义
//!
//! 描述符是 `#[component]` 宏在程序启动时注册到静态表中的组件元数据：
//! 类型身份、类型闭包（自身类型加显式声明的 trait 绑定）、可注入字段、
//! 销毁钩子，以及构造、装配、封存三个桩函数。

use std::any::Any;

use crate::errors::{BoxError, DependencyError, InstantiationError};
use crate::metadata::TypeKey;
use crate::registry::BeanRegistry;

/// 被擦除的组件实例（装配阶段独占持有）
pub type ErasedInstance = Box<dyn Any + Send + Sync>;

/// 构造桩函数：以无参路径创建组件实例
pub type ConstructFn = fn() -> Result<ErasedInstance, BoxError>;

/// 装配桩函数：在实例被独占持有期间注入全部声明的依赖字段
pub type WireFn = fn(&mut (dyn Any + Send + Sync), &BeanRegistry) -> Result<(), DependencyError>;

/// 封存桩函数：将装配完成的实例封入 `Arc` 并产出全部绑定句柄
pub type SealFn = fn(ErasedInstance) -> Result<Vec<BeanBinding>, InstantiationError>;

/// 钩子桩函数：在注册句柄上无参调用一个销毁钩子方法
pub type HookFn = fn(&(dyn Any + Send + Sync)) -> Result<(), BoxError>;

/// 可注入字段声明
#[derive(Debug, Clone, Copy)]
pub struct DependencyDecl {
    /// 字段名称
    pub field: &'static str,
    /// 字段声明类型对应的绑定键
    pub key: TypeKey,
}

/// 销毁钩子声明
#[derive(Debug, Clone, Copy)]
pub struct HookDecl {
    /// 钩子方法名称
    pub method: &'static str,
    /// 钩子调用桩
    pub invoke: HookFn,
}

/// 封存产出的单个绑定：键加上该键下的 `Arc` 句柄
pub struct BeanBinding {
    /// 绑定键
    pub key: TypeKey,
    /// 被擦除的 `Arc` 句柄，实际内容为 `Arc<绑定键类型>`
    pub handle: Box<dyn Any + Send + Sync>,
}

impl std::fmt::Debug for BeanBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BeanBinding")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// 组件描述符
#[derive(Debug, Clone)]
pub struct ComponentDescriptor {
    /// 组件具体类型键
    pub key: TypeKey,
    /// 组件名称（默认为类型短名，可由标记参数覆盖）
    pub name: &'static str,
    /// 组件定义处的模块路径，作为命名空间扫描依据
    pub module_path: &'static str,
    /// 类型闭包：自身类型加全部显式声明的绑定，按声明顺序去重
    pub closure: Vec<TypeKey>,
    /// 可注入字段列表
    pub dependencies: Vec<DependencyDecl>,
    /// 销毁钩子列表
    pub hooks: Vec<HookDecl>,
    /// 构造桩
    pub construct: ConstructFn,
    /// 装配桩
    pub wire: WireFn,
    /// 封存桩
    pub seal: SealFn,
}

impl ComponentDescriptor {
    /// 按类型身份对闭包去重，保留首次出现的位置
    pub fn dedup_closure(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.closure.retain(|key| seen.insert(key.id));
    }
}
