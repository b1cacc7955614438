//! 类型元数据定义
//!
//! 提供组件和绑定键的类型标识信息

use std::any::TypeId;

/// 类型键
///
/// 以 `TypeId` 为身份标识，同时携带完整类型名用于错误消息和诊断输出。
/// 既可以描述具体组件类型，也可以描述 trait object 绑定键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeKey {
    /// 类型ID
    pub id: TypeId,
    /// 完整类型名称
    pub name: &'static str,
}

impl TypeKey {
    /// 从类型获取类型键，支持 trait object
    #[must_use]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// 获取简短的类型名称（不包含模块路径）
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }
}

impl std::fmt::Display for TypeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
