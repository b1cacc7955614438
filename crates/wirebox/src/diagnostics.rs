//! 容器诊断快照
//!
//! 将容器当前的组件图导出为可序列化的结构，便于日志输出和问题排查。

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::type_index::TypeIndex;
use wirebox_core::TypeKey;

/// 单个组件的诊断报告
#[derive(Debug, Clone, Serialize)]
pub struct ComponentReport {
    /// 组件名称
    pub name: String,
    /// 组件具体类型的完整路径
    pub type_name: String,
    /// 注册时来源的模块路径
    pub module_path: String,
    /// 该组件对外发布的全部绑定键
    pub bindings: Vec<String>,
    /// 声明的依赖字段与目标类型
    pub dependencies: Vec<String>,
    /// 声明的销毁钩子方法名
    pub hooks: Vec<String>,
}

/// 容器诊断快照
#[derive(Debug, Clone, Serialize)]
pub struct ContainerSnapshot {
    /// 容器实例标识
    pub container_id: Uuid,
    /// 容器扫描的命名空间
    pub namespace: String,
    /// 快照生成时间
    pub captured_at: DateTime<Utc>,
    /// 按实例化顺序排列的组件报告
    pub components: Vec<ComponentReport>,
}

impl ContainerSnapshot {
    /// 从类型索引与实例化顺序生成快照
    pub fn capture(
        container_id: Uuid,
        namespace: &str,
        index: &TypeIndex,
        order: &[TypeKey],
    ) -> Self {
        let components = order
            .iter()
            .filter_map(|key| index.descriptor(key.id))
            .map(|descriptor| ComponentReport {
                name: descriptor.name.to_string(),
                type_name: descriptor.key.name.to_string(),
                module_path: descriptor.module_path.to_string(),
                bindings: descriptor
                    .closure
                    .iter()
                    .map(|key| key.name.to_string())
                    .collect(),
                dependencies: descriptor
                    .dependencies
                    .iter()
                    .map(|dep| format!("{}: {}", dep.field, dep.key.name))
                    .collect(),
                hooks: descriptor
                    .hooks
                    .iter()
                    .map(|hook| hook.method.to_string())
                    .collect(),
            })
            .collect();

        Self {
            container_id,
            namespace: namespace.to_string(),
            captured_at: Utc::now(),
            components,
        }
    }

    /// 组件数量
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
