//! 类型索引
//!
//! 把扫描结果组织为绑定图：对每个组件，其类型闭包（自身类型加全部
//! 显式声明的 trait 绑定，按类型身份去重）中的每个键都指回该组件。
//! 索引在容器初始化时构建一次，之后不可变。

use std::any::TypeId;
use std::collections::HashMap;

use wirebox_core::{ComponentDescriptor, TypeKey};

/// 绑定图：类型键到可满足它的组件集合的映射
#[derive(Debug, Default)]
pub struct TypeIndex {
    components: HashMap<TypeId, ComponentDescriptor>,
    bindings: HashMap<TypeId, Vec<TypeKey>>,
    order: Vec<TypeKey>,
}

impl TypeIndex {
    /// 从扫描结果构建索引
    #[must_use]
    pub fn build(descriptors: Vec<ComponentDescriptor>) -> Self {
        let mut index = Self::default();
        for descriptor in descriptors {
            let component = descriptor.key;
            index.order.push(component);
            for key in &descriptor.closure {
                index.bindings.entry(key.id).or_default().push(component);
            }
            index.components.insert(component.id, descriptor);
        }
        index
    }

    /// 按具体类型查找组件描述符
    #[must_use]
    pub fn descriptor(&self, type_id: TypeId) -> Option<&ComponentDescriptor> {
        self.components.get(&type_id)
    }

    /// 查找可满足指定类型键的全部组件
    #[must_use]
    pub fn candidates(&self, type_id: TypeId) -> &[TypeKey] {
        self.bindings.get(&type_id).map_or(&[], Vec::as_slice)
    }

    /// 扫描顺序下的组件列表
    #[must_use]
    pub fn components_in_order(&self) -> &[TypeKey] {
        &self.order
    }

    /// 索引中的组件数量
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
