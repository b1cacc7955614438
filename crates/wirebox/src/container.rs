//! 依赖注入容器
//!
//! 容器持有自己的类型索引、Bean 注册表与实例化顺序，状态完全归属于
//! 容器实例本身，同一进程内可并存多个互不干扰的容器。容器创建即完成
//! 全部组件的实例化；销毁通过消费 `self` 的 `close` 执行且只执行一次。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use wirebox_core::{BeanRegistry, ComponentDescriptor, ContainerResult, TypeKey};

use crate::diagnostics::ContainerSnapshot;
use crate::instantiate::realize_all;
use crate::lifecycle::run_teardown;
use crate::scanner::{namespace_of_marker, scan_namespace};
use crate::type_index::TypeIndex;

/// 依赖注入容器
#[derive(Debug)]
pub struct Container {
    id: Uuid,
    created_at: DateTime<Utc>,
    namespace: String,
    index: TypeIndex,
    registry: BeanRegistry,
    order: Vec<TypeKey>,
}

impl Container {
    /// 以标记类型所在模块为命名空间创建容器
    ///
    /// 扫描命名空间下注册的全部组件并逐一实例化。任何组件实例化失败
    /// 都会使整个创建过程失败，不会产出部分初始化的容器。
    pub fn create<M: 'static>() -> ContainerResult<Self> {
        let namespace = namespace_of_marker::<M>()?;
        Self::with_namespace(&namespace)
    }

    /// 以显式命名空间创建容器
    pub fn with_namespace(namespace: &str) -> ContainerResult<Self> {
        Self::from_descriptors(namespace.to_string(), scan_namespace(namespace))
    }

    pub(crate) fn from_descriptors(
        namespace: String,
        descriptors: Vec<ComponentDescriptor>,
    ) -> ContainerResult<Self> {
        let index = TypeIndex::build(descriptors);
        let (registry, order) = realize_all(&index)?;
        let container = Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            namespace,
            index,
            registry,
            order,
        };
        info!(
            container_id = %container.id,
            namespace = %container.namespace,
            components = container.order.len(),
            "容器创建完成"
        );
        Ok(container)
    }

    /// 按类型查找 Bean
    ///
    /// `T` 可以是具体类型，也可以是 `dyn Trait`。要求恰有一个组件
    /// 发布了该绑定，零个或多个候选都返回错误。
    pub fn get_bean<T: ?Sized + 'static>(&self) -> ContainerResult<Arc<T>> {
        Ok(self.registry.get_unique::<T>()?)
    }

    /// 关闭容器并执行销毁钩子
    ///
    /// 按实例化逆序调用每个组件声明的销毁钩子。`close` 消费容器，
    /// 销毁阶段因此恰好执行一次。
    pub fn close(self) -> ContainerResult<()> {
        info!(container_id = %self.id, namespace = %self.namespace, "开始关闭容器");
        run_teardown(&self.index, &self.registry, &self.order)?;
        info!(container_id = %self.id, "容器已关闭");
        Ok(())
    }

    /// 导出当前组件图的诊断快照
    #[must_use]
    pub fn snapshot(&self) -> ContainerSnapshot {
        ContainerSnapshot::capture(self.id, &self.namespace, &self.index, &self.order)
    }

    /// 容器实例标识
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 容器扫描的命名空间
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// 容器创建时间
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// 容器持有的组件数量
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.index.component_count()
    }

    /// 容器是否为空
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.component_count() == 0
    }
}
