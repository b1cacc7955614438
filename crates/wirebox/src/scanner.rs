//! 组件扫描
//!
//! 发现机制是静态注册表：`#[component]` 标记的组件在程序启动时把描述符
//! 写入全局表，扫描阶段只做命名空间前缀筛选。编译产物目录遍历在本设计中
//! 没有对应物；"抽象类型携带标记" 这类配置错误由宏在编译期拒绝。

use tracing::{info, warn};
use wirebox_core::{descriptors_snapshot, ComponentDescriptor, ComponentError, ComponentResult};

/// 判断模块路径是否落在命名空间之内
fn in_namespace(module_path: &str, namespace: &str) -> bool {
    module_path == namespace
        || (module_path.starts_with(namespace)
            && module_path[namespace.len()..].starts_with("::"))
}

/// 从标记类型推导命名空间
///
/// 取标记类型完整路径去掉末段，即其所在模块路径。
pub fn namespace_of_marker<M: 'static>() -> ComponentResult<String> {
    let type_name = std::any::type_name::<M>();
    type_name
        .rsplit_once("::")
        .map(|(namespace, _)| namespace.to_string())
        .ok_or_else(|| ComponentError::NamespaceUnavailable {
            type_name: type_name.to_string(),
        })
}

/// 扫描命名空间下的全部组件描述符
///
/// 结果按组件名排序，保证实例化遍历顺序确定。空结果是合法的
/// （容器允许为空），但会记录警告。
#[must_use]
pub fn scan_namespace(namespace: &str) -> Vec<ComponentDescriptor> {
    let mut found: Vec<ComponentDescriptor> = descriptors_snapshot()
        .into_iter()
        .filter(|descriptor| in_namespace(descriptor.module_path, namespace))
        .collect();

    found.sort_by(|a, b| a.name.cmp(b.name).then_with(|| a.key.name.cmp(b.key.name)));

    if found.is_empty() {
        warn!(namespace, "命名空间下未发现任何组件");
    } else {
        info!(namespace, count = found.len(), "组件扫描完成");
    }

    found
}
