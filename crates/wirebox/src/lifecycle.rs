//! 生命周期管理
//!
//! 销毁阶段只在显式 `close` 时执行一次：按实例化逆序遍历组件，
//! 无参调用每个声明的销毁钩子。任何钩子失败立即中止整个销毁阶段，
//! 不继续处理后续组件。

use tracing::{debug, info};
use wirebox_core::{BeanRegistry, LifecycleError, LifecycleResult, TypeKey};

use crate::type_index::TypeIndex;

/// 执行销毁钩子
///
/// `order` 是实例化顺序，执行时取其逆序，保证依赖方先于其依赖被销毁。
pub fn run_teardown(
    index: &TypeIndex,
    registry: &BeanRegistry,
    order: &[TypeKey],
) -> LifecycleResult<()> {
    info!(count = order.len(), "开始执行销毁钩子");

    for component in order.iter().rev() {
        let Some(descriptor) = index.descriptor(component.id) else {
            continue;
        };
        if descriptor.hooks.is_empty() {
            continue;
        }
        let Some(handle) = registry.handle_of(component.id) else {
            continue;
        };
        for hook in &descriptor.hooks {
            debug!(
                component = descriptor.name,
                method = hook.method,
                "调用销毁钩子"
            );
            (hook.invoke)(handle).map_err(|source| LifecycleError::HookFailed {
                component: descriptor.name.to_string(),
                method: hook.method.to_string(),
                source,
            })?;
        }
    }

    Ok(())
}
