//! 实例化引擎
//!
//! 以依赖优先的递归顺序把每个组件实现为恰好一个实例：先解析并实现
//! 全部声明的依赖，再构造自身、在独占持有期间完成装配，最后封存进
//! `Arc` 并注册到全部闭包键下。重入在途组件即为循环依赖，直接失败，
//! 不会产出半装配的实例图。

use std::any::TypeId;
use std::collections::HashSet;

use tracing::debug;
use wirebox_core::{
    BeanRegistry, ContainerResult, DependencyError, InstantiationError, TypeKey,
};

use crate::resolver::BindingResolver;
use crate::type_index::TypeIndex;

/// 实例化全部组件
///
/// 返回装配完成的注册表和实例化顺序（销毁阶段按其逆序执行钩子）。
pub fn realize_all(index: &TypeIndex) -> ContainerResult<(BeanRegistry, Vec<TypeKey>)> {
    let mut realizer = Realizer {
        index,
        registry: BeanRegistry::new(),
        realized: HashSet::new(),
        in_progress: Vec::new(),
        order: Vec::new(),
    };

    for component in index.components_in_order() {
        realizer.realize(*component)?;
    }

    Ok((realizer.registry, realizer.order))
}

struct Realizer<'a> {
    index: &'a TypeIndex,
    registry: BeanRegistry,
    realized: HashSet<TypeId>,
    in_progress: Vec<TypeKey>,
    order: Vec<TypeKey>,
}

impl Realizer<'_> {
    fn realize(&mut self, component: TypeKey) -> ContainerResult<()> {
        if self.realized.contains(&component.id) {
            return Ok(());
        }
        if let Some(position) = self.in_progress.iter().position(|k| k.id == component.id) {
            return Err(DependencyError::CircularDependency {
                chain: render_chain(&self.in_progress[position..], component),
            }
            .into());
        }

        self.in_progress.push(component);

        let descriptor = self
            .index
            .descriptor(component.id)
            .ok_or_else(|| DependencyError::MissingBinding {
                type_name: component.name.to_string(),
            })?
            .clone();

        for dependency in &descriptor.dependencies {
            let owner = BindingResolver::new(self.index).resolve(dependency.key)?.key;
            self.realize(owner)?;
        }

        debug!(component = descriptor.name, "实例化组件");

        let mut raw =
            (descriptor.construct)().map_err(|source| InstantiationError::ConstructFailed {
                type_name: component.name.to_string(),
                source,
            })?;
        (descriptor.wire)(raw.as_mut(), &self.registry)?;
        let bindings = (descriptor.seal)(raw)?;
        for binding in bindings {
            self.registry.insert(component, binding);
        }

        self.in_progress.pop();
        self.realized.insert(component.id);
        self.order.push(component);
        Ok(())
    }
}

fn render_chain(in_progress: &[TypeKey], back_to: TypeKey) -> String {
    let mut chain: Vec<&str> = in_progress.iter().map(TypeKey::short_name).collect();
    chain.push(back_to.short_name());
    chain.join(" -> ")
}
