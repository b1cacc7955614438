//! 绑定解析
//!
//! 把请求类型解析到恰好一个组件：候选集合是绑定图中该类型键下的
//! 全部组件（组件自身类型也在闭包中，因此按具体类型请求同样命中）。
//! 零候选是缺失绑定，多候选是歧义绑定且必须列举全部候选。
//! 依赖装配查询和容器的公开类型查询都经由本解析器语义。

use wirebox_core::{ComponentDescriptor, DependencyError, DependencyResult, TypeKey};

use crate::type_index::TypeIndex;

/// 绑定解析器
#[derive(Debug, Clone, Copy)]
pub struct BindingResolver<'a> {
    index: &'a TypeIndex,
}

impl<'a> BindingResolver<'a> {
    /// 在指定索引上创建解析器
    #[must_use]
    pub fn new(index: &'a TypeIndex) -> Self {
        Self { index }
    }

    /// 把请求类型解析到唯一组件
    pub fn resolve(&self, target: TypeKey) -> DependencyResult<&'a ComponentDescriptor> {
        let candidates = self.index.candidates(target.id);
        match candidates {
            [] => Err(DependencyError::MissingBinding {
                type_name: target.name.to_string(),
            }),
            [only] => self.index.descriptor(only.id).ok_or_else(|| {
                DependencyError::MissingBinding {
                    type_name: target.name.to_string(),
                }
            }),
            many => {
                let mut names: Vec<String> = many.iter().map(|key| key.name.to_string()).collect();
                names.sort();
                Err(DependencyError::AmbiguousBinding {
                    type_name: target.name.to_string(),
                    candidates: names,
                })
            }
        }
    }
}
