//! Bean 注册表
//!
//! 按类型索引的实例存储：每个组件在自身具体类型和类型闭包的每个键下
//! 各注册一个指向同一实例的 `Arc` 句柄。注册表由容器值独占持有，
//! 只在初始化的单写入阶段被修改，之后只读。

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::BeanBinding;
use crate::errors::{LookupError, LookupResult};
use crate::metadata::TypeKey;

/// 单个注册条目
pub struct RegisteredBean {
    /// 拥有该实例的具体组件类型
    pub owner: TypeKey,
    /// 本条目的绑定键
    pub key: TypeKey,
    /// 被擦除的 `Arc` 句柄，实际内容为 `Arc<绑定键类型>`
    pub handle: Box<dyn Any + Send + Sync>,
}

impl std::fmt::Debug for RegisteredBean {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredBean")
            .field("owner", &self.owner)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Bean 注册表
#[derive(Debug, Default)]
pub struct BeanRegistry {
    beans: HashMap<TypeId, Vec<RegisteredBean>>,
}

impl BeanRegistry {
    /// 创建空注册表
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一个绑定句柄
    pub fn insert(&mut self, owner: TypeKey, binding: BeanBinding) {
        self.beans
            .entry(binding.key.id)
            .or_default()
            .push(RegisteredBean {
                owner,
                key: binding.key,
                handle: binding.handle,
            });
    }

    /// 唯一实例查询
    ///
    /// 请求类型下必须恰好注册了一个实例：零个实例返回
    /// [`LookupError::NoCandidate`]，多个实例返回
    /// [`LookupError::MultipleCandidates`] 并列举全部候选组件。
    pub fn get_unique<T: ?Sized + 'static>(&self) -> LookupResult<Arc<T>> {
        let key = TypeKey::of::<T>();
        let entries = self.beans.get(&key.id).map_or(&[][..], Vec::as_slice);
        match entries {
            [] => Err(LookupError::NoCandidate {
                type_name: key.name.to_string(),
            }),
            [entry] => entry
                .handle
                .downcast_ref::<Arc<T>>()
                .cloned()
                .ok_or_else(|| LookupError::HandleTypeMismatch {
                    type_name: key.name.to_string(),
                }),
            many => {
                let mut candidates: Vec<String> =
                    many.iter().map(|e| e.owner.name.to_string()).collect();
                candidates.sort();
                Err(LookupError::MultipleCandidates {
                    type_name: key.name.to_string(),
                    candidates,
                })
            }
        }
    }

    /// 获取指定类型键下第一个注册句柄（生命周期阶段使用）
    #[must_use]
    pub fn handle_of(&self, type_id: TypeId) -> Option<&(dyn Any + Send + Sync)> {
        self.beans
            .get(&type_id)
            .and_then(|entries| entries.first())
            .map(|entry| entry.handle.as_ref())
    }

    /// 指定类型键下注册的实例数量
    #[must_use]
    pub fn candidate_count(&self, type_id: TypeId) -> usize {
        self.beans.get(&type_id).map_or(0, Vec::len)
    }
}
