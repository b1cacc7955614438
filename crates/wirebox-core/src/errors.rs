//! 错误类型定义
//!
//! 容器的失败策略是快速失败：任何扫描、解析、实例化或钩子调用失败
//! 都会中止当前操作并携带原始原因向调用方传播，不做重试和降级。

use thiserror::Error;

/// 动态错误装箱类型
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 组件注册与扫描错误类型
#[derive(Error, Debug)]
pub enum ComponentError {
    #[error("无法从标记类型推导命名空间: {type_name}")]
    NamespaceUnavailable { type_name: String },
}

/// 依赖解析与装配错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("找不到可满足类型的组件: {type_name}")]
    MissingBinding { type_name: String },

    #[error("类型 {type_name} 存在多个候选组件: {candidates:?}")]
    AmbiguousBinding {
        type_name: String,
        candidates: Vec<String>,
    },

    #[error("检测到循环依赖: {chain}")]
    CircularDependency { chain: String },

    #[error("字段装配失败: {type_name}, 原因: {message}")]
    WireFailed { type_name: String, message: String },
}

impl From<LookupError> for DependencyError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::NoCandidate { type_name } => Self::MissingBinding { type_name },
            LookupError::MultipleCandidates {
                type_name,
                candidates,
            } => Self::AmbiguousBinding {
                type_name,
                candidates,
            },
            LookupError::HandleTypeMismatch { type_name } => Self::WireFailed {
                type_name,
                message: "注册句柄类型不匹配".to_string(),
            },
        }
    }
}

/// 组件实例化错误类型
#[derive(Error, Debug)]
pub enum InstantiationError {
    #[error("组件构造失败: {type_name}, 原因: {source}")]
    ConstructFailed {
        type_name: String,
        source: BoxError,
    },

    #[error("实例类型与描述符不匹配: {type_name}")]
    InstanceTypeMismatch { type_name: String },
}

/// 生命周期钩子错误类型
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("销毁钩子执行失败: {component}::{method}, 原因: {source}")]
    HookFailed {
        component: String,
        method: String,
        source: BoxError,
    },
}

/// 注册表查询错误类型（初始化完成后的公开查询）
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("类型没有已注册的实例: {type_name}")]
    NoCandidate { type_name: String },

    #[error("类型 {type_name} 下注册了多个实例: {candidates:?}")]
    MultipleCandidates {
        type_name: String,
        candidates: Vec<String>,
    },

    #[error("注册句柄类型不匹配: {type_name}")]
    HandleTypeMismatch { type_name: String },
}

/// 容器统一错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("组件错误: {source}")]
    Component {
        #[from]
        source: ComponentError,
    },

    #[error("依赖错误: {source}")]
    Dependency {
        #[from]
        source: DependencyError,
    },

    #[error("实例化错误: {source}")]
    Instantiation {
        #[from]
        source: InstantiationError,
    },

    #[error("生命周期错误: {source}")]
    Lifecycle {
        #[from]
        source: LifecycleError,
    },

    #[error("查询错误: {source}")]
    Lookup {
        #[from]
        source: LookupError,
    },
}

/// 结果类型别名
pub type ComponentResult<T> = Result<T, ComponentError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type InstantiationResult<T> = Result<T, InstantiationError>;
pub type LifecycleResult<T> = Result<T, LifecycleError>;
pub type LookupResult<T> = Result<T, LookupError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
