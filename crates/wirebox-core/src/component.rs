//! 组件基础接口定义
//!
//! 提供所有容器托管组件必须实现的基础 trait，以及
//! 构造函数和销毁钩子的返回值适配 trait。

use std::fmt::Debug;

use crate::errors::BoxError;

/// 组件基础 trait
///
/// 由 `#[component]` 宏自动实现，组件作者无需手动实现。
pub trait Component: Send + Sync + Debug + 'static {
    /// 组件名称
    fn name(&self) -> &'static str;
}

/// 构造函数返回值适配 trait
///
/// 允许组件构造函数返回 `Self` 或 `Result<Self, E>`，
/// 宏生成的构造桩代码通过本 trait 统一收敛为可失败的构造路径。
pub trait ConstructOutcome<C> {
    /// 将构造结果收敛为 `Result`
    fn into_construct(self) -> Result<C, BoxError>;
}

impl<C> ConstructOutcome<C> for C {
    fn into_construct(self) -> Result<C, BoxError> {
        Ok(self)
    }
}

impl<C, E> ConstructOutcome<C> for Result<C, E>
where
    E: Into<BoxError>,
{
    fn into_construct(self) -> Result<C, BoxError> {
        self.map_err(Into::into)
    }
}

/// 销毁钩子返回值适配 trait
///
/// 钩子方法可以返回 `()` 或 `Result<(), E>`；任何钩子失败都会
/// 中止整个销毁阶段并向调用方传播。
pub trait TeardownOutcome {
    /// 将钩子返回值收敛为 `Result`
    fn into_result(self) -> Result<(), BoxError>;
}

impl TeardownOutcome for () {
    fn into_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> TeardownOutcome for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}
