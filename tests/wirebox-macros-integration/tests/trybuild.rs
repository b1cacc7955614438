//! `#[component]` 宏的 trybuild 编译测试
//!
//! 非法输入（trait、枚举、泛型、错误的注入字段形状）的拒绝路径
//! 在 wirebox-macros 的展开层单元测试中覆盖，这里只保留通过用例。

#[test]
fn trybuild_component_macro() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/component_ok.rs");
    t.pass("tests/trybuild/inject_ok.rs");
}
