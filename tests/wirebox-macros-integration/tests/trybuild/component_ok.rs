use wirebox::Component;
use wirebox_macros::component;

#[component]
#[derive(Debug, Default)]
struct OkService;

fn main() {
    // 宏生成的 Component 实现提供 name 方法
    let s = OkService;
    assert_eq!(s.name(), "OkService");
}
