//! `#[component]` 宏生成代码的集成测试

use std::sync::Arc;

use wirebox::{Component, Container};
use wirebox_macros::component;

pub trait Cache: Send + Sync + std::fmt::Debug {
    fn capacity(&self) -> usize;
}

#[component(provides(dyn Cache))]
#[derive(Debug, Default)]
pub struct LruCache;

impl Cache for LruCache {
    fn capacity(&self) -> usize {
        128
    }
}

#[component(name = "查询服务", constructor = "new", teardown(flush))]
#[derive(Debug)]
pub struct QueryService {
    #[inject]
    cache: Option<Arc<dyn Cache>>,
    label: &'static str,
}

impl QueryService {
    pub fn new() -> Self {
        Self {
            cache: None,
            label: "query",
        }
    }

    pub fn cache_capacity(&self) -> usize {
        self.cache.as_ref().map_or(0, |cache| cache.capacity())
    }

    pub fn flush(&self) {}
}

pub struct Marker;

#[test]
fn generated_component_impl_reports_name() {
    let plain = LruCache;
    assert_eq!(plain.name(), "LruCache");

    let named = QueryService::new();
    assert_eq!(named.name(), "查询服务");
    assert_eq!(named.label, "query");
}

#[test]
fn generated_registration_drives_the_container() {
    let container = Container::create::<Marker>().unwrap();

    let service = container.get_bean::<QueryService>().unwrap();
    assert_eq!(service.cache_capacity(), 128);

    let cache = container.get_bean::<dyn Cache>().unwrap();
    assert!(Arc::ptr_eq(service.cache.as_ref().unwrap(), &cache));

    container.close().unwrap();
}
