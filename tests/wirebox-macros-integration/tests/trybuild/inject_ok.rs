use std::sync::Arc;

use wirebox::Container;
use wirebox_macros::component;

trait Counter: Send + Sync + std::fmt::Debug {
    fn count(&self) -> usize;
}

#[component(provides(dyn Counter))]
#[derive(Debug, Default)]
struct ZeroCounter;

impl Counter for ZeroCounter {
    fn count(&self) -> usize {
        0
    }
}

#[component(teardown(stop))]
#[derive(Debug, Default)]
struct Poller {
    #[inject]
    counter: Option<Arc<dyn Counter>>,
}

impl Poller {
    fn stop(&self) {}
}

struct Marker;

fn main() {
    let container = Container::create::<Marker>().unwrap();
    let poller = container.get_bean::<Poller>().unwrap();
    assert_eq!(poller.counter.as_ref().unwrap().count(), 0);
    container.close().unwrap();
}
