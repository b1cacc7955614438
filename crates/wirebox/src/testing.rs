//! 单元测试共享的手工描述符与组件定义

use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use wirebox_core::{
    BeanBinding, BeanRegistry, BoxError, ComponentDescriptor, DependencyDecl, DependencyError,
    ErasedInstance, HookDecl, InstantiationError, TypeKey,
};

pub(crate) trait Playable: Send + Sync + std::fmt::Debug {
    fn play(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub(crate) struct Amp;

impl Playable for Amp {
    fn play(&self) -> &'static str {
        "amp"
    }
}

#[derive(Debug, Default)]
pub(crate) struct Pedal;

impl Playable for Pedal {
    fn play(&self) -> &'static str {
        "pedal"
    }
}

pub(crate) trait Storage: Send + Sync + std::fmt::Debug {
    fn kind(&self) -> &'static str;
}

#[derive(Debug, Default)]
pub(crate) struct MemoryStore;

impl Storage for MemoryStore {
    fn kind(&self) -> &'static str {
        "memory"
    }
}

#[derive(Debug, Default)]
pub(crate) struct Indexer {
    pub storage: Option<Arc<dyn Storage>>,
}

#[derive(Debug, Default)]
pub(crate) struct OuroLeft {
    pub other: Option<Arc<OuroRight>>,
}

#[derive(Debug, Default)]
pub(crate) struct OuroRight {
    pub other: Option<Arc<OuroLeft>>,
}

#[derive(Debug, Default)]
pub(crate) struct Flaky;

#[derive(Debug, Default)]
pub(crate) struct Closer {
    pub closed: AtomicUsize,
}

impl Closer {
    pub(crate) fn close(&self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

fn construct_default<T: Default + Send + Sync + 'static>() -> Result<ErasedInstance, BoxError> {
    Ok(Box::new(T::default()))
}

fn construct_flaky() -> Result<ErasedInstance, BoxError> {
    Err("硬件初始化失败".into())
}

fn wire_noop(
    _instance: &mut (dyn Any + Send + Sync),
    _beans: &BeanRegistry,
) -> Result<(), DependencyError> {
    Ok(())
}

fn wire_indexer(
    instance: &mut (dyn Any + Send + Sync),
    beans: &BeanRegistry,
) -> Result<(), DependencyError> {
    let this = instance
        .downcast_mut::<Indexer>()
        .ok_or_else(|| DependencyError::WireFailed {
            type_name: std::any::type_name::<Indexer>().to_string(),
            message: "实例类型不匹配".to_string(),
        })?;
    this.storage = Some(beans.get_unique::<dyn Storage>()?);
    Ok(())
}

fn seal_concrete<T: Send + Sync + 'static>(
    raw: ErasedInstance,
) -> Result<Vec<BeanBinding>, InstantiationError> {
    let instance = raw
        .downcast::<T>()
        .map_err(|_| InstantiationError::InstanceTypeMismatch {
            type_name: std::any::type_name::<T>().to_string(),
        })?;
    let arc: Arc<T> = Arc::from(instance);
    Ok(vec![BeanBinding {
        key: TypeKey::of::<T>(),
        handle: Box::new(arc),
    }])
}

fn seal_amp(raw: ErasedInstance) -> Result<Vec<BeanBinding>, InstantiationError> {
    let instance = raw
        .downcast::<Amp>()
        .map_err(|_| InstantiationError::InstanceTypeMismatch {
            type_name: std::any::type_name::<Amp>().to_string(),
        })?;
    let arc: Arc<Amp> = Arc::from(instance);
    Ok(vec![
        BeanBinding {
            key: TypeKey::of::<Amp>(),
            handle: Box::new(arc.clone()),
        },
        BeanBinding {
            key: TypeKey::of::<dyn Playable>(),
            handle: Box::new(arc as Arc<dyn Playable>),
        },
    ])
}

fn seal_pedal(raw: ErasedInstance) -> Result<Vec<BeanBinding>, InstantiationError> {
    let instance = raw
        .downcast::<Pedal>()
        .map_err(|_| InstantiationError::InstanceTypeMismatch {
            type_name: std::any::type_name::<Pedal>().to_string(),
        })?;
    let arc: Arc<Pedal> = Arc::from(instance);
    Ok(vec![
        BeanBinding {
            key: TypeKey::of::<Pedal>(),
            handle: Box::new(arc.clone()),
        },
        BeanBinding {
            key: TypeKey::of::<dyn Playable>(),
            handle: Box::new(arc as Arc<dyn Playable>),
        },
    ])
}

fn seal_memory_store(raw: ErasedInstance) -> Result<Vec<BeanBinding>, InstantiationError> {
    let instance = raw.downcast::<MemoryStore>().map_err(|_| {
        InstantiationError::InstanceTypeMismatch {
            type_name: std::any::type_name::<MemoryStore>().to_string(),
        }
    })?;
    let arc: Arc<MemoryStore> = Arc::from(instance);
    Ok(vec![
        BeanBinding {
            key: TypeKey::of::<MemoryStore>(),
            handle: Box::new(arc.clone()),
        },
        BeanBinding {
            key: TypeKey::of::<dyn Storage>(),
            handle: Box::new(arc as Arc<dyn Storage>),
        },
    ])
}

#[derive(Debug, Default)]
pub(crate) struct Grumpy;

impl Grumpy {
    pub(crate) fn refuse(&self) -> Result<(), std::io::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "拒绝关闭"))
    }
}

fn hook_grumpy(handle: &(dyn Any + Send + Sync)) -> Result<(), BoxError> {
    let arc = handle
        .downcast_ref::<Arc<Grumpy>>()
        .ok_or_else(|| BoxError::from("注册句柄类型不匹配"))?;
    arc.refuse().map_err(Into::into)
}

fn hook_closer(handle: &(dyn Any + Send + Sync)) -> Result<(), BoxError> {
    let arc = handle
        .downcast_ref::<Arc<Closer>>()
        .ok_or_else(|| BoxError::from("注册句柄类型不匹配"))?;
    arc.close();
    Ok(())
}

pub(crate) fn amp_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Amp>(),
        name: "Amp",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Amp>(), TypeKey::of::<dyn Playable>()],
        dependencies: vec![],
        hooks: vec![],
        construct: construct_default::<Amp>,
        wire: wire_noop,
        seal: seal_amp,
    }
}

pub(crate) fn pedal_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Pedal>(),
        name: "Pedal",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Pedal>(), TypeKey::of::<dyn Playable>()],
        dependencies: vec![],
        hooks: vec![],
        construct: construct_default::<Pedal>,
        wire: wire_noop,
        seal: seal_pedal,
    }
}

pub(crate) fn memory_store_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<MemoryStore>(),
        name: "MemoryStore",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<MemoryStore>(), TypeKey::of::<dyn Storage>()],
        dependencies: vec![],
        hooks: vec![],
        construct: construct_default::<MemoryStore>,
        wire: wire_noop,
        seal: seal_memory_store,
    }
}

pub(crate) fn indexer_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Indexer>(),
        name: "Indexer",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Indexer>()],
        dependencies: vec![DependencyDecl {
            field: "storage",
            key: TypeKey::of::<dyn Storage>(),
        }],
        hooks: vec![],
        construct: construct_default::<Indexer>,
        wire: wire_indexer,
        seal: seal_concrete::<Indexer>,
    }
}

pub(crate) fn cycle_descriptors() -> Vec<ComponentDescriptor> {
    vec![
        ComponentDescriptor {
            key: TypeKey::of::<OuroLeft>(),
            name: "OuroLeft",
            module_path: "wirebox::testing",
            closure: vec![TypeKey::of::<OuroLeft>()],
            dependencies: vec![DependencyDecl {
                field: "other",
                key: TypeKey::of::<OuroRight>(),
            }],
            hooks: vec![],
            construct: construct_default::<OuroLeft>,
            wire: wire_noop,
            seal: seal_concrete::<OuroLeft>,
        },
        ComponentDescriptor {
            key: TypeKey::of::<OuroRight>(),
            name: "OuroRight",
            module_path: "wirebox::testing",
            closure: vec![TypeKey::of::<OuroRight>()],
            dependencies: vec![DependencyDecl {
                field: "other",
                key: TypeKey::of::<OuroLeft>(),
            }],
            hooks: vec![],
            construct: construct_default::<OuroRight>,
            wire: wire_noop,
            seal: seal_concrete::<OuroRight>,
        },
    ]
}

pub(crate) fn flaky_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Flaky>(),
        name: "Flaky",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Flaky>()],
        dependencies: vec![],
        hooks: vec![],
        construct: construct_flaky,
        wire: wire_noop,
        seal: seal_concrete::<Flaky>,
    }
}

pub(crate) fn grumpy_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Grumpy>(),
        name: "Grumpy",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Grumpy>()],
        dependencies: vec![],
        hooks: vec![HookDecl {
            method: "refuse",
            invoke: hook_grumpy,
        }],
        construct: construct_default::<Grumpy>,
        wire: wire_noop,
        seal: seal_concrete::<Grumpy>,
    }
}

pub(crate) fn closer_descriptor() -> ComponentDescriptor {
    ComponentDescriptor {
        key: TypeKey::of::<Closer>(),
        name: "Closer",
        module_path: "wirebox::testing",
        closure: vec![TypeKey::of::<Closer>()],
        dependencies: vec![],
        hooks: vec![HookDecl {
            method: "close",
            invoke: hook_closer,
        }],
        construct: construct_default::<Closer>,
        wire: wire_noop,
        seal: seal_concrete::<Closer>,
    }
}
