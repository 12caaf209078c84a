use dioxus::html::MountedData;
use dishes_hooks::{HostEnv, PlatformHost};
use std::{ops::Deref, rc::Rc};

/// A node of the platform host.
pub type HostNode = <PlatformHost as HostEnv>::Node;

/// The document the app renders into, shared between components as a prop.
///
/// Two handles are equal when they point at the same host.
#[derive(Clone)]
pub struct HostHandle(Rc<PlatformHost>);

impl HostHandle {
    /// Share `host`.
    pub fn new(host: PlatformHost) -> Self {
        Self(Rc::new(host))
    }

    /// The host of the current target: the browser document on the web, an in-memory document
    /// everywhere else. `None` if there is no document to attach to.
    pub fn platform() -> Option<Self> {
        #[cfg(target_arch = "wasm32")]
        {
            dishes_hooks::WebHost::new().map(Self::new)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(Self::new(dishes_hooks::MemoryHost::new()))
        }
    }

    /// A reference-counted handle to hand to the hooks.
    pub fn rc(&self) -> Rc<PlatformHost> {
        self.0.clone()
    }
}

impl From<Rc<PlatformHost>> for HostHandle {
    fn from(host: Rc<PlatformHost>) -> Self {
        Self(host)
    }
}

impl Deref for HostHandle {
    type Target = PlatformHost;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for HostHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The host node behind a mounted element, if the renderer exposes one.
#[cfg(target_arch = "wasm32")]
pub fn mounted_node(data: &MountedData) -> Option<HostNode> {
    data.downcast::<web_sys::Element>()
        .map(|element| element.clone().into())
}

/// The host node behind a mounted element, if the renderer exposes one.
#[cfg(not(target_arch = "wasm32"))]
pub fn mounted_node(data: &MountedData) -> Option<HostNode> {
    data.downcast::<HostNode>().copied()
}
