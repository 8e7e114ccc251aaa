use std::rc::Rc;

use yew::prelude::*;

use crate::session::store::{BrowserStore, SessionStore};

/// Store the session widgets read from, provided through Yew context.
/// Without a provider the widgets fall back to `localStorage`.
#[derive(Clone)]
pub struct StoreHandle(pub Rc<dyn SessionStore>);

impl StoreHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[hook]
pub fn use_session_store() -> Rc<dyn SessionStore> {
    use_context::<StoreHandle>()
        .map(|handle| handle.0)
        .unwrap_or_else(|| Rc::new(BrowserStore))
}
