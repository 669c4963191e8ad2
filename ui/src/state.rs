use std::cell::RefCell;
use std::rc::Rc;

use app_shell::{AppConfig, DefaultStorage, InventoryStore, ModeStore};
use inventory_core::Mode;
use leptos::*;

/// Shared dashboard context: config, the product store and the mode flag.
#[derive(Clone)]
pub struct AppCtx {
    pub config: StoredValue<AppConfig>,
    pub inventory: RwSignal<InventoryStore>,
    pub mode: ReadSignal<Mode>,
    modes: Rc<RefCell<ModeStore<DefaultStorage>>>,
}

impl AppCtx {
    /// Persist and publish a new mode; the `mode` signal follows via subscription.
    pub fn set_mode(&self, mode: Mode) {
        if let Err(err) = self.modes.borrow_mut().set(mode) {
            log::warn!("could not persist mode: {err}");
        }
    }

    /// Re-read the stored mode after another tab changed it.
    pub fn sync_mode(&self) {
        self.modes.borrow_mut().sync_from_storage();
    }

    pub fn mode_key(&self) -> String {
        self.modes.borrow().key().to_string()
    }
}

pub fn provide_app_ctx(config: AppConfig) -> AppCtx {
    let mut modes = ModeStore::open(DefaultStorage::default(), config.mode_key.clone());
    let (mode, set_mode) = create_signal(modes.mode());
    modes.subscribe(move |m| set_mode.set(m));

    let ctx = AppCtx {
        config: store_value(config),
        inventory: create_rw_signal(InventoryStore::new()),
        mode,
        modes: Rc::new(RefCell::new(modes)),
    };
    provide_context(ctx.clone());
    ctx
}

pub fn use_app_ctx() -> AppCtx {
    use_context::<AppCtx>().expect("AppCtx not provided")
}
