pub mod config;
pub mod mode_store;
pub mod storage;

pub use config::AppConfig;
pub use mode_store::{ModeStore, SubscriptionId};
pub use storage::{DefaultStorage, KeyValueStorage, MemoryStorage, StorageError};
#[cfg(target_arch = "wasm32")]
pub use storage::LocalStorage;

use inventory_core::{Mode, Product, ProductDraft, ProductList, RowAction, Stats};
use inventory_feed::FeedError;

/// Dashboard state: the product list plus the fetch-in-flight flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryState {
    pub products: ProductList,
    pub loading: bool,
}

/// What a row action resolved to once it reached the store.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The current mode does not permit the action; nothing happened.
    Blocked,
    /// Show `product` in the editor, writable when `editable`.
    OpenEditor { product: Product, editable: bool },
    /// The delete prompt was declined.
    Cancelled,
    /// Number of entries removed by name.
    Deleted(usize),
}

/// Single owner of the product list. Fetch results replace the list wholesale;
/// grid callbacks edit or delete single records. Nothing is written back to
/// the remote source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    state: InventoryState,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &InventoryState {
        &self.state
    }

    pub fn products(&self) -> &[Product] {
        self.state.products.as_slice()
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn stats(&self) -> Stats {
        Stats::from_products(self.products())
    }

    pub fn begin_load(&mut self) {
        self.state.loading = true;
    }

    /// Apply a fetch outcome. Success replaces the list; any failure is logged
    /// and leaves the previous list in place. Loading ends either way.
    pub fn finish_load(&mut self, result: Result<Vec<ProductDraft>, FeedError>) -> bool {
        self.state.loading = false;
        match result {
            Ok(drafts) => {
                log::info!("loaded {} products", drafts.len());
                self.state.products.replace_all(drafts);
                true
            }
            Err(err) => {
                log::error!("Failed to fetch data: {err}");
                false
            }
        }
    }

    /// Replace every entry named like `updated`, duplicates included.
    pub fn apply_edit(&mut self, updated: Product) -> usize {
        let replaced = self.state.products.replace_by_name(&updated.to_draft());
        log::debug!("edit {:?}: {} replaced", updated.name, replaced);
        replaced
    }

    /// Remove every entry called `name`. Unknown names are a no-op.
    pub fn apply_delete(&mut self, name: &str) -> usize {
        let removed = self.state.products.remove_by_name(name);
        log::debug!("delete {:?}: {} removed", name, removed);
        removed
    }

    /// Gate a row action on `mode` and carry it out. Delete asks `confirm`
    /// first and is skipped when it declines.
    pub fn run_action(
        &mut self,
        mode: Mode,
        action: RowAction,
        product: &Product,
        confirm: impl FnOnce() -> bool,
    ) -> ActionOutcome {
        if !mode.permits(action) {
            return ActionOutcome::Blocked;
        }
        match action {
            RowAction::View => ActionOutcome::OpenEditor {
                product: product.clone(),
                editable: false,
            },
            RowAction::Edit => ActionOutcome::OpenEditor {
                product: product.clone(),
                editable: true,
            },
            RowAction::Delete => {
                if confirm() {
                    ActionOutcome::Deleted(self.apply_delete(&product.name))
                } else {
                    ActionOutcome::Cancelled
                }
            }
        }
    }
}
