use app_shell::ActionOutcome;
use inventory_core::{Product, RowAction, Stats};
use leptos::*;

use crate::grid::ProductGrid;
use crate::state::use_app_ctx;

#[cfg(target_arch = "wasm32")]
use inventory_feed::{HttpInventorySource, InventorySource};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
const DELETE_PROMPT: &str = "Are you sure you want to delete this product?";

#[cfg(target_arch = "wasm32")]
fn confirm_delete() -> bool {
    window()
        .confirm_with_message(DELETE_PROMPT)
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm_delete() -> bool {
    false
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_ctx();
    let inventory = ctx.inventory;

    // One fetch per mount. No retry, no timeout, no cancellation.
    #[cfg(target_arch = "wasm32")]
    {
        let source = HttpInventorySource::new(ctx.config.with_value(|c| c.inventory_url.clone()));
        spawn_local(async move {
            inventory.update(|s| s.begin_load());
            let result = source.fetch().await;
            inventory.update(|s| {
                s.finish_load(result);
            });
        });
    }

    let stats = create_memo(move |_| inventory.with(|s| s.stats()));
    let products = Signal::derive(move || inventory.with(|s| s.products().to_vec()));
    let loading = Signal::derive(move || inventory.with(|s| s.is_loading()));

    let mode = ctx.mode;
    let on_edit = Callback::new(move |updated: Product| {
        inventory.update(|s| {
            s.apply_edit(updated);
        });
    });
    let on_action = Callback::new(move |(action, product): (RowAction, Product)| {
        let mode = mode.get_untracked();
        inventory
            .try_update(|s| s.run_action(mode, action, &product, confirm_delete))
            .unwrap_or(ActionOutcome::Blocked)
    });

    view! {
        <section class="dashboard">
            <h1 class="page-heading">"Inventory Stats"</h1>
            <StatsCards stats=stats/>
            <ProductGrid
                products=products
                loading=loading
                mode=mode
                on_edit=on_edit
                on_action=on_action
            />
        </section>
    }
}

#[component]
pub fn StatsCards(#[prop(into)] stats: Signal<Stats>) -> impl IntoView {
    view! {
        <div class="stats-grid">
            {move || {
                stats
                    .get()
                    .cards()
                    .into_iter()
                    .map(|card| {
                        view! {
                            <div class="panel stat-card">
                                <div class="stat-label">{card.label}</div>
                                <div class="stat-value">{card.value}</div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
