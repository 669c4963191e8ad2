use crate::{
    dashboard::Dashboard,
    state::{provide_app_ctx, use_app_ctx},
    theme::GLOBAL_CSS,
};
use app_shell::AppConfig;
use inventory_core::Mode;
use leptos::*;
use leptos_meta::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ctx = provide_app_ctx(AppConfig::from_environment());
    let title = ctx.config.with_value(|c| c.name.clone());

    // Other tabs writing the mode key show up as `storage` events.
    #[cfg(target_arch = "wasm32")]
    {
        let ctx = ctx.clone();
        let key = ctx.mode_key();
        let handle = window_event_listener(ev::storage, move |ev| {
            if ev.key().map_or(true, |k| k == key) {
                ctx.sync_mode();
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text=title/>
        <Style>{GLOBAL_CSS}</Style>
        <div class="inventory-app">
            <Header/>
            <main class="dashboard-shell">
                <Dashboard/>
            </main>
        </div>
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_ctx();
    let mode = ctx.mode;
    let (name, github_url, github_title) = ctx
        .config
        .with_value(|c| (c.name.clone(), c.github.url.clone(), c.github.title.clone()));

    let on_toggle = move |ev: ev::Event| {
        ctx.set_mode(Mode::from_switch(event_target_checked(&ev)));
    };

    view! {
        <header class="panel topbar">
            <div class="brand-mark">
                <span class="brand-title">{name}</span>
            </div>
            <div class="topbar-actions">
                <label class="input-label" for="admin-mode">"Admin"</label>
                <input
                    id="admin-mode"
                    type="checkbox"
                    class="switch"
                    prop:checked=move || mode.get().switch_checked()
                    on:change=on_toggle
                />
                <label class="input-label" for="admin-mode">"User"</label>
                <a
                    class="btn ghost micro"
                    href=github_url
                    title=github_title
                    target="_blank"
                    rel="noreferrer"
                >
                    "GitHub"
                    <span class="sr-only">"GitHub"</span>
                </a>
            </div>
        </header>
    }
}
