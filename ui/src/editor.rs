use inventory_core::{FormField, Product, ProductForm};
use leptos::*;

fn editor_title(edit_mode: bool, name: &str) -> String {
    let verb = if edit_mode { "Edit" } else { "View" };
    format!("{verb} Product : ( {name} )")
}

/// Modal showing one product. Fields are read-only unless `edit_mode`; on save
/// the parsed record goes to `on_save` and the modal closes.
#[component]
pub fn ProductEditor(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] product: Signal<Option<Product>>,
    #[prop(into)] edit_mode: Signal<bool>,
    #[prop(into)] on_save: Callback<Product>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let form = create_rw_signal(ProductForm::default());
    let error = create_rw_signal::<Option<String>>(None);

    // Reseed whenever the selection or the mode changes.
    create_effect(move |_| {
        let seeded = product.with(|p| ProductForm::from_product(p.as_ref()));
        let _ = edit_mode.get();
        form.set(seeded);
        error.set(None);
    });

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(base) = product.get_untracked() else {
            on_close.call(());
            return;
        };
        match form.with_untracked(|f| f.apply(&base)) {
            Ok(updated) => {
                on_save.call(updated);
                on_close.call(());
            }
            Err(err) => error.set(Some(err.to_string())),
        }
    };

    let title = move || {
        product.with(|p| {
            editor_title(
                edit_mode.get(),
                p.as_ref().map(|p| p.name.as_str()).unwrap_or_default(),
            )
        })
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=move |_| on_close.call(())>
                <div class="panel modal" on:click=|ev: ev::MouseEvent| ev.stop_propagation()>
                    <div class="drawer-header">
                        <span class="pane-title">{title}</span>
                        <button type="button" class="btn ghost micro" on:click=move |_| on_close.call(())>
                            "×"
                            <span class="sr-only">"Close"</span>
                        </button>
                    </div>
                    <form on:submit=submit>
                        <div class="form-grid">
                            {FormField::ALL
                                .iter()
                                .map(|field| {
                                    let field = *field;
                                    view! {
                                        <label class="form-row">
                                            <span class="input-label">{field.label()}</span>
                                            <input
                                                id=field.id()
                                                class="input-compact"
                                                prop:value=move || form.with(|f| f.field(field).to_string())
                                                prop:disabled=move || !edit_mode.get()
                                                on:input=move |ev| {
                                                    form.update(|f| f.set_field(field, event_target_value(&ev)))
                                                }
                                            />
                                        </label>
                                    }
                                })
                                .collect_view()}
                        </div>
                        {move || error.get().map(|msg| view! { <div class="status-pill status-bad">{msg}</div> })}
                        <Show when=move || edit_mode.get()>
                            <div class="drawer-actions">
                                <button type="submit" class="btn primary">"Save changes"</button>
                            </div>
                        </Show>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_reflects_mode() {
        assert_eq!(editor_title(true, "Widget"), "Edit Product : ( Widget )");
        assert_eq!(editor_title(false, "Widget"), "View Product : ( Widget )");
        assert_eq!(editor_title(false, ""), "View Product : (  )");
    }
}
