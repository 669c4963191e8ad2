use app_shell::ActionOutcome;
use inventory_core::{
    Column, Mode, Product, RowAction, SortDirection, TableState, SKELETON_COLUMNS, SKELETON_ROWS,
};
use leptos::*;

use crate::editor::ProductEditor;

fn sort_indicator(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    }
}

fn cell_class(column: Column) -> &'static str {
    match column {
        Column::Name => "cell capitalize",
        Column::Category => "cell lowercase",
        Column::Actions => "cell actions-cell",
        _ => "cell numeric",
    }
}

/// Sortable, filterable, paginated product table with per-row actions.
/// Action buttons are disabled unless `mode` permits them; `on_action` does
/// the gating and the mutation, the grid only opens the editor it asks for.
#[component]
pub fn ProductGrid(
    #[prop(into)] products: Signal<Vec<Product>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] mode: Signal<Mode>,
    #[prop(into)] on_edit: Callback<Product>,
    #[prop(into)] on_action: Callback<(RowAction, Product), ActionOutcome>,
) -> impl IntoView {
    let table = create_rw_signal(TableState::default());
    let model = create_memo(move |_| products.with(|list| table.with(|t| t.row_model(list))));
    let visible = create_memo(move |_| table.with(|t| t.visible_columns()));

    let modal_open = create_rw_signal(false);
    let selected = create_rw_signal::<Option<Product>>(None);
    let edit_mode = create_rw_signal(false);

    let open_editor = move |product: Product, editable: bool| {
        edit_mode.set(editable);
        selected.set(Some(product));
        modal_open.set(true);
    };

    let run_action = move |action: RowAction, product: Product| {
        let outcome = on_action.call((action, product));
        if let ActionOutcome::OpenEditor { product, editable } = outcome {
            open_editor(product, editable);
        }
    };

    let close_editor = Callback::new(move |_: ()| {
        modal_open.set(false);
        selected.set(None);
    });

    let header = move || {
        visible
            .get()
            .into_iter()
            .map(|col| {
                let class = if col.is_numeric() { "th numeric" } else { "th" };
                let indicator = move || sort_indicator(table.with(|t| t.sort_direction(col)));
                view! {
                    <th
                        class=class
                        class:sortable=col.is_sortable()
                        on:click=move |ev: ev::MouseEvent| {
                            table.update(|t| t.toggle_sort(col, ev.shift_key()))
                        }
                    >
                        {col.header()}
                        {indicator}
                    </th>
                }
            })
            .collect_view()
    };

    let row_actions = move |product: Product| {
        RowAction::ALL
            .iter()
            .map(|action| {
                let action = *action;
                let product = product.clone();
                view! {
                    <button
                        class="flyout-row"
                        disabled=move || !mode.get().permits(action)
                        on:click=move |_| run_action(action, product.clone())
                    >
                        {action.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let body = move || {
        let current = model.get();
        let columns = visible.get();
        if current.rows.is_empty() {
            return view! {
                <tr>
                    <td class="empty-row" colspan=Column::ALL.len().to_string()>
                        "No results."
                    </td>
                </tr>
            }
            .into_view();
        }
        current
            .rows
            .into_iter()
            .map(|product| {
                let cells = columns
                    .iter()
                    .map(|col| {
                        let content = match col {
                            Column::Actions => view! {
                                <details class="row-menu">
                                    <summary class="btn ghost micro">
                                        "⋯"
                                        <span class="sr-only">"Open menu"</span>
                                    </summary>
                                    <div class="flyout">{row_actions(product.clone())}</div>
                                </details>
                            }
                            .into_view(),
                            other => other.cell_text(&product).into_view(),
                        };
                        view! { <td class=cell_class(*col)>{content}</td> }
                    })
                    .collect_view();
                view! { <tr>{cells}</tr> }
            })
            .collect_view()
    };

    let step_page = move |forward: bool| {
        let filtered = model.with_untracked(|m| m.filtered_count);
        table.update(|t| {
            if forward {
                t.next_page(filtered)
            } else {
                t.previous_page(filtered)
            }
        });
    };

    view! {
        <div class="panel grid-panel">
            <div class="grid-toolbar">
                <input
                    class="input-compact filter-input"
                    placeholder="Filter by name..."
                    prop:value=move || table.with(|t| t.name_filter().to_string())
                    on:input=move |ev| table.update(|t| t.set_name_filter(event_target_value(&ev)))
                />
                <details class="columns-menu">
                    <summary class="btn secondary">"Columns ▾"</summary>
                    <div class="flyout">
                        {Column::ALL
                            .iter()
                            .map(|col| {
                                let col = *col;
                                view! {
                                    <label class="flyout-row">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || table.with(|t| t.is_visible(col))
                                            on:change=move |ev| {
                                                table.update(|t| t.set_visible(col, event_target_checked(&ev)))
                                            }
                                        />
                                        {col.id()}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </details>
            </div>
            <div class="table-wrap">
                {move || {
                    if loading.get() {
                        view! { <GridSkeleton/> }.into_view()
                    } else {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>{header}</tr>
                                </thead>
                                <tbody>{body}</tbody>
                            </table>
                        }
                        .into_view()
                    }
                }}
            </div>
            <div class="grid-footer">
                <span class="section-subtitle">
                    {move || format!("{} row(s)", model.with(|m| m.filtered_count))}
                </span>
                <div class="flex-row">
                    <button
                        class="btn micro"
                        disabled=move || !model.with(|m| m.can_previous)
                        on:click=move |_| step_page(false)
                    >
                        "Previous"
                    </button>
                    <button
                        class="btn micro"
                        disabled=move || !model.with(|m| m.can_next)
                        on:click=move |_| step_page(true)
                    >
                        "Next"
                    </button>
                </div>
            </div>
            <ProductEditor
                open=modal_open
                product=selected
                edit_mode=edit_mode
                on_save=on_edit
                on_close=close_editor
            />
        </div>
    }
}

/// Fixed-shape placeholder shown while the fetch is in flight.
#[component]
pub fn GridSkeleton() -> impl IntoView {
    view! {
        <table class="data-table skeleton-table">
            <thead>
                <tr>
                    {(0..SKELETON_COLUMNS)
                        .map(|_| view! { <th><div class="skeleton"></div></th> })
                        .collect_view()}
                </tr>
            </thead>
            <tbody>
                {(0..SKELETON_ROWS)
                    .map(|_| {
                        view! {
                            <tr>
                                {(0..SKELETON_COLUMNS)
                                    .map(|_| view! { <td><div class="skeleton"></div></td> })
                                    .collect_view()}
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
