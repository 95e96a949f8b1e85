//! アクションボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ActionBar<FO, FC, FX>(
    visible: Signal<bool>,
    on_open: FO,
    on_copy: FC,
    on_custom: FX,
) -> impl IntoView
where
    FO: Fn(()) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
    FX: Fn(()) + 'static + Clone,
{
    view! {
        <div class="action-bar" class:hidden=move || !visible.get()>
            <button
                id="action-open"
                class="btn btn-primary"
                on:click={
                    let on_open = on_open.clone();
                    move |_| on_open(())
                }
            >
                "Open"
            </button>

            <button
                id="action-copy"
                class="btn btn-secondary"
                on:click={
                    let on_copy = on_copy.clone();
                    move |_| on_copy(())
                }
            >
                "Copy"
            </button>

            <button
                id="action-custom"
                class="btn btn-secondary"
                on:click={
                    let on_custom = on_custom.clone();
                    move |_| on_custom(())
                }
            >
                "Custom action"
            </button>
        </div>
    }
}
