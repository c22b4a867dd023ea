use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::cascade::{CascadeAction, CascadeLevel, CascadeState, ADD_NEW};

#[derive(Properties, PartialEq)]
pub struct CascadeSelectProps {
    pub state: CascadeState,
    /// Selector changes flow back to the page's reducer.
    pub on_action: Callback<CascadeAction>,
    /// Confirmed inline "add new" value, with the level it belongs to.
    pub on_inline_create: Callback<(CascadeLevel, String)>,
}

fn select_value(event: &Event) -> Option<String> {
    event
        .target_dyn_into::<HtmlSelectElement>()
        .map(|select| select.value())
}

/// The three dependent dropdowns driving the verse editor: volume, author
/// within the volume, verse number within the author. Each level is cleared
/// and disabled while its parent has no selection; the `ADD_NEW` sentinel
/// swaps the fetch for an inline text input.
#[function_component(CascadeSelect)]
pub fn cascade_select(props: &CascadeSelectProps) -> Html {
    let inline_value = use_state(String::new);

    {
        // A fresh inline prompt starts blank.
        let inline_value = inline_value.clone();
        use_effect_with(props.state.inline_new, move |_| {
            inline_value.set(String::new());
            || ()
        });
    }

    let on_samputa_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_action.emit(CascadeAction::PickSamputa(value));
            }
        })
    };
    let on_author_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_action.emit(CascadeAction::PickAuthor(value));
            }
        })
    };
    let on_verse_change = {
        let on_action = props.on_action.clone();
        Callback::from(move |event: Event| {
            if let Some(value) = select_value(&event) {
                on_action.emit(CascadeAction::PickVerse(value));
            }
        })
    };

    let on_inline_input = {
        let inline_value = inline_value.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                inline_value.set(target.value());
            }
        })
    };

    let on_inline_confirm = {
        let inline_value = inline_value.clone();
        let inline_level = props.state.inline_new;
        let on_inline_create = props.on_inline_create.clone();
        Callback::from(move |_| {
            let value = inline_value.trim().to_string();
            if value.is_empty() {
                return;
            }
            if let Some(level) = inline_level {
                on_inline_create.emit((level, value));
            }
        })
    };

    let on_inline_cancel = {
        let on_action = props.on_action.clone();
        Callback::from(move |_| on_action.emit(CascadeAction::CancelInline))
    };

    let state = &props.state;
    let select_classes = classes!(
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm",
        "disabled:opacity-50"
    );

    let add_new_option =
        |label: &str| html! { <option value={ADD_NEW}>{ format!("➕ {label}") }</option> };

    let inline_editor = |level: CascadeLevel, label: &str| {
        if state.inline_new != Some(level) {
            return Html::default();
        }
        html! {
            <div class={classes!("mt-2", "flex", "items-center", "gap-2")}>
                <input
                    type="text"
                    class={classes!(
                        "flex-1", "rounded-lg", "border", "border-[var(--primary)]",
                        "px-3", "py-2", "text-sm"
                    )}
                    placeholder={label.to_string()}
                    value={(*inline_value).clone()}
                    oninput={on_inline_input.clone()}
                />
                <button
                    type="button"
                    class={classes!(
                        "rounded-lg", "bg-[var(--primary)]", "px-3", "py-2",
                        "text-sm", "font-semibold", "text-white"
                    )}
                    onclick={on_inline_confirm.clone()}
                >
                    { "ಸೇರಿಸಿ" }
                </button>
                <button
                    type="button"
                    class={classes!("rounded-lg", "px-3", "py-2", "text-sm")}
                    onclick={on_inline_cancel.clone()}
                >
                    { "ರದ್ದು" }
                </button>
            </div>
        }
    };

    html! {
        <div class={classes!("grid", "gap-4", "md:grid-cols-3")}>
            <label class={classes!("block")}>
                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                    { "ಸಂಪುಟ" }
                </span>
                <select
                    class={select_classes.clone()}
                    onchange={on_samputa_change}
                >
                    <option value="" selected={state.selected_samputa.is_none()}>
                        { "-- ಸಂಪುಟ ಆಯ್ಕೆಮಾಡಿ --" }
                    </option>
                    { for state.samputas.iter().map(|s| {
                        let selected = state.selected_samputa.as_deref()
                            == Some(s.samputa_sankhye.as_str());
                        html! {
                            <option value={s.samputa_sankhye.clone()} selected={selected}>
                                { format!("{} — {}", s.samputa_sankhye, s.title) }
                            </option>
                        }
                    }) }
                    { add_new_option("ಹೊಸ ಸಂಪುಟ") }
                </select>
                { inline_editor(CascadeLevel::Samputa, "ಹೊಸ ಸಂಪುಟ ಸಂಖ್ಯೆ") }
            </label>

            <label class={classes!("block")}>
                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                    { "ತತ್ವಪದಕಾರರು" }
                </span>
                <select
                    class={select_classes.clone()}
                    disabled={!state.author_enabled()}
                    onchange={on_author_change}
                >
                    <option value="" selected={state.selected_author.is_none()}>
                        { "-- ತತ್ವಪದಕಾರರನ್ನು ಆಯ್ಕೆಮಾಡಿ --" }
                    </option>
                    { for state.authors.iter().map(|a| {
                        let selected = state.selected_author.as_deref()
                            == Some(a.hesaru.as_str());
                        html! {
                            <option value={a.hesaru.clone()} selected={selected}>
                                { a.hesaru.clone() }
                            </option>
                        }
                    }) }
                    { add_new_option("ಹೊಸ ತತ್ವಪದಕಾರ") }
                </select>
                { inline_editor(CascadeLevel::Tatvapadakara, "ಹೊಸ ತತ್ವಪದಕಾರರ ಹೆಸರು") }
            </label>

            <label class={classes!("block")}>
                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                    { "ತತ್ವಪದ" }
                </span>
                <select
                    class={select_classes}
                    disabled={!state.verse_enabled()}
                    onchange={on_verse_change}
                >
                    <option value="" selected={state.selected_verse.is_none()}>
                        { "-- ತತ್ವಪದ ಆಯ್ಕೆಮಾಡಿ --" }
                    </option>
                    { for state.verses.iter().map(|v| {
                        let selected = state.selected_verse.as_deref()
                            == Some(v.tatvapada_sankhye.as_str());
                        html! {
                            <option value={v.tatvapada_sankhye.clone()} selected={selected}>
                                { format!("{}. {}", v.tatvapada_sankhye, v.modala_salu) }
                            </option>
                        }
                    }) }
                    { add_new_option("ಹೊಸ ತತ್ವಪದ") }
                </select>
                { inline_editor(CascadeLevel::Tatvapada, "ಹೊಸ ತತ್ವಪದ ಸಂಖ್ಯೆ") }
            </label>
        </div>
    }
}
