use tatvapada_shared::{GlossaryEntry, GlossaryKind, Samputa, Validate};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::{self, ListQuery},
    components::{
        error_banner::ErrorBanner,
        feedback_modal::{Feedback, FeedbackModal},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
    },
    hooks::RequestSeq,
};

const PAGE_SIZE: usize = 25;

/// One page for all four glossary sub-resources (arthakosha, padavivarana,
/// tippani, paribhashika). The kind selector switches the REST sub-resource;
/// the volume filter, search, pagination and entry form are shared.
#[function_component(GlossaryPage)]
pub fn glossary_page() -> Html {
    let kind = use_state(|| GlossaryKind::Arthakosha);
    let samputas = use_state(Vec::<Samputa>::new);
    let selected_samputa = use_state(|| None::<String>);
    let entries = use_state(Vec::<GlossaryEntry>::new);
    let total = use_state(|| 0_usize);
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let form = use_state(|| None::<GlossaryEntry>);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    {
        let samputas = samputas.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::fetch_samputas().await {
                    Ok(list) => samputas.set(list),
                    Err(err) => {
                        load_error.set(Some(format!("ಸಂಪುಟಗಳ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
                    }
                }
            });
            || ()
        });
    }

    let refresh = {
        let kind = kind.clone();
        let selected_samputa = selected_samputa.clone();
        let entries = entries.clone();
        let total = total.clone();
        let page = page.clone();
        let search = search.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let Some(samputa) = (*selected_samputa).clone() else {
                entries.set(Vec::new());
                total.set(0);
                return;
            };
            let entries = entries.clone();
            let total = total.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let refresh_seq = refresh_seq.clone();
            let kind = *kind;
            let current_page = requested_page.unwrap_or(*page).max(1);
            let query = ListQuery::page(current_page, PAGE_SIZE).with_search(&search);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::archive::fetch_glossary(kind, &samputa, &query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        entries.set(paged.items);
                        total.set(paged.total);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!(
                            "{} ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}",
                            kind.label()
                        )));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        // Kind or volume switches restart the listing from page one. The
        // effect reads the post-render values, so the fetch never sees a
        // stale selection.
        let refresh = refresh.clone();
        use_effect_with((*kind, (*selected_samputa).clone()), move |_| {
            refresh.emit(Some(1));
            || ()
        });
    }

    let on_kind_change = {
        let kind = kind.clone();
        let form = form.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let next = GlossaryKind::all()
                .into_iter()
                .find(|k| k.path_segment() == select.value());
            if let Some(next) = next {
                kind.set(next);
                form.set(None);
                page.set(1);
            }
        })
    };

    let on_samputa_change = {
        let selected_samputa = selected_samputa.clone();
        let form = form.clone();
        let page = page.clone();
        Callback::from(move |event: Event| {
            let Some(select) = event.target_dyn_into::<HtmlSelectElement>() else {
                return;
            };
            let value = select.value();
            selected_samputa.set(if value.is_empty() { None } else { Some(value) });
            form.set(None);
            page.set(1);
        })
    };

    let on_search_input = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(target.value());
            }
        })
    };
    let on_search_apply = {
        let page = page.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            page.set(1);
            refresh.emit(Some(1));
        })
    };
    let on_page_change = {
        let page = page.clone();
        let refresh = refresh.clone();
        Callback::from(move |next: usize| {
            page.set(next);
            refresh.emit(Some(next));
        })
    };

    let on_new = {
        let form = form.clone();
        let selected_samputa = selected_samputa.clone();
        Callback::from(move |_| {
            let Some(samputa) = (*selected_samputa).clone() else {
                return;
            };
            form.set(Some(GlossaryEntry {
                id: None,
                samputa_sankhye: samputa,
                pada: String::new(),
                artha: String::new(),
            }));
        })
    };
    let on_select = {
        let form = form.clone();
        Callback::from(move |entry: GlossaryEntry| form.set(Some(entry)))
    };

    let on_pada_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                if let Some(entry) = next.as_mut() {
                    entry.pada = target.value();
                }
                form.set(next);
            }
        })
    };
    let on_artha_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                if let Some(entry) = next.as_mut() {
                    entry.artha = target.value();
                }
                form.set(next);
            }
        })
    };

    let on_submit = {
        let kind = kind.clone();
        let form = form.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(payload) = (*form).clone() else {
                return;
            };
            if let Err(err) = payload.validate() {
                feedback.set(Some(Feedback::error("ಮಾಹಿತಿ ಅಪೂರ್ಣ", err.to_string())));
                return;
            }
            let kind = *kind;
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::save_glossary_entry(kind, &payload).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಉಳಿಸಲಾಗಿದೆ",
                            format!("{}: \"{}\" ಉಳಿಸಲಾಗಿದೆ.", kind.label(), saved.pada),
                        )));
                        form.set(Some(saved));
                        refresh.emit(None);
                    }
                    Err(err) => {
                        feedback.set(Some(Feedback::error("ಉಳಿಸಲು ಆಗಲಿಲ್ಲ", err.to_string())));
                    }
                }
                saving.set(false);
            });
        })
    };

    let on_delete = {
        let kind = kind.clone();
        let form = form.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let Some(entry) = (*form).clone() else {
                return;
            };
            let Some(id) = entry.id else {
                return;
            };
            let kind = *kind;
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::delete_glossary_entry(kind, id).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಳಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಅಳಿಸಲಾಗಿದೆ.", entry.pada),
                        )));
                        form.set(None);
                        refresh.emit(None);
                    }
                    Err(err) => {
                        feedback.set(Some(Feedback::error("ಅಳಿಸಲು ಆಗಲಿಲ್ಲ", err.to_string())));
                    }
                }
                saving.set(false);
            });
        })
    };

    let close_feedback = {
        let feedback = feedback.clone();
        Callback::from(move |_| feedback.set(None))
    };
    let clear_error = {
        let load_error = load_error.clone();
        Callback::from(move |_| load_error.set(None))
    };

    let total_pages = (*total).div_ceil(PAGE_SIZE).max(1);
    let input_classes = classes!(
        "w-full",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "bg-[var(--surface)]",
        "px-3",
        "py-2",
        "text-sm"
    );

    html! {
        <main class={classes!("container", "py-8", "space-y-6")}>
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ಪದಕೋಶಗಳು" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            <div class={classes!("flex", "flex-wrap", "items-end", "gap-3")}>
                <label class={classes!("block")}>
                    <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                        { "ಪ್ರಕಾರ" }
                    </span>
                    <select class={input_classes.clone()} onchange={on_kind_change}>
                        { for GlossaryKind::all().into_iter().map(|k| html! {
                            <option
                                value={k.path_segment()}
                                selected={k == *kind}
                            >
                                { k.label() }
                            </option>
                        }) }
                    </select>
                </label>
                <label class={classes!("block")}>
                    <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                        { "ಸಂಪುಟ" }
                    </span>
                    <select class={input_classes.clone()} onchange={on_samputa_change}>
                        <option value="" selected={selected_samputa.is_none()}>
                            { "-- ಸಂಪುಟ ಆಯ್ಕೆಮಾಡಿ --" }
                        </option>
                        { for samputas.iter().map(|s| {
                            let selected = (*selected_samputa).as_deref()
                                == Some(s.samputa_sankhye.as_str());
                            html! {
                                <option value={s.samputa_sankhye.clone()} selected={selected}>
                                    { format!("{} — {}", s.samputa_sankhye, s.title) }
                                </option>
                            }
                        }) }
                    </select>
                </label>
                <input
                    class={classes!(input_classes.clone(), "max-w-xs")}
                    placeholder="ಪದದಿಂದ ಹುಡುಕಿ"
                    value={(*search).clone()}
                    oninput={on_search_input}
                />
                <button
                    type="button"
                    class={classes!(
                        "rounded-lg", "bg-[var(--primary)]", "px-4", "py-2",
                        "text-sm", "font-semibold", "text-white"
                    )}
                    onclick={on_search_apply}
                >
                    { "ಹುಡುಕಿ" }
                </button>
                <button
                    type="button"
                    disabled={selected_samputa.is_none()}
                    class={classes!(
                        "rounded-lg", "border", "border-[var(--primary)]", "px-4",
                        "py-2", "text-sm", "font-semibold", "text-[var(--primary)]",
                        "disabled:opacity-50"
                    )}
                    onclick={on_new}
                >
                    { "➕ ಹೊಸ ಪದ" }
                </button>
            </div>

            <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
                <section class={classes!("space-y-3")}>
                    if *loading {
                        <LoadingSpinner size={SpinnerSize::Medium} />
                    } else if entries.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಈ ಸಂಪುಟದಲ್ಲಿ ಪದಗಳು ಸಿಗಲಿಲ್ಲ." }
                        </p>
                    } else {
                        <table class={classes!("w-full", "text-sm")}>
                            <thead>
                                <tr class={classes!("text-left", "text-[var(--muted)]")}>
                                    <th class={classes!("px-3", "py-2")}>{ "ಪದ" }</th>
                                    <th class={classes!("px-3", "py-2")}>{ "ಅರ್ಥ" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for entries.iter().map(|entry| {
                                    let on_select = on_select.clone();
                                    let row = entry.clone();
                                    html! {
                                        <tr
                                            key={format!("{}-{}", entry.id.unwrap_or_default(), entry.pada)}
                                            class={classes!(
                                                "cursor-pointer",
                                                "border-t",
                                                "border-[var(--border)]",
                                                "hover:bg-[var(--surface-alt)]"
                                            )}
                                            onclick={Callback::from(move |_| {
                                                on_select.emit(row.clone())
                                            })}
                                        >
                                            <td class={classes!("px-3", "py-2", "font-semibold")}>
                                                { entry.pada.clone() }
                                            </td>
                                            <td class={classes!("px-3", "py-2")}>
                                                { entry.artha.clone() }
                                            </td>
                                        </tr>
                                    }
                                }) }
                            </tbody>
                        </table>
                        <Pagination
                            current_page={*page}
                            total_pages={total_pages}
                            on_page_change={on_page_change}
                        />
                    }
                </section>

                if let Some(entry) = (*form).clone() {
                    <form class={classes!("space-y-4")} onsubmit={on_submit}>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ಪದ" }
                            </span>
                            <input
                                class={input_classes.clone()}
                                value={entry.pada.clone()}
                                oninput={on_pada_input}
                            />
                        </label>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ಅರ್ಥ" }
                            </span>
                            <textarea
                                class={classes!(input_classes.clone(), "min-h-[8rem]")}
                                value={entry.artha.clone()}
                                oninput={on_artha_input}
                            />
                        </label>
                        <div class={classes!("flex", "items-center", "gap-3")}>
                            <button
                                type="submit"
                                disabled={*saving}
                                class={classes!(
                                    "rounded-lg", "bg-[var(--primary)]", "px-5", "py-2",
                                    "font-semibold", "text-white", "disabled:opacity-50"
                                )}
                            >
                                { "ಉಳಿಸಿ" }
                            </button>
                            if entry.id.is_some() {
                                <button
                                    type="button"
                                    disabled={*saving}
                                    onclick={on_delete}
                                    class={classes!(
                                        "rounded-lg", "border", "border-red-500/50",
                                        "px-5", "py-2", "font-semibold", "text-red-600",
                                        "disabled:opacity-50"
                                    )}
                                >
                                    { "ಅಳಿಸಿ" }
                                </button>
                            }
                            if *saving {
                                <LoadingSpinner size={SpinnerSize::Small} />
                            }
                        </div>
                    </form>
                }
            </div>

            <FeedbackModal feedback={(*feedback).clone()} on_close={close_feedback} />
        </main>
    }
}
