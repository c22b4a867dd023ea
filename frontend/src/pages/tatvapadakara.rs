use tatvapada_shared::{Tatvapadakara, Validate};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
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

const PAGE_SIZE: usize = 20;

/// Author registry: searchable paginated listing on the left, edit form on
/// the right. Authors are keyed by name; editing an existing author keeps the
/// name read-only.
#[function_component(TatvapadakaraPage)]
pub fn tatvapadakara_page() -> Html {
    let authors = use_state(Vec::<Tatvapadakara>::new);
    let total = use_state(|| 0_usize);
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let form = use_state(|| None::<Tatvapadakara>);
    let editing_existing = use_state(|| false);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    let refresh = {
        let authors = authors.clone();
        let total = total.clone();
        let page = page.clone();
        let search = search.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let authors = authors.clone();
            let total = total.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let refresh_seq = refresh_seq.clone();
            let current_page = requested_page.unwrap_or(*page).max(1);
            let query = ListQuery::page(current_page, PAGE_SIZE).with_search(&search);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::archive::fetch_tatvapadakaras(&query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        authors.set(paged.items);
                        total.set(paged.total);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ತತ್ವಪದಕಾರರ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(Some(1));
            || ()
        });
    }

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
        let editing_existing = editing_existing.clone();
        Callback::from(move |_| {
            form.set(Some(Tatvapadakara {
                hesaru: String::new(),
                kavi_parichaya: None,
            }));
            editing_existing.set(false);
        })
    };
    let on_select = {
        let form = form.clone();
        let editing_existing = editing_existing.clone();
        Callback::from(move |author: Tatvapadakara| {
            form.set(Some(author));
            editing_existing.set(true);
        })
    };

    let on_name_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                let mut next = (*form).clone();
                if let Some(author) = next.as_mut() {
                    author.hesaru = target.value();
                }
                form.set(next);
            }
        })
    };
    let on_bio_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlTextAreaElement>() {
                let mut next = (*form).clone();
                if let Some(author) = next.as_mut() {
                    let value = target.value();
                    author.kavi_parichaya =
                        if value.trim().is_empty() { None } else { Some(value) };
                }
                form.set(next);
            }
        })
    };

    let on_submit = {
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
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::save_tatvapadakara(&payload).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಉಳಿಸಲಾಗಿದೆ",
                            format!("{} ಉಳಿಸಲಾಗಿದೆ.", saved.hesaru),
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
        let form = form.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |_| {
            let Some(author) = (*form).clone() else {
                return;
            };
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::delete_tatvapadakara(&author.hesaru).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಳಿಸಲಾಗಿದೆ",
                            format!("{} ಅಳಿಸಲಾಗಿದೆ.", author.hesaru),
                        )));
                        form.set(None);
                        refresh.emit(None);
                    }
                    Err(err) => {
                        // Typically: author still has verses attached.
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
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ತತ್ವಪದಕಾರರು" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            <div class={classes!("flex", "flex-wrap", "items-center", "gap-3")}>
                <input
                    class={classes!(input_classes.clone(), "max-w-xs")}
                    placeholder="ಹೆಸರಿನಿಂದ ಹುಡುಕಿ"
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
                    class={classes!(
                        "rounded-lg", "border", "border-[var(--primary)]", "px-4",
                        "py-2", "text-sm", "font-semibold", "text-[var(--primary)]"
                    )}
                    onclick={on_new}
                >
                    { "➕ ಹೊಸ ತತ್ವಪದಕಾರ" }
                </button>
            </div>

            <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
                <section class={classes!("space-y-3")}>
                    if *loading {
                        <LoadingSpinner size={SpinnerSize::Medium} />
                    } else if authors.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಯಾವುದೇ ತತ್ವಪದಕಾರರು ಸಿಗಲಿಲ್ಲ." }
                        </p>
                    } else {
                        <ul class={classes!("divide-y", "divide-[var(--border)]")}>
                            { for authors.iter().map(|author| {
                                let on_select = on_select.clone();
                                let item = author.clone();
                                html! {
                                    <li key={author.hesaru.clone()}>
                                        <button
                                            type="button"
                                            class={classes!(
                                                "w-full", "px-3", "py-2", "text-left",
                                                "text-sm", "hover:bg-[var(--surface-alt)]"
                                            )}
                                            onclick={Callback::from(move |_| {
                                                on_select.emit(item.clone())
                                            })}
                                        >
                                            <span class={classes!("font-semibold")}>
                                                { author.hesaru.clone() }
                                            </span>
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                        <Pagination
                            current_page={*page}
                            total_pages={total_pages}
                            on_page_change={on_page_change}
                        />
                    }
                </section>

                if let Some(author) = (*form).clone() {
                    <form class={classes!("space-y-4")} onsubmit={on_submit}>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ಹೆಸರು" }
                            </span>
                            <input
                                class={input_classes.clone()}
                                value={author.hesaru.clone()}
                                readonly={*editing_existing}
                                oninput={on_name_input}
                            />
                        </label>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ಕವಿ ಪರಿಚಯ" }
                            </span>
                            <textarea
                                class={classes!(input_classes.clone(), "min-h-[8rem]")}
                                value={author.kavi_parichaya.clone().unwrap_or_default()}
                                oninput={on_bio_input}
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
                            if *editing_existing {
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
