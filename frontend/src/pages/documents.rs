use gloo_timers::future::TimeoutFuture;
use tatvapada_shared::{DocumentRecord, Validate};
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::{self, ListQuery},
    components::{
        error_banner::ErrorBanner,
        feedback_modal::{Feedback, FeedbackModal},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        raw_html::RawHtml,
    },
    hooks::RequestSeq,
    utils::markdown_to_html,
};

const PAGE_SIZE: usize = 20;
/// Pause between sequential bulk uploads so the backend's scan pipeline is
/// not hammered.
const BULK_UPLOAD_DELAY_MS: u32 = 500;

/// Archive documents: metadata CRUD, per-document file upload, and a bulk
/// upload loop that walks the picked files one by one with a fixed delay.
#[function_component(DocumentsPage)]
pub fn documents_page() -> Html {
    let documents = use_state(Vec::<DocumentRecord>::new);
    let total = use_state(|| 0_usize);
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let form = use_state(|| None::<DocumentRecord>);
    // (done, total) while a bulk upload loop is running.
    let bulk_progress = use_state(|| None::<(usize, usize)>);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    let refresh = {
        let documents = documents.clone();
        let total = total.clone();
        let page = page.clone();
        let search = search.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let documents = documents.clone();
            let total = total.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let refresh_seq = refresh_seq.clone();
            let current_page = requested_page.unwrap_or(*page).max(1);
            let query = ListQuery::page(current_page, PAGE_SIZE).with_search(&search);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::console::fetch_documents(&query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        documents.set(paged.items);
                        total.set(paged.total);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ದಾಖಲೆಗಳ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
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
        Callback::from(move |_| form.set(Some(DocumentRecord::default())))
    };
    let on_select = {
        let form = form.clone();
        Callback::from(move |doc: DocumentRecord| form.set(Some(doc)))
    };

    let edit_field = |apply: fn(&mut DocumentRecord, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .or_else(|| event.target_dyn_into::<HtmlInputElement>().map(|t| t.value()));
            if let Some(value) = value {
                let mut next = (*form).clone();
                if let Some(doc) = next.as_mut() {
                    apply(doc, value);
                }
                form.set(next);
            }
        })
    };
    let on_title_input = edit_field(|d, v| d.title = v);
    let on_kind_input = edit_field(|d, v| d.kind = v);
    let on_description_input = edit_field(|d, v| d.description_md = v);

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
                match api::console::save_document(&payload).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಉಳಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಉಳಿಸಲಾಗಿದೆ.", saved.title),
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
            let Some(doc) = (*form).clone() else {
                return;
            };
            let Some(id) = doc.id else {
                return;
            };
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::delete_document(id).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಳಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಅಳಿಸಲಾಗಿದೆ.", doc.title),
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

    // Single-file upload for the selected document.
    let on_file_change = {
        let form = form.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            let Some(id) = (*form).as_ref().and_then(|doc| doc.id) else {
                return;
            };
            let form = form.clone();
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::upload_document_file(id, &file).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಪ್‌ಲೋಡ್ ಪೂರ್ಣ",
                            format!("\"{}\" ಕಡತ ಸೇರಿಸಲಾಗಿದೆ.", saved.title),
                        )));
                        form.set(Some(saved));
                        refresh.emit(None);
                    }
                    Err(err) => {
                        feedback.set(Some(Feedback::error(
                            "ಅಪ್‌ಲೋಡ್ ವಿಫಲ",
                            err.to_string(),
                        )));
                    }
                }
                saving.set(false);
            });
        })
    };

    // Bulk upload: create a record per file, then upload the file, one at a
    // time with a fixed pause in between. A failed file stops the loop and
    // reports how far it got.
    let on_bulk_change = {
        let bulk_progress = bulk_progress.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            let Some(file_list) = input.files() else {
                return;
            };
            let files: Vec<File> = (0..file_list.length())
                .filter_map(|i| file_list.get(i))
                .collect();
            if files.is_empty() {
                return;
            }
            input.set_value("");
            let bulk_progress = bulk_progress.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let total_files = files.len();
            bulk_progress.set(Some((0, total_files)));
            wasm_bindgen_futures::spawn_local(async move {
                let mut done = 0_usize;
                for file in files {
                    let record = DocumentRecord {
                        id: None,
                        title: file.name(),
                        kind: "scan".to_string(),
                        file_name: None,
                        description_md: String::new(),
                    };
                    let uploaded = match api::console::save_document(&record).await {
                        Ok(saved) => match saved.id {
                            Some(id) => api::console::upload_document_file(id, &file).await,
                            None => Err(api::ApiError::Decode(
                                "create response carried no id".to_string(),
                            )),
                        },
                        Err(err) => Err(err),
                    };
                    if let Err(err) = uploaded {
                        feedback.set(Some(Feedback::error(
                            "ಬೃಹತ್ ಅಪ್‌ಲೋಡ್ ನಿಂತಿದೆ",
                            format!("{done}/{total_files} ಕಡತಗಳ ನಂತರ ವಿಫಲ: {err}"),
                        )));
                        bulk_progress.set(None);
                        refresh.emit(None);
                        return;
                    }
                    done += 1;
                    bulk_progress.set(Some((done, total_files)));
                    TimeoutFuture::new(BULK_UPLOAD_DELAY_MS).await;
                }
                feedback.set(Some(Feedback::success(
                    "ಬೃಹತ್ ಅಪ್‌ಲೋಡ್ ಪೂರ್ಣ",
                    format!("{total_files} ಕಡತಗಳು ಸೇರಿಸಲಾಗಿವೆ."),
                )));
                bulk_progress.set(None);
                refresh.emit(None);
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
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ದಾಖಲೆಗಳು" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            <div class={classes!("flex", "flex-wrap", "items-center", "gap-3")}>
                <input
                    class={classes!(input_classes.clone(), "max-w-xs")}
                    placeholder="ಶೀರ್ಷಿಕೆಯಿಂದ ಹುಡುಕಿ"
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
                    { "➕ ಹೊಸ ದಾಖಲೆ" }
                </button>
                <label class={classes!(
                    "rounded-lg", "border", "border-dashed", "border-[var(--border)]",
                    "px-4", "py-2", "text-sm", "cursor-pointer"
                )}>
                    { "📁 ಬೃಹತ್ ಅಪ್‌ಲೋಡ್ (CSV/ಸ್ಕ್ಯಾನ್)" }
                    <input
                        type="file"
                        multiple=true
                        class={classes!("hidden")}
                        onchange={on_bulk_change}
                        disabled={bulk_progress.is_some()}
                    />
                </label>
                if let Some((done, total_files)) = *bulk_progress {
                    <span class={classes!("text-sm", "text-[var(--muted)]")}>
                        { format!("ಅಪ್‌ಲೋಡ್ ಆಗುತ್ತಿದೆ… {done}/{total_files}") }
                    </span>
                    <LoadingSpinner size={SpinnerSize::Small} />
                }
            </div>

            <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
                <section class={classes!("space-y-3")}>
                    if *loading {
                        <LoadingSpinner size={SpinnerSize::Medium} />
                    } else if documents.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಯಾವುದೇ ದಾಖಲೆಗಳು ಸಿಗಲಿಲ್ಲ." }
                        </p>
                    } else {
                        <ul class={classes!("divide-y", "divide-[var(--border)]")}>
                            { for documents.iter().map(|doc| {
                                let on_select = on_select.clone();
                                let item = doc.clone();
                                html! {
                                    <li key={doc.id.unwrap_or_default().to_string()}>
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
                                                { doc.title.clone() }
                                            </span>
                                            <span class={classes!("ml-2", "text-[var(--muted)]")}>
                                                { doc.kind.clone() }
                                            </span>
                                            if let Some(name) = doc.file_name.clone() {
                                                <span class={classes!(
                                                    "ml-2", "text-xs", "text-[var(--muted)]"
                                                )}>
                                                    { format!("📎 {name}") }
                                                </span>
                                            }
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

                if let Some(doc) = (*form).clone() {
                    <section class={classes!("space-y-4")}>
                        <form class={classes!("space-y-4")} onsubmit={on_submit}>
                            <label class={classes!("block")}>
                                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                    { "ಶೀರ್ಷಿಕೆ" }
                                </span>
                                <input
                                    class={input_classes.clone()}
                                    value={doc.title.clone()}
                                    oninput={on_title_input}
                                />
                            </label>
                            <label class={classes!("block")}>
                                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                    { "ಪ್ರಕಾರ" }
                                </span>
                                <input
                                    class={input_classes.clone()}
                                    value={doc.kind.clone()}
                                    placeholder="scan / pdf / notes"
                                    oninput={on_kind_input}
                                />
                            </label>
                            <label class={classes!("block")}>
                                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                    { "ವಿವರಣೆ (Markdown)" }
                                </span>
                                <textarea
                                    class={classes!(input_classes.clone(), "min-h-[8rem]")}
                                    value={doc.description_md.clone()}
                                    oninput={on_description_input}
                                />
                            </label>
                            <div class={classes!("flex", "items-center", "gap-3")}>
                                <button
                                    type="submit"
                                    disabled={*saving}
                                    class={classes!(
                                        "rounded-lg", "bg-[var(--primary)]", "px-5",
                                        "py-2", "font-semibold", "text-white",
                                        "disabled:opacity-50"
                                    )}
                                >
                                    { "ಉಳಿಸಿ" }
                                </button>
                                if doc.id.is_some() {
                                    <button
                                        type="button"
                                        disabled={*saving}
                                        onclick={on_delete}
                                        class={classes!(
                                            "rounded-lg", "border", "border-red-500/50",
                                            "px-5", "py-2", "font-semibold",
                                            "text-red-600", "disabled:opacity-50"
                                        )}
                                    >
                                        { "ಅಳಿಸಿ" }
                                    </button>
                                    <label class={classes!(
                                        "rounded-lg", "border", "border-[var(--border)]",
                                        "px-4", "py-2", "text-sm", "cursor-pointer"
                                    )}>
                                        { "📎 ಕಡತ ಸೇರಿಸಿ" }
                                        <input
                                            type="file"
                                            class={classes!("hidden")}
                                            onchange={on_file_change}
                                        />
                                    </label>
                                }
                                if *saving {
                                    <LoadingSpinner size={SpinnerSize::Small} />
                                }
                            </div>
                        </form>
                        if !doc.description_md.trim().is_empty() {
                            <div class={classes!(
                                "rounded-lg", "border", "border-[var(--border)]", "p-4"
                            )}>
                                <p class={classes!(
                                    "mb-2", "text-xs", "uppercase", "text-[var(--muted)]"
                                )}>
                                    { "ಮುನ್ನೋಟ" }
                                </p>
                                <RawHtml
                                    html={markdown_to_html(&doc.description_md)}
                                    class={classes!("prose", "prose-sm")}
                                />
                            </div>
                        }
                    </section>
                }
            </div>

            <FeedbackModal feedback={(*feedback).clone()} on_close={close_feedback} />
        </main>
    }
}
