use tatvapada_shared::{Tatvapada, Validate};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api,
    cascade::{CascadeAction, CascadeEffect, CascadeLevel, CascadeState},
    components::{
        cascade_select::CascadeSelect,
        error_banner::ErrorBanner,
        feedback_modal::{Feedback, FeedbackModal},
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    hooks::RequestSeq,
};

/// The flagship editor: three cascading dropdowns select a verse, the form
/// below edits it. Selecting the "add new" sentinel at any level creates the
/// key inline; the record itself is only written on submit.
#[function_component(TatvapadaPage)]
pub fn tatvapada_page() -> Html {
    let cascade = use_state(CascadeState::default);
    let form = use_state(Tatvapada::default);
    let editing_new = use_state(|| false);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    // Guard against stale async responses overriding a newer selection.
    let cascade_seq = use_mut_ref(RequestSeq::default);

    {
        let cascade = cascade.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::fetch_samputas().await {
                    Ok(samputas) => {
                        let (next, _) =
                            (*cascade).clone().apply(CascadeAction::SamputasLoaded(samputas));
                        cascade.set(next);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ಸಂಪುಟಗಳ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let dispatch = {
        let cascade = cascade.clone();
        let form = form.clone();
        let editing_new = editing_new.clone();
        let load_error = load_error.clone();
        let cascade_seq = cascade_seq.clone();
        Callback::from(move |action: CascadeAction| {
            let (next, effect) = (*cascade).clone().apply(action);
            cascade.set(next.clone());
            let request_id = cascade_seq.borrow_mut().next();
            match effect {
                CascadeEffect::None | CascadeEffect::OpenInlineInput(_) => {}
                CascadeEffect::FetchAuthors { samputa } => {
                    let cascade = cascade.clone();
                    let load_error = load_error.clone();
                    let cascade_seq = cascade_seq.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result =
                            api::archive::fetch_tatvapadakaras_in_samputa(&samputa).await;
                        if !cascade_seq.borrow().is_current(request_id) {
                            return;
                        }
                        match result {
                            Ok(authors) => {
                                let (next, _) =
                                    next.apply(CascadeAction::AuthorsLoaded(authors));
                                cascade.set(next);
                            }
                            Err(err) => {
                                load_error.set(Some(format!(
                                    "ತತ್ವಪದಕಾರರ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}"
                                )));
                                let (next, _) =
                                    next.apply(CascadeAction::AuthorsLoaded(Vec::new()));
                                cascade.set(next);
                            }
                        }
                    });
                }
                CascadeEffect::FetchVerses { samputa, hesaru } => {
                    let cascade = cascade.clone();
                    let load_error = load_error.clone();
                    let cascade_seq = cascade_seq.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result =
                            api::archive::fetch_tatvapada_summaries(&samputa, &hesaru).await;
                        if !cascade_seq.borrow().is_current(request_id) {
                            return;
                        }
                        match result {
                            Ok(verses) => {
                                let (next, _) = next.apply(CascadeAction::VersesLoaded(verses));
                                cascade.set(next);
                            }
                            Err(err) => {
                                load_error
                                    .set(Some(format!("ತತ್ವಪದಗಳ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
                                let (next, _) =
                                    next.apply(CascadeAction::VersesLoaded(Vec::new()));
                                cascade.set(next);
                            }
                        }
                    });
                }
                CascadeEffect::FetchDetail { samputa, hesaru, sankhye } => {
                    let form = form.clone();
                    let editing_new = editing_new.clone();
                    let load_error = load_error.clone();
                    let cascade_seq = cascade_seq.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let result =
                            api::archive::fetch_tatvapada(&samputa, &hesaru, &sankhye).await;
                        if !cascade_seq.borrow().is_current(request_id) {
                            return;
                        }
                        match result {
                            Ok(verse) => {
                                form.set(verse);
                                editing_new.set(false);
                            }
                            Err(err) => {
                                load_error.set(Some(format!("ತತ್ವಪದ ಸಿಗಲಿಲ್ಲ: {err}")));
                            }
                        }
                    });
                }
                CascadeEffect::StartNewVerse { samputa, hesaru, sankhye } => {
                    form.set(Tatvapada {
                        samputa_sankhye: samputa,
                        tatvapadakara_hesaru: hesaru,
                        tatvapada_sankhye: sankhye,
                        ..Tatvapada::default()
                    });
                    editing_new.set(true);
                }
            }
        })
    };

    let on_inline_create = {
        let dispatch = dispatch.clone();
        let feedback = feedback.clone();
        Callback::from(move |(level, value): (CascadeLevel, String)| {
            dispatch.emit(CascadeAction::InlineCreated {
                level,
                value: value.clone(),
            });
            // Volumes have no editor of their own, so a new volume is written
            // to the server as soon as its number is confirmed. Authors and
            // verses are only persisted when their form is submitted.
            if level == CascadeLevel::Samputa {
                let feedback = feedback.clone();
                let samputa = tatvapada_shared::Samputa {
                    samputa_sankhye: value.clone(),
                    title: value,
                    editor: None,
                };
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = api::archive::save_samputa(&samputa).await {
                        feedback.set(Some(Feedback::error(
                            "ಸಂಪುಟ ಉಳಿಸಲು ಆಗಲಿಲ್ಲ",
                            err.to_string(),
                        )));
                    }
                });
            }
        })
    };

    // Re-fetches the verse list for the current selection after a mutation.
    // The request id keeps a slow response from clobbering a selection made
    // while it was in flight, same as the fetches in `dispatch`.
    let refresh_verses = {
        let cascade = cascade.clone();
        let load_error = load_error.clone();
        let cascade_seq = cascade_seq.clone();
        Callback::from(move |_: ()| {
            let (Some(samputa), Some(hesaru)) = (
                (*cascade).selected_samputa.clone(),
                (*cascade).selected_author.clone(),
            ) else {
                return;
            };
            let cascade = cascade.clone();
            let load_error = load_error.clone();
            let cascade_seq = cascade_seq.clone();
            let request_id = cascade_seq.borrow_mut().next();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::archive::fetch_tatvapada_summaries(&samputa, &hesaru).await;
                if !cascade_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(verses) => {
                        let (next, _) =
                            (*cascade).clone().apply(CascadeAction::VersesLoaded(verses));
                        cascade.set(next);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ತತ್ವಪದಗಳ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
                    }
                }
            });
        })
    };

    let edit_field = |apply: fn(&mut Tatvapada, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .or_else(|| event.target_dyn_into::<HtmlInputElement>().map(|t| t.value()));
            if let Some(value) = value {
                let mut next = (*form).clone();
                apply(&mut next, value);
                form.set(next);
            }
        })
    };

    let on_modala_salu = edit_field(|f, v| f.modala_salu = v);
    let on_content = edit_field(|f, v| f.content = v);
    let on_bhavanuvada = edit_field(|f, v| {
        f.bhavanuvada = if v.trim().is_empty() { None } else { Some(v) }
    });
    let on_klishta = edit_field(|f, v| {
        f.klishta_padagalu = if v.trim().is_empty() { None } else { Some(v) }
    });

    let on_submit = {
        let form = form.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let editing_new = editing_new.clone();
        let refresh_verses = refresh_verses.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let payload = (*form).clone();
            // Required-field check blocks the network call entirely.
            if let Err(err) = payload.validate() {
                feedback.set(Some(Feedback::error("ಮಾಹಿತಿ ಅಪೂರ್ಣ", err.to_string())));
                return;
            }
            let saving = saving.clone();
            let feedback = feedback.clone();
            let editing_new = editing_new.clone();
            let refresh_verses = refresh_verses.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::save_tatvapada(&payload).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಉಳಿಸಲಾಗಿದೆ",
                            format!(
                                "ತತ್ವಪದ {} (ಸಂಪುಟ {}) ಉಳಿಸಲಾಗಿದೆ.",
                                saved.tatvapada_sankhye, saved.samputa_sankhye
                            ),
                        )));
                        editing_new.set(false);
                        refresh_verses.emit(());
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
        let cascade = cascade.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh_verses = refresh_verses.clone();
        Callback::from(move |_| {
            let verse = (*form).clone();
            if verse.tatvapada_sankhye.trim().is_empty() {
                return;
            }
            let cascade = cascade.clone();
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh_verses = refresh_verses.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::archive::delete_tatvapada(
                    &verse.samputa_sankhye,
                    &verse.tatvapadakara_hesaru,
                    &verse.tatvapada_sankhye,
                )
                .await
                {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಳಿಸಲಾಗಿದೆ",
                            format!("ತತ್ವಪದ {} ಅಳಿಸಲಾಗಿದೆ.", verse.tatvapada_sankhye),
                        )));
                        let (next, _) =
                            (*cascade).clone().apply(CascadeAction::PickVerse(String::new()));
                        cascade.set(next);
                        refresh_verses.emit(());
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

    let form_visible =
        (*cascade).selected_verse.is_some() || *editing_new;
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
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ತತ್ವಪದ ಸಂಪಾದನೆ" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            if *loading {
                <LoadingSpinner size={SpinnerSize::Large} />
            } else {
                <CascadeSelect
                    state={(*cascade).clone()}
                    on_action={dispatch.clone()}
                    on_inline_create={on_inline_create}
                />
            }

            if form_visible {
                <form class={classes!("space-y-4", "max-w-3xl")} onsubmit={on_submit}>
                    <div class={classes!("grid", "gap-4", "md:grid-cols-3")}>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ಸಂಪುಟ" }
                            </span>
                            <input
                                class={input_classes.clone()}
                                value={(*form).samputa_sankhye.clone()}
                                readonly=true
                            />
                        </label>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ತತ್ವಪದಕಾರರು" }
                            </span>
                            <input
                                class={input_classes.clone()}
                                value={(*form).tatvapadakara_hesaru.clone()}
                                readonly=true
                            />
                        </label>
                        <label class={classes!("block")}>
                            <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                { "ತತ್ವಪದ ಸಂಖ್ಯೆ" }
                            </span>
                            <input
                                class={input_classes.clone()}
                                value={(*form).tatvapada_sankhye.clone()}
                                readonly=true
                            />
                        </label>
                    </div>

                    <label class={classes!("block")}>
                        <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                            { "ಮೊದಲ ಸಾಲು" }
                        </span>
                        <input
                            class={input_classes.clone()}
                            value={(*form).modala_salu.clone()}
                            oninput={on_modala_salu}
                        />
                    </label>

                    <label class={classes!("block")}>
                        <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                            { "ತತ್ವಪದ (ಪೂರ್ಣ ಪಠ್ಯ)" }
                        </span>
                        <textarea
                            class={classes!(input_classes.clone(), "min-h-[10rem]")}
                            value={(*form).content.clone()}
                            oninput={on_content}
                        />
                    </label>

                    <label class={classes!("block")}>
                        <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                            { "ಭಾವಾನುವಾದ" }
                        </span>
                        <textarea
                            class={classes!(input_classes.clone(), "min-h-[6rem]")}
                            value={(*form).bhavanuvada.clone().unwrap_or_default()}
                            oninput={on_bhavanuvada}
                        />
                    </label>

                    <label class={classes!("block")}>
                        <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                            { "ಕ್ಲಿಷ್ಟ ಪದಗಳು" }
                        </span>
                        <textarea
                            class={classes!(input_classes, "min-h-[4rem]")}
                            value={(*form).klishta_padagalu.clone().unwrap_or_default()}
                            oninput={on_klishta}
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
                            { if *editing_new { "ಹೊಸ ತತ್ವಪದ ಸೇರಿಸಿ" } else { "ಬದಲಾವಣೆ ಉಳಿಸಿ" } }
                        </button>
                        if !*editing_new {
                            <button
                                type="button"
                                disabled={*saving}
                                onclick={on_delete}
                                class={classes!(
                                    "rounded-lg", "border", "border-red-500/50", "px-5",
                                    "py-2", "font-semibold", "text-red-600",
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

            <FeedbackModal feedback={(*feedback).clone()} on_close={close_feedback} />
        </main>
    }
}
