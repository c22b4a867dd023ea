use tatvapada_shared::UserAccount;
use web_sys::{HtmlInputElement, HtmlSelectElement};
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

const ROLES: &[&str] = &["admin", "editor", "viewer"];

/// User administration tab: search, role changes and enable/disable.
#[function_component(UsersPage)]
pub fn users_page() -> Html {
    let users = use_state(Vec::<UserAccount>::new);
    let total = use_state(|| 0_usize);
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    let refresh = {
        let users = users.clone();
        let total = total.clone();
        let page = page.clone();
        let search = search.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let users = users.clone();
            let total = total.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let refresh_seq = refresh_seq.clone();
            let current_page = requested_page.unwrap_or(*page).max(1);
            let query = ListQuery::page(current_page, PAGE_SIZE).with_search(&search);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::console::fetch_users(&query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        users.set(paged.items);
                        total.set(paged.total);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ಬಳಕೆದಾರರ ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
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

    // Pushes an edited account to the backend and reloads the page in place.
    let submit_update = {
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |updated: UserAccount| {
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::update_user(&updated).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ನವೀಕರಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಖಾತೆ ನವೀಕರಿಸಲಾಗಿದೆ.", saved.name),
                        )));
                    }
                    Err(err) => {
                        feedback.set(Some(Feedback::error(
                            "ನವೀಕರಣ ವಿಫಲ",
                            err.to_string(),
                        )));
                    }
                }
                refresh.emit(None);
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

    html! {
        <main class={classes!("container", "py-8", "space-y-6")}>
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ಬಳಕೆದಾರರು" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            <div class={classes!("flex", "flex-wrap", "items-center", "gap-3")}>
                <input
                    class={classes!(
                        "max-w-xs", "w-full", "rounded-lg", "border",
                        "border-[var(--border)]", "bg-[var(--surface)]",
                        "px-3", "py-2", "text-sm"
                    )}
                    placeholder="ಹೆಸರು ಅಥವಾ ಇಮೇಲ್"
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
                if *saving {
                    <LoadingSpinner size={SpinnerSize::Small} />
                }
            </div>

            if *loading {
                <LoadingSpinner size={SpinnerSize::Medium} />
            } else if users.is_empty() {
                <p class={classes!("text-sm", "text-[var(--muted)]")}>
                    { "ಯಾವುದೇ ಖಾತೆಗಳು ಸಿಗಲಿಲ್ಲ." }
                </p>
            } else {
                <table class={classes!("w-full", "text-left", "text-sm")}>
                    <thead>
                        <tr class={classes!("border-b", "border-[var(--border)]")}>
                            <th class={classes!("py-2")}>{ "ಹೆಸರು" }</th>
                            <th class={classes!("py-2")}>{ "ಇಮೇಲ್" }</th>
                            <th class={classes!("py-2")}>{ "ಪಾತ್ರ" }</th>
                            <th class={classes!("py-2")}>{ "ಸಕ್ರಿಯ" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for users.iter().map(|user| {
                            let on_role_change = {
                                let submit_update = submit_update.clone();
                                let account = user.clone();
                                Callback::from(move |event: Event| {
                                    if let Some(select) =
                                        event.target_dyn_into::<HtmlSelectElement>()
                                    {
                                        let mut updated = account.clone();
                                        updated.role = select.value();
                                        submit_update.emit(updated);
                                    }
                                })
                            };
                            let on_active_toggle = {
                                let submit_update = submit_update.clone();
                                let account = user.clone();
                                Callback::from(move |_| {
                                    let mut updated = account.clone();
                                    updated.active = !updated.active;
                                    submit_update.emit(updated);
                                })
                            };
                            html! {
                                <tr
                                    key={user.id.to_string()}
                                    class={classes!("border-b", "border-[var(--border)]")}
                                >
                                    <td class={classes!("py-2", "font-semibold")}>
                                        { user.name.clone() }
                                    </td>
                                    <td class={classes!("py-2")}>{ user.email.clone() }</td>
                                    <td class={classes!("py-2")}>
                                        <select
                                            class={classes!(
                                                "rounded-lg", "border",
                                                "border-[var(--border)]",
                                                "bg-[var(--surface)]", "px-2", "py-1"
                                            )}
                                            disabled={*saving}
                                            onchange={on_role_change}
                                        >
                                            { for ROLES.iter().map(|role| html! {
                                                <option
                                                    value={*role}
                                                    selected={user.role == *role}
                                                >
                                                    { *role }
                                                </option>
                                            }) }
                                        </select>
                                    </td>
                                    <td class={classes!("py-2")}>
                                        <input
                                            type="checkbox"
                                            checked={user.active}
                                            disabled={*saving}
                                            onchange={on_active_toggle}
                                        />
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

            <FeedbackModal feedback={(*feedback).clone()} on_close={close_feedback} />
        </main>
    }
}
