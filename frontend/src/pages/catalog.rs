use tatvapada_shared::{format_paise, parse_rupees, Product, Validate};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
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

/// Shop catalog tab. Prices are edited as rupee text and stored in paise,
/// so a bad price never reaches the network.
#[function_component(CatalogPage)]
pub fn catalog_page() -> Html {
    let products = use_state(Vec::<Product>::new);
    let total = use_state(|| 0_usize);
    let page = use_state(|| 1_usize);
    let search = use_state(String::new);
    let loading = use_state(|| false);
    let saving = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let form = use_state(|| None::<Product>);
    // Raw rupee text while the price field is being edited.
    let price_text = use_state(String::new);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    let refresh = {
        let products = products.clone();
        let total = total.clone();
        let page = page.clone();
        let search = search.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        Callback::from(move |requested_page: Option<usize>| {
            let products = products.clone();
            let total = total.clone();
            let loading = loading.clone();
            let load_error = load_error.clone();
            let refresh_seq = refresh_seq.clone();
            let current_page = requested_page.unwrap_or(*page).max(1);
            let query = ListQuery::page(current_page, PAGE_SIZE).with_search(&search);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::console::fetch_products(&query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        products.set(paged.items);
                        total.set(paged.total);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ಪಟ್ಟಿ ಸಿಗಲಿಲ್ಲ: {err}")));
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
        let price_text = price_text.clone();
        Callback::from(move |_| {
            form.set(Some(Product::default()));
            price_text.set(String::new());
        })
    };
    let on_select = {
        let form = form.clone();
        let price_text = price_text.clone();
        Callback::from(move |product: Product| {
            price_text.set(format_paise(product.price_paise));
            form.set(Some(product));
        })
    };

    let edit_field = |apply: fn(&mut Product, String)| {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let value = event
                .target_dyn_into::<HtmlTextAreaElement>()
                .map(|t| t.value())
                .or_else(|| event.target_dyn_into::<HtmlInputElement>().map(|t| t.value()));
            if let Some(value) = value {
                let mut next = (*form).clone();
                if let Some(product) = next.as_mut() {
                    apply(product, value);
                }
                form.set(next);
            }
        })
    };
    let on_name_input = edit_field(|p, v| p.name = v);
    let on_stock_input = edit_field(|p, v| p.stock = v.trim().parse().unwrap_or(p.stock));
    let on_description_input = edit_field(|p, v| p.description_md = v);
    let on_price_input = {
        let price_text = price_text.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                price_text.set(target.value());
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let price_text = price_text.clone();
        let saving = saving.clone();
        let feedback = feedback.clone();
        let refresh = refresh.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(mut payload) = (*form).clone() else {
                return;
            };
            let Some(paise) = parse_rupees(&price_text) else {
                feedback.set(Some(Feedback::error(
                    "ಬೆಲೆ ತಪ್ಪಾಗಿದೆ",
                    format!("\"{}\" ಅನ್ನು ರೂಪಾಯಿ ಮೊತ್ತವಾಗಿ ಓದಲಾಗಲಿಲ್ಲ.", *price_text),
                )));
                return;
            };
            payload.price_paise = paise;
            if let Err(err) = payload.validate() {
                feedback.set(Some(Feedback::error("ಮಾಹಿತಿ ಅಪೂರ್ಣ", err.to_string())));
                return;
            }
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            let price_text = price_text.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::save_product(&payload).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಉಳಿಸಲಾಗಿದೆ",
                            format!(
                                "\"{}\" ({}) ಉಳಿಸಲಾಗಿದೆ.",
                                saved.name,
                                format_paise(saved.price_paise)
                            ),
                        )));
                        price_text.set(format_paise(saved.price_paise));
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
            let Some(product) = (*form).clone() else {
                return;
            };
            let Some(id) = product.id else {
                return;
            };
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            let form = form.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::delete_product(id).await {
                    Ok(()) => {
                        feedback.set(Some(Feedback::success(
                            "ಅಳಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಅಳಿಸಲಾಗಿದೆ.", product.name),
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

    let on_image_change = {
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
            let Some(id) = (*form).as_ref().and_then(|product| product.id) else {
                return;
            };
            let form = form.clone();
            let saving = saving.clone();
            let feedback = feedback.clone();
            let refresh = refresh.clone();
            saving.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::console::upload_product_image(id, &file).await {
                    Ok(saved) => {
                        feedback.set(Some(Feedback::success(
                            "ಚಿತ್ರ ಸೇರಿಸಲಾಗಿದೆ",
                            format!("\"{}\" ಚಿತ್ರ ನವೀಕರಿಸಲಾಗಿದೆ.", saved.name),
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
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ಪುಸ್ತಕ ಸೂಚಿ" }</h1>

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
                    { "➕ ಹೊಸ ಉತ್ಪನ್ನ" }
                </button>
            </div>

            <div class={classes!("grid", "gap-6", "lg:grid-cols-2")}>
                <section class={classes!("space-y-3")}>
                    if *loading {
                        <LoadingSpinner size={SpinnerSize::Medium} />
                    } else if products.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಸೂಚಿಯಲ್ಲಿ ಏನೂ ಇಲ್ಲ." }
                        </p>
                    } else {
                        <table class={classes!("w-full", "text-left", "text-sm")}>
                            <thead>
                                <tr class={classes!("border-b", "border-[var(--border)]")}>
                                    <th class={classes!("py-2")}>{ "ಹೆಸರು" }</th>
                                    <th class={classes!("py-2")}>{ "ಬೆಲೆ" }</th>
                                    <th class={classes!("py-2")}>{ "ದಾಸ್ತಾನು" }</th>
                                </tr>
                            </thead>
                            <tbody>
                                { for products.iter().map(|product| {
                                    let on_select = on_select.clone();
                                    let item = product.clone();
                                    html! {
                                        <tr
                                            key={product.id.unwrap_or_default().to_string()}
                                            class={classes!(
                                                "cursor-pointer", "border-b",
                                                "border-[var(--border)]",
                                                "hover:bg-[var(--surface-alt)]"
                                            )}
                                            onclick={Callback::from(move |_| {
                                                on_select.emit(item.clone())
                                            })}
                                        >
                                            <td class={classes!("py-2", "font-semibold")}>
                                                { product.name.clone() }
                                            </td>
                                            <td class={classes!("py-2")}>
                                                { format_paise(product.price_paise) }
                                            </td>
                                            <td class={classes!("py-2")}>
                                                { product.stock }
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

                if let Some(product) = (*form).clone() {
                    <section class={classes!("space-y-4")}>
                        <form class={classes!("space-y-4")} onsubmit={on_submit}>
                            <label class={classes!("block")}>
                                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                    { "ಹೆಸರು" }
                                </span>
                                <input
                                    class={input_classes.clone()}
                                    value={product.name.clone()}
                                    oninput={on_name_input}
                                />
                            </label>
                            <div class={classes!("grid", "grid-cols-2", "gap-4")}>
                                <label class={classes!("block")}>
                                    <span class={classes!(
                                        "mb-1", "block", "text-sm", "font-semibold"
                                    )}>
                                        { "ಬೆಲೆ (₹)" }
                                    </span>
                                    <input
                                        class={input_classes.clone()}
                                        value={(*price_text).clone()}
                                        placeholder="₹250.00"
                                        oninput={on_price_input}
                                    />
                                </label>
                                <label class={classes!("block")}>
                                    <span class={classes!(
                                        "mb-1", "block", "text-sm", "font-semibold"
                                    )}>
                                        { "ದಾಸ್ತಾನು" }
                                    </span>
                                    <input
                                        type="number"
                                        min="0"
                                        class={input_classes.clone()}
                                        value={product.stock.to_string()}
                                        oninput={on_stock_input}
                                    />
                                </label>
                            </div>
                            <label class={classes!("block")}>
                                <span class={classes!("mb-1", "block", "text-sm", "font-semibold")}>
                                    { "ವಿವರಣೆ (Markdown)" }
                                </span>
                                <textarea
                                    class={classes!(input_classes.clone(), "min-h-[8rem]")}
                                    value={product.description_md.clone()}
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
                                if product.id.is_some() {
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
                                        { "🖼️ ಚಿತ್ರ ಸೇರಿಸಿ" }
                                        <input
                                            type="file"
                                            accept="image/*"
                                            class={classes!("hidden")}
                                            onchange={on_image_change}
                                        />
                                    </label>
                                }
                                if *saving {
                                    <LoadingSpinner size={SpinnerSize::Small} />
                                }
                            </div>
                        </form>
                        if let Some(url) = product.image_url.clone() {
                            <img
                                src={url}
                                alt={product.name.clone()}
                                class={classes!("max-h-48", "rounded-lg")}
                            />
                        }
                        if !product.description_md.trim().is_empty() {
                            <div class={classes!(
                                "rounded-lg", "border", "border-[var(--border)]", "p-4"
                            )}>
                                <p class={classes!(
                                    "mb-2", "text-xs", "uppercase", "text-[var(--muted)]"
                                )}>
                                    { "ಮುನ್ನೋಟ" }
                                </p>
                                <RawHtml
                                    html={markdown_to_html(&product.description_md)}
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
