use tatvapada_shared::{format_paise, Cart, Product, Validate};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api::{
        self,
        shop::{CheckoutRequest, OrderReceipt},
        ListQuery,
    },
    cart_store,
    components::{
        error_banner::ErrorBanner,
        feedback_modal::{Feedback, FeedbackModal},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        pagination::Pagination,
        raw_html::RawHtml,
    },
    hooks::{use_pagination, RequestSeq},
    utils::markdown_to_html,
};

const PAGE_SIZE: usize = 12;
// The storefront pulls the whole catalog once and pages it client-side.
const CATALOG_FETCH_LIMIT: usize = 500;

/// Storefront: product grid plus the `localStorage`-backed cart and a
/// checkout form. Every cart mutation is written back to storage so a reload
/// keeps the cart.
#[function_component(ShopPage)]
pub fn shop_page() -> Html {
    let products = use_state(Vec::<Product>::new);
    let loading = use_state(|| false);
    let load_error = use_state(|| None::<String>);
    let feedback = use_state(|| None::<Feedback>);
    let cart = use_state(cart_store::load);
    let customer_name = use_state(String::new);
    let phone = use_state(String::new);
    let placing = use_state(|| false);
    let receipt = use_state(|| None::<OrderReceipt>);
    let refresh_seq = use_mut_ref(RequestSeq::default);

    let (visible_products, current_page, total_pages, go_to_page) =
        use_pagination((*products).clone(), PAGE_SIZE);

    {
        let products = products.clone();
        let loading = loading.clone();
        let load_error = load_error.clone();
        let refresh_seq = refresh_seq.clone();
        use_effect_with((), move |_| {
            let query = ListQuery::page(1, CATALOG_FETCH_LIMIT);
            let request_id = refresh_seq.borrow_mut().next();
            loading.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::shop::fetch_shop_products(&query).await;
                if !refresh_seq.borrow().is_current(request_id) {
                    return;
                }
                match result {
                    Ok(paged) => {
                        products.set(paged.items);
                        load_error.set(None);
                    }
                    Err(err) => {
                        load_error.set(Some(format!("ಉತ್ಪನ್ನಗಳು ಸಿಗಲಿಲ್ಲ: {err}")));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Every mutation goes through here so storage never drifts from state.
    let update_cart = {
        let cart = cart.clone();
        Callback::from(move |next: Cart| {
            cart_store::save(&next);
            cart.set(next);
        })
    };

    let on_add_to_cart = {
        let cart = cart.clone();
        let update_cart = update_cart.clone();
        Callback::from(move |product: Product| {
            let mut next = (*cart).clone();
            next.add_product(&product, 1);
            update_cart.emit(next);
        })
    };
    let on_quantity_change = {
        let cart = cart.clone();
        let update_cart = update_cart.clone();
        Callback::from(move |(product_id, quantity): (u64, u32)| {
            let mut next = (*cart).clone();
            next.set_quantity(product_id, quantity);
            update_cart.emit(next);
        })
    };
    let on_remove_line = {
        let cart = cart.clone();
        let update_cart = update_cart.clone();
        Callback::from(move |product_id: u64| {
            let mut next = (*cart).clone();
            next.remove(product_id);
            update_cart.emit(next);
        })
    };

    let on_name_input = {
        let customer_name = customer_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                customer_name.set(target.value());
            }
        })
    };
    let on_phone_input = {
        let phone = phone.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(target) = event.target_dyn_into::<HtmlInputElement>() {
                phone.set(target.value());
            }
        })
    };

    let on_checkout = {
        let cart = cart.clone();
        let customer_name = customer_name.clone();
        let phone = phone.clone();
        let placing = placing.clone();
        let feedback = feedback.clone();
        let receipt = receipt.clone();
        let update_cart = update_cart.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CheckoutRequest::from_cart(&customer_name, &phone, &cart);
            if let Err(err) = request.validate() {
                feedback.set(Some(Feedback::error("ಮಾಹಿತಿ ಅಪೂರ್ಣ", err.to_string())));
                return;
            }
            let placing = placing.clone();
            let feedback = feedback.clone();
            let receipt = receipt.clone();
            let update_cart = update_cart.clone();
            let customer_name = customer_name.clone();
            let phone = phone.clone();
            placing.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::shop::place_order(&request).await {
                    Ok(confirmed) => {
                        cart_store::clear();
                        update_cart.emit(Cart::default());
                        customer_name.set(String::new());
                        phone.set(String::new());
                        feedback.set(Some(Feedback::success(
                            "ಆದೇಶ ಸ್ವೀಕೃತ",
                            format!(
                                "ಆದೇಶ {} ದಾಖಲಾಗಿದೆ. ಮೊತ್ತ: {}",
                                confirmed.order_id,
                                format_paise(confirmed.total_paise)
                            ),
                        )));
                        receipt.set(Some(confirmed));
                    }
                    Err(err) => {
                        feedback.set(Some(Feedback::error(
                            "ಆದೇಶ ವಿಫಲವಾಯಿತು",
                            err.to_string(),
                        )));
                    }
                }
                placing.set(false);
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
            <h1 class={classes!("text-2xl", "font-bold")}>{ "ಪುಸ್ತಕ ಮಳಿಗೆ" }</h1>

            if let Some(message) = (*load_error).clone() {
                <ErrorBanner message={message} on_close={Some(clear_error)} />
            }

            <div class={classes!("grid", "gap-8", "lg:grid-cols-[2fr_1fr]")}>
                <section class={classes!("space-y-4")}>
                    if *loading {
                        <LoadingSpinner size={SpinnerSize::Medium} />
                    } else if products.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಮಾರಾಟಕ್ಕೆ ಏನೂ ಇಲ್ಲ." }
                        </p>
                    } else {
                        <div class={classes!("grid", "gap-4", "sm:grid-cols-2", "xl:grid-cols-3")}>
                            { for visible_products.iter().map(|product| {
                                let on_add_to_cart = on_add_to_cart.clone();
                                let item = product.clone();
                                let out_of_stock = product.stock == 0;
                                html! {
                                    <article
                                        key={product.id.unwrap_or_default().to_string()}
                                        class={classes!(
                                            "flex", "flex-col", "gap-2", "rounded-lg",
                                            "border", "border-[var(--border)]", "p-4"
                                        )}
                                    >
                                        if let Some(url) = product.image_url.clone() {
                                            <img
                                                src={url}
                                                alt={product.name.clone()}
                                                class={classes!(
                                                    "h-32", "w-full", "rounded",
                                                    "object-cover"
                                                )}
                                            />
                                        }
                                        <h2 class={classes!("font-semibold")}>
                                            { product.name.clone() }
                                        </h2>
                                        if !product.description_md.trim().is_empty() {
                                            <RawHtml
                                                html={markdown_to_html(&product.description_md)}
                                                class={classes!(
                                                    "prose", "prose-sm",
                                                    "text-[var(--muted)]"
                                                )}
                                            />
                                        }
                                        <div class={classes!(
                                            "mt-auto", "flex", "items-center",
                                            "justify-between"
                                        )}>
                                            <span class={classes!("font-bold")}>
                                                { format_paise(product.price_paise) }
                                            </span>
                                            <button
                                                type="button"
                                                disabled={out_of_stock}
                                                class={classes!(
                                                    "rounded-lg", "bg-[var(--primary)]",
                                                    "px-3", "py-1.5", "text-sm",
                                                    "font-semibold", "text-white",
                                                    "disabled:opacity-50"
                                                )}
                                                onclick={Callback::from(move |_| {
                                                    on_add_to_cart.emit(item.clone())
                                                })}
                                            >
                                                if out_of_stock {
                                                    { "ದಾಸ್ತಾನು ಇಲ್ಲ" }
                                                } else {
                                                    { "🛒 ಸೇರಿಸಿ" }
                                                }
                                            </button>
                                        </div>
                                    </article>
                                }
                            }) }
                        </div>
                        <Pagination
                            current_page={current_page}
                            total_pages={total_pages}
                            on_page_change={go_to_page}
                        />
                    }
                </section>

                <aside class={classes!(
                    "h-fit", "space-y-4", "rounded-lg", "border",
                    "border-[var(--border)]", "p-4"
                )}>
                    <h2 class={classes!("text-lg", "font-bold")}>
                        { format!("ಕಾರ್ಟ್ ({})", cart.item_count()) }
                    </h2>
                    if cart.is_empty() {
                        <p class={classes!("text-sm", "text-[var(--muted)]")}>
                            { "ಕಾರ್ಟ್ ಖಾಲಿ ಇದೆ." }
                        </p>
                    } else {
                        <ul class={classes!("space-y-2")}>
                            { for cart.lines.iter().map(|line| {
                                let on_quantity_change = on_quantity_change.clone();
                                let on_remove_line = on_remove_line.clone();
                                let product_id = line.product_id;
                                let quantity = line.quantity;
                                html! {
                                    <li
                                        key={line.product_id.to_string()}
                                        class={classes!(
                                            "flex", "items-center", "gap-2", "text-sm"
                                        )}
                                    >
                                        <span class={classes!("flex-1")}>
                                            { line.name.clone() }
                                        </span>
                                        <input
                                            type="number"
                                            min="0"
                                            class={classes!(
                                                "w-16", "rounded", "border",
                                                "border-[var(--border)]", "px-2", "py-1"
                                            )}
                                            value={quantity.to_string()}
                                            onchange={Callback::from(move |event: Event| {
                                                if let Some(input) = event
                                                    .target_dyn_into::<HtmlInputElement>()
                                                {
                                                    let next = input
                                                        .value()
                                                        .trim()
                                                        .parse()
                                                        .unwrap_or(quantity);
                                                    on_quantity_change.emit((product_id, next));
                                                }
                                            })}
                                        />
                                        <span class={classes!("w-24", "text-right")}>
                                            { format_paise(
                                                u64::from(line.quantity)
                                                    * line.unit_price_paise,
                                            ) }
                                        </span>
                                        <button
                                            type="button"
                                            class={classes!("text-red-600")}
                                            title="ತೆಗೆದುಹಾಕಿ"
                                            onclick={Callback::from(move |_| {
                                                on_remove_line.emit(product_id)
                                            })}
                                        >
                                            { "✕" }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                        <p class={classes!("text-right", "font-bold")}>
                            { format!("ಒಟ್ಟು: {}", format_paise(cart.total_paise())) }
                        </p>
                        <form class={classes!("space-y-3")} onsubmit={on_checkout}>
                            <input
                                class={input_classes.clone()}
                                placeholder="ನಿಮ್ಮ ಹೆಸರು"
                                value={(*customer_name).clone()}
                                oninput={on_name_input}
                            />
                            <input
                                class={input_classes.clone()}
                                placeholder="ದೂರವಾಣಿ ಸಂಖ್ಯೆ"
                                value={(*phone).clone()}
                                oninput={on_phone_input}
                            />
                            <button
                                type="submit"
                                disabled={*placing}
                                class={classes!(
                                    "w-full", "rounded-lg", "bg-[var(--primary)]",
                                    "px-4", "py-2", "font-semibold", "text-white",
                                    "disabled:opacity-50"
                                )}
                            >
                                if *placing {
                                    { "ಕಳುಹಿಸಲಾಗುತ್ತಿದೆ…" }
                                } else {
                                    { "ಆದೇಶ ಸಲ್ಲಿಸಿ" }
                                }
                            </button>
                        </form>
                    }
                    if let Some(confirmed) = (*receipt).clone() {
                        <p class={classes!("text-sm", "text-green-700")}>
                            { format!(
                                "ಕೊನೆಯ ಆದೇಶ: {} ({})",
                                confirmed.order_id,
                                format_paise(confirmed.total_paise)
                            ) }
                        </p>
                    }
                </aside>
            </div>

            <FeedbackModal feedback={(*feedback).clone()} on_close={close_feedback} />
        </main>
    }
}
