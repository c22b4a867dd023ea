use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "py-16", "text-center", "space-y-4")}>
            <h2 class={classes!("text-3xl", "font-bold")}>{ "404" }</h2>
            <p class={classes!("text-[var(--muted)]")}>
                { "ಈ ಪುಟ ಸಿಗಲಿಲ್ಲ." }
            </p>
            <Link<Route> to={Route::Tatvapada} classes={classes!("text-[var(--primary)]", "underline")}>
                { "ಮುಖಪುಟಕ್ಕೆ ಹಿಂತಿರುಗಿ" }
            </Link<Route>>
        </main>
    }
}
