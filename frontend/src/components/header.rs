use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

const TABS: &[(Route, &str)] = &[
    (Route::Tatvapada, "ತತ್ವಪದಗಳು"),
    (Route::Tatvapadakara, "ತತ್ವಪದಕಾರರು"),
    (Route::Glossary, "ಕೋಶಗಳು"),
    (Route::Documents, "ದಾಖಲೆಗಳು"),
    (Route::Catalog, "ಪುಸ್ತಕ ಸೂಚಿ"),
    (Route::Users, "ಬಳಕೆದಾರರು"),
    (Route::Shop, "ಮಳಿಗೆ"),
];

/// Top navigation bar: one tab per console section, current tab highlighted.
#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    html! {
        <header class={classes!(
            "sticky", "top-0", "z-10", "border-b", "border-[var(--border)]",
            "bg-[var(--surface)]"
        )}>
            <div class={classes!(
                "container", "flex", "flex-wrap", "items-center", "gap-2", "py-3"
            )}>
                <span class={classes!("mr-4", "text-lg", "font-bold")}>
                    { "ತತ್ವಪದ ಸಂಪುಟ ನಿರ್ವಹಣೆ" }
                </span>
                <nav class={classes!("flex", "flex-wrap", "gap-1")}>
                    { for TABS.iter().map(|(target, label)| {
                        let active = route.as_ref() == Some(target);
                        html! {
                            <Link<Route>
                                to={target.clone()}
                                classes={classes!(
                                    "rounded-lg", "px-3", "py-1.5", "text-sm",
                                    "font-semibold",
                                    active.then_some("bg-[var(--primary)]"),
                                    active.then_some("text-white"),
                                    (!active).then_some("text-[var(--muted)]"),
                                    (!active).then_some("hover:bg-[var(--surface-alt)]"),
                                )}
                            >
                                { *label }
                            </Link<Route>>
                        }
                    }) }
                </nav>
            </div>
        </header>
    }
}
