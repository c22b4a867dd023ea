use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Tatvapada,

    #[at("/tatvapadakara")]
    Tatvapadakara,

    #[at("/glossary")]
    Glossary,

    #[at("/documents")]
    Documents,

    #[at("/catalog")]
    Catalog,

    #[at("/users")]
    Users,

    #[at("/shop")]
    Shop,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Tatvapada => html! { <pages::tatvapada::TatvapadaPage /> },
        Route::Tatvapadakara => html! { <pages::tatvapadakara::TatvapadakaraPage /> },
        Route::Glossary => html! { <pages::glossary::GlossaryPage /> },
        Route::Documents => html! { <pages::documents::DocumentsPage /> },
        Route::Catalog => html! { <pages::catalog::CatalogPage /> },
        Route::Users => html! { <pages::users::UsersPage /> },
        Route::Shop => html! { <pages::shop::ShopPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <Header />
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
