use dioxus::prelude::*;

use crate::components::{trunks::TrunkList, wizard::CreateTrunkWizard};
use crate::AppLayout;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Trunks {})]

    // Every page shares the console shell (top bar + sidebar)
    #[layout(AppLayout)]
        #[route("/trunks")]
        Trunks {},

        #[route("/trunks/new")]
        NewTrunk {},
    #[end_layout]

    // Unknown paths land back on the trunk list
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

// Route handler components
#[component]
fn Trunks() -> Element {
    rsx! {
        TrunkList {}
    }
}

#[component]
fn NewTrunk() -> Element {
    rsx! {
        CreateTrunkWizard {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    use_effect(move || {
        tracing::debug!("Unknown path /{}, redirecting", path);
        navigator().replace(Route::Trunks {});
    });

    rsx! {}
}
