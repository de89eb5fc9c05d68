use crate::components_impl::{apply_route, aria_pressed, route_toggle_class};
use crate::route_selector::{RouteSelection, RouteSelector};
use leptos::prelude::*;

/// Embedded driving-directions map with a toggle between the two routes.
#[component]
pub fn RouteMap() -> impl IntoView {
    let selector = RwSignal::new(RouteSelector::new());

    view! {
        <div class="bg-slate-100 rounded-xl overflow-hidden border border-slate-200 relative h-80 sm:h-96 w-full mb-6">
            <div class="absolute top-4 left-4 z-10 flex flex-col gap-2">
                {RouteSelection::ALL
                    .into_iter()
                    .map(move |route| {
                        let active = move || selector.with(|s| s.is_active(route));
                        view! {
                            <button
                                type="button"
                                class=move || route_toggle_class(active())
                                aria-pressed=move || aria_pressed(active())
                                on:click=move |_| {
                                    apply_route(selector, route);
                                }
                            >
                                {route.toggle_label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <iframe
                src=move || selector.with(RouteSelector::map_url)
                title="Live Google Map"
                class="w-full h-full border-0"
                width="100%"
                height="100%"
                referrerpolicy="no-referrer-when-downgrade"
            ></iframe>

            <div class="absolute bottom-0 left-0 right-0 bg-white/90 backdrop-blur-sm p-2 text-center text-[10px] text-slate-500 border-t border-slate-200">
                "* Map shows general route direction. Use the links below for precise navigation."
            </div>
        </div>
    }
}
