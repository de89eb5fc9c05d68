use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

pub mod icon;
pub mod layout;
pub mod route_map;
pub mod sections;

use sections::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Page not found.">
                <Route path=StaticSegment("") view=InstructionsPage/>
            </Routes>
        </Router>
    }
}

/// The single page: content blocks stacked around the route map.
#[component]
fn InstructionsPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-50 py-12 px-4 sm:px-6 lg:px-8 font-sans">
            <div class="max-w-4xl mx-auto space-y-8">
                <PageHeader/>
                <ImportantNotice/>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <ScheduleSection/>
                    <RegistrationSection/>
                </div>

                <AbstractSection/>
                <ItemsSection/>
                <FoodSection/>
                <VolunteerSection/>
                <CulturalSection/>
                <RouteSection/>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                    <GuidelinesSection/>
                    <DressCodeSection/>
                </div>

                <CertificationSection/>
                <PageFooter/>
            </div>
        </div>
    }
}
