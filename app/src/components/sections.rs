//! Read-only content blocks of the instructions page, in page order.

use super::icon::{Icon, IconKind};
use super::layout::{ListItem, Logo, Section, TimeBlock};
use super::route_map::RouteMap;
use crate::components_impl::{
    REVEAL_HEADER_CLASS, REVEAL_NOTICE_CLASS, meal_row_class, meal_status_text, split_columns,
};
use crate::content::*;
use crate::route_selector::RouteSelection;
use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
    let header_class = format!("{REVEAL_HEADER_CLASS} text-center space-y-6 mb-12");
    view! {
        <header class=header_class>
            <div class="flex justify-center mb-2">
                <Logo/>
            </div>
            <div class="inline-flex items-center justify-center px-4 py-1.5 rounded-full bg-indigo-100 text-indigo-700 text-sm font-medium">
                {EVENT_BADGE}
            </div>
            <h1 class="text-2xl md:text-3xl font-medium text-slate-600 tracking-tight">
                "Instructions to Selected Participants"
            </h1>
            <p class="text-lg text-slate-500 max-w-2xl mx-auto">
                "Please read the following guidelines carefully before attending the event to ensure a smooth registration and participation experience."
            </p>
        </header>
    }
}

#[component]
pub fn ImportantNotice() -> impl IntoView {
    let notice_class = format!(
        "{REVEAL_NOTICE_CLASS} bg-amber-50 border-l-4 border-amber-500 p-6 rounded-r-xl shadow-sm flex gap-4 items-start"
    );
    view! {
        <div class=notice_class>
            <Icon kind=IconKind::AlertTriangle class_name="w-6 h-6 text-amber-600 shrink-0 mt-0.5"/>
            <div>
                <h3 class="font-bold text-amber-900 text-lg mb-1">"Important Notice"</h3>
                <p class="text-amber-800">
                    "All registered participants must report at the venue on time. Registration will be confirmed "
                    <strong>"only after verification"</strong>
                    " at the registration desk."
                </p>
            </div>
        </div>
    }
}

#[component]
pub fn ScheduleSection() -> impl IntoView {
    view! {
        <Section title="Event Schedule" icon=IconKind::Calendar>
            <div class="space-y-4">
                <div class="flex items-center gap-2 text-slate-900 font-medium mb-4">
                    <Icon kind=IconKind::Clock class_name="w-[18px] h-[18px] text-slate-400"/>
                    <span>"24-Hour Duration"</span>
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                    {SCHEDULE.iter().map(|slot| view! { <TimeBlock entry=slot/> }).collect_view()}
                </div>

                <div class="mt-6 p-4 bg-indigo-50 rounded-xl flex gap-3 items-center text-indigo-900">
                    <Icon kind=IconKind::MapPin class_name="w-5 h-5 shrink-0"/>
                    <p class="font-medium">
                        "Participants must be present at the venue before "
                        <span class="font-mono font-bold">{REPORTING_TIME}</span>
                        " on " {FIRST_DAY} "."
                    </p>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn RegistrationSection() -> impl IntoView {
    view! {
        <Section title="Registration & ID" icon=IconKind::IdCard>
            <div class="space-y-4">
                <p>
                    "Verification is mandatory for entry. Please ensure you have the following ready at the registration desk:"
                </p>
                <ul class="bg-white border border-slate-100 rounded-xl divide-y divide-slate-100">
                    {REGISTRATION_DOCUMENTS
                        .iter()
                        .map(|document| {
                            view! {
                                <li class="p-4 flex gap-3 items-center">
                                    <Icon kind=IconKind::CheckCircle class_name="w-5 h-5 text-green-500 shrink-0"/>
                                    <span class="font-medium text-slate-900">{*document}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <p class="text-sm text-slate-500 italic mt-2">
                    "* Team members must bring their College ID Card for verification."
                </p>
            </div>
        </Section>
    }
}

#[component]
pub fn AbstractSection() -> impl IntoView {
    view! {
        <Section title="Project Abstract (Mandatory)" icon=IconKind::FileText extra_class="border-l-4 border-l-indigo-500">
            <div class="space-y-4">
                <p class="font-medium text-slate-900">
                    "Each team must bring one printed (hard) copy of their Project Abstract. This will be verified during registration."
                </p>
                <div class="bg-slate-50 p-5 rounded-xl border border-slate-100">
                    <p class="text-sm text-slate-500 uppercase tracking-wider font-semibold mb-3">
                        "The abstract must clearly mention:"
                    </p>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-2">
                        {ABSTRACT_FIELDS
                            .iter()
                            .map(|field| {
                                view! {
                                    <div class="flex items-center gap-2">
                                        <div class="w-1.5 h-1.5 rounded-full bg-slate-400"/>
                                        {*field}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <p class="text-rose-600 text-sm flex items-center gap-2">
                    <Icon kind=IconKind::AlertTriangle class_name="w-4 h-4"/>
                    "Teams failing to submit the hard copy may not be permitted for evaluation. Ensure it is neatly printed."
                </p>
            </div>
        </Section>
    }
}

#[component]
pub fn ItemsSection() -> impl IntoView {
    let (left, right) = split_columns(&ITEMS_TO_BRING);
    let column = |items: &'static [&'static str]| {
        items
            .iter()
            .map(|item| view! { <ListItem>{*item}</ListItem> })
            .collect_view()
    };

    view! {
        <Section title="Items to be Brought" icon=IconKind::CheckSquare>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-x-8 gap-y-2">
                <ul class="space-y-3">{column(left)}</ul>
                <ul class="space-y-3 mt-3 md:mt-0">{column(right)}</ul>
            </div>
        </Section>
    }
}

#[component]
fn MealDayCard(day: &'static MealDay) -> impl IntoView {
    view! {
        <div class="p-4 space-y-3">
            <h3 class="font-bold text-slate-900 flex items-center gap-2">
                <Icon kind=IconKind::Calendar class_name="w-4 h-4 text-indigo-500"/>
                {day.date}
            </h3>
            <div class="space-y-2">
                {day
                    .meals
                    .iter()
                    .map(|meal| {
                        let status_icon = if meal.provided {
                            IconKind::CheckCircle
                        } else {
                            IconKind::XCircle
                        };
                        view! {
                            <div class=meal_row_class(meal.provided)>
                                <span>{meal.name}</span>
                                <span class="font-bold flex items-center gap-1">
                                    <Icon kind=status_icon class_name="w-3.5 h-3.5"/>
                                    {meal_status_text(meal.provided)}
                                </span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FoodSection() -> impl IntoView {
    view! {
        <Section title="Food & Refreshments" icon=IconKind::Utensils>
            <div class="space-y-6">
                <div class="bg-white border border-slate-200 rounded-xl overflow-hidden">
                    <div class="grid grid-cols-1 sm:grid-cols-2 divide-y sm:divide-y-0 sm:divide-x divide-slate-200">
                        {MEAL_PLAN.iter().map(|day| view! { <MealDayCard day/> }).collect_view()}
                    </div>
                </div>

                <div class="flex items-start gap-3 p-4 bg-slate-50 rounded-xl">
                    <div class="p-2 bg-white rounded-lg shadow-sm text-indigo-600">
                        <Icon kind=IconKind::Utensils class_name="w-5 h-5"/>
                    </div>
                    <div>
                        <p class="font-medium text-slate-900">"Refreshments"</p>
                        <p class="text-sm text-slate-600">{REFRESHMENTS_NOTE}</p>
                    </div>
                </div>

                <p class="text-sm text-slate-500 italic">{MEAL_ARRANGEMENTS_NOTE}</p>
            </div>
        </Section>
    }
}

#[component]
pub fn VolunteerSection() -> impl IntoView {
    view! {
        <Section title="Team Support & Volunteers" icon=IconKind::Users>
            <div class="flex flex-col md:flex-row gap-6 items-center">
                <div class="flex-1 space-y-4">
                    <p>"One volunteer will be allocated to each team to provide guidance and support."</p>
                    <ul class="space-y-2">
                        {VOLUNTEER_DUTIES
                            .iter()
                            .map(|duty| {
                                view! {
                                    <li class="flex gap-2 items-start text-sm text-slate-700">
                                        <Icon kind=IconKind::CheckCircle class_name="w-4 h-4 mt-0.5 text-indigo-500 shrink-0"/>
                                        <span>{*duty}</span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <p class="text-sm text-slate-500 bg-slate-50 p-3 rounded-lg border border-slate-100">
                        "Teams are advised to coordinate with their assigned volunteer for any venue-related assistance."
                    </p>
                </div>
            </div>
        </Section>
    }
}

#[component]
pub fn CulturalSection() -> impl IntoView {
    view! {
        <Section
            title="Cultural Program"
            icon=IconKind::Music
            extra_class="bg-gradient-to-r from-purple-50 to-white border-purple-100"
        >
            <div class="space-y-4">
                <div class="flex items-center justify-between flex-wrap gap-4">
                    <div>
                        <h3 class="font-bold text-purple-900 text-lg">"Refreshing Culturals"</h3>
                        <p class="text-purple-700">"Organized by the College Cultural Club"</p>
                    </div>
                    <div class="px-4 py-2 bg-white rounded-lg shadow-sm border border-purple-100 text-purple-800 font-mono text-sm">
                        {CULTURAL_SLOT}
                    </div>
                </div>

                <div class="bg-white/60 p-4 rounded-xl border border-purple-100">
                    <p class="font-medium text-purple-900 mb-2 flex items-center gap-2">
                        <Icon kind=IconKind::Mic class_name="w-[18px] h-[18px]"/>
                        "Participant Involvement"
                    </p>
                    <p class="text-slate-600 text-sm mb-3">
                        "Interested participants may join the club for Singing, Dancing, Instrumental performances, etc."
                    </p>
                    <div class="flex gap-2 items-start text-xs text-purple-800 bg-purple-50 p-2 rounded">
                        <Icon kind=IconKind::AlertTriangle class_name="w-3.5 h-3.5 mt-0.5 shrink-0"/>
                        <span>
                            "Must confirm participation with the organizing team/volunteer "
                            <strong>"before"</strong>
                            " the start of the event. Last-minute entries may not be accommodated."
                        </span>
                    </div>
                </div>
            </div>
        </Section>
    }
}

#[component]
fn RouteLinkCard(route: RouteSelection) -> impl IntoView {
    view! {
        <a
            href=route.navigation_url()
            target="_blank"
            rel="noopener noreferrer"
            class="flex items-center gap-3 p-4 bg-slate-50 hover:bg-indigo-50 border border-slate-200 hover:border-indigo-200 rounded-xl transition-colors group"
        >
            <div class="p-2 bg-white rounded-lg shadow-sm text-slate-400 group-hover:text-indigo-500 transition-colors">
                <Icon kind=IconKind::MapPin class_name="w-5 h-5"/>
            </div>
            <div class="flex-1">
                <span class="block text-xs font-semibold uppercase text-slate-400 group-hover:text-indigo-400">
                    {route.caption()}
                </span>
                <span class="font-medium text-slate-900 group-hover:text-indigo-900">
                    {route.link_title()}
                </span>
            </div>
            <Icon kind=IconKind::ExternalLink class_name="w-4 h-4 text-slate-300 group-hover:text-indigo-400"/>
        </a>
    }
}

#[component]
pub fn RouteSection() -> impl IntoView {
    view! {
        <Section title="Route Details" icon=IconKind::Navigation>
            <p class="mb-4 text-slate-600">
                "Participants traveling from different locations may use the following Google Maps routes:"
            </p>

            <RouteMap/>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {RouteSelection::ALL
                    .into_iter()
                    .map(|route| view! { <RouteLinkCard route/> })
                    .collect_view()}
            </div>
            <div class="mt-4 flex gap-2 items-start text-sm text-slate-500">
                <Icon kind=IconKind::Clock class_name="w-4 h-4 mt-0.5 shrink-0"/>
                <p>"Start early to ensure arrival before 8:30 AM. Check traffic conditions in advance."</p>
            </div>
        </Section>
    }
}

#[component]
pub fn GuidelinesSection() -> impl IntoView {
    view! {
        <Section title="Participation Guidelines" icon=IconKind::ClipboardList>
            <ul class="space-y-3">
                {GUIDELINES.iter().map(|rule| view! { <ListItem>{*rule}</ListItem> }).collect_view()}
            </ul>
        </Section>
    }
}

#[component]
pub fn DressCodeSection() -> impl IntoView {
    view! {
        <Section title="Dress Code" icon=IconKind::Shirt>
            <p>
                "Participants may wear attire of their choice. "
                <span class="font-medium text-slate-900">"Comfortable clothing is recommended"</span>
                " considering the 24-hour duration of the event."
            </p>
        </Section>
    }
}

#[component]
pub fn CertificationSection() -> impl IntoView {
    view! {
        <Section
            title="Certification"
            icon=IconKind::Award
            extra_class="bg-gradient-to-br from-indigo-50 to-white border-indigo-100"
        >
            <div class="flex gap-4 items-start">
                <div class="flex-1">
                    <p class="text-indigo-900 font-medium text-lg mb-2">"Eligibility for Certificates"</p>
                    <p class="text-indigo-800/80">
                        "Certificates will be issued "
                        <strong>"only"</strong>
                        " to participants who are physically present throughout the hackathon and valedictory session."
                    </p>
                </div>
                <Icon kind=IconKind::Award class_name="w-16 h-16 text-indigo-300 hidden sm:block" stroke_width="1"/>
            </div>
        </Section>
    }
}

#[component]
pub fn PageFooter() -> impl IntoView {
    view! {
        <footer class="text-center text-slate-400 text-sm py-8">
            <p>{FOOTER_TEXT}</p>
        </footer>
    }
}
