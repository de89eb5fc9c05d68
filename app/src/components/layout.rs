//! Reusable building blocks of the instructions page.

use super::icon::{Icon, IconKind};
use crate::components_impl::section_class;
use crate::content::TimeSlot;
use leptos::prelude::*;

/// Titled card with an icon badge.
#[component]
pub fn Section(
    title: &'static str,
    icon: IconKind,
    #[prop(optional)] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=section_class(extra_class)>
            <div class="p-6 md:p-8">
                <div class="flex items-center gap-3 mb-6">
                    <div class="p-2.5 bg-indigo-50 text-indigo-600 rounded-xl">
                        <Icon kind=icon class_name="w-6 h-6"/>
                    </div>
                    <h2 class="text-xl font-bold text-slate-900">{title}</h2>
                </div>
                <div class="text-slate-600 leading-relaxed">{children()}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ListItem(children: Children) -> impl IntoView {
    view! {
        <li class="flex items-start gap-3 mb-3 last:mb-0">
            <div class="mt-1.5 min-w-1.5 h-1.5 rounded-full bg-indigo-500"/>
            <span>{children()}</span>
        </li>
    }
}

/// Label over a time, with the date underneath when known.
#[component]
pub fn TimeBlock(entry: &'static TimeSlot) -> impl IntoView {
    view! {
        <div class="flex flex-col p-4 bg-slate-50 rounded-xl border border-slate-100">
            <span class="text-xs font-semibold uppercase tracking-wider text-slate-500 mb-1">
                {entry.label}
            </span>
            <div class="flex flex-col">
                <span class="font-mono text-lg font-medium text-slate-900">{entry.time}</span>
                {entry.date.map(|date| view! { <span class="text-sm text-slate-500">{date}</span> })}
            </div>
        </div>
    }
}

#[component]
pub fn Logo() -> impl IntoView {
    view! {
        <div class="flex items-baseline tracking-tighter select-none">
            <span class="text-4xl md:text-6xl font-bold text-slate-800">"MEDH"</span>
            <div class="relative mx-0.5">
                <span class="text-4xl md:text-6xl font-bold text-transparent bg-clip-text bg-gradient-to-tr from-red-600 to-amber-500">
                    "A"
                </span>
            </div>
            <span class="text-4xl md:text-6xl font-bold text-red-600">"'26"</span>
        </div>
    }
}
