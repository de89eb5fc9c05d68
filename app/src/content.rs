//! Static text of the participant instructions page.

pub const PAGE_TITLE: &str = "MEDHA'26 | Instructions to Selected Participants";

pub const PAGE_DESCRIPTION: &str = "Schedule, registration requirements, items to bring, food, \
     travel routes and certification rules for selected participants of MEDHA'26.";

pub const EVENT_BADGE: &str = "National Level Technical Symposium";

pub const REPORTING_TIME: &str = "8:30 AM";

pub const FIRST_DAY: &str = "26.02.2026";

pub const SECOND_DAY: &str = "27.02.2026";

/// A labeled time in the event schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub label: &'static str,
    pub time: &'static str,
    pub date: Option<&'static str>,
}

pub static SCHEDULE: [TimeSlot; 4] = [
    TimeSlot {
        label: "Start Date",
        time: "10:00 AM",
        date: Some(FIRST_DAY),
    },
    TimeSlot {
        label: "End Date",
        time: "10:00 AM",
        date: Some(SECOND_DAY),
    },
    TimeSlot {
        label: "Inauguration",
        time: "09:30 AM",
        date: Some(FIRST_DAY),
    },
    TimeSlot {
        label: "Valedictory",
        time: "10:00 AM",
        date: Some(SECOND_DAY),
    },
];

pub static REGISTRATION_DOCUMENTS: [&str; 2] =
    ["Original College ID Card", "Printed Project Abstract"];

pub static ABSTRACT_FIELDS: [&str; 5] = [
    "Project Title",
    "Team Members’ Names",
    "College Name",
    "Problem Statement",
    "Proposed Solution",
];

pub static ITEMS_TO_BRING: [&str; 11] = [
    "Personal laptop with charger",
    "Extension board / multi-plug (compulsory)",
    "All necessary electronic components / hardware",
    "One printed copy of the Project Abstract",
    "Soft copy of project files (backup)",
    "College ID card (original)",
    "Notebook and pen",
    "Mobile phone with charger",
    "Extra set of clothes for the next day",
    "Personal medications (if applicable)",
    "Water bottle (recommended)",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meal {
    pub name: &'static str,
    pub provided: bool,
}

/// Meals of one event day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealDay {
    pub date: &'static str,
    pub meals: &'static [Meal],
}

pub static MEAL_PLAN: [MealDay; 2] = [
    MealDay {
        date: FIRST_DAY,
        meals: &[
            Meal {
                name: "Morning (Breakfast)",
                provided: false,
            },
            Meal {
                name: "Lunch & Dinner",
                provided: true,
            },
        ],
    },
    MealDay {
        date: SECOND_DAY,
        meals: &[
            Meal {
                name: "Breakfast",
                provided: true,
            },
            Meal {
                name: "Lunch (After 2 PM)",
                provided: false,
            },
        ],
    },
];

pub const REFRESHMENTS_NOTE: &str =
    "5 Refreshments (Snacks and Coffee/Tea) will be provided during the 24-hour duration.";

pub const MEAL_ARRANGEMENTS_NOTE: &str = "📌 Participants are advised to make necessary \
     arrangements for breakfast on 26.02.2026 and lunch on 27.02.2026.";

pub static VOLUNTEER_DUTIES: [&str; 3] = [
    "Guide the team to the food venue as per schedule",
    "Assist in locating the allocated hostel room",
    "Provide basic coordination support",
];

pub const CULTURAL_SLOT: &str = "26.02.2026 • 6:00 PM - 8:30 PM";

pub static GUIDELINES: [&str; 5] = [
    "Teams must remain present throughout the 24-hour duration.",
    "Abstract verification will be done during registration.",
    "Judges’ decisions will be final and binding.",
    "Any misconduct or violation of event rules may lead to disqualification.",
    "Participants are responsible for the safety of their personal belongings.",
];

pub const FOOTER_TEXT: &str = "© 2026 Hackathon Event Committee. All rights reserved.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_spans_both_days() {
        assert_eq!(SCHEDULE.len(), 4);
        assert!(SCHEDULE.iter().all(|slot| slot.date.is_some()));
        assert_eq!(SCHEDULE[0].date, Some(FIRST_DAY));
        assert_eq!(SCHEDULE[1].date, Some(SECOND_DAY));
    }

    #[test]
    fn test_unprovided_meals_match_arrangements_note() {
        let missing: Vec<(&str, &str)> = MEAL_PLAN
            .iter()
            .flat_map(|day| {
                day.meals
                    .iter()
                    .filter(|meal| !meal.provided)
                    .map(move |meal| (day.date, meal.name))
            })
            .collect();

        assert_eq!(
            missing,
            vec![
                (FIRST_DAY, "Morning (Breakfast)"),
                (SECOND_DAY, "Lunch (After 2 PM)"),
            ]
        );
        assert!(MEAL_ARRANGEMENTS_NOTE.contains("breakfast on 26.02.2026"));
        assert!(MEAL_ARRANGEMENTS_NOTE.contains("lunch on 27.02.2026"));
    }

    #[test]
    fn test_items_include_abstract_and_id() {
        assert!(
            ITEMS_TO_BRING
                .iter()
                .any(|item| item.contains("Project Abstract"))
        );
        assert!(ITEMS_TO_BRING.iter().any(|item| item.contains("ID card")));
    }

    #[test]
    fn test_title_names_the_event() {
        assert!(PAGE_TITLE.starts_with("MEDHA'26"));
        assert!(PAGE_DESCRIPTION.contains("MEDHA'26"));
    }
}
