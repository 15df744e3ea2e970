//! Itinerary aggregation and section editing
//!
//! Expense totals over day plans, and the edit operations behind the
//! itinerary builder. Edits never mutate their input: each returns a new
//! collection and leaves the caller's copy untouched.

use tracing::debug;

use crate::error::{GlobeError, GlobeResult};
use crate::models::{DayPlan, ItemId, ItineraryItem, Money, Section, SectionField, SectionId};

/// Sum of the item expenses of one day, saturating at the largest amount
pub fn day_total(plan: &DayPlan) -> Money {
    plan.items.iter().map(|item| item.expense).sum()
}

/// Sum of the day totals across the whole itinerary, saturating like `day_total`
pub fn trip_total(plans: &[DayPlan]) -> Money {
    plans.iter().map(day_total).sum()
}

/// Per-day breakdown used by the itinerary view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub day: u32,
    pub activities: usize,
    pub total: Money,
}

pub fn summarize(plans: &[DayPlan]) -> Vec<DaySummary> {
    plans
        .iter()
        .map(|plan| DaySummary {
            day: plan.day,
            activities: plan.items.len(),
            total: day_total(plan),
        })
        .collect()
}

// === Sections ===

/// The three blank sections a new itinerary draft starts with
pub fn default_sections() -> Vec<Section> {
    (1..=3)
        .fold(Vec::new(), |sections, _| add_section(&sections, SectionId::new()))
}

/// Append a section titled "Section N" where N is the current count plus one
///
/// Existing sections keep their titles; numbering follows the count, not the
/// highest number ever issued, so deleting a section frees its number.
pub fn add_section(sections: &[Section], id: SectionId) -> Vec<Section> {
    let title = format!("Section {}", sections.len() + 1);
    debug!(%id, %title, "adding itinerary section");

    let mut next = sections.to_vec();
    next.push(Section::new(id, title));
    next
}

/// Drop the section with `id`; an unknown id returns an identical list
pub fn remove_section(sections: &[Section], id: SectionId) -> Vec<Section> {
    let next: Vec<Section> = sections.iter().filter(|s| s.id != id).cloned().collect();
    if next.len() == sections.len() {
        debug!(%id, "remove_section: no such section");
    }
    next
}

/// Replace one field of the section with `id`; an unknown id is a no-op
pub fn update_section_field(
    sections: &[Section],
    id: SectionId,
    field: SectionField,
    value: impl Into<String>,
) -> Vec<Section> {
    let value = value.into();
    sections
        .iter()
        .map(|section| {
            let mut section = section.clone();
            if section.id == id {
                *section.field_mut(field) = value.clone();
            }
            section
        })
        .collect()
}

/// Find a section by its title, ignoring case and a trailing colon
pub fn find_section<'a>(sections: &'a [Section], title: &str) -> Option<&'a Section> {
    let wanted = normalize_title(title);
    sections.iter().find(|s| normalize_title(&s.title) == wanted)
}

fn normalize_title(title: &str) -> String {
    title.trim().trim_end_matches(':').trim().to_lowercase()
}

/// Sum of the section budgets
///
/// Blank budgets count as zero. Anything else that is not an amount is
/// reported, naming the section, rather than being treated as zero.
pub fn sections_budget_total(sections: &[Section]) -> GlobeResult<Money> {
    sections
        .iter()
        .filter(|section| !section.budget.trim().is_empty())
        .try_fold(Money::zero(), |total, section| {
            let budget = Money::parse(&section.budget).map_err(|e| {
                GlobeError::Validation(format!("Budget of '{}': {}", section.title, e))
            })?;
            total.checked_add(budget).ok_or_else(|| {
                GlobeError::Validation(format!(
                    "Budget of '{}' pushes the planned total past the largest supported amount",
                    section.title
                ))
            })
        })
}

// === Day plans ===

/// Append an empty day after the highest existing day ordinal
pub fn add_day(plans: &[DayPlan]) -> Vec<DayPlan> {
    let day = plans.iter().map(|p| p.day).max().unwrap_or(0) + 1;
    let mut next = plans.to_vec();
    next.push(DayPlan::new(day));
    next
}

/// Append `item` to the end of `day`; an unknown day is a no-op
pub fn add_item(plans: &[DayPlan], day: u32, item: ItineraryItem) -> Vec<DayPlan> {
    let mut next = plans.to_vec();
    match next.iter_mut().find(|p| p.day == day) {
        Some(plan) => plan.items.push(item),
        None => debug!(day, "add_item: no such day"),
    }
    next
}

/// Remove the item with `id` from whichever day owns it
pub fn remove_item(plans: &[DayPlan], id: ItemId) -> Vec<DayPlan> {
    plans
        .iter()
        .map(|plan| DayPlan {
            day: plan.day,
            items: plan.items.iter().filter(|i| i.id != id).cloned().collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(activity: &str, units: i64) -> ItineraryItem {
        ItineraryItem::new(activity, Money::from_units(units))
    }

    fn paris() -> Vec<DayPlan> {
        vec![
            DayPlan::with_items(
                1,
                vec![
                    item("Arrival and hotel check-in", 150),
                    item("Eiffel Tower visit", 30),
                    item("Dinner at local restaurant", 80),
                ],
            ),
            DayPlan::with_items(
                2,
                vec![
                    item("Louvre Museum tour", 20),
                    item("Seine River cruise", 45),
                    item("Shopping at Champs-Elysees", 200),
                    item("Evening show at Moulin Rouge", 120),
                ],
            ),
        ]
    }

    fn three_sections() -> Vec<Section> {
        let sections = add_section(&[], SectionId::fixture(1));
        let sections = add_section(&sections, SectionId::fixture(2));
        add_section(&sections, SectionId::fixture(3))
    }

    #[test]
    fn test_paris_totals() {
        let plans = paris();
        assert_eq!(day_total(&plans[0]), Money::from_units(260));
        assert_eq!(day_total(&plans[1]), Money::from_units(385));
        assert_eq!(trip_total(&plans), Money::from_units(645));
    }

    #[test]
    fn test_empty_totals() {
        assert_eq!(day_total(&DayPlan::new(1)), Money::zero());
        assert_eq!(trip_total(&[]), Money::zero());
    }

    #[test]
    fn test_summarize() {
        let summary = summarize(&paris());
        assert_eq!(
            summary[1],
            DaySummary {
                day: 2,
                activities: 4,
                total: Money::from_units(385)
            }
        );
    }

    #[test]
    fn test_add_section_numbers_by_count() {
        let sections = three_sections();
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Section 1", "Section 2", "Section 3"]);

        let four = add_section(&sections, SectionId::fixture(4));
        assert_eq!(four.len(), 4);
        assert_eq!(four[3].title, "Section 4");
        assert_eq!(&four[..3], &sections[..]);
    }

    #[test]
    fn test_add_after_remove_reuses_count_based_number() {
        let sections = remove_section(&three_sections(), SectionId::fixture(2));
        let sections = add_section(&sections, SectionId::fixture(9));

        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Section 1", "Section 3", "Section 3"]);
        assert_eq!(sections[2].id, SectionId::fixture(9));
    }

    #[test]
    fn test_remove_section_keeps_order_and_identity() {
        let sections = three_sections();
        let remaining = remove_section(&sections, SectionId::fixture(2));
        let ids: Vec<SectionId> = remaining.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![SectionId::fixture(1), SectionId::fixture(3)]);
        assert_eq!(sections.len(), 3);
    }

    #[test]
    fn test_remove_unknown_section_is_noop() {
        let sections = three_sections();
        assert_eq!(remove_section(&sections, SectionId::fixture(42)), sections);
    }

    #[test]
    fn test_update_section_field_touches_one_field() {
        let sections = three_sections();
        let updated = update_section_field(&sections, SectionId::fixture(2), SectionField::Budget, "450");

        assert_eq!(updated[1].budget, "450");
        assert_eq!(updated[1].title, sections[1].title);
        assert_eq!(updated[1].description, sections[1].description);
        assert_eq!(updated[0], sections[0]);
        assert_eq!(updated[2], sections[2]);
        assert!(sections[1].budget.is_empty());
    }

    #[test]
    fn test_update_unknown_section_is_noop() {
        let sections = three_sections();
        let updated = update_section_field(&sections, SectionId::fixture(7), SectionField::Title, "Hotel");
        assert_eq!(updated, sections);
    }

    #[test]
    fn test_default_sections() {
        let sections = default_sections();
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[2].title, "Section 3");
        assert_ne!(sections[0].id, sections[1].id);
    }

    #[test]
    fn test_find_section_ignores_case_and_colon() {
        let sections = three_sections();
        assert_eq!(find_section(&sections, "section 2:").map(|s| s.id), Some(SectionId::fixture(2)));
        assert!(find_section(&sections, "Section 8").is_none());
    }

    #[test]
    fn test_sections_budget_total() {
        let sections = three_sections();
        let sections = update_section_field(&sections, SectionId::fixture(1), SectionField::Budget, "120.50");
        let sections = update_section_field(&sections, SectionId::fixture(3), SectionField::Budget, "80");
        assert_eq!(sections_budget_total(&sections).unwrap(), Money::from_cents(20050));
    }

    #[test]
    fn test_sections_budget_total_reports_invalid_entries() {
        let sections = update_section_field(&three_sections(), SectionId::fixture(2), SectionField::Budget, "lots");
        let err = sections_budget_total(&sections).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Section 2"));
    }

    #[test]
    fn test_sections_budget_total_reports_overflow() {
        let sections = three_sections();
        let sections = update_section_field(&sections, SectionId::fixture(1), SectionField::Budget, "92233720368547758");
        let sections = update_section_field(&sections, SectionId::fixture(2), SectionField::Budget, "92233720368547758");
        let err = sections_budget_total(&sections).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Section 2"));
    }

    #[test]
    fn test_totals_saturate_on_huge_expenses() {
        let huge = Money::from_cents(i64::MAX - 1);
        let plans = vec![
            DayPlan::with_items(1, vec![item("Private jet", 0), ItineraryItem::new("Yacht", huge)]),
            DayPlan::with_items(2, vec![ItineraryItem::new("Island", huge)]),
        ];
        assert_eq!(day_total(&plans[0]), huge);
        assert_eq!(trip_total(&plans), Money::from_cents(i64::MAX));
    }

    #[test]
    fn test_add_day_uses_next_ordinal() {
        let plans = add_day(&paris());
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[2].day, 3);
        assert!(plans[2].items.is_empty());
        assert_eq!(add_day(&[])[0].day, 1);
    }

    #[test]
    fn test_add_and_remove_items() {
        let plans = paris();
        let extra = item("Montmartre walk", 0);
        let extra_id = extra.id;

        let with_extra = add_item(&plans, 1, extra);
        assert_eq!(with_extra[0].items.last().map(|i| i.id), Some(extra_id));
        assert_eq!(trip_total(&with_extra), Money::from_units(645));

        let removed = remove_item(&with_extra, extra_id);
        assert_eq!(removed, plans);

        assert_eq!(add_item(&plans, 9, item("Nowhere", 10)), plans);
    }
}
