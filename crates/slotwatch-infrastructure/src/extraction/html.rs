use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use slotwatch_domain::extraction::{
    FieldHints, PageSnapshot, SlotExtractor, DATE_HINTS, LOCATION_HINTS, SLOT_HINTS, TIME_HINTS,
};
use slotwatch_domain::shared::DomainError;
use slotwatch_domain::slot::SlotCandidate;

/// A slot hint with its selector compiled.
struct CompiledSlotHint {
    selector: Selector,
    excluded_classes: &'static [&'static str],
}

/// Field hints with every lookup selector compiled, in search order:
/// the semantic attribute first, then the conventional class names.
struct CompiledFieldHints {
    attribute: &'static str,
    lookups: Vec<Selector>,
}

impl CompiledFieldHints {
    fn compile(hints: &FieldHints) -> Result<Self, DomainError> {
        let mut lookups = vec![parse_selector(&format!("[{}]", hints.attribute))?];
        for class in hints.classes {
            lookups.push(parse_selector(&format!(".{class}"))?);
        }
        Ok(Self {
            attribute: hints.attribute,
            lookups,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector, DomainError> {
    Selector::parse(css)
        .map_err(|e| DomainError::Extraction(format!("Invalid selector '{css}': {e}")))
}

/// Heuristic slot extractor over static HTML.
///
/// Walks the ordered slot hints to locate candidate elements, then resolves
/// date/time/location per element through the field hints. Elements carrying
/// a booked/occupied/taken/reserved class are skipped, as are elements that
/// yield neither a date nor a time.
pub struct HtmlSlotExtractor {
    slot_hints: Vec<CompiledSlotHint>,
    date_hints: CompiledFieldHints,
    time_hints: CompiledFieldHints,
    location_hints: CompiledFieldHints,
}

impl HtmlSlotExtractor {
    pub fn new() -> Result<Self, DomainError> {
        let slot_hints = SLOT_HINTS
            .iter()
            .map(|hint| {
                Ok(CompiledSlotHint {
                    selector: parse_selector(hint.selector)?,
                    excluded_classes: hint.excluded_classes,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(Self {
            slot_hints,
            date_hints: CompiledFieldHints::compile(&DATE_HINTS)?,
            time_hints: CompiledFieldHints::compile(&TIME_HINTS)?,
            location_hints: CompiledFieldHints::compile(&LOCATION_HINTS)?,
        })
    }

    /// Resolve one field for a candidate element.
    ///
    /// Each lookup is scoped first to the element's descendants, then to the
    /// element itself or its closest matching ancestor; the first hit wins.
    /// The hit's trimmed text is taken, falling back to the semantic
    /// attribute when the text is empty.
    fn resolve_field(&self, element: ElementRef<'_>, hints: &CompiledFieldHints) -> Option<String> {
        for lookup in &hints.lookups {
            let hit = element
                .select(lookup)
                .next()
                .or_else(|| closest(element, lookup));

            if let Some(hit) = hit {
                let text = hit.text().collect::<String>().trim().to_string();
                if !text.is_empty() {
                    return Some(text);
                }
                if let Some(value) = hit.value().attr(hints.attribute) {
                    let value = value.trim();
                    if !value.is_empty() {
                        return Some(value.to_string());
                    }
                }
                // A hit with no usable content falls through to the next hint
            }
        }
        None
    }

    fn extract_candidate(&self, element: ElementRef<'_>) -> Option<SlotCandidate> {
        SlotCandidate::from_fields(
            self.resolve_field(element, &self.date_hints),
            self.resolve_field(element, &self.time_hints),
            self.resolve_field(element, &self.location_hints),
        )
    }
}

/// Nearest of the element itself or its ancestors matching the selector.
fn closest<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    if selector.matches(&element) {
        return Some(element);
    }
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| selector.matches(ancestor))
}

impl SlotExtractor for HtmlSlotExtractor {
    fn extract(&self, page: &PageSnapshot) -> Result<Vec<SlotCandidate>, DomainError> {
        let document = Html::parse_document(&page.html);

        let mut seen = HashSet::new();
        let mut candidates = Vec::new();

        for hint in &self.slot_hints {
            for element in document.select(&hint.selector) {
                if !seen.insert(element.id()) {
                    continue;
                }

                let excluded = element
                    .value()
                    .classes()
                    .any(|class| hint.excluded_classes.contains(&class));
                if excluded {
                    trace!(url = %page.url, "Skipping element with excluded class");
                    continue;
                }

                if let Some(candidate) = self.extract_candidate(element) {
                    candidates.push(candidate);
                }
            }
        }

        debug!(
            url = %page.url,
            count = candidates.len(),
            "Extraction pass complete"
        );

        Ok(candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(html: &str) -> Vec<SlotCandidate> {
        let extractor = HtmlSlotExtractor::new().expect("hints should compile");
        let page = PageSnapshot::new("https://exams.example.edu/schedule", html);
        extractor.extract(&page).expect("extraction should succeed")
    }

    #[test]
    fn test_extracts_slot_with_nested_fields() {
        let candidates = extract(
            r#"
            <div class="slot">
                <span class="date">2024-05-01</span>
                <span class="time">14:00</span>
                <span class="location">Main Hall</span>
            </div>
            "#,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "2024-05-01");
        assert_eq!(candidates[0].time, "14:00");
        assert_eq!(candidates[0].location, "Main Hall");
    }

    #[test]
    fn test_data_attribute_fallback_when_text_empty() {
        let candidates = extract(r#"<div class="slot"><i data-date="2024-05-01"></i></div>"#);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "2024-05-01");
        assert_eq!(candidates[0].time, "Unknown");
        assert_eq!(candidates[0].location, "Unknown");
    }

    #[test]
    fn test_skips_booked_and_occupied_elements() {
        let candidates = extract(
            r#"
            <div class="slot booked"><span class="date">2024-05-01</span></div>
            <div class="time-slot occupied"><span class="time">09:00</span></div>
            <div class="slot"><span class="date">2024-05-02</span></div>
            "#,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "2024-05-02");
    }

    #[test]
    fn test_drops_element_with_neither_date_nor_time() {
        let candidates = extract(
            r#"<div class="available-slot"><span class="location">Main Hall</span></div>"#,
        );

        assert!(candidates.is_empty());
    }

    #[test]
    fn test_field_resolved_from_closest_ancestor() {
        let candidates = extract(
            r#"
            <table><tr>
                <td data-date="2024-05-01">
                    <button onclick="slotBook(1)" data-time="10:30"></button>
                </td>
            </tr></table>
            "#,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "2024-05-01");
        assert_eq!(candidates[0].time, "10:30");
    }

    #[test]
    fn test_status_attribute_marker() {
        let candidates = extract(
            r#"
            <table><tr>
                <td data-slot-status="available">
                    <span class="slot-date">May 1, 2024</span>
                    <span class="slot-time">2:00 PM</span>
                </td>
            </tr></table>
            "#,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "May 1, 2024");
        assert_eq!(candidates[0].time, "2:00 PM");
    }

    #[test]
    fn test_element_matching_two_hints_emitted_once() {
        let candidates = extract(
            r#"
            <div class="slot available-slot">
                <span class="date">2024-05-01</span>
            </div>
            "#,
        );

        assert_eq!(candidates.len(), 1);
    }

    #[test]
    fn test_booking_affordance_links() {
        let candidates = extract(
            r#"<a href="/book?slot=42" data-date="2024-06-10" data-time="11:00"></a>"#,
        );

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].date, "2024-06-10");
        assert_eq!(candidates[0].time, "11:00");
    }

    #[test]
    fn test_unknown_markup_yields_no_candidates() {
        let candidates = extract("<html><body><p>Nothing to book here.</p></body></html>");

        assert!(candidates.is_empty());
    }
}
