#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::criteria::Criteria;

    fn candidate(date: &str, time: &str, location: &str) -> SlotCandidate {
        SlotCandidate {
            date: date.to_string(),
            time: time.to_string(),
            location: location.to_string(),
        }
    }

    #[test]
    fn test_unconstrained_criteria_match_everything() {
        let criteria = Criteria::default();

        assert!(SlotMatchService::matches(
            &candidate("2024-05-01", "14:00", "Main Hall"),
            &criteria
        ));
        assert!(SlotMatchService::matches(
            &candidate("gibberish", "??", "Unknown"),
            &criteria
        ));
    }

    #[test]
    fn test_candidate_without_schedule_info_never_matches() {
        let candidate = candidate("Unknown", "Unknown", "Main Hall");

        assert!(!SlotMatchService::matches(&candidate, &Criteria::default()));
        assert!(!SlotMatchService::matches(
            &candidate,
            &Criteria {
                desired_location: Some("main".to_string()),
                ..Criteria::default()
            }
        ));
    }

    #[test]
    fn test_date_formats_normalize_to_same_day() {
        let criteria = Criteria {
            desired_date: Some("2024-05-01".to_string()),
            ..Criteria::default()
        };

        assert!(SlotMatchService::matches(
            &candidate("05/01/2024", "Unknown", "Unknown"),
            &criteria
        ));
        assert!(SlotMatchService::matches(
            &candidate("May 1, 2024", "Unknown", "Unknown"),
            &criteria
        ));
        assert!(SlotMatchService::matches(
            &candidate("1 May 2024", "Unknown", "Unknown"),
            &criteria
        ));
    }

    #[test]
    fn test_different_date_is_rejected() {
        let criteria = Criteria {
            desired_date: Some("2024-05-01".to_string()),
            ..Criteria::default()
        };

        assert!(!SlotMatchService::matches(
            &candidate("2024-05-02", "14:00", "Main Hall"),
            &criteria
        ));
    }

    #[test]
    fn test_unparseable_dates_compare_literally() {
        let criteria = Criteria {
            desired_date: Some("next tuesday".to_string()),
            ..Criteria::default()
        };

        assert!(SlotMatchService::matches(
            &candidate("next tuesday", "Unknown", "Unknown"),
            &criteria
        ));
        assert!(!SlotMatchService::matches(
            &candidate("next wednesday", "Unknown", "Unknown"),
            &criteria
        ));
    }

    #[test]
    fn test_twelve_hour_time_matches_twenty_four_hour() {
        let criteria = Criteria {
            desired_time: Some("9:00 PM".to_string()),
            ..Criteria::default()
        };

        assert!(SlotMatchService::matches(
            &candidate("Unknown", "21:00", "Unknown"),
            &criteria
        ));
        assert!(!SlotMatchService::matches(
            &candidate("Unknown", "09:00", "Unknown"),
            &criteria
        ));
    }

    #[test]
    fn test_location_match_is_case_insensitive_substring() {
        let criteria = Criteria {
            desired_location: Some("main".to_string()),
            ..Criteria::default()
        };

        assert!(SlotMatchService::matches(
            &candidate("2024-05-01", "14:00", "Main Hall"),
            &criteria
        ));
        assert!(!SlotMatchService::matches(
            &candidate("2024-05-01", "14:00", "Annex"),
            &criteria
        ));
    }

    #[test]
    fn test_all_set_criteria_must_hold() {
        let criteria = Criteria {
            desired_date: Some("2024-05-01".to_string()),
            desired_time: Some("14:00".to_string()),
            desired_location: Some("hall".to_string()),
            ..Criteria::default()
        };

        assert!(SlotMatchService::matches(
            &candidate("May 1, 2024", "2:00 PM", "Main Hall"),
            &criteria
        ));
        // Right date and time, wrong location
        assert!(!SlotMatchService::matches(
            &candidate("May 1, 2024", "2:00 PM", "Annex"),
            &criteria
        ));
    }

    #[test]
    fn test_normalize_date_canonical_form() {
        assert_eq!(SlotMatchService::normalize_date(" 05/01/2024 "), "2024-05-01");
        assert_eq!(SlotMatchService::normalize_date("not a date"), "not a date");
    }

    #[test]
    fn test_normalize_time_canonical_form() {
        assert_eq!(SlotMatchService::normalize_time("9:00 PM"), "21:00");
        assert_eq!(SlotMatchService::normalize_time("09:15:30"), "09:15");
        assert_eq!(SlotMatchService::normalize_time("noonish"), "noonish");
    }
}
