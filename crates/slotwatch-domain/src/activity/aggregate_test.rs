#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_append_keeps_newest_first() {
        let mut log = ActivityLog::new();

        log.append(ActivityLogEntry::info("first"));
        log.append(ActivityLogEntry::success("second"));
        log.append(ActivityLogEntry::error("third"));

        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["third", "second", "first"]);
    }

    #[test]
    fn test_capacity_never_exceeded_after_many_appends() {
        let mut log = ActivityLog::new();

        for i in 0..1000 {
            log.append(ActivityLogEntry::info(format!("entry {i}")));
        }

        assert_eq!(log.len(), ACTIVITY_LOG_CAPACITY);
        // Newest entry survives, oldest were evicted
        assert_eq!(log.entries().next().unwrap().message, "entry 999");
        assert_eq!(
            log.entries().last().unwrap().message,
            format!("entry {}", 1000 - ACTIVITY_LOG_CAPACITY)
        );
    }

    #[test]
    fn test_from_entries_round_trip() {
        let mut log = ActivityLog::new();
        log.append(ActivityLogEntry::info("older"));
        log.append(ActivityLogEntry::info("newer"));

        let restored = ActivityLog::from_entries(log.entries().cloned().collect::<Vec<_>>());

        let messages: Vec<&str> = restored.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["newer", "older"]);
    }

    #[test]
    fn test_severity_string_round_trip() {
        for severity in [
            ActivitySeverity::Info,
            ActivitySeverity::Success,
            ActivitySeverity::Error,
        ] {
            let parsed: ActivitySeverity = severity.as_str().parse().unwrap();
            assert_eq!(parsed, severity);
        }
        assert!("fatal".parse::<ActivitySeverity>().is_err());
    }
}
