#[cfg(test)]
mod tests {
    use manabi::libs::activity::ActivityItem;
    use manabi::libs::settings::{SettingRow, Settings, SettingsError};

    fn rows(pairs: &[(&str, &str)]) -> Vec<SettingRow> {
        pairs.iter().map(|(item, value)| SettingRow::new(*item, *value)).collect()
    }

    #[test]
    fn test_parse_empty_rows_yields_defaults() {
        let settings = Settings::parse(&[]).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.show_score);
        assert_eq!(settings.score_min, 0);
        assert_eq!(settings.score_max, 100);
        assert!(!settings.show_activity);
    }

    #[test]
    fn test_parse_overlays_rows_onto_defaults() {
        let settings = Settings::parse(&rows(&[
            ("show_score", "FALSE"),
            ("score_min", "10"),
            ("score_max", "50"),
            ("show_mood", "FALSE"),
        ]))
        .unwrap();

        assert!(!settings.show_score);
        assert_eq!(settings.score_min, 10);
        assert_eq!(settings.score_max, 50);
        assert!(!settings.show_mood);
        // Untouched keys keep their defaults.
        assert!(settings.show_memo);
        assert!(settings.show_study_time);
    }

    #[test]
    fn test_parse_accepts_sheet_boolean_spellings() {
        for value in ["TRUE", "true", "True"] {
            let settings = Settings::parse(&rows(&[("show_activity", value)])).unwrap();
            assert!(settings.show_activity, "value {:?}", value);
        }
        for value in ["FALSE", "false"] {
            let settings = Settings::parse(&rows(&[("show_mood", value)])).unwrap();
            assert!(!settings.show_mood, "value {:?}", value);
        }
    }

    #[test]
    fn test_parse_rejects_non_boolean_value() {
        let err = Settings::parse(&rows(&[("show_score", "yes")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::ExpectedBool { key: "show_score", value: "yes".to_string() }
        );
    }

    #[test]
    fn test_parse_rejects_non_numeric_value() {
        let err = Settings::parse(&rows(&[("score_max", "hundred")])).unwrap_err();
        assert_eq!(
            err,
            SettingsError::ExpectedNumber { key: "score_max", value: "hundred".to_string() }
        );
    }

    #[test]
    fn test_parse_rejects_inverted_score_bounds() {
        let err = Settings::parse(&rows(&[("score_min", "80"), ("score_max", "20")])).unwrap_err();
        assert_eq!(err, SettingsError::ScoreBoundsInverted { min: 80, max: 20 });
    }

    #[test]
    fn test_parse_allows_equal_score_bounds() {
        let settings = Settings::parse(&rows(&[("score_min", "50"), ("score_max", "50")])).unwrap();
        assert_eq!(settings.score_min, settings.score_max);
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = Settings::parse(&rows(&[("show_badges", "TRUE")])).unwrap_err();
        assert_eq!(err, SettingsError::UnknownKey("show_badges".to_string()));
    }

    #[test]
    fn test_show_second_forced_off_without_study_time() {
        let settings = Settings::parse(&rows(&[
            ("show_study_time", "FALSE"),
            ("show_second", "TRUE"),
        ]))
        .unwrap();
        assert!(!settings.show_study_time);
        assert!(!settings.show_second);
    }

    #[test]
    fn test_activity_items_require_unique_names() {
        let settings = Settings::parse(&rows(&[("show_activity", "TRUE")])).unwrap();
        let err = settings
            .with_activity_items(vec![
                ActivityItem { name: "Math".to_string(), color: "#fff".to_string() },
                ActivityItem { name: "Math".to_string(), color: "#000".to_string() },
            ])
            .unwrap_err();
        assert_eq!(err, SettingsError::DuplicateActivityItem("Math".to_string()));
    }

    #[test]
    fn test_activity_items_cleared_when_activity_disabled() {
        let settings = Settings::parse(&rows(&[("show_activity", "FALSE")]))
            .unwrap()
            .with_activity_items(vec![ActivityItem {
                name: "Math".to_string(),
                color: "#fff".to_string(),
            }])
            .unwrap();
        assert!(settings.activity_items.is_empty());
    }

    #[test]
    fn test_activity_items_kept_when_activity_enabled() {
        let settings = Settings::parse(&rows(&[("show_activity", "TRUE")]))
            .unwrap()
            .with_activity_items(vec![
                ActivityItem { name: "Math".to_string(), color: "#fff".to_string() },
                ActivityItem { name: "Reading".to_string(), color: "#000".to_string() },
            ])
            .unwrap();
        assert_eq!(settings.activity_items.len(), 2);
    }
}
