#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use manabi::db::activities::Activities;
    use manabi::db::activity_items::{ActivityItems, DEFAULT_ACTIVITY_ITEMS};
    use manabi::db::settings::{SettingsSheet, DEFAULT_SETTINGS};
    use manabi::db::sheet::StoreError;
    use manabi::db::users::Users;
    use manabi::db::workbook::Workbook;
    use manabi::libs::activity::{ActivityRecord, Mood};
    use manabi::libs::settings::Settings;
    use manabi::libs::user::Role;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SheetTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SheetTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SheetTestContext { _temp_dir: temp_dir }
        }
    }

    fn record(user_id: &str, day: &str) -> ActivityRecord {
        ActivityRecord {
            user_id: user_id.to_string(),
            activity_date: NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap(),
            duration: 1800,
            score: Some(85),
            mood: Some(Mood::Happy),
            memo: Some("Two workbook pages".to_string()),
            activity_type: vec!["Math".to_string(), "Reading".to_string()],
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_init_creates_sheet_once(_ctx: &mut SheetTestContext) {
        let users = Users::new().unwrap();
        assert!(users.init().unwrap());
        assert!(!users.init().unwrap());
        users.verify().unwrap();
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_verify_reports_missing_sheet(_ctx: &mut SheetTestContext) {
        let users = Users::new().unwrap();
        match users.verify() {
            Err(StoreError::MissingSheet(name)) => assert_eq!(name, "users"),
            other => panic!("expected MissingSheet, got {:?}", other.map(|_| ())),
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_verify_reports_header_mismatch(_ctx: &mut SheetTestContext) {
        let workbook = Workbook::new().unwrap();
        // A hand-edited sheet whose header row drifted from the schema.
        std::fs::write(workbook.dir().join("users.csv"), "id,name,role\n").unwrap();

        let users = Users::new().unwrap();
        match users.verify() {
            Err(StoreError::SchemaMismatch { sheet, expected, found }) => {
                assert_eq!(sheet, "users");
                assert_eq!(expected, vec!["id", "name", "belonging", "role"]);
                assert_eq!(found, vec!["id", "name", "role"]);
            }
            other => panic!("expected SchemaMismatch, got {:?}", other.map(|_| ())),
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_append_and_fetch_round_trip(_ctx: &mut SheetTestContext) {
        let activities = Activities::new().unwrap();
        activities.init().unwrap();

        activities.append(&record("s-001", "2025-05-15")).unwrap();
        activities.append(&record("s-002", "2025-05-16")).unwrap();

        let all = activities.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].user_id, "s-001");
        assert_eq!(all[0].score, Some(85));
        assert_eq!(all[0].mood, Some(Mood::Happy));
        assert_eq!(all[0].memo.as_deref(), Some("Two workbook pages"));
        assert_eq!(all[0].activity_type, vec!["Math", "Reading"]);

        let mine = activities.fetch_by_user("s-002").unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].activity_date, NaiveDate::from_ymd_opt(2025, 5, 16).unwrap());
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_append_without_sheet_fails(_ctx: &mut SheetTestContext) {
        let activities = Activities::new().unwrap();
        match activities.append(&record("s-001", "2025-05-15")) {
            Err(StoreError::MissingSheet(name)) => assert_eq!(name, "activity_log"),
            other => panic!("expected MissingSheet, got {:?}", other.map(|_| ())),
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_optional_cells_round_trip_as_none(_ctx: &mut SheetTestContext) {
        let activities = Activities::new().unwrap();
        activities.init().unwrap();

        let bare = ActivityRecord {
            score: None,
            mood: None,
            memo: None,
            activity_type: vec![],
            ..record("s-001", "2025-05-15")
        };
        activities.append(&bare).unwrap();

        let all = activities.fetch_all().unwrap();
        assert_eq!(all[0].score, None);
        assert_eq!(all[0].mood, None);
        assert_eq!(all[0].memo, None);
        assert!(all[0].activity_type.is_empty());
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_fetch_rejects_corrupt_numeric_cell(_ctx: &mut SheetTestContext) {
        let activities = Activities::new().unwrap();
        activities.init().unwrap();
        activities
            .sheet()
            .append_row(&[
                "2025-05-15 18:00:00".to_string(),
                "s-001".to_string(),
                "2025-05-15".to_string(),
                "eighty".to_string(),
                "1800".to_string(),
                String::new(),
                String::new(),
                String::new(),
            ])
            .unwrap();

        match activities.fetch_all() {
            Err(StoreError::BadRow { sheet, row, reason }) => {
                assert_eq!(sheet, "activity_log");
                assert_eq!(row, 2);
                assert!(reason.contains("eighty"), "reason {:?}", reason);
            }
            other => panic!("expected BadRow, got {:?}", other.map(|_| ())),
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_unknown_mood_cell_read_as_none(_ctx: &mut SheetTestContext) {
        let activities = Activities::new().unwrap();
        activities.init().unwrap();
        activities
            .sheet()
            .append_row(&[
                "2025-05-15 18:00:00".to_string(),
                "s-001".to_string(),
                "2025-05-15".to_string(),
                "80".to_string(),
                "1800".to_string(),
                "ecstatic".to_string(),
                String::new(),
                String::new(),
            ])
            .unwrap();

        let all = activities.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].mood, None);
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_users_fetch_skips_blank_rows_and_rejects_bad_roles(_ctx: &mut SheetTestContext) {
        let users = Users::new().unwrap();
        users.init().unwrap();
        let sheet = users.sheet();
        sheet
            .append_row(&[
                "s-001".to_string(),
                "Aoi".to_string(),
                "Grade 3".to_string(),
                "student".to_string(),
            ])
            .unwrap();
        sheet.append_row(&[String::new(), String::new(), String::new(), String::new()]).unwrap();
        sheet
            .append_row(&[
                "t-001".to_string(),
                "Tanaka".to_string(),
                "Staff".to_string(),
                "teacher".to_string(),
            ])
            .unwrap();

        let all = users.fetch_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].role, Role::Student);
        assert_eq!(all[1].role, Role::Teacher);

        let found = users.fetch_by_id("s-001").unwrap().unwrap();
        assert_eq!(found.name, "Aoi");
        assert!(users.fetch_by_id("s-999").unwrap().is_none());

        sheet
            .append_row(&[
                "x-001".to_string(),
                "Ghost".to_string(),
                String::new(),
                "wizard".to_string(),
            ])
            .unwrap();
        match users.fetch_all() {
            Err(StoreError::BadRow { row, .. }) => assert_eq!(row, 5),
            other => panic!("expected BadRow, got {:?}", other.map(|_| ())),
        }
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_settings_sheet_seeds_parseable_defaults(_ctx: &mut SheetTestContext) {
        let sheet = SettingsSheet::new().unwrap();
        assert!(sheet.init().unwrap());

        let rows = sheet.fetch().unwrap();
        assert_eq!(rows.len(), DEFAULT_SETTINGS.len());

        // The seeded sheet must parse to exactly the built-in defaults.
        let settings = Settings::parse(&rows).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test_context(SheetTestContext)]
    #[test]
    fn test_activity_items_seeded_and_fetched(_ctx: &mut SheetTestContext) {
        let items = ActivityItems::new().unwrap();
        assert!(items.init().unwrap());

        let fetched = items.fetch().unwrap();
        assert_eq!(fetched.len(), DEFAULT_ACTIVITY_ITEMS.len());
        assert_eq!(fetched[0].name, "Language arts");
        assert!(fetched.iter().all(|item| item.color.starts_with('#')));
    }
}
