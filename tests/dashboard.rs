#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use manabi::db::activities::Activities;
    use manabi::db::activity_items::ActivityItems;
    use manabi::db::settings::SettingsSheet;
    use manabi::db::users::Users;
    use manabi::libs::activity::{ActivityRecord, Mood};
    use manabi::libs::dashboard;
    use manabi::libs::settings::{SettingRow, Settings};
    use manabi::libs::user::{Role, User};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct DashboardTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for DashboardTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            DashboardTestContext { _temp_dir: temp_dir }
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    /// Seeds every sheet and registers one student, mirroring what a fresh
    /// `manabi init` plus a teacher editing the users sheet produces.
    fn seed_workbook() -> User {
        let users = Users::new().unwrap();
        users.init().unwrap();
        users
            .sheet()
            .append_row(&[
                "s-001".to_string(),
                "Aoi".to_string(),
                "Grade 3".to_string(),
                "student".to_string(),
            ])
            .unwrap();

        Activities::new().unwrap().init().unwrap();
        SettingsSheet::new().unwrap().init().unwrap();
        ActivityItems::new().unwrap().init().unwrap();

        users.fetch_by_id("s-001").unwrap().unwrap()
    }

    fn log(day: &str, score: i64, duration: i64) {
        let activities = Activities::new().unwrap();
        activities
            .append(&ActivityRecord {
                user_id: "s-001".to_string(),
                activity_date: date(day),
                duration,
                score: Some(score),
                mood: Some(Mood::Happy),
                memo: None,
                activity_type: vec![],
            })
            .unwrap();
    }

    fn load_settings() -> Settings {
        let rows: Vec<SettingRow> = SettingsSheet::new().unwrap().fetch().unwrap();
        let items = ActivityItems::new().unwrap().fetch().unwrap();
        Settings::parse(&rows).unwrap().with_activity_items(items).unwrap()
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_dashboard_over_a_fresh_workbook_is_empty(_ctx: &mut DashboardTestContext) {
        let user = seed_workbook();
        let settings = load_settings();
        let activities = Activities::new().unwrap().fetch_by_user("s-001").unwrap();

        let data = dashboard::assemble(user, activities, &settings, date("2025-05-15"));
        assert!(data.activities.is_empty());
        assert!(data.stats.is_none());
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_dashboard_end_to_end(_ctx: &mut DashboardTestContext) {
        let user = seed_workbook();
        log("2025-05-10", 70, 600);
        log("2025-05-14", 90, 1200);
        log("2025-05-15", 80, 900);

        let settings = load_settings();
        let activities = Activities::new().unwrap().fetch_by_user("s-001").unwrap();
        let data = dashboard::assemble(user, activities, &settings, date("2025-05-15"));

        assert_eq!(data.user.name, "Aoi");

        // Presentation order is newest first.
        let dates: Vec<NaiveDate> = data.activities.iter().map(|r| r.activity_date).collect();
        assert_eq!(dates, vec![date("2025-05-15"), date("2025-05-14"), date("2025-05-10")]);

        let stats = data.stats.unwrap();
        assert_eq!(stats.total_sessions, 3);
        assert_eq!(stats.best_score, Some(90));
        assert_eq!(stats.average_score, Some(80));
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.total_duration, 2700);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_dashboard_only_sees_the_requested_student(_ctx: &mut DashboardTestContext) {
        let user = seed_workbook();
        log("2025-05-15", 80, 900);

        let activities = Activities::new().unwrap();
        activities
            .append(&ActivityRecord {
                user_id: "s-002".to_string(),
                activity_date: date("2025-05-15"),
                duration: 600,
                score: Some(100),
                mood: None,
                memo: None,
                activity_type: vec![],
            })
            .unwrap();

        let settings = load_settings();
        let mine = activities.fetch_by_user("s-001").unwrap();
        let data = dashboard::assemble(user, mine, &settings, date("2025-05-15"));

        let stats = data.stats.unwrap();
        assert_eq!(stats.total_sessions, 1);
        assert_eq!(stats.best_score, Some(80));
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_sheet_edits_flow_through_to_settings(_ctx: &mut DashboardTestContext) {
        seed_workbook();

        // A teacher turning scores off in the sheet.
        let sheet = SettingsSheet::new().unwrap();
        sheet
            .sheet()
            .append_row(&["show_score".to_string(), "FALSE".to_string(), String::new()])
            .unwrap();

        // Later rows win, as in a hand-edited sheet read top to bottom.
        let settings = load_settings();
        assert!(!settings.show_score);
    }

    #[test_context(DashboardTestContext)]
    #[test]
    fn test_registered_roles_visible_to_the_summary(_ctx: &mut DashboardTestContext) {
        let users = Users::new().unwrap();
        users.init().unwrap();
        users
            .sheet()
            .append_row(&[
                "t-001".to_string(),
                "Tanaka".to_string(),
                "Staff".to_string(),
                "teacher".to_string(),
            ])
            .unwrap();
        users
            .sheet()
            .append_row(&[
                "s-001".to_string(),
                "Aoi".to_string(),
                "Grade 3".to_string(),
                "student".to_string(),
            ])
            .unwrap();

        let students: Vec<User> = users
            .fetch_all()
            .unwrap()
            .into_iter()
            .filter(|u| u.role == Role::Student)
            .collect();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, "s-001");
    }
}
