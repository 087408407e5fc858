//! Recording a study session.
//!
//! The form is settings-driven: only fields the deployment enables are
//! prompted for, the same rule that decides which columns the dashboard
//! shows. Whatever the student enters still goes through the validator
//! before anything touches the store — the prompts are convenience, not
//! the gate.

use crate::commands::load_settings;
use crate::db::activities::Activities;
use crate::db::sheet::StoreError;
use crate::db::users::Users;
use crate::libs::activity::{ActivityRequest, MOOD_OPTIONS};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::validation::validate;
use crate::{msg_bail_anyhow, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};

#[derive(Debug, Args)]
pub struct LogArgs {
    /// Study date (YYYY-MM-DD); today when omitted
    #[arg(long)]
    date: Option<String>,
    /// Minutes spent; prompted for when study time is recorded
    #[arg(long)]
    minutes: Option<i64>,
    /// Extra seconds spent
    #[arg(long)]
    seconds: Option<i64>,
    /// Score for the session
    #[arg(long)]
    score: Option<i64>,
    /// Mood: happy, normal, tired or hard
    #[arg(long)]
    mood: Option<String>,
    /// Free-text memo
    #[arg(long)]
    memo: Option<String>,
    /// Activity item names; repeatable
    #[arg(long = "activity")]
    activity: Vec<String>,
    /// Submit as this account instead of the configured one
    #[arg(long)]
    user: Option<String>,
}

pub fn cmd(log_args: LogArgs) -> Result<()> {
    let config = Config::read()?;
    let user_id = match log_args.user.or(config.user_id) {
        Some(id) => id,
        None => msg_bail_anyhow!(Message::NoUserConfigured),
    };

    let user = match Users::new()?.fetch_by_id(&user_id)? {
        Some(user) => user,
        None => msg_bail_anyhow!(Message::UserNotFound(user_id)),
    };

    let settings = load_settings()?;
    let theme = ColorfulTheme::default();

    let activity_date = match log_args.date {
        Some(date) => date,
        None => Input::with_theme(&theme)
            .with_prompt(Message::PromptActivityDate.to_string())
            .default(Local::now().date_naive().format("%Y-%m-%d").to_string())
            .interact_text()?,
    };

    let duration = if settings.show_study_time {
        let minutes = match log_args.minutes {
            Some(minutes) => minutes,
            None => Input::with_theme(&theme)
                .with_prompt(Message::PromptDurationMinutes.to_string())
                .interact_text()?,
        };
        let seconds = if settings.show_second {
            match log_args.seconds {
                Some(seconds) => seconds,
                None => Input::with_theme(&theme)
                    .with_prompt(Message::PromptDurationSeconds.to_string())
                    .default(0)
                    .interact_text()?,
            }
        } else {
            log_args.seconds.unwrap_or(0)
        };
        minutes * 60 + seconds
    } else {
        if log_args.minutes.is_some() || log_args.seconds.is_some() {
            msg_warning!(Message::StudyTimeNotRecorded);
        }
        0
    };

    let score = if settings.show_score {
        match log_args.score {
            Some(score) => Some(score),
            None => Some(
                Input::with_theme(&theme)
                    .with_prompt(Message::PromptScore(settings.score_min, settings.score_max).to_string())
                    .interact_text()?,
            ),
        }
    } else {
        None
    };

    let mood = if settings.show_mood {
        match log_args.mood {
            Some(mood) => Some(mood),
            None => {
                let mut options: Vec<String> =
                    MOOD_OPTIONS.iter().map(|o| format!("{} {}", o.emoji, o.label)).collect();
                options.push("(skip)".to_string());
                let picked = Select::with_theme(&theme)
                    .with_prompt(Message::PromptMood.to_string())
                    .items(&options)
                    .default(0)
                    .interact()?;
                MOOD_OPTIONS.get(picked).map(|o| o.value.as_str().to_string())
            }
        }
    } else {
        None
    };

    let memo = if settings.show_memo {
        match log_args.memo {
            Some(memo) => Some(memo),
            None => {
                let text: String = Input::with_theme(&theme)
                    .with_prompt(Message::PromptMemo.to_string())
                    .allow_empty(true)
                    .interact_text()?;
                Some(text).filter(|t| !t.is_empty())
            }
        }
    } else {
        None
    };

    let activity_type = if settings.show_activity && !settings.activity_items.is_empty() {
        if log_args.activity.is_empty() {
            let names: Vec<&str> = settings.activity_items.iter().map(|i| i.name.as_str()).collect();
            let picked = MultiSelect::with_theme(&theme)
                .with_prompt(Message::PromptActivityTypes.to_string())
                .items(&names)
                .interact()?;
            picked.into_iter().map(|i| names[i].to_string()).collect()
        } else {
            log_args.activity
        }
    } else {
        Vec::new()
    };

    let request = ActivityRequest {
        user_id: user.id,
        activity_date,
        duration,
        score,
        mood,
        memo,
        activity_type,
    };

    let record = match validate(&request, &settings) {
        Ok(record) => record,
        Err(e) => msg_bail_anyhow!(Message::ActivityRejected(e.to_string())),
    };

    match Activities::new()?.append(&record) {
        Ok(()) => {}
        Err(StoreError::LockTimeout) => msg_bail_anyhow!(Message::LockTimeout),
        Err(e) => msg_bail_anyhow!(Message::ActivitySaveFailed(e.to_string())),
    }

    msg_success!(Message::ActivityLogged(record.activity_date.format("%Y-%m-%d").to_string()));
    Ok(())
}
