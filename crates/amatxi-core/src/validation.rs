//! Input checks for the settings forms.
//!
//! The engine accepts whatever it is given; these checks belong to the
//! input-collecting layer, which calls them before dispatching an action.

use chrono::{DateTime, Utc};

use crate::error::ValidationError;
use crate::model::{SettingsUpdate, UserSettings};

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::invalid(field, "must be greater than 0"))
    }
}

fn not_in_future(date: DateTime<Utc>, now: DateTime<Utc>) -> Result<(), ValidationError> {
    if date > now {
        let err = ValidationError::invalid("lastCigaretteDate", "cannot be in the future");
        Err(err)
    } else {
        Ok(())
    }
}

/// Validate first-run settings. Reports the first failing field.
pub fn validate_setup(settings: &UserSettings, now: DateTime<Utc>) -> Result<(), ValidationError> {
    let date = settings
        .last_cigarette_date
        .ok_or_else(|| ValidationError::Missing("lastCigaretteDate".into()))?;
    not_in_future(date, now)?;
    positive("cigarettesPerDay", settings.cigarettes_per_day)?;
    positive("packPrice", settings.pack_price)?;
    positive("packSize", settings.pack_size)?;
    if settings.main_motivation.trim().is_empty() {
        return Err(ValidationError::Missing("mainMotivation".into()));
    }
    Ok(())
}

/// Validate the fields present in a partial settings edit.
pub fn validate_settings(
    update: &SettingsUpdate,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if let Some(date) = update.last_cigarette_date {
        not_in_future(date, now)?;
    }
    if let Some(v) = update.cigarettes_per_day {
        positive("cigarettesPerDay", v)?;
    }
    if let Some(v) = update.pack_price {
        positive("packPrice", v)?;
    }
    if let Some(v) = update.pack_size {
        positive("packSize", v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_settings(now: DateTime<Utc>) -> UserSettings {
        UserSettings {
            last_cigarette_date: Some(now - Duration::hours(1)),
            main_motivation: "My health".into(),
            ..UserSettings::default()
        }
    }

    #[test]
    fn accepts_complete_setup() {
        let now = Utc::now();
        assert_eq!(validate_setup(&valid_settings(now), now), Ok(()));
    }

    #[test]
    fn setup_requires_date_and_motivation() {
        let now = Utc::now();
        let mut settings = valid_settings(now);
        settings.last_cigarette_date = None;
        assert_eq!(
            validate_setup(&settings, now),
            Err(ValidationError::Missing("lastCigaretteDate".into()))
        );

        let mut settings = valid_settings(now);
        settings.main_motivation = "  ".into();
        assert_eq!(
            validate_setup(&settings, now),
            Err(ValidationError::Missing("mainMotivation".into()))
        );
    }

    #[test]
    fn rejects_future_date() {
        let now = Utc::now();
        let mut settings = valid_settings(now);
        settings.last_cigarette_date = Some(now + Duration::minutes(5));
        let err = validate_setup(&settings, now).unwrap_err();
        assert!(err.to_string().contains("lastCigaretteDate"));
    }

    #[test]
    fn rejects_non_positive_constants() {
        let now = Utc::now();
        let zero_per_day = SettingsUpdate {
            cigarettes_per_day: Some(0.0),
            ..SettingsUpdate::default()
        };
        let negative_price = SettingsUpdate {
            pack_price: Some(-1.0),
            ..SettingsUpdate::default()
        };
        let nan_size = SettingsUpdate {
            pack_size: Some(f64::NAN),
            ..SettingsUpdate::default()
        };
        for (field, update) in [
            ("cigarettesPerDay", zero_per_day),
            ("packPrice", negative_price),
            ("packSize", nan_size),
        ] {
            let err = validate_settings(&update, now).unwrap_err();
            assert_eq!(
                err,
                ValidationError::invalid(field, "must be greater than 0")
            );
        }
    }

    #[test]
    fn absent_fields_are_not_checked() {
        let update = SettingsUpdate::default();
        assert_eq!(validate_settings(&update, Utc::now()), Ok(()));
    }
}
