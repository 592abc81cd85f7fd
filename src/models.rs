use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StrideCalcError;

/// Workout types recognised by the package dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "SWM")]
    Swimming,
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    SportsWalking,
}

impl WorkoutKind {
    /// All workout kinds in dispatch table order
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Three-letter code used by sensor packages
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Name shown as the training type in summaries
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "Swimming",
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
        }
    }

    /// Positional sensor fields expected by the workout constructor
    pub fn parameter_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Swimming => &["action", "duration", "weight", "pool_length", "pool_laps"],
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub fn parameter_count(&self) -> usize {
        self.parameter_names().len()
    }

    /// Look up a workout kind by its package code (exact match)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.code() == code)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = StrideCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| StrideCalcError::UnknownWorkoutType {
            code: s.to_string(),
        })
    }
}

/// Language of the rendered summary line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLocale {
    #[default]
    Russian,
    English,
}

impl FromStr for MessageLocale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "russian" => Ok(MessageLocale::Russian),
            "en" | "english" => Ok(MessageLocale::English),
            _ => Err(format!("Invalid locale: {}", s)),
        }
    }
}

/// Calculated summary of a single workout
///
/// Produced by [`crate::training::Training::summary`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Display name of the workout variant
    pub training_type: String,

    /// Duration in hours
    pub duration: f64,

    /// Distance in kilometers
    pub distance: f64,

    /// Average speed in km/h
    pub speed: f64,

    /// Calories burned (kcal)
    pub calories: f64,
}

impl WorkoutRecord {
    /// Render the summary line with the default (Russian) template
    pub fn render(&self) -> String {
        self.render_with(MessageLocale::default())
    }

    pub fn render_with(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::Russian => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
                 Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLocale::English => format!(
                "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; \
                 Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl fmt::Display for WorkoutRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> WorkoutRecord {
        WorkoutRecord {
            training_type: "Running".to_string(),
            duration: 1.0,
            distance: 9.75,
            speed: 9.75,
            calories: 699.75,
        }
    }

    #[test]
    fn test_code_lookup() {
        assert_eq!(WorkoutKind::from_code("RUN"), Some(WorkoutKind::Running));
        assert_eq!(WorkoutKind::from_code("WLK"), Some(WorkoutKind::SportsWalking));
        assert_eq!(WorkoutKind::from_code("SWM"), Some(WorkoutKind::Swimming));
        assert_eq!(WorkoutKind::from_code("run"), None);
        assert!("XYZ".parse::<WorkoutKind>().is_err());
    }

    #[test]
    fn test_parameter_counts() {
        assert_eq!(WorkoutKind::Running.parameter_count(), 3);
        assert_eq!(WorkoutKind::SportsWalking.parameter_count(), 4);
        assert_eq!(WorkoutKind::Swimming.parameter_count(), 5);
    }

    #[test]
    fn test_render_russian_template() {
        assert_eq!(
            sample_record().render(),
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 699.750."
        );
    }

    #[test]
    fn test_render_english_template() {
        let line = sample_record().render_with(MessageLocale::English);
        assert!(line.starts_with("Training type: Running; Duration: 1.000 h;"));
        assert!(line.ends_with("Calories burned: 699.750."));
    }

    #[test]
    fn test_render_is_idempotent() {
        let record = sample_record();
        assert_eq!(record.render(), record.render());
        assert_eq!(record.to_string(), record.render());
    }

    #[test]
    fn test_kind_serializes_as_code() {
        let json = serde_json::to_string(&WorkoutKind::SportsWalking).unwrap();
        assert_eq!(json, "\"WLK\"");
    }
}
