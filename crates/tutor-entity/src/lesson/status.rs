//! Lesson publication status.

text_enum! {
    /// Whether a lesson accepts new schedules.
    LessonStatus {
        /// Being prepared, not bookable yet.
        Draft => "DRAFT",
        /// Open for booking.
        Open => "OPEN",
        /// No longer offered.
        Closed => "CLOSED",
    }
}

impl LessonStatus {
    /// Whether students may book this lesson.
    pub fn is_bookable(&self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_core::query::Value;

    #[test]
    fn test_text_round_trip() {
        for status in LessonStatus::ALL {
            assert_eq!(status.as_str().parse::<LessonStatus>().ok(), Some(*status));
        }
        assert_eq!(Value::from(LessonStatus::Open), Value::Text("OPEN".into()));
    }

    #[test]
    fn test_unknown_value_is_validation_error() {
        let err = "open".parse::<LessonStatus>().expect_err("case sensitive");
        assert_eq!(err.to_string(), "Unknown LessonStatus value 'open'");
        assert!(tutor_core::AppError::from(err).is_validation());
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&LessonStatus::Closed).expect("serialize");
        assert_eq!(json, "\"CLOSED\"");
        assert!(LessonStatus::Open.is_bookable());
    }
}
