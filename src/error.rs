use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::{CourseId, CurriculumId};

/// Everything that can go wrong while validating a request or building the
/// model. All variants are raised eagerly, before the solver runs; timeouts
/// and infeasible models are not errors and surface as smaller result sets.
#[derive(Debug, Clone, Error)]
pub enum SchedError {
    #[error("course weekly periods must be 4 or 6, got {0}")]
    InvalidPeriods(i64),

    #[error("duplicate course id {course_id:?} in curriculum {curriculum_id:?}")]
    DuplicateCourseId {
        course_id: CourseId,
        curriculum_id: CurriculumId,
    },

    #[error("duplicate curriculum id {0:?}")]
    DuplicateCurriculumId(CurriculumId),

    #[error("course {0:?} appears in both course_locks and constraints")]
    LockConstraintConflict(CourseId),

    #[error("unknown course id {0:?}")]
    UnknownCourse(CourseId),

    #[error("{0}")]
    SchemaViolation(String),
}

/// JSON body returned with every 400.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for SchedError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            message: self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_ids() {
        let err = SchedError::DuplicateCourseId {
            course_id: "x".to_string(),
            curriculum_id: "cur".to_string(),
        };
        assert!(err.to_string().contains("\"x\""));
        assert!(err.to_string().contains("\"cur\""));

        let err = SchedError::UnknownCourse("ghost".to_string());
        assert!(err.to_string().contains("\"ghost\""));
    }

    #[test]
    fn every_variant_maps_to_bad_request() {
        let errs = [
            SchedError::InvalidPeriods(5),
            SchedError::DuplicateCurriculumId("c".to_string()),
            SchedError::LockConstraintConflict("x".to_string()),
            SchedError::SchemaViolation("n_solutions out of range".to_string()),
        ];
        for err in errs {
            assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        }
    }
}
