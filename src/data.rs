use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::SchedError;

// Type aliases for clarity
pub type CourseId = String;
pub type CurriculumId = String;
pub type Day = i64;
pub type Period = i64;

/// Admissible lecture lengths in periods (one period is a 30-minute block).
pub const COURSE_GRANULARITY: [i64; 3] = [2, 3, 6];
/// Shortest lecture the model may schedule.
pub const MIN_COURSE_LEN: i64 = 2;
/// Longest lecture the model may schedule.
pub const MAX_COURSE_LEN: i64 = 6;

/// A course with its weekly period requirement.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: CourseId,
    pub n_periods: i64,
    pub max_lecture_len: i64,
}

impl Course {
    /// A course meets either 4 or 6 periods a week; anything else is rejected.
    pub fn new(id: impl Into<CourseId>, n_periods: i64) -> Result<Self, SchedError> {
        let max_lecture_len = match n_periods {
            6 => MAX_COURSE_LEN,
            4 => MIN_COURSE_LEN,
            other => return Err(SchedError::InvalidPeriods(other)),
        };
        Ok(Course {
            id: id.into(),
            n_periods,
            max_lecture_len,
        })
    }
}

/// A named bag of courses scheduled as one consistent weekly timetable.
/// Courses keep their declaration order.
#[derive(Debug, Clone)]
pub struct Curriculum {
    pub id: CurriculumId,
    courses: Vec<Course>,
    index: HashMap<CourseId, usize>,
}

impl Curriculum {
    pub fn new(id: impl Into<CurriculumId>, courses: Vec<Course>) -> Result<Self, SchedError> {
        let id = id.into();
        let mut index = HashMap::with_capacity(courses.len());
        for (i, course) in courses.iter().enumerate() {
            if index.insert(course.id.clone(), i).is_some() {
                return Err(SchedError::DuplicateCourseId {
                    course_id: course.id.clone(),
                    curriculum_id: id,
                });
            }
        }
        Ok(Curriculum { id, courses, index })
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        self.index.get(id).map(|&i| &self.courses[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}

/// Calendar dimensions of the scheduling week.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    pub n_days: i64,
    pub n_periods: i64,
}

/// A half-open unavailable span of periods within one day.
pub type Interval = (Period, Period);

// -- request envelope ---------------------------------------------------------

/// The complete input for one scheduling request.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedRequest {
    pub n_solutions: u32,
    pub curricula: Vec<CurriculumSpec>,
    #[serde(default)]
    pub constraints: Vec<UnavailabilitySpec>,
    #[serde(default)]
    pub course_locks: Vec<CourseLockSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CurriculumSpec {
    pub curriculum_id: CurriculumId,
    pub courses: Vec<CourseSpec>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseSpec {
    pub course_id: CourseId,
    pub n_periods: i64,
}

/// Marks spans of one day unavailable for one course.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UnavailabilitySpec {
    pub course_id: CourseId,
    pub day: Day,
    pub intervals: Vec<PeriodSpan>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct PeriodSpan {
    pub start: Period,
    pub end: Period,
}

/// Pins a course to fixed slots; days not listed carry no lecture.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseLockSpec {
    pub course_id: CourseId,
    pub locks: Vec<LockSlot>,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LockSlot {
    pub day: Day,
    pub start: Period,
    pub duration: i64,
}

// -- response envelope --------------------------------------------------------

/// The accumulated output of one scheduling request.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct SchedResponse {
    pub n_solutions: u32,
    pub solutions: Vec<SolvedSolution>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SolvedSolution {
    pub solution_id: String,
    pub curricula: Vec<SolvedCurriculum>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SolvedCurriculum {
    pub curriculum_id: CurriculumId,
    pub courses: Vec<SolvedCourse>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct SolvedCourse {
    pub course_id: CourseId,
    pub schedule: Vec<DaySchedule>,
}

/// One lecture: `duration` consecutive periods starting at `start` on `day`.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Day,
    pub start: Period,
    pub duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_rejects_bad_period_count() {
        assert!(Course::new("x", 4).is_ok());
        assert!(Course::new("x", 6).is_ok());
        assert!(matches!(
            Course::new("x", 5),
            Err(SchedError::InvalidPeriods(5))
        ));
        assert!(matches!(
            Course::new("x", 0),
            Err(SchedError::InvalidPeriods(0))
        ));
    }

    #[test]
    fn course_derives_max_lecture_len() {
        assert_eq!(Course::new("x", 6).unwrap().max_lecture_len, 6);
        assert_eq!(Course::new("x", 4).unwrap().max_lecture_len, 2);
    }

    #[test]
    fn curriculum_rejects_duplicate_course_ids() {
        let courses = vec![
            Course::new("a", 6).unwrap(),
            Course::new("b", 4).unwrap(),
            Course::new("a", 4).unwrap(),
        ];
        assert!(matches!(
            Curriculum::new("cur", courses),
            Err(SchedError::DuplicateCourseId { .. })
        ));
    }

    #[test]
    fn curriculum_preserves_declaration_order() {
        let courses = vec![
            Course::new("b", 6).unwrap(),
            Course::new("a", 4).unwrap(),
            Course::new("c", 6).unwrap(),
        ];
        let cur = Curriculum::new("cur", courses).unwrap();
        let ids: Vec<_> = cur.courses().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert!(cur.contains("a"));
        assert!(!cur.contains("z"));
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = SchedResponse {
            n_solutions: 1,
            solutions: vec![SolvedSolution {
                solution_id: "0".to_string(),
                curricula: vec![SolvedCurriculum {
                    curriculum_id: "cur".to_string(),
                    courses: vec![SolvedCourse {
                        course_id: "x".to_string(),
                        schedule: vec![
                            DaySchedule { day: 1, start: 4, duration: 2 },
                            DaySchedule { day: 3, start: 4, duration: 2 },
                        ],
                    }],
                }],
            }],
        };
        let text = serde_json::to_string(&response).unwrap();
        let parsed: SchedResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, response);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), text);
    }
}
