use std::collections::HashSet;

use log::info;

use crate::callbacks::SolutionSerializer;
use crate::config::AppConfig;
use crate::data::{
    Course, Curriculum, Interval, Period, SchedRequest, SchedResponse,
};
use crate::error::SchedError;
use crate::sched::CourseSched;

/// Lock durations the request schema accepts. The model's granularity
/// constraints still decide feasibility.
const LOCK_DURATIONS: [i64; 4] = [2, 3, 4, 6];

/// Soft start/end window: penalize lectures starting before `soft_min` or
/// after `soft_max`.
#[derive(Debug, Clone, Copy)]
pub struct SoftStartTime {
    pub soft_min: Period,
    pub soft_max: Period,
    pub under_cost: i64,
    pub over_cost: i64,
}

/// Soft bounds on a day's scheduled total and span.
#[derive(Debug, Clone, Copy)]
pub struct SoftTotalTime {
    pub soft_min: Period,
    pub soft_max: Period,
    pub w_low: i64,
    pub w_high: i64,
}

/// Soft cap on runs of three consecutive occupied periods per day.
#[derive(Debug, Clone, Copy)]
pub struct SoftThreeRow {
    pub soft_max: i64,
    pub weight: i64,
}

/// Soft terms registered for one request.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftConstraints {
    pub start_time: Option<SoftStartTime>,
    pub total_time: Option<SoftTotalTime>,
    pub three_row: Option<SoftThreeRow>,
}

impl SoftConstraints {
    fn is_empty(&self) -> bool {
        self.start_time.is_none() && self.total_time.is_none() && self.three_row.is_none()
    }
}

/// Per-request solver tuning beyond the request envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveTuning {
    pub soft: SoftConstraints,
    /// Slack added to the discovered objective bound when enumerating
    /// near-optimal solutions.
    pub proximity_delta: i64,
    /// Cap in seconds on each solver invocation.
    pub max_time: Option<f64>,
}

/// Handles one scheduling request end to end: validate, build the model,
/// drive the solver, return the serialized solutions.
pub fn solve_request(
    config: &AppConfig,
    request: &SchedRequest,
    tuning: &SolveTuning,
) -> Result<SchedResponse, SchedError> {
    validate_request(config, request)?;
    let curricula = build_curricula(request)?;
    info!(
        "scheduling request: {} curricula, {} unavailability constraints, {} locks, n_solutions {}",
        curricula.len(),
        request.constraints.len(),
        request.course_locks.len(),
        request.n_solutions
    );

    let mut serializer = SolutionSerializer::new(request.n_solutions as usize);
    let mut sched = build_sched(config, &curricula, request, &tuning.soft)?;

    if sched.is_optimization() {
        if let Some(bound) = sched.minimize_penalty(tuning.max_time) {
            // near-optimal enumeration runs on a fresh model without the
            // objective, with the bound pinned as a hard constraint
            let mut near = build_sched(config, &curricula, request, &tuning.soft)?;
            near.add_penalty_bound(bound + tuning.proximity_delta);
            near.search_all(&mut serializer, tuning.max_time);
        }
    } else {
        sched.search_all(&mut serializer, tuning.max_time);
    }

    let result = serializer.into_result();
    info!("request finished with {} solutions", result.n_solutions);
    Ok(result)
}

/// Envelope checks that need no model: ranges, duplicates, conflicts.
fn validate_request(config: &AppConfig, request: &SchedRequest) -> Result<(), SchedError> {
    if request.n_solutions == 0 || request.n_solutions > config.max_n_solutions {
        return Err(SchedError::SchemaViolation(format!(
            "n_solutions must lie in [1, {}]",
            config.max_n_solutions
        )));
    }
    if request.curricula.is_empty() {
        return Err(SchedError::SchemaViolation(
            "curricula must not be empty".to_string(),
        ));
    }
    for cur in &request.curricula {
        if cur.courses.is_empty() {
            return Err(SchedError::SchemaViolation(format!(
                "curriculum {:?} has no courses",
                cur.curriculum_id
            )));
        }
    }

    for constraint in &request.constraints {
        if constraint.day < 0 || constraint.day >= config.n_days {
            return Err(SchedError::SchemaViolation(format!(
                "unavailability day {} outside [0, {})",
                constraint.day, config.n_days
            )));
        }
        if constraint.intervals.is_empty() {
            return Err(SchedError::SchemaViolation(format!(
                "unavailability for course {:?} lists no intervals",
                constraint.course_id
            )));
        }
        for span in &constraint.intervals {
            if span.start < 0
                || span.start >= config.n_periods
                || span.end < span.start
                || span.end > config.n_periods
            {
                return Err(SchedError::SchemaViolation(format!(
                    "interval [{}, {}) outside the {}-period day",
                    span.start, span.end, config.n_periods
                )));
            }
        }
    }

    let mut locked_courses = HashSet::new();
    for lock in &request.course_locks {
        if !locked_courses.insert(lock.course_id.as_str()) {
            return Err(SchedError::SchemaViolation(format!(
                "course {:?} appears twice in course_locks",
                lock.course_id
            )));
        }
        for slot in &lock.locks {
            if slot.day < 0 || slot.day >= config.n_days {
                return Err(SchedError::SchemaViolation(format!(
                    "lock day {} outside [0, {})",
                    slot.day, config.n_days
                )));
            }
            if slot.start < 0 || slot.start >= config.n_periods {
                return Err(SchedError::SchemaViolation(format!(
                    "lock start {} outside [0, {})",
                    slot.start, config.n_periods
                )));
            }
            if !LOCK_DURATIONS.contains(&slot.duration) {
                return Err(SchedError::SchemaViolation(format!(
                    "lock duration {} not one of {LOCK_DURATIONS:?}",
                    slot.duration
                )));
            }
        }
    }
    for constraint in &request.constraints {
        if locked_courses.contains(constraint.course_id.as_str()) {
            return Err(SchedError::LockConstraintConflict(
                constraint.course_id.clone(),
            ));
        }
    }
    Ok(())
}

/// Builds the domain objects, catching identity collisions and invalid
/// period counts.
fn build_curricula(request: &SchedRequest) -> Result<Vec<Curriculum>, SchedError> {
    let mut seen = HashSet::new();
    let mut curricula = Vec::with_capacity(request.curricula.len());
    for spec in &request.curricula {
        if !seen.insert(spec.curriculum_id.as_str()) {
            return Err(SchedError::DuplicateCurriculumId(
                spec.curriculum_id.clone(),
            ));
        }
        let courses = spec
            .courses
            .iter()
            .map(|c| Course::new(c.course_id.clone(), c.n_periods))
            .collect::<Result<Vec<_>, _>>()?;
        curricula.push(Curriculum::new(spec.curriculum_id.clone(), courses)?);
    }
    Ok(curricula)
}

/// Builds the scheduler with the full constraint stack for this request.
/// Called twice on optimisation builds: once for bound discovery, once for
/// the pinned near-optimal enumeration.
fn build_sched(
    config: &AppConfig,
    curricula: &[Curriculum],
    request: &SchedRequest,
    soft: &SoftConstraints,
) -> Result<CourseSched, SchedError> {
    let mut sched = CourseSched::new(config.calendar(), curricula.to_vec());
    sched.add_no_overlap_constraints();
    sched.add_course_len_constraints();
    sched.add_lecture_len_constraints();
    sched.add_sync_across_curricula_constraints();
    if config.n_days == 5 {
        sched.add_lecture_symmetry_constraints();
    }

    for constraint in &request.constraints {
        let intervals: Vec<Interval> = constraint
            .intervals
            .iter()
            .map(|span| (span.start, span.end))
            .collect();
        sched.add_unavailability_constraints(&constraint.course_id, constraint.day, &intervals)?;
    }
    for lock in &request.course_locks {
        sched.add_course_lock(&lock.course_id, &lock.locks)?;
    }

    if let Some(p) = soft.start_time {
        sched.add_soft_start_time(p.soft_min, p.soft_max, p.under_cost, p.over_cost)?;
    }
    if let Some(p) = soft.total_time {
        sched.add_soft_total_time(p.soft_min, p.soft_max, p.w_low, p.w_high)?;
    }
    if let Some(p) = soft.three_row {
        sched.add_soft_three_row(p.soft_max, p.weight)?;
    }
    debug_assert_eq!(sched.is_optimization(), !soft.is_empty());
    Ok(sched)
}
