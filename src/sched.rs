use std::collections::{BTreeMap, HashMap};
use std::time::{Duration, Instant};

use cp_sat::builder::{BoolVar, CpModelBuilder, IntVar, IntervalVar, LinearExpr};
use cp_sat::proto::{CpSolverResponse, CpSolverStatus, SatParameters};
use itertools::Itertools;
use log::{debug, info};

use crate::callbacks::{SearchControl, SolutionHandler};
use crate::data::{
    Calendar, CourseId, Curriculum, CurriculumId, Day, Interval, LockSlot, MAX_COURSE_LEN,
    MIN_COURSE_LEN, Period,
};
use crate::error::SchedError;

/// CP decision variables for one (curriculum, day, course) tuple. The
/// interval variable ties the three integers together as end = start + duration.
#[derive(Debug, Clone, Copy)]
pub struct ModelVar {
    pub start: IntVar,
    pub end: IntVar,
    pub duration: IntVar,
    pub interval: IntervalVar,
}

type VarKey = (CurriculumId, Day, CourseId);

fn key(cur_id: &str, day: Day, course_id: &str) -> VarKey {
    (cur_id.to_string(), day, course_id.to_string())
}

/// Half-reifies `a == b` onto a fresh Boolean: the literal implies the
/// equality, never the converse.
fn reify_eq(
    model: &mut CpModelBuilder,
    a: impl Into<LinearExpr>,
    b: impl Into<LinearExpr>,
) -> BoolVar {
    let lit = model.new_bool_var();
    model.add_eq(a, b).only_enforce_if([lit]);
    lit
}

/// Half-reifies `a != b` onto a fresh Boolean.
fn reify_ne(
    model: &mut CpModelBuilder,
    a: impl Into<LinearExpr>,
    b: impl Into<LinearExpr>,
) -> BoolVar {
    let lit = model.new_bool_var();
    model.add_ne(a, b).only_enforce_if([lit]);
    lit
}

/// Creates an IntVar equal to `max(0, delta)`. The indicator picks the
/// branch; each branch pins the excess exactly, so the variable is
/// functionally determined by `delta`.
fn max_excess(model: &mut CpModelBuilder, delta: LinearExpr, cap: i64) -> IntVar {
    let excess = model.new_int_var([(0, cap)]);
    let positive = model.new_bool_var();
    model.add_eq(excess, delta.clone()).only_enforce_if([positive]);
    model
        .add_le(delta, LinearExpr::from(0))
        .only_enforce_if([!positive]);
    model
        .add_eq(excess, LinearExpr::from(0))
        .only_enforce_if([!positive]);
    excess
}

/// The course scheduler: owns the CP-SAT model, the decision variables and
/// the penalty terms for one request.
///
/// `model_vars` maps every (curriculum, day, course) tuple to its [`ModelVar`];
/// `cur_day_to_intervals` collects each day's interval variables per
/// curriculum for the no-overlap constraints; `course_to_curricula` lists,
/// per course, the curricula containing it in declaration order.
pub struct CourseSched {
    calendar: Calendar,
    curricula: Vec<Curriculum>,
    model: CpModelBuilder,
    model_vars: HashMap<VarKey, ModelVar>,
    cur_day_to_intervals: HashMap<(CurriculumId, Day), Vec<IntervalVar>>,
    course_to_curricula: BTreeMap<CourseId, Vec<CurriculumId>>,
    obj_terms: Vec<(i64, IntVar)>,
    is_optimization: bool,
}

impl CourseSched {
    pub fn new(calendar: Calendar, curricula: Vec<Curriculum>) -> Self {
        let course_to_curricula: BTreeMap<CourseId, Vec<CurriculumId>> = curricula
            .iter()
            .flat_map(|cur| {
                cur.courses()
                    .iter()
                    .map(move |c| (c.id.clone(), cur.id.clone()))
            })
            .into_group_map()
            .into_iter()
            .collect();

        let mut sched = CourseSched {
            calendar,
            curricula,
            model: CpModelBuilder::default(),
            model_vars: HashMap::new(),
            cur_day_to_intervals: HashMap::new(),
            course_to_curricula,
            obj_terms: Vec::new(),
            is_optimization: false,
        };
        sched.init_model_vars();
        sched
    }

    /// Creates the per-tuple decision variables. Must run before any
    /// constraint is added.
    fn init_model_vars(&mut self) {
        let Calendar { n_days, n_periods } = self.calendar;
        for d in 0..n_days {
            for cur in &self.curricula {
                for course in cur.courses() {
                    let start = self.model.new_int_var([(0, n_periods - MIN_COURSE_LEN)]);
                    let end = self.model.new_int_var([(0, n_periods)]);
                    let duration = self.model.new_int_var([(0, course.max_lecture_len)]);
                    let interval = self.model.new_interval_var(start, duration, end);
                    self.model_vars.insert(
                        key(&cur.id, d, &course.id),
                        ModelVar {
                            start,
                            end,
                            duration,
                            interval,
                        },
                    );
                    self.cur_day_to_intervals
                        .entry((cur.id.clone(), d))
                        .or_default()
                        .push(interval);
                }
            }
        }
        debug!(
            "created {} decision tuples over {} curricula and {} days",
            self.model_vars.len(),
            self.curricula.len(),
            n_days
        );
    }

    pub fn calendar(&self) -> Calendar {
        self.calendar
    }

    pub fn curricula(&self) -> &[Curriculum] {
        &self.curricula
    }

    pub fn course_to_curricula(&self) -> &BTreeMap<CourseId, Vec<CurriculumId>> {
        &self.course_to_curricula
    }

    pub fn is_optimization(&self) -> bool {
        self.is_optimization
    }

    pub fn var(&self, cur_id: &str, day: Day, course_id: &str) -> ModelVar {
        self.model_vars[&key(cur_id, day, course_id)]
    }

    // -- hard constraints -----------------------------------------------------

    /// Lectures of one curriculum never overlap within a day.
    pub fn add_no_overlap_constraints(&mut self) {
        for d in 0..self.calendar.n_days {
            for cur in &self.curricula {
                let bag = self.cur_day_to_intervals[&(cur.id.clone(), d)].clone();
                self.model.add_no_overlap(bag);
            }
        }
    }

    /// Each course meets exactly `n_periods` periods per week.
    pub fn add_course_len_constraints(&mut self) {
        let n_days = self.calendar.n_days;
        for cur in &self.curricula {
            for course in cur.courses() {
                let mut total = LinearExpr::from(0);
                for d in 0..n_days {
                    let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                    total = total + LinearExpr::from(mv.duration);
                }
                self.model.add_eq(total, LinearExpr::from(course.n_periods));
            }
        }
    }

    /// A day's lecture takes 0, 2, 3 or 6 consecutive periods; courses with
    /// 4 weekly periods are capped at 2. One half-reified literal per
    /// admissible length, OR-ed together.
    pub fn add_lecture_len_constraints(&mut self) {
        let n_days = self.calendar.n_days;
        for cur in &self.curricula {
            for d in 0..n_days {
                for course in cur.courses() {
                    let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                    let mut admissible = vec![
                        reify_eq(&mut self.model, mv.duration, 0),
                        reify_eq(&mut self.model, mv.duration, MIN_COURSE_LEN),
                    ];
                    if course.max_lecture_len == MAX_COURSE_LEN {
                        admissible.push(reify_eq(&mut self.model, mv.duration, 3));
                        admissible.push(reify_eq(&mut self.model, mv.duration, MAX_COURSE_LEN));
                    }
                    self.model.add_or(admissible);
                }
            }
        }
    }

    /// A course shared by several curricula happens at the same time in all
    /// of them. Per day, either every copy is absent, or every consecutive
    /// pair of copies agrees on start and end.
    pub fn add_sync_across_curricula_constraints(&mut self) {
        let n_days = self.calendar.n_days;
        for (c_id, cur_ids) in &self.course_to_curricula {
            if cur_ids.len() < 2 {
                continue;
            }
            for d in 0..n_days {
                let mut absent = Vec::with_capacity(cur_ids.len());
                for cur_id in cur_ids {
                    let mv = self.model_vars[&key(cur_id, d, c_id)];
                    absent.push(reify_eq(&mut self.model, mv.duration, 0));
                }
                let all_absent = self.model.new_bool_var();
                self.model.add_and(absent).only_enforce_if([all_absent]);

                let mut aligned = Vec::new();
                for (prev, next) in cur_ids.iter().tuple_windows() {
                    let prev_mv = self.model_vars[&key(prev, d, c_id)];
                    let next_mv = self.model_vars[&key(next, d, c_id)];
                    aligned.push(reify_eq(&mut self.model, prev_mv.start, next_mv.start));
                    aligned.push(reify_eq(&mut self.model, prev_mv.end, next_mv.end));
                }
                let all_aligned = self.model.new_bool_var();
                self.model.add_and(aligned).only_enforce_if([all_aligned]);

                self.model.add_or([all_absent, all_aligned]);
            }
        }
    }

    /// Weekday symmetry over a five-day week. Exactly one pattern holds per
    /// (curriculum, course):
    ///   * one full-length lecture on a single weekday,
    ///   * a Tue/Thu pair with equal start and nonzero equal duration,
    ///   * a Mon/Wed/Fri triplet with equal starts and durations,
    ///   * a Mon/Wed pair with Friday empty.
    pub fn add_lecture_symmetry_constraints(&mut self) {
        assert_eq!(self.calendar.n_days, 5, "weekday symmetry needs Mon..Fri");
        for (c_id, cur_ids) in &self.course_to_curricula {
            for cur_id in cur_ids {
                let days: Vec<ModelVar> = (0..5)
                    .map(|d| self.model_vars[&key(cur_id, d, c_id)])
                    .collect();
                let (mon, tue, wed, thu, fri) = (days[0], days[1], days[2], days[3], days[4]);

                let mut patterns = Vec::with_capacity(8);
                for mv in &days {
                    patterns.push(reify_eq(&mut self.model, mv.duration, MAX_COURSE_LEN));
                }

                // Tue/Thu pair
                let tue_thu_start = reify_eq(&mut self.model, tue.start, thu.start);
                let tue_thu_duration = reify_eq(&mut self.model, tue.duration, thu.duration);
                let tue_nonzero = reify_ne(&mut self.model, tue.duration, 0);
                let pair_tue_thu = self.model.new_bool_var();
                self.model
                    .add_and([tue_thu_start, tue_thu_duration, tue_nonzero])
                    .only_enforce_if([pair_tue_thu]);
                patterns.push(pair_tue_thu);

                // Mon/Wed/Fri triplet
                let mon_wed_start = reify_eq(&mut self.model, mon.start, wed.start);
                let mon_wed_duration = reify_eq(&mut self.model, mon.duration, wed.duration);
                let wed_fri_start = reify_eq(&mut self.model, wed.start, fri.start);
                let wed_fri_duration = reify_eq(&mut self.model, wed.duration, fri.duration);
                let mon_nonzero = reify_ne(&mut self.model, mon.duration, 0);
                let triplet = self.model.new_bool_var();
                self.model
                    .add_and([
                        mon_wed_start,
                        mon_wed_duration,
                        wed_fri_start,
                        wed_fri_duration,
                        mon_nonzero,
                    ])
                    .only_enforce_if([triplet]);
                patterns.push(triplet);

                // Mon/Wed pair, Friday empty
                let fri_zero = reify_eq(&mut self.model, fri.duration, 0);
                let pair_mon_wed = self.model.new_bool_var();
                self.model
                    .add_and([mon_wed_start, mon_wed_duration, fri_zero, mon_nonzero])
                    .only_enforce_if([pair_mon_wed]);
                patterns.push(pair_mon_wed);

                // the patterns exclude each other, so exactly-one is the XOR
                let mut chosen = LinearExpr::from(0);
                for lit in &patterns {
                    chosen = chosen + LinearExpr::from(*lit);
                }
                self.model.add_eq(chosen, LinearExpr::from(1));
            }
        }
    }

    /// Marks `intervals` of `day` unavailable for a course: one fixed
    /// interval per span joins the course's interval in every curriculum
    /// containing it, and the combined bag must not overlap.
    pub fn add_unavailability_constraints(
        &mut self,
        course_id: &str,
        day: Day,
        intervals: &[Interval],
    ) -> Result<(), SchedError> {
        let cur_ids = self
            .course_to_curricula
            .get(course_id)
            .ok_or_else(|| SchedError::UnknownCourse(course_id.to_string()))?;

        let mut bag: Vec<IntervalVar> = Vec::with_capacity(intervals.len() + cur_ids.len());
        for &(start, end) in intervals {
            let blocked = self.model.new_interval_var(
                LinearExpr::from(start),
                LinearExpr::from(end - start),
                LinearExpr::from(end),
            );
            bag.push(blocked);
        }
        for cur_id in cur_ids {
            bag.push(self.model_vars[&key(cur_id, day, course_id)].interval);
        }
        self.model.add_no_overlap(bag);
        Ok(())
    }

    /// Pins a course to the given slots in every curriculum containing it;
    /// days not listed carry no lecture of the course.
    pub fn add_course_lock(
        &mut self,
        course_id: &str,
        locks: &[LockSlot],
    ) -> Result<(), SchedError> {
        let cur_ids = self
            .course_to_curricula
            .get(course_id)
            .ok_or_else(|| SchedError::UnknownCourse(course_id.to_string()))?;
        let n_days = self.calendar.n_days;

        for cur_id in cur_ids {
            let mut locked = vec![false; n_days as usize];
            for slot in locks {
                let mv = self.model_vars[&key(cur_id, slot.day, course_id)];
                self.model.add_eq(mv.start, slot.start);
                self.model.add_eq(mv.duration, slot.duration);
                locked[slot.day as usize] = true;
            }
            for d in 0..n_days {
                if !locked[d as usize] {
                    let mv = self.model_vars[&key(cur_id, d, course_id)];
                    self.model.add_eq(mv.duration, 0);
                }
            }
        }
        Ok(())
    }

    // -- soft constraints -----------------------------------------------------

    /// Penalizes lectures that start before `soft_min` (at `under_cost` per
    /// period) or after `soft_max` (at `over_cost` per period).
    pub fn add_soft_start_time(
        &mut self,
        soft_min: Period,
        soft_max: Period,
        under_cost: i64,
        over_cost: i64,
    ) -> Result<(), SchedError> {
        self.check_soft_params(
            "soft start/end",
            &[soft_min, soft_max, under_cost, over_cost],
        )?;
        self.is_optimization = true;
        let Calendar { n_days, n_periods } = self.calendar;

        for d in 0..n_days {
            for cur in &self.curricula {
                for course in cur.courses() {
                    let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                    let early = max_excess(
                        &mut self.model,
                        LinearExpr::from(soft_min) - LinearExpr::from(mv.start),
                        n_periods,
                    );
                    self.obj_terms.push((under_cost, early));
                    let late = max_excess(
                        &mut self.model,
                        LinearExpr::from(mv.start) - LinearExpr::from(soft_max),
                        n_periods,
                    );
                    self.obj_terms.push((over_cost, late));
                }
            }
        }
        Ok(())
    }

    /// Penalizes days whose scheduled total is positive but not above
    /// `soft_min` (at `w_low` per missing period) and days whose span from
    /// first start to last end reaches `soft_max` (at `w_high` per period).
    pub fn add_soft_total_time(
        &mut self,
        soft_min: Period,
        soft_max: Period,
        w_low: i64,
        w_high: i64,
    ) -> Result<(), SchedError> {
        self.check_soft_params("soft total time", &[soft_min, soft_max, w_low, w_high])?;
        self.is_optimization = true;
        let Calendar { n_days, n_periods } = self.calendar;

        for d in 0..n_days {
            for cur in &self.curricula {
                let day_total = self.model.new_int_var([(0, n_periods)]);
                let first_start = self.model.new_int_var([(0, n_periods)]);
                let last_end = self.model.new_int_var([(0, n_periods)]);

                let mut total = LinearExpr::from(0);
                for course in cur.courses() {
                    let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                    total = total + LinearExpr::from(mv.duration);
                    let present = self.model.new_bool_var();
                    self.model
                        .add_ge(mv.duration, LinearExpr::from(1))
                        .only_enforce_if([present]);
                    self.model
                        .add_eq(mv.duration, LinearExpr::from(0))
                        .only_enforce_if([!present]);
                    self.model
                        .add_le(first_start, mv.start)
                        .only_enforce_if([present]);
                    self.model
                        .add_ge(last_end, mv.end)
                        .only_enforce_if([present]);
                }
                self.model.add_eq(day_total, total);

                let active = self.model.new_bool_var();
                self.model
                    .add_ge(day_total, LinearExpr::from(1))
                    .only_enforce_if([active]);
                self.model
                    .add_eq(day_total, LinearExpr::from(0))
                    .only_enforce_if([!active]);

                // an active day is either longer than soft_min or pays per missing period
                let under = self.model.new_int_var([(0, n_periods)]);
                self.model
                    .add_ge(
                        under,
                        LinearExpr::from(soft_min + 1) - LinearExpr::from(day_total),
                    )
                    .only_enforce_if([active]);
                self.model
                    .add_eq(under, LinearExpr::from(0))
                    .only_enforce_if([!active]);

                let over = self.model.new_int_var([(0, n_periods)]);
                self.model
                    .add_ge(
                        over,
                        LinearExpr::from(last_end) - LinearExpr::from(first_start)
                            - (soft_max - 1),
                    )
                    .only_enforce_if([active]);
                self.model
                    .add_eq(over, LinearExpr::from(0))
                    .only_enforce_if([!active]);

                self.obj_terms.push((w_low, under));
                self.obj_terms.push((w_high, over));
            }
        }
        Ok(())
    }

    /// Penalizes runs of three consecutive occupied periods beyond
    /// `soft_max` runs per (curriculum, day).
    pub fn add_soft_three_row(&mut self, soft_max: i64, weight: i64) -> Result<(), SchedError> {
        if soft_max < 0 || weight < 0 {
            return Err(SchedError::SchemaViolation(
                "soft three-in-a-row parameters must be non-negative".to_string(),
            ));
        }
        self.is_optimization = true;
        let Calendar { n_days, n_periods } = self.calendar;

        for d in 0..n_days {
            for cur in &self.curricula {
                // exact per-period occupancy: each lecture either covers the
                // period, ends before it or starts after it
                let mut occupancy: Vec<LinearExpr> = Vec::with_capacity(n_periods as usize);
                for p in 0..n_periods {
                    let mut covered = LinearExpr::from(0);
                    for course in cur.courses() {
                        let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                        let covers = self.model.new_bool_var();
                        self.model
                            .add_le(mv.start, LinearExpr::from(p))
                            .only_enforce_if([covers]);
                        self.model
                            .add_ge(mv.end, LinearExpr::from(p + 1))
                            .only_enforce_if([covers]);
                        let ends_before = self.model.new_bool_var();
                        self.model
                            .add_le(mv.end, LinearExpr::from(p))
                            .only_enforce_if([ends_before]);
                        let starts_after = self.model.new_bool_var();
                        self.model
                            .add_ge(mv.start, LinearExpr::from(p + 1))
                            .only_enforce_if([starts_after]);
                        self.model.add_or([covers, ends_before, starts_after]);
                        covered = covered + LinearExpr::from(covers);
                    }
                    occupancy.push(covered);
                }

                let mut runs = LinearExpr::from(0);
                for p in 0..n_periods.saturating_sub(2) {
                    let run = self.model.new_bool_var();
                    let window = occupancy[p as usize].clone()
                        + occupancy[p as usize + 1].clone()
                        + occupancy[p as usize + 2].clone();
                    self.model.add_ge(LinearExpr::from(run), window - 2);
                    runs = runs + LinearExpr::from(run);
                }
                let excess = self.model.new_int_var([(0, n_periods)]);
                self.model
                    .add_ge(LinearExpr::from(excess), runs - LinearExpr::from(soft_max));
                self.obj_terms.push((weight, excess));
            }
        }
        Ok(())
    }

    fn check_soft_params(&self, what: &str, params: &[i64]) -> Result<(), SchedError> {
        let n_periods = self.calendar.n_periods;
        if params.iter().any(|&p| p < 0 || p >= n_periods) {
            return Err(SchedError::SchemaViolation(format!(
                "{what} parameters must lie in [0, {n_periods})"
            )));
        }
        Ok(())
    }

    // -- solving --------------------------------------------------------------

    fn base_params(&self) -> SatParameters {
        let mut params = SatParameters::default();
        params.linearization_level = Some(0);
        params
    }

    fn penalty_expr(&self) -> LinearExpr {
        self.obj_terms.iter().copied().collect()
    }

    fn penalty_value(&self, response: &CpSolverResponse) -> i64 {
        self.obj_terms
            .iter()
            .map(|(coeff, var)| coeff * var.solution_value(response))
            .sum()
    }

    /// Phase one of an optimisation build: declares the minimisation
    /// objective and solves with parallel workers. Returns the best penalty
    /// found, or `None` when the model is infeasible (or timed out before
    /// any solution).
    pub fn minimize_penalty(&mut self, max_time: Option<f64>) -> Option<i64> {
        let objective = self.penalty_expr();
        self.model.minimize(objective);

        let mut params = self.base_params();
        params.num_search_workers = Some(8);
        if let Some(limit) = max_time {
            params.max_time_in_seconds = Some(limit);
        }

        info!("discovering objective bound");
        let started = Instant::now();
        let response = self.model.solve_with_parameters(&params);
        match response.status() {
            CpSolverStatus::Optimal | CpSolverStatus::Feasible => {
                let bound = response.objective_value.round() as i64;
                info!(
                    "objective bound {bound} ({:?}) in {:.2?}",
                    response.status(),
                    started.elapsed()
                );
                Some(bound)
            }
            status => {
                info!("bound discovery ended without a solution ({status:?})");
                None
            }
        }
    }

    /// Pins the accumulated penalty below `bound` as a hard constraint.
    /// Used on a freshly built model in place of the phase-one objective.
    pub fn add_penalty_bound(&mut self, bound: i64) {
        let penalty = self.penalty_expr();
        self.model.add_le(penalty, LinearExpr::from(bound));
    }

    /// Enumerates feasible schedules and streams each to `handler` until it
    /// stops the search, the model is exhausted, or the time budget lapses.
    ///
    /// The solver is driven single-threaded, one solve per solution; after
    /// every hit the found (start, duration) assignment is excluded, so
    /// successive solutions are distinct schedules.
    pub fn search_all<H: SolutionHandler>(
        &mut self,
        handler: &mut H,
        max_time: Option<f64>,
    ) -> usize {
        let started = Instant::now();
        let deadline = max_time.map(|t| started + Duration::from_secs_f64(t));
        let mut params = self.base_params();
        params.num_search_workers = Some(1);

        let mut found = 0;
        loop {
            if let Some(deadline) = deadline {
                let remaining = deadline.saturating_duration_since(Instant::now());
                if remaining.is_zero() {
                    info!("time budget elapsed after {found} solutions");
                    break;
                }
                params.max_time_in_seconds = Some(remaining.as_secs_f64());
            }

            let response = self.model.solve_with_parameters(&params);
            match response.status() {
                CpSolverStatus::Optimal | CpSolverStatus::Feasible => {
                    found += 1;
                    let objective = self.is_optimization.then(|| self.penalty_value(&response));
                    let view = SolutionView {
                        sched: &*self,
                        response: &response,
                        objective,
                    };
                    let control = handler.on_solution(&view);
                    if control == SearchControl::Stop {
                        debug!("handler stopped the search after {found} solutions");
                        break;
                    }
                    self.block_solution(&response);
                }
                CpSolverStatus::Infeasible => {
                    info!("search space exhausted after {found} solutions");
                    break;
                }
                status => {
                    info!("search ended after {found} solutions ({status:?})");
                    break;
                }
            }
        }
        info!("enumerated {found} solutions in {:.2?}", started.elapsed());
        found
    }

    /// Excludes the schedule in `response`: at least one projected variable
    /// must differ next time.
    fn block_solution(&mut self, response: &CpSolverResponse) {
        let mut pinned: Vec<(IntVar, i64)> = Vec::new();
        for d in 0..self.calendar.n_days {
            for cur in &self.curricula {
                for course in cur.courses() {
                    let mv = self.model_vars[&key(&cur.id, d, &course.id)];
                    pinned.push((mv.start, mv.start.solution_value(response)));
                    pinned.push((mv.duration, mv.duration.solution_value(response)));
                }
            }
        }
        let mut differs = Vec::with_capacity(pinned.len());
        for (var, value) in pinned {
            differs.push(reify_ne(&mut self.model, var, value));
        }
        self.model.add_or(differs);
    }
}

/// Read-back access to one concrete solution, handed to the callbacks.
pub struct SolutionView<'a> {
    sched: &'a CourseSched,
    response: &'a CpSolverResponse,
    objective: Option<i64>,
}

impl SolutionView<'_> {
    pub fn calendar(&self) -> Calendar {
        self.sched.calendar()
    }

    pub fn curricula(&self) -> &[Curriculum] {
        self.sched.curricula()
    }

    pub fn start(&self, cur_id: &str, day: Day, course_id: &str) -> i64 {
        self.sched.var(cur_id, day, course_id).start.solution_value(self.response)
    }

    pub fn end(&self, cur_id: &str, day: Day, course_id: &str) -> i64 {
        self.sched.var(cur_id, day, course_id).end.solution_value(self.response)
    }

    pub fn duration(&self, cur_id: &str, day: Day, course_id: &str) -> i64 {
        self.sched.var(cur_id, day, course_id).duration.solution_value(self.response)
    }

    /// Penalty of this solution on optimisation builds.
    pub fn objective(&self) -> Option<i64> {
        self.objective
    }
}
