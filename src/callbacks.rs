use crate::data::{DaySchedule, SchedResponse, SolvedCourse, SolvedCurriculum, SolvedSolution};
use crate::sched::SolutionView;

/// Returned by a handler after each solution to keep or stop the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchControl {
    Continue,
    Stop,
}

/// Receives every feasible schedule the driver finds, in discovery order.
pub trait SolutionHandler {
    fn on_solution(&mut self, sol: &SolutionView<'_>) -> SearchControl;
}

/// Bookkeeping shared by the concrete callbacks: how many solutions were
/// asked for and how many have been consumed.
#[derive(Debug, Clone, Copy)]
struct CallbackState {
    n_solutions: usize,
    solution_count: usize,
}

impl CallbackState {
    fn new(n_solutions: usize) -> Self {
        CallbackState {
            n_solutions,
            solution_count: 0,
        }
    }

    fn wants_more(&self) -> bool {
        self.solution_count < self.n_solutions
    }
}

/// Renders solutions as a day-by-day, curriculum-by-curriculum period table.
pub struct SolutionPrinter {
    state: CallbackState,
    out: String,
}

impl SolutionPrinter {
    pub fn new(n_solutions: usize) -> Self {
        SolutionPrinter {
            state: CallbackState::new(n_solutions),
            out: String::new(),
        }
    }

    pub fn rendered(&self) -> &str {
        &self.out
    }

    pub fn solution_count(&self) -> usize {
        self.state.solution_count
    }
}

impl SolutionHandler for SolutionPrinter {
    fn on_solution(&mut self, sol: &SolutionView<'_>) -> SearchControl {
        if !self.state.wants_more() {
            return SearchControl::Stop;
        }
        self.out
            .push_str(&format!("Solution {}\n", self.state.solution_count));
        if let Some(objective) = sol.objective() {
            self.out.push_str(&format!("Objective: {objective}\n"));
        }
        self.out.push_str(&sol_to_string(sol));
        self.state.solution_count += 1;
        SearchControl::Continue
    }
}

fn sol_to_string(sol: &SolutionView<'_>) -> String {
    let calendar = sol.calendar();
    let mut out = String::new();
    for d in 0..calendar.n_days {
        out.push_str(&format!("Day {d}\n"));
        for cur in sol.curricula() {
            out.push_str(&format!("Curriculum {}\n", cur.id));
            let mut period_course: Vec<Option<&str>> = vec![None; calendar.n_periods as usize];
            for course in cur.courses() {
                let start = sol.start(&cur.id, d, &course.id);
                let end = sol.end(&cur.id, d, &course.id);
                for p in start..end {
                    period_course[p as usize] = Some(course.id.as_str());
                }
            }
            for (p, slot) in period_course.iter().enumerate() {
                match slot {
                    Some(course) => out.push_str(&format!("Period {p}: course {course}\n")),
                    None => out.push_str(&format!("Period {p}: no course\n")),
                }
            }
        }
    }
    out
}

/// Accumulates solutions into the response envelope. Days without a lecture
/// are left out of a course's schedule.
pub struct SolutionSerializer {
    state: CallbackState,
    result: SchedResponse,
}

impl SolutionSerializer {
    pub fn new(n_solutions: usize) -> Self {
        SolutionSerializer {
            state: CallbackState::new(n_solutions),
            result: SchedResponse::default(),
        }
    }

    pub fn into_result(self) -> SchedResponse {
        self.result
    }
}

impl SolutionHandler for SolutionSerializer {
    fn on_solution(&mut self, sol: &SolutionView<'_>) -> SearchControl {
        if !self.state.wants_more() {
            return SearchControl::Stop;
        }
        let calendar = sol.calendar();
        let curricula = sol
            .curricula()
            .iter()
            .map(|cur| SolvedCurriculum {
                curriculum_id: cur.id.clone(),
                courses: cur
                    .courses()
                    .iter()
                    .map(|course| SolvedCourse {
                        course_id: course.id.clone(),
                        schedule: (0..calendar.n_days)
                            .filter_map(|d| {
                                let duration = sol.duration(&cur.id, d, &course.id);
                                (duration > 0).then(|| DaySchedule {
                                    day: d,
                                    start: sol.start(&cur.id, d, &course.id),
                                    duration,
                                })
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        self.result.solutions.push(SolvedSolution {
            solution_id: self.state.solution_count.to_string(),
            curricula,
        });
        self.result.n_solutions += 1;
        self.state.solution_count += 1;
        SearchControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Calendar, Course, Curriculum};
    use crate::sched::CourseSched;

    fn one_course_sched() -> CourseSched {
        let curricula = vec![
            Curriculum::new("C", vec![Course::new("x", 6).unwrap()]).unwrap(),
        ];
        let calendar = Calendar { n_days: 5, n_periods: 8 };
        let mut sched = CourseSched::new(calendar, curricula);
        sched.add_no_overlap_constraints();
        sched.add_course_len_constraints();
        sched.add_lecture_len_constraints();
        sched.add_sync_across_curricula_constraints();
        sched.add_lecture_symmetry_constraints();
        sched
    }

    #[test]
    fn serializer_caps_at_requested_count() {
        let mut sched = one_course_sched();
        let mut serializer = SolutionSerializer::new(1);
        sched.search_all(&mut serializer, None);
        let result = serializer.into_result();
        assert_eq!(result.n_solutions, 1);
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.solutions[0].solution_id, "0");
    }

    #[test]
    fn serializer_omits_empty_days() {
        let mut sched = one_course_sched();
        let mut serializer = SolutionSerializer::new(3);
        sched.search_all(&mut serializer, None);
        let result = serializer.into_result();
        assert!(result.n_solutions >= 1);
        for solution in &result.solutions {
            assert_eq!(solution.curricula.len(), 1);
            let course = &solution.curricula[0].courses[0];
            assert_eq!(course.course_id, "x");
            assert!(!course.schedule.is_empty());
            let total: i64 = course.schedule.iter().map(|s| s.duration).sum();
            assert_eq!(total, 6);
            for entry in &course.schedule {
                assert!(entry.duration > 0);
            }
        }
    }

    #[test]
    fn printer_renders_every_period() {
        let mut sched = one_course_sched();
        let mut printer = SolutionPrinter::new(1);
        sched.search_all(&mut printer, None);
        assert_eq!(printer.solution_count(), 1);
        let text = printer.rendered();
        assert!(text.starts_with("Solution 0\n"));
        assert!(text.contains("Day 0\n"));
        assert!(text.contains("Day 4\n"));
        assert!(text.contains("Curriculum C\n"));
        assert!(text.contains("course x"));
        assert!(text.contains("no course"));
        // every day renders all 8 periods for the single curriculum
        assert_eq!(text.matches("Period 7:").count(), 5);
    }
}
