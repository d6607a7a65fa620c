//! # Sample Records
//!
//! In-memory HRMS data the screens render. Screens that are opened without
//! an id (or with an id that matches nothing) show the first record here.

use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmploymentStatus {
    Active,
    OnLeave,
    Probation,
}

impl EmploymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Active => "Active",
            EmploymentStatus::OnLeave => "On leave",
            EmploymentStatus::Probation => "Probation",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Employee {
    pub id: i64,
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub email: &'static str,
    pub joined: NaiveDate,
    pub status: EmploymentStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To do",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Review => "In review",
            TaskStatus::Done => "Done",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub client: &'static str,
    pub lead_id: i64,
    pub due: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct Task {
    pub id: &'static str,
    pub title: &'static str,
    pub project_id: &'static str,
    pub assignee_id: i64,
    pub status: TaskStatus,
    pub due: NaiveDate,
}

/// Month the attendance sample covers.
pub const SAMPLE_MONTH: (i32, u32) = (2024, 5);

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

pub fn employees() -> Vec<Employee> {
    vec![
        Employee {
            id: 1,
            name: "Amara Okafor",
            role: "HR Manager",
            department: "People Ops",
            email: "amara.okafor@example.com",
            joined: date(2019, 3, 11),
            status: EmploymentStatus::Active,
        },
        Employee {
            id: 2,
            name: "Liam Chen",
            role: "Backend Engineer",
            department: "Engineering",
            email: "liam.chen@example.com",
            joined: date(2021, 8, 2),
            status: EmploymentStatus::Active,
        },
        Employee {
            id: 3,
            name: "Sofia Rossi",
            role: "Product Designer",
            department: "Design",
            email: "sofia.rossi@example.com",
            joined: date(2022, 1, 17),
            status: EmploymentStatus::OnLeave,
        },
        Employee {
            id: 7,
            name: "Daniel Mensah",
            role: "Recruiter",
            department: "People Ops",
            email: "daniel.mensah@example.com",
            joined: date(2023, 6, 5),
            status: EmploymentStatus::Active,
        },
        Employee {
            id: 9,
            name: "Priya Nair",
            role: "QA Analyst",
            department: "Engineering",
            email: "priya.nair@example.com",
            joined: date(2024, 2, 26),
            status: EmploymentStatus::Probation,
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "P-1",
            name: "Onboarding Portal",
            client: "Internal",
            lead_id: 1,
            due: date(2024, 7, 31),
        },
        Project {
            id: "P-2",
            name: "Payroll Migration",
            client: "Finance",
            lead_id: 2,
            due: date(2024, 9, 15),
        },
        Project {
            id: "P-3",
            name: "Careers Site Refresh",
            client: "Talent",
            lead_id: 3,
            due: date(2024, 6, 28),
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "T-40",
            title: "Draft welcome checklist",
            project_id: "P-1",
            assignee_id: 1,
            status: TaskStatus::Done,
            due: date(2024, 5, 10),
        },
        Task {
            id: "T-41",
            title: "SSO login for new hires",
            project_id: "P-1",
            assignee_id: 2,
            status: TaskStatus::InProgress,
            due: date(2024, 6, 3),
        },
        Task {
            id: "T-42",
            title: "Reconcile April payslips",
            project_id: "P-2",
            assignee_id: 2,
            status: TaskStatus::Review,
            due: date(2024, 5, 24),
        },
        Task {
            id: "T-43",
            title: "Export benefits ledger",
            project_id: "P-2",
            assignee_id: 9,
            status: TaskStatus::Todo,
            due: date(2024, 6, 14),
        },
        Task {
            id: "T-44",
            title: "Job listing templates",
            project_id: "P-3",
            assignee_id: 7,
            status: TaskStatus::InProgress,
            due: date(2024, 6, 7),
        },
    ]
}

/// The employee with `id`, or the first sample employee.
pub fn employee_or_sample(id: Option<i64>) -> Employee {
    let all = employees();
    id.and_then(|id| all.iter().find(|e| e.id == id).cloned())
        .unwrap_or_else(|| all[0].clone())
}

pub fn employee_name(id: i64) -> &'static str {
    employees()
        .into_iter()
        .find(|e| e.id == id)
        .map(|e| e.name)
        .unwrap_or("Unassigned")
}

pub fn project_or_sample(id: Option<&str>) -> Project {
    let all = projects();
    id.and_then(|id| all.iter().find(|p| p.id == id).cloned())
        .unwrap_or_else(|| all[0].clone())
}

pub fn task_or_sample(id: Option<&str>) -> Task {
    let all = tasks();
    id.and_then(|id| all.iter().find(|t| t.id == id).cloned())
        .unwrap_or_else(|| all[0].clone())
}

pub fn tasks_for_project(project_id: &str) -> Vec<Task> {
    tasks().into_iter().filter(|t| t.project_id == project_id).collect()
}

/// Deterministic presence for the attendance sample: weekends off, plus a
/// per-employee absence every few working days.
pub fn was_present(employee_id: i64, day: NaiveDate) -> bool {
    use chrono::{Datelike, Weekday};
    if matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let stride = 5 + employee_id.rem_euclid(4) as u32;
    day.day() % stride != 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_fall_back_to_first_record() {
        assert_eq!(employee_or_sample(None).id, 1);
        assert_eq!(employee_or_sample(Some(404)).id, 1);
        assert_eq!(employee_or_sample(Some(7)).name, "Daniel Mensah");
        assert_eq!(task_or_sample(Some("T-42")).project_id, "P-2");
        assert_eq!(task_or_sample(Some("nope")).id, "T-40");
        assert_eq!(project_or_sample(None).id, "P-1");
    }

    #[test]
    fn test_every_task_references_known_records() {
        let project_ids: Vec<&str> = projects().iter().map(|p| p.id).collect();
        for task in tasks() {
            assert!(project_ids.contains(&task.project_id), "{}", task.id);
            assert_ne!(employee_name(task.assignee_id), "Unassigned", "{}", task.id);
        }
    }

    #[test]
    fn test_weekends_are_never_present() {
        let saturday = date(2024, 5, 4);
        let sunday = date(2024, 5, 5);
        for e in employees() {
            assert!(!was_present(e.id, saturday));
            assert!(!was_present(e.id, sunday));
        }
        // Monday 6 May: stride for employee 1 is 6, so absent on the 6th.
        assert!(!was_present(1, date(2024, 5, 6)));
        assert!(was_present(1, date(2024, 5, 7)));
    }
}
