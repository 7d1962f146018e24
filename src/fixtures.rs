//! Seeded demo data for development and integration testing.
//!
//! Everything here is deterministic: the generator runs from a fixed
//! seed, so two stores built for the same day hold identical data.
//! Calendar rules such as "weekends are absent" live in this module
//! only; the engine itself never looks at the day of week.

use chrono::{Datelike, Months, NaiveDate, NaiveTime, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

use crate::attendance::{AttendancePolicy, monday_of};
use crate::leave::{LeaveDecision, LeaveDraft};
use crate::models::{
    AttendanceRecord, CompanyStructure, Employee, EmployeeSalary, EmployeeStatus, LeaveBalance,
    LeaveType, PayrollRecord, PayrollStatus,
};
use crate::payroll::breakdown;
use crate::store::{AttendanceStore, LeaveStore, MemoryStore, SalaryStore};

const DEMO_SEED: u64 = 42;

/// The default company structure, matching `config/dayflow/structure.yaml`.
pub fn demo_structure() -> CompanyStructure {
    use crate::models::{PfContribution, PfShare, SalaryComponent};

    let component = |name: &str, amount: i64, description: &str, percentage: Option<&str>| {
        SalaryComponent {
            name: name.to_string(),
            amount: dec(amount),
            description: description.to_string(),
            percentage: percentage.map(str::to_string),
        }
    };

    CompanyStructure {
        month_wage: dec(50000),
        yearly_wage: dec(600000),
        working_days: 5,
        break_time_hours: dec(1),
        components: vec![
            component("Basic Salary", 25000, "Define basic salary from company cost", None),
            component("House Rent Allowance", 12500, "Allowance for house rent", Some("50.00%")),
            component("Standard Allowance", 4167, "Fixed monthly standard allowance", None),
            component("Performance Bonus", 2083, "Performance based incentive", Some("8.33%")),
            component("Leave Travel Allowance", 2083, "Allowance for travel during leave", Some("8.33%")),
            component("Fixed Allowance", 2918, "Remaining fixed component", None),
        ],
        pf_contribution: PfContribution {
            employee: PfShare {
                amount: dec(3000),
                percentage: "12.00%".to_string(),
            },
            employer: PfShare {
                amount: dec(3000),
                percentage: "12.00%".to_string(),
            },
        },
        professional_tax: dec(200),
    }
}

/// The demo employee directory.
pub fn demo_employees() -> Vec<Employee> {
    let employee = |id: &str,
                    name: &str,
                    email: &str,
                    phone: &str,
                    department: &str,
                    position: &str,
                    status: EmployeeStatus,
                    join: (i32, u32, u32)| Employee {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        status,
        join_date: NaiveDate::from_ymd_opt(join.0, join.1, join.2).expect("valid date"),
    };

    vec![
        employee(
            "EMP001",
            "Sarah Johnson",
            "sarah.johnson@dayflow.test",
            "+1-202-555-0101",
            "Human Resources",
            "HR Manager",
            EmployeeStatus::Active,
            (2021, 6, 14),
        ),
        employee(
            "EMP002",
            "John Smith",
            "john.smith@dayflow.test",
            "+1-202-555-0102",
            "Engineering",
            "Software Engineer",
            EmployeeStatus::Active,
            (2022, 3, 1),
        ),
        employee(
            "EMP003",
            "Mike Brown",
            "mike.brown@dayflow.test",
            "+1-202-555-0103",
            "Sales",
            "Account Executive",
            EmployeeStatus::Active,
            (2023, 1, 9),
        ),
        employee(
            "EMP004",
            "Emily Davis",
            "emily.davis@dayflow.test",
            "+1-202-555-0104",
            "Design",
            "Product Designer",
            EmployeeStatus::OnLeave,
            (2022, 9, 19),
        ),
        employee(
            "EMP005",
            "Alex Wilson",
            "alex.wilson@dayflow.test",
            "+1-202-555-0105",
            "Marketing",
            "Marketing Specialist",
            EmployeeStatus::Active,
            (2024, 2, 5),
        ),
        employee(
            "EMP006",
            "Lisa Chen",
            "lisa.chen@dayflow.test",
            "+1-202-555-0106",
            "Finance",
            "Financial Analyst",
            EmployeeStatus::Active,
            (2023, 7, 24),
        ),
    ]
}

/// Builds a fully seeded store: directory, salary overrides, the
/// current week of attendance, leave requests and payroll history.
///
/// `today` anchors the attendance week; days after it stay unrecorded.
pub fn demo_store(
    structure: CompanyStructure,
    policy: AttendancePolicy,
    today: NaiveDate,
) -> MemoryStore {
    let store = MemoryStore::new(structure, policy, EmployeeSalary::default_template());
    let mut rng = StdRng::seed_from_u64(DEMO_SEED);

    for employee in demo_employees() {
        store.insert_employee(employee);
    }

    seed_salaries(&store);
    seed_attendance(&store, today, &mut rng);
    seed_leave(&store, today);
    seed_payroll(&store, today);

    store
}

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn seed_salaries(store: &MemoryStore) {
    let overrides: [(&str, i64, i64); 5] = [
        ("EMP001", 30000, 15000),
        ("EMP002", 28000, 14000),
        ("EMP003", 25000, 12500),
        ("EMP004", 32000, 16000),
        ("EMP005", 27000, 13500),
    ];

    for (id, basic, hra) in overrides {
        let mut salary = EmployeeSalary::default_template();
        salary.basic_salary = dec(basic);
        salary.hra = dec(hra);
        store.seed_salary(id, salary);
    }

    store.seed_leave_balance("EMP002", LeaveBalance { paid: 8, sick: 3 });
    store.seed_leave_balance("EMP004", LeaveBalance { paid: 4, sick: 5 });
    store.seed_leave_balance("EMP005", LeaveBalance { paid: 11, sick: 4 });
}

fn seed_attendance(store: &MemoryStore, today: NaiveDate, rng: &mut StdRng) {
    let monday = monday_of(today);
    let employees = demo_employees();

    for offset in 0..7u64 {
        let date = monday + chrono::Days::new(offset);
        if date > today {
            break;
        }

        let weekend = matches!(date.weekday(), Weekday::Sat | Weekday::Sun);
        for employee in &employees {
            // Weekends and employees on leave get explicit absent rows.
            if weekend || employee.status == EmployeeStatus::OnLeave {
                store.put_record(AttendanceRecord::absent(&employee.id, &employee.name, date));
                continue;
            }

            // Roughly a third of check-ins land at or past the late hour.
            let (hour, minute) = if rng.gen_bool(0.3) {
                (rng.gen_range(9..=10), rng.gen_range(0..60))
            } else {
                (8, rng.gen_range(0..60))
            };
            let check_in = NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time");
            store
                .check_in(&employee.id, date, check_in)
                .expect("seeding a fresh day");

            let worked_minutes = rng.gen_range(460..=580);
            let check_out = check_in + chrono::Duration::minutes(worked_minutes);
            store
                .check_out(&employee.id, date, check_out)
                .expect("check-out follows check-in");
        }
    }
}

fn seed_leave(store: &MemoryStore, today: NaiveDate) {
    let draft = |employee_id: &str, name: &str, leave_type, start: i64, days: i64, reason: &str| {
        let start_date = today + chrono::Duration::days(start);
        LeaveDraft {
            employee_id: employee_id.to_string(),
            employee_name: name.to_string(),
            leave_type,
            start_date,
            end_date: start_date + chrono::Duration::days(days - 1),
            reason: reason.to_string(),
        }
    };
    let applied = today - chrono::Duration::days(3);

    let emily = store
        .submit_leave(
            draft("EMP004", "Emily Davis", LeaveType::Paid, -2, 7, "Annual vacation"),
            applied,
        )
        .expect("valid seed draft");
    store
        .decide_leave(emily.id, LeaveDecision::Approve)
        .expect("pending request");

    let alex = store
        .submit_leave(
            draft("EMP005", "Alex Wilson", LeaveType::Unpaid, 10, 14, "Extended travel"),
            applied,
        )
        .expect("valid seed draft");
    store
        .decide_leave(alex.id, LeaveDecision::Reject)
        .expect("pending request");

    store
        .submit_leave(
            draft("EMP002", "John Smith", LeaveType::Sick, 1, 2, "Medical appointment"),
            today - chrono::Duration::days(1),
        )
        .expect("valid seed draft");

    store
        .submit_leave(
            draft("EMP003", "Mike Brown", LeaveType::Paid, 7, 3, "Family function"),
            today,
        )
        .expect("valid seed draft");
}

fn seed_payroll(store: &MemoryStore, today: NaiveDate) {
    let statuses: [(&str, PayrollStatus); 6] = [
        ("EMP001", PayrollStatus::Paid),
        ("EMP002", PayrollStatus::Paid),
        ("EMP003", PayrollStatus::Processing),
        ("EMP004", PayrollStatus::Pending),
        ("EMP005", PayrollStatus::Paid),
        ("EMP006", PayrollStatus::Pending),
    ];

    for (id, status) in statuses {
        store.seed_payroll_status(id, status);

        let salary = store.employee_salary(id).expect("seeded employee");
        let result = breakdown(&salary);

        // Three fully paid months before the current one.
        for months_back in (1..=3u32).rev() {
            let month_start = today
                .with_day(1)
                .expect("first of month")
                .checked_sub_months(Months::new(months_back))
                .expect("recent date");
            let paid_on = month_start
                .checked_add_months(Months::new(1))
                .expect("recent date");

            store.seed_payroll_record(
                id,
                PayrollRecord {
                    month: month_start.format("%B %Y").to_string(),
                    basic_salary: salary.basic_salary,
                    allowances: result.gross_salary - salary.basic_salary,
                    deductions: result.total_deductions,
                    net_salary: result.net_salary,
                    status: PayrollStatus::Paid,
                    paid_on: Some(paid_on),
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AttendanceStatus;
    use crate::store::EmployeeStore;

    fn structure() -> CompanyStructure {
        demo_structure()
    }

    fn thursday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    // FIX-001: The same day always seeds identical data.
    #[test]
    fn test_fix_001_seeding_is_deterministic() {
        let a = demo_store(structure(), AttendancePolicy::default(), thursday());
        let b = demo_store(structure(), AttendancePolicy::default(), thursday());

        assert_eq!(a.day_records(thursday()), b.day_records(thursday()));
        assert_eq!(a.employees(), b.employees());
    }

    // FIX-002: Weekend rows are absent with no recorded times.
    #[test]
    fn test_fix_002_weekends_are_absent() {
        // Anchor on a Sunday so the whole week including Saturday exists.
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
        let store = demo_store(structure(), AttendancePolicy::default(), sunday);

        let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
        for record in store.day_records(saturday) {
            assert_eq!(record.status, AttendanceStatus::Absent);
            assert!(record.check_in.is_none());
        }
    }

    // FIX-003: Weekday rows for active employees carry derived hours.
    #[test]
    fn test_fix_003_weekdays_have_derived_hours() {
        let store = demo_store(structure(), AttendancePolicy::default(), thursday());

        let records = store.day_records(thursday());
        let worked: Vec<_> = records
            .iter()
            .filter(|r| r.status != AttendanceStatus::Absent)
            .collect();
        assert_eq!(worked.len(), 5);
        for record in worked {
            assert!(record.check_in.is_some());
            assert!(record.check_out.is_some());
            assert!(record.work_hours.is_some());
        }
    }

    // FIX-004: The employee on leave never gets a presence row.
    #[test]
    fn test_fix_004_on_leave_employee_is_absent() {
        let store = demo_store(structure(), AttendancePolicy::default(), thursday());

        let emily = store
            .day_records(thursday())
            .into_iter()
            .find(|r| r.employee_id == "EMP004")
            .unwrap();
        assert_eq!(emily.status, AttendanceStatus::Absent);
    }

    // FIX-005: Seeded leave covers both decided and pending requests.
    #[test]
    fn test_fix_005_leave_mix() {
        use crate::models::LeaveStatus;

        let store = demo_store(structure(), AttendancePolicy::default(), thursday());
        let requests = store.leave_requests();

        assert_eq!(requests.len(), 4);
        let pending = requests
            .iter()
            .filter(|r| r.status == LeaveStatus::Pending)
            .count();
        assert_eq!(pending, 2);
        assert!(requests.iter().any(|r| r.status == LeaveStatus::Approved));
        assert!(requests.iter().any(|r| r.status == LeaveStatus::Rejected));
    }

    // FIX-006: Every employee has three months of paid history.
    #[test]
    fn test_fix_006_payroll_history_seeded() {
        let store = demo_store(structure(), AttendancePolicy::default(), thursday());

        let history = store.payroll_history("EMP002").unwrap();
        assert_eq!(history.len(), 3);
        for record in &history {
            assert_eq!(record.status, PayrollStatus::Paid);
            assert!(record.paid_on.is_some());
        }
    }
}
