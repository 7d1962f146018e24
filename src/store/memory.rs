//! In-memory storage backed by `RwLock`'d maps.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::attendance::{
    AttendancePolicy, classify_status, extra_hours, format_duration, week_dates, work_minutes,
};
use crate::error::{DayflowError, DayflowResult};
use crate::leave::{self, LeaveDecision, LeaveDraft};
use crate::models::{
    AttendanceRecord, CompanyStructure, Employee, EmployeeSalary, LeaveBalance, LeaveRequest,
    PayrollRecord, PayrollStatus,
};
use crate::payroll::{validate_salary, validate_structure};

use super::{AttendanceStore, EmployeeStore, LeaveStore, ProfileUpdate, SalaryStore};

/// The single production [`super::Store`] implementation.
///
/// State lives in one `RwLock`'d block so cross-aggregate reads (for
/// example the payroll summary joining employees with salaries) see a
/// consistent snapshot.
#[derive(Debug)]
pub struct MemoryStore {
    policy: AttendancePolicy,
    inner: RwLock<Inner>,
}

#[derive(Debug)]
struct Inner {
    structure: CompanyStructure,
    default_salary: EmployeeSalary,
    employees: BTreeMap<String, Employee>,
    salaries: HashMap<String, EmployeeSalary>,
    // Keyed by (date, employee_id) so day scans are range reads.
    attendance: BTreeMap<(NaiveDate, String), AttendanceRecord>,
    leave: Vec<LeaveRequest>,
    balances: HashMap<String, LeaveBalance>,
    payroll_status: HashMap<String, PayrollStatus>,
    payroll_history: HashMap<String, Vec<PayrollRecord>>,
}

impl MemoryStore {
    /// Creates an empty store with the given structure, policy and the
    /// salary template applied to employees without their own record.
    pub fn new(
        structure: CompanyStructure,
        policy: AttendancePolicy,
        default_salary: EmployeeSalary,
    ) -> Self {
        Self {
            policy,
            inner: RwLock::new(Inner {
                structure,
                default_salary,
                employees: BTreeMap::new(),
                salaries: HashMap::new(),
                attendance: BTreeMap::new(),
                leave: Vec::new(),
                balances: HashMap::new(),
                payroll_status: HashMap::new(),
                payroll_history: HashMap::new(),
            }),
        }
    }

    /// The attendance policy this store derives records with.
    pub fn policy(&self) -> AttendancePolicy {
        self.policy
    }

    /// Adds an employee to the directory, replacing any same-id record.
    pub fn insert_employee(&self, employee: Employee) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.employees.insert(employee.id.clone(), employee);
    }

    /// Sets an employee's salary record without validation. Seeding only.
    pub fn seed_salary(&self, id: &str, salary: EmployeeSalary) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.salaries.insert(id.to_string(), salary);
    }

    /// Sets an employee's remaining leave allowance.
    pub fn seed_leave_balance(&self, id: &str, balance: LeaveBalance) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.balances.insert(id.to_string(), balance);
    }

    /// Inserts a fully-formed leave request, bypassing submission rules.
    pub fn seed_leave_request(&self, request: LeaveRequest) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.leave.push(request);
    }

    /// Sets an employee's current payment state.
    pub fn seed_payroll_status(&self, id: &str, status: PayrollStatus) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.payroll_status.insert(id.to_string(), status);
    }

    /// Appends a row to an employee's payroll history.
    pub fn seed_payroll_record(&self, id: &str, record: PayrollRecord) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner
            .payroll_history
            .entry(id.to_string())
            .or_default()
            .push(record);
    }
}

impl EmployeeStore for MemoryStore {
    fn employees(&self) -> Vec<Employee> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.employees.values().cloned().collect()
    }

    fn employee(&self, id: &str) -> DayflowResult<Employee> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .employees
            .get(id)
            .cloned()
            .ok_or_else(|| DayflowError::EmployeeNotFound { id: id.to_string() })
    }

    fn update_profile(&self, id: &str, update: ProfileUpdate) -> DayflowResult<Employee> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let employee = inner
            .employees
            .get_mut(id)
            .ok_or_else(|| DayflowError::EmployeeNotFound { id: id.to_string() })?;
        if let Some(email) = update.email {
            employee.email = email;
        }
        if let Some(phone) = update.phone {
            employee.phone = phone;
        }
        Ok(employee.clone())
    }
}

impl SalaryStore for MemoryStore {
    fn company_structure(&self) -> CompanyStructure {
        let inner = self.inner.read().expect("store lock poisoned");
        inner.structure.clone()
    }

    fn replace_company_structure(&self, structure: CompanyStructure) -> DayflowResult<()> {
        validate_structure(&structure)?;
        let mut inner = self.inner.write().expect("store lock poisoned");
        inner.structure = structure;
        Ok(())
    }

    fn employee_salary(&self, id: &str) -> DayflowResult<EmployeeSalary> {
        let inner = self.inner.read().expect("store lock poisoned");
        if !inner.employees.contains_key(id) {
            return Err(DayflowError::EmployeeNotFound { id: id.to_string() });
        }
        Ok(inner
            .salaries
            .get(id)
            .copied()
            .unwrap_or(inner.default_salary))
    }

    fn replace_employee_salary(&self, id: &str, salary: EmployeeSalary) -> DayflowResult<()> {
        validate_salary(&salary)?;
        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.employees.contains_key(id) {
            return Err(DayflowError::EmployeeNotFound { id: id.to_string() });
        }
        inner.salaries.insert(id.to_string(), salary);
        Ok(())
    }

    fn payroll_rows(&self) -> Vec<(Employee, EmployeeSalary, PayrollStatus)> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .employees
            .values()
            .map(|employee| {
                let salary = inner
                    .salaries
                    .get(&employee.id)
                    .copied()
                    .unwrap_or(inner.default_salary);
                let status = inner
                    .payroll_status
                    .get(&employee.id)
                    .copied()
                    .unwrap_or(PayrollStatus::Pending);
                (employee.clone(), salary, status)
            })
            .collect()
    }

    fn payroll_history(&self, id: &str) -> DayflowResult<Vec<PayrollRecord>> {
        let inner = self.inner.read().expect("store lock poisoned");
        if !inner.employees.contains_key(id) {
            return Err(DayflowError::EmployeeNotFound { id: id.to_string() });
        }
        Ok(inner.payroll_history.get(id).cloned().unwrap_or_default())
    }
}

impl AttendanceStore for MemoryStore {
    fn check_in(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> DayflowResult<AttendanceRecord> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let name = inner
            .employees
            .get(employee_id)
            .map(|e| e.name.clone())
            .ok_or_else(|| DayflowError::EmployeeNotFound {
                id: employee_id.to_string(),
            })?;

        let key = (date, employee_id.to_string());
        if let Some(existing) = inner.attendance.get(&key) {
            if existing.check_in.is_some() {
                return Err(DayflowError::AttendanceError {
                    employee_id: employee_id.to_string(),
                    message: format!("already checked in on {date}"),
                });
            }
        }

        let record = AttendanceRecord {
            employee_id: employee_id.to_string(),
            employee_name: name,
            date,
            check_in: Some(time),
            check_out: None,
            work_hours: None,
            extra_hours: None,
            status: classify_status(Some(time), &self.policy),
        };
        inner.attendance.insert(key, record.clone());
        Ok(record)
    }

    fn check_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> DayflowResult<AttendanceRecord> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let key = (date, employee_id.to_string());
        let record = inner.attendance.get_mut(&key).ok_or_else(|| {
            DayflowError::AttendanceError {
                employee_id: employee_id.to_string(),
                message: format!("no check-in recorded on {date}"),
            }
        })?;

        let check_in = record.check_in.ok_or_else(|| DayflowError::AttendanceError {
            employee_id: employee_id.to_string(),
            message: format!("no check-in recorded on {date}"),
        })?;
        if record.check_out.is_some() {
            return Err(DayflowError::AttendanceError {
                employee_id: employee_id.to_string(),
                message: format!("already checked out on {date}"),
            });
        }
        if time < check_in {
            return Err(DayflowError::AttendanceError {
                employee_id: employee_id.to_string(),
                message: format!("check-out {time} precedes check-in {check_in}"),
            });
        }

        let worked = work_minutes(check_in, time);
        record.check_out = Some(time);
        record.work_hours = Some(format_duration(worked));
        record.extra_hours = extra_hours(worked, self.policy.standard_shift_minutes);
        Ok(record.clone())
    }

    fn day_records(&self, date: NaiveDate) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        inner
            .employees
            .values()
            .map(|employee| {
                inner
                    .attendance
                    .get(&(date, employee.id.clone()))
                    .cloned()
                    .unwrap_or_else(|| AttendanceRecord::absent(&employee.id, &employee.name, date))
            })
            .collect()
    }

    fn week_records(&self, anchor: NaiveDate) -> Vec<AttendanceRecord> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut records = Vec::with_capacity(inner.employees.len() * 7);
        for date in week_dates(anchor) {
            for employee in inner.employees.values() {
                let record = inner
                    .attendance
                    .get(&(date, employee.id.clone()))
                    .cloned()
                    .unwrap_or_else(|| AttendanceRecord::absent(&employee.id, &employee.name, date));
                records.push(record);
            }
        }
        records
    }

    fn put_record(&self, record: AttendanceRecord) {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let key = (record.date, record.employee_id.clone());
        inner.attendance.insert(key, record);
    }
}

impl LeaveStore for MemoryStore {
    fn submit_leave(
        &self,
        draft: LeaveDraft,
        applied_on: NaiveDate,
    ) -> DayflowResult<LeaveRequest> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        if !inner.employees.contains_key(&draft.employee_id) {
            return Err(DayflowError::EmployeeNotFound {
                id: draft.employee_id,
            });
        }
        let request = leave::submit(draft, applied_on)?;
        inner.leave.push(request.clone());
        Ok(request)
    }

    fn leave_requests(&self) -> Vec<LeaveRequest> {
        let inner = self.inner.read().expect("store lock poisoned");
        let mut requests = inner.leave.clone();
        requests.sort_by(|a, b| b.applied_on.cmp(&a.applied_on));
        requests
    }

    fn leave_requests_for(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.leave_requests()
            .into_iter()
            .filter(|request| request.employee_id == employee_id)
            .collect()
    }

    fn decide_leave(&self, id: Uuid, decision: LeaveDecision) -> DayflowResult<LeaveRequest> {
        let mut inner = self.inner.write().expect("store lock poisoned");
        let request = inner
            .leave
            .iter_mut()
            .find(|request| request.id == id)
            .ok_or_else(|| DayflowError::LeaveRequestNotFound { id: id.to_string() })?;
        leave::decide(request, decision)?;
        Ok(request.clone())
    }

    fn leave_balance(&self, employee_id: &str) -> DayflowResult<LeaveBalance> {
        let inner = self.inner.read().expect("store lock poisoned");
        if !inner.employees.contains_key(employee_id) {
            return Err(DayflowError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        Ok(inner
            .balances
            .get(employee_id)
            .copied()
            .unwrap_or_default())
    }
}
