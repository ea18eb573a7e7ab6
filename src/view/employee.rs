use chrono::NaiveDate;

use crate::{
    error::{Error, FormError},
    gateway::{ApiGateway, Transport},
    model::employee::{EmployeeDto, EmployeePayload},
    service::EmployeeService,
    view::{prompt::Prompt, ViewPhase},
};

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this employee?";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw text of the add/edit employee form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub salary: String,
    pub join_date: String,
    pub department_id: String,
}

impl EmployeeForm {
    /// Prefill the form for editing.
    pub fn from_employee(employee: &EmployeeDto) -> Self {
        Self {
            name: employee.name.clone(),
            email: employee.email.clone(),
            job_title: employee.job_title.clone(),
            salary: employee.salary.to_string(),
            join_date: employee.join_date.format(DATE_FORMAT).to_string(),
            department_id: employee.department_id.to_string(),
        }
    }

    /// Coerce the typed text into a request body.
    ///
    /// Performs the same checks as the browser's `required`, email, number and date inputs,
    /// and nothing beyond them: any salary or department id is accepted here and left for
    /// the backend to judge.
    pub fn to_payload(&self) -> Result<EmployeePayload, FormError> {
        let name = required("name", &self.name)?;
        let email = required("email", &self.email)?;
        let job_title = required("job title", &self.job_title)?;
        let salary = required("salary", &self.salary)?;
        let join_date = required("join date", &self.join_date)?;
        let department_id = required("department", &self.department_id)?;

        if !is_email_shaped(email) {
            return Err(FormError::InvalidEmail);
        }

        let salary = salary
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| FormError::InvalidNumber {
                field: "salary",
                value: salary.to_string(),
            })?;

        let join_date = NaiveDate::parse_from_str(join_date, DATE_FORMAT).map_err(|_| {
            FormError::InvalidDate {
                field: "join date",
                value: join_date.to_string(),
            }
        })?;

        let department_id =
            department_id
                .parse::<i64>()
                .map_err(|_| FormError::InvalidNumber {
                    field: "department",
                    value: department_id.to_string(),
                })?;

        Ok(EmployeePayload {
            name: name.to_string(),
            email: email.to_string(),
            job_title: job_title.to_string(),
            salary,
            join_date,
            department_id,
        })
    }
}

fn required<'s>(field: &'static str, value: &'s str) -> Result<&'s str, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(value)
    }
}

// Same shape check as an `<input type="email">`: something@something, no whitespace
fn is_email_shaped(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

/// Employee management actions.
///
/// Every mutation is followed by exactly one awaited re-read of `/api/employees`, whose
/// result is what the view should display.
pub struct EmployeeRoster<'a, T> {
    service: EmployeeService<'a, T>,
}

impl<'a, T: Transport> EmployeeRoster<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self {
            service: EmployeeService::new(gateway),
        }
    }

    pub async fn load(&self, mut phase: impl FnMut(ViewPhase)) -> Result<Vec<EmployeeDto>, Error> {
        phase(ViewPhase::Loading);
        let result = self.service.list().await;
        phase(ViewPhase::Idle);

        result
    }

    /// Create an employee from the form, then re-read the list.
    ///
    /// A form that fails coercion issues no request at all.
    pub async fn add(
        &self,
        form: &EmployeeForm,
        mut phase: impl FnMut(ViewPhase),
    ) -> Result<Vec<EmployeeDto>, Error> {
        let payload = form.to_payload()?;

        let result = self.save_then_refresh(&mut phase, || self.service.create(&payload)).await;
        phase(ViewPhase::Idle);

        result
    }

    /// Replace an employee with the form's values, then re-read the list.
    pub async fn update(
        &self,
        id: i64,
        form: &EmployeeForm,
        mut phase: impl FnMut(ViewPhase),
    ) -> Result<Vec<EmployeeDto>, Error> {
        let payload = form.to_payload()?;

        let result = self
            .save_then_refresh(&mut phase, || self.service.update(id, &payload))
            .await;
        phase(ViewPhase::Idle);

        result
    }

    /// Delete an employee after the user confirms, then re-read the list.
    ///
    /// # Returns
    /// - `Ok(None)` - The user declined; nothing was sent
    /// - `Ok(Some(employees))` - Deleted, with the refreshed list
    /// - `Err(Error::RefreshError)` - Deleted, but the list could not be re-read
    /// - `Err(Error)` - The delete failed
    pub async fn remove(
        &self,
        id: i64,
        prompt: &impl Prompt,
        mut phase: impl FnMut(ViewPhase),
    ) -> Result<Option<Vec<EmployeeDto>>, Error> {
        if !prompt.confirm(DELETE_CONFIRMATION) {
            return Ok(None);
        }

        let result = self
            .save_then_refresh(&mut phase, || self.service.delete(id))
            .await;
        phase(ViewPhase::Idle);

        result.map(Some)
    }

    pub async fn export_csv(&self) -> Result<String, Error> {
        self.service.export_csv().await
    }

    async fn save_then_refresh<F, Fut, R>(
        &self,
        phase: &mut impl FnMut(ViewPhase),
        mutation: F,
    ) -> Result<Vec<EmployeeDto>, Error>
    where
        F: FnOnce() -> Fut,
        Fut: std::future::Future<Output = Result<R, Error>>,
    {
        phase(ViewPhase::Saving);
        mutation().await?;

        phase(ViewPhase::Refreshing);
        self.service
            .list()
            .await
            .map_err(|err| Error::RefreshError(Box::new(err)))
    }
}
