use crate::{
    error::Error,
    gateway::{ApiGateway, Transport},
    model::employee::{EmployeeDto, EmployeePayload},
};

pub struct EmployeeService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: Transport> EmployeeService<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<EmployeeDto>, Error> {
        Ok(self.gateway.get_json("/api/employees").await?)
    }

    pub async fn create(&self, employee: &EmployeePayload) -> Result<EmployeeDto, Error> {
        Ok(self.gateway.post_json("/api/employees", employee).await?)
    }

    /// Replace every field of an existing employee.
    pub async fn update(&self, id: i64, employee: &EmployeePayload) -> Result<EmployeeDto, Error> {
        Ok(self
            .gateway
            .put_json(&format!("/api/employees/{}", id), employee)
            .await?)
    }

    pub async fn delete(&self, id: i64) -> Result<(), Error> {
        Ok(self.gateway.delete(&format!("/api/employees/{}", id)).await?)
    }

    /// Download the company's employees as CSV text.
    ///
    /// Goes through the gateway so the request is authenticated like any other.
    pub async fn export_csv(&self) -> Result<String, Error> {
        Ok(self.gateway.get_text("/api/employees/export").await?)
    }
}
