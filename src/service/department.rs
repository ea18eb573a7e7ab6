use crate::{
    error::Error,
    gateway::{ApiGateway, Transport},
    model::department::{DepartmentDto, DepartmentPayload},
};

/// Departments can be listed and created; there is no edit or delete.
pub struct DepartmentService<'a, T> {
    gateway: &'a ApiGateway<T>,
}

impl<'a, T: Transport> DepartmentService<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<DepartmentDto>, Error> {
        Ok(self.gateway.get_json("/api/departments").await?)
    }

    pub async fn create(&self, department: &DepartmentPayload) -> Result<DepartmentDto, Error> {
        Ok(self.gateway.post_json("/api/departments", department).await?)
    }
}
