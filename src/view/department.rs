use crate::{
    error::{Error, FormError},
    gateway::{ApiGateway, Transport},
    model::department::{DepartmentDto, DepartmentPayload},
    service::DepartmentService,
    view::ViewPhase,
};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepartmentForm {
    pub name: String,
}

impl DepartmentForm {
    pub fn to_payload(&self) -> Result<DepartmentPayload, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing("department name"));
        }

        Ok(DepartmentPayload {
            name: name.to_string(),
        })
    }
}

/// Department management actions; departments are only ever appended.
pub struct DepartmentRoster<'a, T> {
    service: DepartmentService<'a, T>,
}

impl<'a, T: Transport> DepartmentRoster<'a, T> {
    pub fn new(gateway: &'a ApiGateway<T>) -> Self {
        Self {
            service: DepartmentService::new(gateway),
        }
    }

    pub async fn load(
        &self,
        mut phase: impl FnMut(ViewPhase),
    ) -> Result<Vec<DepartmentDto>, Error> {
        phase(ViewPhase::Loading);
        let result = self.service.list().await;
        phase(ViewPhase::Idle);

        result
    }

    /// Create a department, then re-read the list once.
    pub async fn add(
        &self,
        form: &DepartmentForm,
        mut phase: impl FnMut(ViewPhase),
    ) -> Result<Vec<DepartmentDto>, Error> {
        let payload = form.to_payload()?;

        phase(ViewPhase::Saving);
        let result = match self.service.create(&payload).await {
            Ok(_) => {
                phase(ViewPhase::Refreshing);
                self.service
                    .list()
                    .await
                    .map_err(|err| Error::RefreshError(Box::new(err)))
            }
            Err(err) => Err(err),
        };
        phase(ViewPhase::Idle);

        result
    }
}
