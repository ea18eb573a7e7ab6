use mockito::{Mock, Server, ServerGuard};

/// A running mock backend and the endpoints registered on it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub mocks: Vec<Mock>,
    /// When set, resource endpoints only match requests carrying this bearer token.
    pub bearer: Option<String>,
}

impl TestSetup {
    pub async fn new() -> Self {
        Self {
            server: Server::new_async().await,
            mocks: Vec::new(),
            bearer: None,
        }
    }

    /// Base URL of the mock backend, without a trailing slash.
    pub fn url(&self) -> String {
        self.server.url()
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// Calls `assert()` on all mocks created by the TestBuilder to verify
    /// they were invoked the expected number of times.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub(crate) fn authorize(&self, mock: Mock) -> Mock {
        match &self.bearer {
            Some(token) => mock.match_header("authorization", format!("Bearer {}", token).as_str()),
            None => mock,
        }
    }
}
