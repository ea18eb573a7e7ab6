use stafftrack::{
    gateway::{ApiGateway, HeadlessNavigator, ReqwestTransport},
    session::{MemoryStorage, Session, SessionStore},
    Config,
};
use stafftrack_test_utils::prelude::*;

/// Gateway pointed at a mock backend, with its session storage and navigator exposed for
/// inspection.
pub struct TestClient {
    pub gateway: ApiGateway<ReqwestTransport>,
    pub navigator: HeadlessNavigator,
    pub storage: MemoryStorage,
}

impl TestClient {
    /// Client without a session.
    pub fn new(setup: &TestSetup) -> Self {
        Self::with_url(&setup.url())
    }

    /// Client without a session talking to `url`.
    pub fn with_url(url: &str) -> Self {
        let config = Config::from_vars(Some(url), None).unwrap();
        let storage = MemoryStorage::new();
        let navigator = HeadlessNavigator::new();

        let gateway = ApiGateway::new(
            &config,
            ReqwestTransport::default(),
            SessionStore::new(storage.clone()),
            navigator.clone(),
        );

        Self {
            gateway,
            navigator,
            storage,
        }
    }

    /// Client already logged in as the standard test user.
    pub fn signed_in(setup: &TestSetup) -> Self {
        let client = Self::new(setup);
        client
            .gateway
            .session()
            .save(&Session {
                token: TEST_TOKEN.to_string(),
                username: TEST_USERNAME.to_string(),
                company_name: TEST_COMPANY.to_string(),
            })
            .unwrap();

        client
    }
}
