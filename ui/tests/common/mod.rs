use std::time::Duration;

use egui_kittest::Harness;
use roster_business::FetchUsersCompute;
use roster_ui::RosterApp;
use roster_ui::state::{MEMBERS_PATH, State};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How long to yield to the mock server between frames.
pub const DEFAULT_NETWORK_WAIT_MS: u64 = 20;

pub async fn yield_wait_for_network(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// `n` members named `Member 01`, `Member 02`, ...; every third one is an admin.
pub fn members(n: usize) -> serde_json::Value {
    let members: Vec<_> = (1..=n)
        .map(|i| {
            serde_json::json!({
                "id": i.to_string(),
                "name": format!("Member {i:02}"),
                "email": format!("member{i:02}@mailinator.com"),
                "role": if i % 3 == 0 { "admin" } else { "member" },
            })
        })
        .collect();
    serde_json::Value::Array(members)
}

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, RosterApp>,
}

impl<'a> TestCtx<'a> {
    pub async fn new_app(body: serde_json::Value) -> Self {
        Self::with_response(ResponseTemplate::new(200).set_body_json(body)).await
    }

    #[allow(unused)]
    pub async fn new_app_with_status(status_code: u16) -> Self {
        Self::with_response(ResponseTemplate::new(status_code)).await
    }

    /// Start the app without waiting for the fetch to resolve.
    #[allow(unused)]
    pub async fn new_app_pending(body: serde_json::Value) -> Self {
        Self::start(ResponseTemplate::new(200).set_body_json(body)).await
    }

    async fn with_response(template: ResponseTemplate) -> Self {
        let mut ctx = Self::start(template).await;
        ctx.settle().await;
        ctx
    }

    async fn start(template: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(MEMBERS_PATH))
            .respond_with(template)
            .mount(&mock_server)
            .await;

        let state = State::test(mock_server.uri());
        let app = RosterApp::new(state);
        let harness = Harness::new_eframe(|_| app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    pub fn harness_mut(&mut self) -> &mut Harness<'a, RosterApp> {
        &mut self.harness
    }

    /// Step frames until the initial fetch resolved, then render the result.
    async fn settle(&mut self) {
        for _ in 0..100 {
            self.harness.step();
            let pending = self
                .harness
                .state()
                .state
                .ctx
                .cached::<FetchUsersCompute>()
                .is_none_or(FetchUsersCompute::is_loading);
            if !pending {
                break;
            }
            yield_wait_for_network(DEFAULT_NETWORK_WAIT_MS).await;
        }
        step_frames(&mut self.harness, 3);
    }
}

/// Run a few frames so collected actions are applied and the view is re-rendered.
#[allow(unused)]
pub fn step_frames(harness: &mut Harness<'_, RosterApp>, frames: usize) {
    for _ in 0..frames {
        harness.step();
    }
}
