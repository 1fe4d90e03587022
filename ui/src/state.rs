use log::warn;
use roster_business::{FetchState, RosterConfig, register};
use roster_states::StateCtx;

/// Path of the member list below a test server's base URL.
pub const MEMBERS_PATH: &str = "/members.json";

/// The main application state.
pub struct State {
    /// The state context for business logic.
    pub ctx: StateCtx,
}

impl Default for State {
    fn default() -> Self {
        let config = RosterConfig::from_env().unwrap_or_else(|err| {
            warn!("Ignoring roster environment config: {err}");
            RosterConfig::default()
        });
        Self::with_config(config)
    }
}

impl State {
    pub fn with_config(config: RosterConfig) -> Self {
        let mut ctx = StateCtx::new();
        register(&mut ctx, config, FetchState::default());

        Self { ctx }
    }

    /// State pointed at `{base_url}/members.json`.
    pub fn test(base_url: String) -> Self {
        Self::with_config(RosterConfig::new(format!("{base_url}{MEMBERS_PATH}")))
    }
}
