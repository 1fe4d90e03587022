use std::any::Any;
use std::fmt::Debug;
use std::sync::Arc;

use ehttp::{Request, Response, Result};
use roster_states::State;

/// Transport used by [`FetchUsersCommand`](crate::FetchUsersCommand).
///
/// `on_done` may be called from another thread.
pub trait FetchService: Send + Sync + Debug {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>);
}

#[derive(Debug, Default)]
pub struct EhttpFetcher;

impl FetchService for EhttpFetcher {
    fn fetch(&self, request: Request, on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>) {
        ehttp::fetch(request, on_done);
    }
}

/// Answers every request synchronously with a canned result.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockFetcher {
    pub response: Option<Result<Response>>,
}

#[cfg(test)]
impl MockFetcher {
    pub fn ok(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Some(Ok(Response {
                url: "mock://members.json".to_owned(),
                ok: (200..300).contains(&status),
                status,
                status_text: String::new(),
                headers: Default::default(),
                bytes: body.into(),
            })),
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            response: Some(Err(message.into())),
        }
    }
}

#[cfg(test)]
impl FetchService for MockFetcher {
    fn fetch(
        &self,
        _request: Request,
        on_done: Box<dyn FnOnce(Result<Response>) + Send + 'static>,
    ) {
        match &self.response {
            Some(response) => on_done(response.clone()),
            None => on_done(Err("MockFetcher: no response set".to_owned())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchState {
    pub inner: Arc<dyn FetchService>,
}

impl FetchState {
    pub fn new(service: impl FetchService + 'static) -> Self {
        Self {
            inner: Arc::new(service),
        }
    }
}

impl Default for FetchState {
    fn default() -> Self {
        Self::new(EhttpFetcher)
    }
}

impl State for FetchState {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
