//! Observable state of a data-fetching coordinator.

/// What a view needs to render one remote resource.
///
/// `request_id` increases with every request a coordinator issues; a response
/// is only written back while its id is still the current one.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub request_id: u64,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            request_id: 0,
        }
    }
}

impl<T> FetchState<T> {
    /// Returns `true` once a request has completed successfully.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        !self.loading && self.data.is_some()
    }

    pub(crate) fn begin(&mut self) -> u64 {
        self.request_id += 1;
        self.loading = true;
        self.request_id
    }

    pub(crate) fn resolve(&mut self, data: T) {
        self.data = Some(data);
        self.error = None;
        self.loading = false;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.data = None;
        self.error = Some(message);
        self.loading = false;
    }
}
