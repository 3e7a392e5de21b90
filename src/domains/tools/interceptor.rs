//! Interceptors run by the dispatcher around every tool invocation.

use std::sync::Arc;
use tracing::{info, warn};

use super::error::ToolError;

/// Hook called before and after each tool invocation.
pub trait ToolInterceptor: Send + Sync {
    /// Called before any parameter is resolved.
    fn on_enter(&self, tool: &str);

    /// Called once the tool has produced its result or error.
    fn on_exit(&self, tool: &str, outcome: Result<&str, &ToolError>);
}

/// Logs tool entry and exit through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingInterceptor;

impl ToolInterceptor for TracingInterceptor {
    fn on_enter(&self, tool: &str) {
        info!(tool, "Entering tool: {}", tool);
    }

    fn on_exit(&self, tool: &str, outcome: Result<&str, &ToolError>) {
        match outcome {
            Ok(_) => info!(tool, "Exiting tool: {}", tool),
            Err(e) => warn!(tool, error = %e, "Exiting tool: {} (failed)", tool),
        }
    }
}

/// Ordered list of interceptors.
///
/// `on_enter` runs in insertion order, `on_exit` in reverse.
#[derive(Clone, Default)]
pub struct InterceptorChain {
    interceptors: Vec<Arc<dyn ToolInterceptor>>,
}

impl InterceptorChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, interceptor: Arc<dyn ToolInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    pub fn enter(&self, tool: &str) {
        for interceptor in &self.interceptors {
            interceptor.on_enter(tool);
        }
    }

    pub fn exit(&self, tool: &str, outcome: Result<&str, &ToolError>) {
        for interceptor in self.interceptors.iter().rev() {
            interceptor.on_exit(tool, outcome);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Records every hook call as a string event.
    #[derive(Default)]
    pub struct RecordingInterceptor {
        label: &'static str,
        events: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingInterceptor {
        pub fn new(label: &'static str, events: Arc<Mutex<Vec<String>>>) -> Self {
            Self { label, events }
        }
    }

    impl ToolInterceptor for RecordingInterceptor {
        fn on_enter(&self, tool: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:enter:{}", self.label, tool));
        }

        fn on_exit(&self, tool: &str, outcome: Result<&str, &ToolError>) {
            let status = if outcome.is_ok() { "ok" } else { "err" };
            self.events
                .lock()
                .unwrap()
                .push(format!("{}:exit:{}:{}", self.label, tool, status));
        }
    }
}
