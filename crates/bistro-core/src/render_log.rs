//! Render-time logging collaborator.
//!
//! Pages report render events through this trait instead of writing to a
//! global logger, so callers decide where the messages go.

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait RenderLog: Send + Sync {
    fn info(&self, component: &str, message: &str);
}

/// Forwards render events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRenderLog;

impl RenderLog for TracingRenderLog {
    fn info(&self, component: &str, message: &str) {
        tracing::info!(component = component, "{}", message);
    }
}

/// Discards render events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderLog;

impl RenderLog for NoopRenderLog {
    fn info(&self, _component: &str, _message: &str) {}
}
