use std::collections::VecDeque;

pub(crate) const TRACE_LOG_TARGET: &str = "form_binder";

#[derive(Debug, Clone)]
pub(crate) struct TraceState {
    pub(crate) enabled: bool,
    pub(crate) logs: VecDeque<String>,
    pub(crate) log_limit: usize,
    pub(crate) to_log: bool,
}

impl Default for TraceState {
    fn default() -> Self {
        Self {
            enabled: false,
            logs: VecDeque::new(),
            log_limit: 10_000,
            to_log: true,
        }
    }
}

impl TraceState {
    pub(crate) fn line(&mut self, line: String) {
        if !self.enabled {
            return;
        }
        if self.to_log {
            log::debug!(target: TRACE_LOG_TARGET, "{line}");
        }
        if self.logs.len() >= self.log_limit {
            self.logs.pop_front();
        }
        self.logs.push_back(line);
    }

    pub(crate) fn truncate_to_limit(&mut self) {
        while self.logs.len() > self.log_limit {
            self.logs.pop_front();
        }
    }
}
