use thiserror::Error;

/// Counts model requests made on behalf of one workflow invocation.
/// Nothing here is shared between requests; each workflow run starts fresh.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Usage {
    requests: u32,
}

impl Usage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }

    /// Reserve one request against the limit. Fails without incrementing
    /// once the budget is spent, so the counter never exceeds the limit.
    pub fn record(&mut self, limits: &UsageLimits) -> Result<(), UsageExceeded> {
        if self.requests >= limits.request_limit {
            return Err(UsageExceeded { limit: limits.request_limit });
        }
        self.requests += 1;
        Ok(())
    }
}

/// Ceiling on model calls for one workflow invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UsageLimits {
    pub request_limit: u32,
}

impl Default for UsageLimits {
    fn default() -> Self {
        Self { request_limit: 15 }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("model call budget of {limit} requests is exhausted")]
pub struct UsageExceeded {
    pub limit: u32,
}
