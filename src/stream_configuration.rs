//! Configuration types for stream materialization

use serde::{Deserialize, Serialize};

use crate::error::{StreamError, StreamResult};

/// Largest `initial_capacity` accepted by [`CollectConfig::validate`]
pub const MAX_INITIAL_CAPACITY: usize = 1024 * 1024;

/// Settings for [`IterStream::to_vec_bounded`](crate::IterStream::to_vec_bounded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectConfig {
    /// Capacity reserved before the first element is pulled
    pub initial_capacity: usize,
    /// Largest number of elements accepted; `None` means unbounded
    pub max_elements: Option<usize>,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
            max_elements: Some(1024 * 1024),
        }
    }
}

impl CollectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the capacity reserved up front
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the element limit
    pub fn max_elements(mut self, max_elements: usize) -> Self {
        self.max_elements = Some(max_elements);
        self
    }

    /// Remove the element limit
    pub fn unbounded(mut self) -> Self {
        self.max_elements = None;
        self
    }

    /// Parse a JSON document; missing fields take their default value.
    pub fn from_json(json: &str) -> StreamResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject capacities above [`MAX_INITIAL_CAPACITY`] or above the
    /// element limit.
    pub fn validate(&self) -> StreamResult<()> {
        if self.initial_capacity > MAX_INITIAL_CAPACITY {
            return Err(StreamError::InvalidConfig(format!(
                "initial_capacity ({}) exceeds {}",
                self.initial_capacity, MAX_INITIAL_CAPACITY
            )));
        }
        match self.max_elements {
            Some(max) if self.initial_capacity > max => Err(StreamError::InvalidConfig(format!(
                "initial_capacity ({}) exceeds max_elements ({})",
                self.initial_capacity, max
            ))),
            _ => Ok(()),
        }
    }
}
