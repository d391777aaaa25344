use fint_dependencies::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock ResourceReader serving resources from memory and recording requests
#[derive(Default, Clone)]
pub struct MockResourceReader {
    pub resources: HashMap<String, String>,
    pub requested: Arc<Mutex<Vec<String>>>,
    pub should_fail: bool,
}

impl MockResourceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resource(mut self, name: &str, content: &str) -> Self {
        self.resources.insert(name.to_string(), content.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

impl ResourceReader for MockResourceReader {
    fn read_resource(&self, name: &str) -> Result<String> {
        self.requested.lock().unwrap().push(name.to_string());
        if self.should_fail {
            anyhow::bail!("Mock resource read failure");
        }
        self.resources.get(name).cloned().ok_or_else(|| {
            ReportError::ResourceNotFound {
                name: name.to_string(),
                searched: "mock".to_string(),
            }
            .into()
        })
    }
}
