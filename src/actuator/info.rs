// Start of file: /src/actuator/info.rs

// * Info model: contributors write details into a shared builder.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Info {
    details: Map<String, Value>,
}

impl Info {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    pub fn details(&self) -> &Map<String, Value> {
        &self.details
    }
}

#[derive(Debug, Default)]
pub struct InfoBuilder {
    content: Map<String, Value>,
}

impl InfoBuilder {
    pub fn with_detail(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.content.insert(key.into(), value.into());
        self
    }

    pub fn with_details(&mut self, details: Map<String, Value>) -> &mut Self {
        self.content.extend(details);
        self
    }

    pub fn build(self) -> Info {
        Info {
            details: self.content,
        }
    }
}

pub trait InfoContributor: Send + Sync {
    fn contribute(&self, builder: &mut InfoBuilder);
}

#[derive(Default, Clone)]
pub struct InfoRegistry {
    contributors: Vec<Arc<dyn InfoContributor>>,
}

impl InfoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<C>(&mut self, contributor: C)
    where
        C: InfoContributor + 'static,
    {
        self.contributors.push(Arc::new(contributor));
    }

    // ? Contributors run in registration order, so later keys overwrite earlier ones
    pub fn info(&self) -> Info {
        let mut builder: InfoBuilder = InfoBuilder::default();
        for contributor in &self.contributors {
            contributor.contribute(&mut builder);
        }
        builder.build()
    }
}


// End of file: /src/actuator/info.rs
