use std::{collections::HashMap, sync::Arc};

use super::{CommandHandler, HandlerKind};

#[derive(Clone)]
pub struct HandlerRecord {
    pub kind: HandlerKind,
    pub name: String,
    pub handler: Arc<dyn CommandHandler>,
}
impl HandlerRecord {
    pub fn new(
        kind: HandlerKind,
        name: impl Into<String>,
        handler: impl CommandHandler + 'static,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            handler: Arc::new(handler),
        }
    }
}

/// Supplies the handlers to register at startup
pub trait HandlerSource {
    fn handlers(&self) -> Vec<HandlerRecord>;
}

/// Handlers by kind and name. Names are case-insensitive; registering a name
/// twice replaces the earlier handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<(HandlerKind, String), Arc<dyn CommandHandler>>,
}
impl HandlerRegistry {
    pub fn from_source(source: &dyn HandlerSource) -> Self {
        let mut registry = Self::default();
        for record in source.handlers() {
            registry.register(record.kind, &record.name, record.handler);
        }
        registry
    }

    /// Returns the handler that was replaced, if any
    pub fn register(
        &mut self,
        kind: HandlerKind,
        name: &str,
        handler: Arc<dyn CommandHandler>,
    ) -> Option<Arc<dyn CommandHandler>> {
        let previous = self.handlers.insert((kind, name.to_lowercase()), handler);
        if previous.is_some() {
            tracing::warn!("Replacing previously registered {kind} handler `{name}`");
        } else {
            tracing::debug!("Registered {kind} handler `{name}`");
        }
        previous
    }

    pub fn lookup(&self, kind: HandlerKind, name: &str) -> Option<Arc<dyn CommandHandler>> {
        self.handlers.get(&(kind, name.to_lowercase())).cloned()
    }

    /// Registered names of one kind, sorted
    pub fn names(&self, kind: HandlerKind) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .handlers
            .keys()
            .filter(|(k, _)| *k == kind)
            .map(|(_, name)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
