use tracing::debug;

use crate::error::{TimelineError, TimelineResult};
use crate::extensions::TimelinePlugin;
use crate::render::Renderer;

use super::TimelineEngine;
use super::validation::validate_plugin_id;

impl<R: Renderer> TimelineEngine<R> {
    /// Adds an observer. Events reach plugins in registration order.
    ///
    /// Ids must be non-empty, free of whitespace and unique per engine.
    pub fn register_plugin(&mut self, plugin: Box<dyn TimelinePlugin>) -> TimelineResult<()> {
        validate_plugin_id(plugin.id())?;
        if self.plugin_position(plugin.id()).is_some() {
            return Err(TimelineError::InvalidData(format!(
                "timeline plugin `{}` is already registered",
                plugin.id()
            )));
        }
        debug!(plugin = plugin.id(), "register timeline plugin");
        self.core.runtime.plugins.push(plugin);
        Ok(())
    }

    /// Removes the plugin with `plugin_id`; `false` when none was registered.
    pub fn unregister_plugin(&mut self, plugin_id: &str) -> bool {
        let Some(position) = self.plugin_position(plugin_id) else {
            return false;
        };
        let plugin = self.core.runtime.plugins.remove(position);
        debug!(plugin = plugin.id(), "unregister timeline plugin");
        true
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.core.runtime.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugin_position(plugin_id).is_some()
    }

    /// Registered ids in dispatch order.
    pub fn plugin_ids(&self) -> impl Iterator<Item = &str> {
        self.core.runtime.plugins.iter().map(|plugin| plugin.id())
    }

    fn plugin_position(&self, plugin_id: &str) -> Option<usize> {
        self.core
            .runtime
            .plugins
            .iter()
            .position(|plugin| plugin.id() == plugin_id)
    }
}
