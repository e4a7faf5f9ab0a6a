//! Menu controller
//!
//! Owns the instance list and the status bar title, and turns menu
//! interactions into colima/docker commands. It knows nothing about the
//! tray itself: the tray renders [`MenuEntry`] values and feeds clicks back
//! as [`MenuAction`]s.
//!
//! Everything runs on the caller's thread and blocks on each command.

use tracing::{info, warn};

use crate::config::Config;
use crate::context::{context_name_for, detect_active_context};
use crate::error::ResultExt;
use crate::instances::{list_instances, Instance};
use crate::runner::CommandRunner;

/// Menu id prefix for instance items; the instance name follows it.
const INSTANCE_ID_PREFIX: &str = "instance:";
pub const QUIT_ID: &str = "quit";
pub const QUIT_LABEL: &str = "quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Listing,
    Displaying,
    Switching,
}

/// A click on a menu item, decoded from its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Select(String),
    Quit,
}

impl MenuAction {
    /// Parse a menu item id produced by [`MenuAction::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        if id == QUIT_ID {
            return Some(Self::Quit);
        }
        id.strip_prefix(INSTANCE_ID_PREFIX)
            .filter(|name| !name.is_empty())
            .map(|name| Self::Select(name.to_string()))
    }

    pub fn id(&self) -> String {
        match self {
            Self::Select(name) => format!("{INSTANCE_ID_PREFIX}{name}"),
            Self::Quit => QUIT_ID.to_string(),
        }
    }
}

/// One selectable instance row of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: String,
    pub label: String,
}

/// What the caller should do after handling an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Title and menu may have changed
    Redraw,
    /// The click did not refer to a listed instance
    Ignored,
    Quit,
}

pub struct MenuController<R: CommandRunner> {
    runner: R,
    config: Config,
    instances: Vec<Instance>,
    title: String,
    state: ControllerState,
}

impl<R: CommandRunner> MenuController<R> {
    pub fn new(runner: R, config: Config) -> Self {
        let title = config.placeholder_title.clone();
        Self {
            runner,
            config,
            instances: Vec::new(),
            title,
            state: ControllerState::Idle,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// Initial listing plus active-context detection.
    ///
    /// Returns the detected instance, if any; the title shows its arch.
    pub fn start(&mut self) -> Option<Instance> {
        self.refresh();
        let active = detect_active_context(&self.runner, &self.config, &self.instances);
        if let Some(instance) = &active {
            self.title = instance.arch.clone();
        }
        info!(
            event_type = "controller",
            action = "started",
            instances = self.instances.len(),
            active = active.as_ref().map(|i| i.name.as_str()),
            "Menu controller started"
        );
        active
    }

    /// Re-list instances, replacing the held list. Called on every menu open.
    pub fn refresh(&mut self) {
        self.state = ControllerState::Listing;
        self.instances = list_instances(&self.runner, &self.config);
        self.state = ControllerState::Displaying;
    }

    /// Menu rows for the held list, in list order.
    pub fn menu_entries(&self) -> Vec<MenuEntry> {
        self.instances
            .iter()
            .map(|instance| MenuEntry {
                id: MenuAction::Select(instance.name.clone()).id(),
                label: instance.menu_label(),
            })
            .collect()
    }

    pub fn find_instance(&self, name: &str) -> Option<&Instance> {
        self.instances.iter().find(|instance| instance.name == name)
    }

    /// Dispatch a decoded menu click.
    pub fn handle(&mut self, action: &MenuAction, on_title: impl FnMut(&str)) -> Outcome {
        match action {
            MenuAction::Quit => {
                info!(event_type = "controller", action = "quit", "Quit requested");
                Outcome::Quit
            }
            MenuAction::Select(name) => match self.select(name, on_title) {
                Some(_) => Outcome::Redraw,
                None => Outcome::Ignored,
            },
        }
    }

    /// Make `name` the only running instance and point docker at it.
    ///
    /// Every held instance is stopped or started in list order, each command
    /// awaited before the next; failures are logged and skipped. `on_title`
    /// sees every title change, starting with the switching placeholder.
    ///
    /// Returns `None` without running anything if `name` is not listed.
    pub fn select(&mut self, name: &str, mut on_title: impl FnMut(&str)) -> Option<Instance> {
        let Some(selected) = self.find_instance(name).cloned() else {
            warn!(name, "Selected instance is not in the current listing");
            return None;
        };

        info!(
            event_type = "controller",
            action = "switch",
            instance = %selected.name,
            "Switching instance"
        );
        self.state = ControllerState::Switching;
        self.set_title(self.config.switching_title.clone(), &mut on_title);

        for instance in &self.instances {
            let command = if instance.name == selected.name {
                self.config.start_command(&instance.name)
            } else {
                self.config.stop_command(&instance.name)
            };
            self.runner.run(&command).warn_on_err();
        }

        let context = context_name_for(&self.config.context_base, &selected.name);
        self.runner
            .run(&self.config.context_use_command(&context))
            .warn_on_err();

        self.set_title(selected.arch.clone(), &mut on_title);
        self.state = ControllerState::Displaying;
        Some(selected)
    }

    fn set_title(&mut self, title: String, on_title: &mut impl FnMut(&str)) {
        self.title = title;
        on_title(&self.title);
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
