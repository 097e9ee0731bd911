//! Backend controller hook - shares the menu with the rendering layer.

use nova_sdk::events;
use tracing::debug;

use crate::config::Config;
use crate::error::MenuResult;
use crate::menu::{MenuAssembler, MenuItem};
use crate::tap::RequestContext;

/// View variable holding the assembled menu.
pub const MENU_ITEMS: &str = "menuItems";

/// Runs before every backend action and prepares shared view data.
#[derive(Debug, Clone)]
pub struct BackendController {
    assembler: MenuAssembler,
    menu_event: String,
    theme: String,
    layout: String,
}

impl BackendController {
    /// Create a controller firing the backend menu event.
    pub fn new(assembler: MenuAssembler) -> Self {
        Self {
            assembler,
            menu_event: events::BACKEND_MENU.to_string(),
            theme: "AdminLite".to_string(),
            layout: "Backend".to_string(),
        }
    }

    /// Create a controller using the configured event, theme and layout.
    pub fn from_config(assembler: MenuAssembler, config: &Config) -> Self {
        Self {
            assembler,
            menu_event: config.menu_event.clone(),
            theme: config.theme.clone(),
            layout: config.layout.clone(),
        }
    }

    pub fn menu_event(&self) -> &str {
        &self.menu_event
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    /// Menu for the request; empty without firing the event for anonymous users.
    pub fn menu_items(&self, request: &RequestContext) -> MenuResult<Vec<MenuItem>> {
        match request.current_user() {
            Some(user) => {
                self.assembler
                    .get_menu_items(&self.menu_event, user, request.current_url())
            }
            None => {
                debug!(url = %request.current_url(), "anonymous request, empty backend menu");
                Ok(Vec::new())
            }
        }
    }

    /// Share `menuItems`, `theme` and `layout` into the view context.
    pub fn initialize(&self, request: &RequestContext, view: &mut tera::Context) -> MenuResult<()> {
        let items = self.menu_items(request)?;
        view.insert(MENU_ITEMS, &items);
        view.insert("theme", &self.theme);
        view.insert("layout", &self.layout);
        Ok(())
    }
}
