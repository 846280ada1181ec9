use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};
use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::components::{ComponentRegistry, NodeId};
use crate::connection::ProviderEvent;
use crate::error::Result;
use crate::models::{Database, Endpoint, Schema, TableData};
use crate::state::{ConsoleCommand, ConsoleEvent, ConsoleSettings, StatusMessage};
use crate::views::{
    ACTION_MODULES, DatabaseEvent, DatabaseView, SchemaEvent, SchemaView, TableDataView,
};

// =============================================================================
// Console
// =============================================================================

/// Outer controller: feeds provider events into the views, turns view
/// notifications into commands for the event bridge.
pub struct Console {
    settings: ConsoleSettings,
    database: DatabaseView,
    schema: SchemaView,
    table_data: TableDataView,
    endpoints: BTreeMap<String, Endpoint>,
    status: Option<StatusMessage>,
    inbox: Rc<RefCell<VecDeque<ConsoleEvent>>>,
    commands: VecDeque<ConsoleCommand>,
}

impl Console {
    pub fn new(registry: &ComponentRegistry, settings: ConsoleSettings) -> Result<Self> {
        let inbox = Rc::new(RefCell::new(VecDeque::new()));

        let mut database = DatabaseView::new(registry)?;
        {
            let inbox = inbox.clone();
            database.subscribe(move |event: &DatabaseEvent| {
                inbox.borrow_mut().push_back(ConsoleEvent::Database(event.clone()));
            });
        }

        let mut schema = SchemaView::new(registry)?;
        {
            let inbox = inbox.clone();
            schema.subscribe(move |event: &SchemaEvent| {
                inbox.borrow_mut().push_back(ConsoleEvent::Schema(event.clone()));
            });
        }

        Ok(Self {
            settings,
            database,
            schema,
            table_data: TableDataView::new(registry)?,
            endpoints: BTreeMap::new(),
            status: None,
            inbox,
            commands: VecDeque::new(),
        })
    }

    pub fn settings(&self) -> &ConsoleSettings {
        &self.settings
    }

    pub fn database(&self) -> &DatabaseView {
        &self.database
    }

    pub fn schema(&self) -> &SchemaView {
        &self.schema
    }

    pub fn table_data(&self) -> &TableDataView {
        &self.table_data
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.endpoints.values()
    }

    // -------------------------------------------------------------------------
    // Provider events
    // -------------------------------------------------------------------------

    pub fn handle_database(&mut self, event: ProviderEvent<Database>) -> Result<()> {
        match event {
            ProviderEvent::Added(_, database) => {
                log::info!("Database attached (version {})", database.version);
                // Queued first: the provider will not repeat this event.
                let schema = self.settings.display.default_schema.clone();
                self.commands.push_back(ConsoleCommand::LoadSchema(schema));
                self.database.set_database(&database)?;
            }
            ProviderEvent::Changed(_, database) => self.database.set_database(&database)?,
            ProviderEvent::Deleted(()) => {
                log::info!("Database snapshot withdrawn");
                self.status = Some(StatusMessage::info("Database is no longer reported"));
            }
            ProviderEvent::Error(message) => self.fail(message),
        }
        self.drain()
    }

    pub fn handle_schema(&mut self, event: ProviderEvent<Schema>) -> Result<()> {
        match event {
            ProviderEvent::Added(name, schema) => {
                log::info!("Schema {name} attached");
                self.schema.set_schema(&schema)?;
            }
            ProviderEvent::Changed(_, schema) => self.schema.set_schema(&schema)?,
            ProviderEvent::Deleted(name) => log::info!("Schema {name} withdrawn"),
            ProviderEvent::Error(message) => self.fail(message),
        }
        self.drain()
    }

    pub fn handle_table_data(&mut self, event: ProviderEvent<TableData>) -> Result<()> {
        match event {
            ProviderEvent::Added(_, data) | ProviderEvent::Changed(_, data) => {
                self.table_data.set_table_data(&data)?;
            }
            ProviderEvent::Deleted(key) => {
                if self.table_data.table() == Some(&key) {
                    self.table_data.clear();
                }
            }
            ProviderEvent::Error(message) => self.fail(message),
        }
        self.drain()
    }

    pub fn handle_endpoint(&mut self, event: ProviderEvent<Endpoint>) -> Result<()> {
        match event {
            ProviderEvent::Added(prefix, endpoint) => {
                log::info!("Endpoint {prefix} available at {}", endpoint.path);
                self.endpoints.insert(prefix, endpoint);
            }
            ProviderEvent::Changed(prefix, endpoint) => {
                self.endpoints.insert(prefix, endpoint);
            }
            ProviderEvent::Deleted(prefix) => {
                log::info!("Endpoint {prefix} withdrawn");
                self.endpoints.remove(&prefix);
            }
            ProviderEvent::Error(message) => self.fail(message),
        }
        Ok(())
    }

    fn fail(&mut self, message: String) {
        log::warn!("Provider error: {message}");
        self.status = Some(StatusMessage::error(message));
    }

    // -------------------------------------------------------------------------
    // User interaction
    // -------------------------------------------------------------------------

    pub fn click_schema_badge(&mut self, id: NodeId) -> Result<()> {
        self.database.click_schema(id)?;
        self.drain()
    }

    pub fn click_table_tab(&mut self, id: NodeId) -> Result<()> {
        self.schema.click_tab(id)?;
        self.drain()
    }

    pub fn request_action(&mut self, action: &str) -> Result<()> {
        self.database.click_action(action);
        self.drain()
    }

    // -------------------------------------------------------------------------
    // Notifications and commands
    // -------------------------------------------------------------------------

    fn drain(&mut self) -> Result<()> {
        loop {
            let next = self.inbox.borrow_mut().pop_front();
            let Some(event) = next else {
                return Ok(());
            };
            self.dispatch(event)?;
        }
    }

    fn dispatch(&mut self, event: ConsoleEvent) -> Result<()> {
        match event {
            ConsoleEvent::Schema(SchemaEvent::TableClicked(table)) => {
                self.schema.set_active(&table)?;
                self.commands.push_back(ConsoleCommand::LoadTableData {
                    schema: table.schema,
                    table: table.name,
                });
            }
            ConsoleEvent::Schema(SchemaEvent::SchemaChanged) => {
                let tables = self.schema.tabs().items().len();
                log::debug!("Schema {} now has {tables} tables", self.schema.name());
            }
            ConsoleEvent::Database(DatabaseEvent::SchemaSelected(name)) => {
                self.commands.push_back(ConsoleCommand::LoadSchema(name));
            }
            ConsoleEvent::Database(DatabaseEvent::ActionRequested(action)) => {
                if action == ACTION_MODULES {
                    self.database.show_modules();
                } else {
                    log::warn!("Unknown action requested: {action}");
                }
            }
        }
        Ok(())
    }

    /// Commands queued since the last call, oldest first.
    pub fn take_commands(&mut self) -> Vec<ConsoleCommand> {
        self.commands.drain(..).collect()
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status_at(Utc::now())
    }

    /// The current toast, unless it has outlived its ttl at `now`.
    pub fn status_at(&self, now: DateTime<Utc>) -> Option<&StatusMessage> {
        let ttl = self.settings.display.toast_ttl();
        self.status.as_ref().filter(|message| !message.is_expired(now, ttl))
    }
}
