//! The event bridge: polls the API on a schedule and feeds provider events
//! into the console, then carries out the console's outward commands.

use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::app::Console;
use crate::error::Result;
use crate::models::{Database, Endpoint, Schema, TableData};
use crate::state::{ConsoleCommand, ConsoleSettings};

use super::manager::ApiClient;
use super::provider::Provider;
use super::schedule::{PollSchedule, PollTarget};

pub struct EventBridge {
    client: ApiClient,
    static_prefix: String,
    sqlite_prefix: String,
    schedule: PollSchedule,
    endpoints: Provider<Endpoint>,
    databases: Provider<Database>,
    schemas: Provider<Schema>,
    table_data: Provider<TableData>,
    schema: Option<String>,
}

impl EventBridge {
    pub fn new(client: ApiClient, settings: &ConsoleSettings, now: Instant) -> Self {
        Self {
            client,
            static_prefix: settings.server.static_prefix.clone(),
            sqlite_prefix: settings.server.sqlite_prefix.clone(),
            schedule: PollSchedule::new(
                settings.polling.static_interval(),
                settings.polling.database_interval(),
                now,
            ),
            endpoints: Provider::new("static"),
            databases: Provider::new("sqlite"),
            schemas: Provider::new("schema"),
            table_data: Provider::new("tabledata"),
            schema: None,
        }
    }

    pub fn next_deadline(&self) -> Instant {
        self.schedule.next_deadline()
    }

    /// Poll everything that is due, then run the commands the console queued.
    pub fn poll_due(&mut self, now: Instant, console: &mut Console) {
        let due = self.schedule.due(now);
        if !due.is_empty() {
            self.poll(&due, now, console);
        }
        self.run_commands(now, console);
    }

    fn poll(&mut self, targets: &[PollTarget], now: Instant, console: &mut Console) {
        let static_path = targets
            .contains(&PollTarget::Static)
            .then(|| format!("{}/", self.static_prefix));
        let database_path = targets
            .contains(&PollTarget::Database)
            .then(|| format!("{}/", self.sqlite_prefix));
        let schema_path = match &self.schema {
            Some(name) if targets.contains(&PollTarget::Schema) => {
                Some(format!("{}/{}", self.sqlite_prefix, name))
            }
            _ => None,
        };

        let client = &self.client;
        let (endpoints, database, schema) = client.block_on(async {
            futures::join!(
                fetch_if::<Endpoint>(client, static_path),
                fetch_if::<Database>(client, database_path),
                fetch_if::<Schema>(client, schema_path),
            )
        });

        if let Some(result) = endpoints {
            for event in self.endpoints.receive(result) {
                report(self.endpoints.name(), console.handle_endpoint(event));
            }
        }
        if let Some(result) = database {
            for event in self.databases.receive(result) {
                report(self.databases.name(), console.handle_database(event));
            }
        }
        if let Some(result) = schema {
            for event in self.schemas.receive(result) {
                report(self.schemas.name(), console.handle_schema(event));
            }
        }

        for target in targets {
            self.schedule.mark(*target, now);
        }
    }

    fn run_commands(&mut self, now: Instant, console: &mut Console) {
        loop {
            let commands = console.take_commands();
            if commands.is_empty() {
                break;
            }
            for command in commands {
                match command {
                    ConsoleCommand::LoadSchema(name) => {
                        log::info!("Loading schema {name}");
                        if self.schema.as_deref() != Some(name.as_str()) {
                            self.schemas.reset();
                        }
                        self.schema = Some(name);
                        self.schedule.arm_schema(now);
                        self.poll(&[PollTarget::Schema], now, console);
                    }
                    ConsoleCommand::LoadTableData { schema, table } => {
                        log::info!("Loading table {schema}.{table}");
                        let path = format!("{}/{}/{}", self.sqlite_prefix, schema, table);
                        let result = self.client.fetch::<TableData>(&path);
                        for event in self.table_data.receive(result) {
                            report(self.table_data.name(), console.handle_table_data(event));
                        }
                    }
                }
            }
        }
    }
}

async fn fetch_if<T: DeserializeOwned>(
    client: &ApiClient,
    path: Option<String>,
) -> Option<Result<Vec<T>>> {
    match path {
        Some(path) => Some(client.fetch_async(&path).await),
        None => None,
    }
}

// A view rejecting an update must not stop the other views from refreshing.
fn report(kind: &str, result: Result<()>) {
    if let Err(err) = result {
        log::warn!("{kind} update rejected: {err}");
    }
}
