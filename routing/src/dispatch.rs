//! Transport-free request dispatch.
//!
//! The surrounding server layer owns the wire format; this module only
//! models what the container needs (a path plus named parameters) and turns
//! a routed handler invocation into a plain response.

use std::collections::HashMap;

use heddle::{Bean, Value};
use tracing::debug;

use crate::config::DispatcherConfig;
use crate::table::RouteTable;

/// An incoming HTTP-like request: a path plus named parameters.
#[derive(Debug, Clone, Default)]
pub struct Request {
  pub path: String,
  pub params: HashMap<String, String>,
}

impl Request {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      params: HashMap::new(),
    }
  }

  pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.params.insert(name.into(), value.into());
    self
  }
}

/// The outcome of dispatching one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
  pub status: u16,
  pub body: String,
}

impl Response {
  pub fn is_success(&self) -> bool {
    self.status == 200
  }
}

/// Routes requests to handler beans through the route table.
pub struct Dispatcher {
  table: RouteTable,
  config: DispatcherConfig,
}

impl Dispatcher {
  pub fn new(table: RouteTable) -> Self {
    Self::with_config(table, DispatcherConfig::default())
  }

  pub fn with_config(table: RouteTable, config: DispatcherConfig) -> Self {
    Self { table, config }
  }

  pub fn table(&self) -> &RouteTable {
    &self.table
  }

  /// Handles one request: strip the base path, look up the route, build the
  /// argument list from the declared parameter names, invoke the handler.
  ///
  /// Parameters are extracted by declared name in declared order; a missing
  /// parameter is passed as `Value::Null`. An unroutable path yields the
  /// configured 404 response; a handler failure the configured 500 response.
  pub fn handle(&self, request: &Request) -> Response {
    let path = match request.path.strip_prefix(&self.config.base_path) {
      Some(path) => path,
      None => {
        debug!("{} is outside base path {}", request.path, self.config.base_path);
        return self.not_found();
      }
    };

    let entry = match self.table.lookup(path) {
      Some(entry) => entry,
      None => {
        debug!("no route for {}", path);
        return self.not_found();
      }
    };

    let args: Vec<Value> = entry
      .params
      .iter()
      .map(|name| match request.params.get(name) {
        Some(value) => Value::Str(value.clone()),
        None => Value::Null,
      })
      .collect();

    match entry.instance.invoke(&entry.method, &args) {
      Ok(value) => Response {
        status: 200,
        body: value.to_string(),
      },
      Err(e) => Response {
        status: 500,
        body: format!("{}: {}", self.config.error_body, e),
      },
    }
  }

  fn not_found(&self) -> Response {
    Response {
      status: 404,
      body: self.config.not_found_body.clone(),
    }
  }
}
