//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and owns the search dispatch. It is organized into submodules by
//! responsibility:
//!
//! - `input`: Key event handling
//! - `search`: Query dispatch and outcome application

mod input;
mod search;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::{AppModel, SearchApi};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) client: Arc<dyn SearchApi>,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, client: Arc<dyn SearchApi>) -> Self {
        Self { model, client }
    }
}
