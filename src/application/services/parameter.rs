//! Parameter store facade
//!
//! Get, bulk-get, search and create operations over an injected
//! [`ParameterStore`]. Creating an existing parameter asks the injected
//! [`Confirmer`] before overwriting.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    CreateOutcome, Parameter, ParameterType, PutParameter, GET_BATCH_SIZE,
    OVERWRITE_CONFIRMATION, SEARCH_PAGE_SIZE,
};
use crate::infrastructure::traits::{Confirmer, ParameterStore};
use crate::infrastructure::StoreError;

/// Parameter store facade.
pub struct ParameterService {
    store: Arc<dyn ParameterStore>,
    confirmer: Arc<dyn Confirmer>,
}

impl ParameterService {
    /// Create a new parameter service.
    pub fn new(store: Arc<dyn ParameterStore>, confirmer: Arc<dyn Confirmer>) -> Self {
        Self { store, confirmer }
    }

    /// Create a parameter, asking before overwriting an existing one.
    ///
    /// A rejection other than "already exists" on the first attempt is
    /// reported as [`CreateOutcome::Failed`], not as an error. Failures while
    /// resolving a conflict (reading the existing value, asking the user,
    /// the overwrite itself) are returned as errors.
    ///
    /// # Arguments
    /// * `name` - Parameter name
    /// * `value` - Value to store
    /// * `kind` - Plain or encrypted storage
    #[instrument(skip(self, value))]
    pub fn create_parameter(
        &self,
        name: &str,
        value: &str,
        kind: ParameterType,
    ) -> ApplicationResult<CreateOutcome> {
        let request = PutParameter::new(name, value, kind);

        match self.store.put_parameter(&request) {
            Ok(()) => Ok(CreateOutcome::Created),
            Err(StoreError::AlreadyExists(_)) => self.resolve_conflict(&request),
            Err(e) => {
                warn!("create_parameter: {}", e);
                Ok(CreateOutcome::Failed {
                    message: e.to_string(),
                })
            }
        }
    }

    fn resolve_conflict(&self, request: &PutParameter) -> ApplicationResult<CreateOutcome> {
        let existing = self.get_parameter(&request.name)?;
        let answer = self
            .confirmer
            .ask_overwrite(&existing)
            .map_err(ApplicationError::Confirmation)?;

        if answer.trim_end_matches(['\r', '\n']) != OVERWRITE_CONFIRMATION {
            debug!("resolve_conflict: declined for {}", request.name);
            return Ok(CreateOutcome::NotOverwritten);
        }

        self.store.put_parameter(&request.overwriting())?;
        Ok(CreateOutcome::Updated)
    }

    /// Fetch one parameter with its value decrypted.
    #[instrument(skip(self))]
    pub fn get_parameter(&self, name: &str) -> ApplicationResult<Parameter> {
        Ok(self.store.get_parameter(name)?)
    }

    /// Fetch many parameters, decrypted, preserving input order.
    ///
    /// Names go out in batches of [`GET_BATCH_SIZE`], one request per batch,
    /// sequentially. An empty input makes no request.
    #[instrument(skip(self, names), fields(count = names.len()))]
    pub fn get_parameters(&self, names: &[String]) -> ApplicationResult<Vec<Parameter>> {
        let mut results = Vec::with_capacity(names.len());

        for batch in names.chunks(GET_BATCH_SIZE) {
            debug!("get_parameters: batch of {}", batch.len());
            results.extend(self.store.get_parameters(batch)?);
        }

        Ok(results)
    }

    /// Find all parameter names containing `query`.
    ///
    /// Follows the store's cursor until it reports no further page. Names
    /// keep the order in which the store returned them.
    #[instrument(skip(self))]
    pub fn search_parameters(&self, query: &str) -> ApplicationResult<Vec<String>> {
        let mut names = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .store
                .describe_parameters(query, SEARCH_PAGE_SIZE, next_token.as_deref())?;
            names.extend(page.names);

            next_token = page.next_token;
            if next_token.is_none() {
                break;
            }
        }

        debug!("search_parameters: {} matches", names.len());
        Ok(names)
    }
}
