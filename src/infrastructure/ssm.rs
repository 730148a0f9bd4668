//! AWS SSM Parameter Store backend
//!
//! Wraps the async `aws-sdk-ssm` client behind the blocking
//! [`ParameterStore`] trait. Each call runs to completion on a private
//! current-thread runtime.

use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_ssm::config::Region;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::types::{self as ssm, ParameterStringFilter};
use aws_sdk_ssm::Client;
use tokio::runtime::{Builder, Runtime};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::domain::{Parameter, ParameterPage, ParameterType, PutParameter};
use crate::infrastructure::error::{InfraError, InfraResult, StoreError, StoreResult};
use crate::infrastructure::traits::ParameterStore;

/// Parameter store backed by AWS Systems Manager.
pub struct SsmParameterStore {
    client: Client,
    runtime: Runtime,
}

impl SsmParameterStore {
    /// Build a client for the named AWS profile.
    ///
    /// Credentials are resolved here, so an unknown profile or one without
    /// usable credentials fails before any request is sent.
    pub fn connect(profile: &str, settings: &Settings) -> InfraResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| InfraError::io("start async runtime", e))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).profile_name(profile);
        if let Some(region) = &settings.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint) = &settings.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = runtime.block_on(loader.load());
        debug!(
            "connect: profile={}, region={:?}",
            profile,
            sdk_config.region()
        );

        let provider = sdk_config.credentials_provider().ok_or_else(|| {
            InfraError::credentials(profile, "no credentials provider configured")
        })?;
        runtime
            .block_on(provider.provide_credentials())
            .map_err(|e| InfraError::credentials(profile, DisplayErrorContext(&e).to_string()))?;

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
        })
    }
}

impl ParameterStore for SsmParameterStore {
    fn put_parameter(&self, request: &PutParameter) -> StoreResult<()> {
        debug!(
            "put_parameter: name={}, type={}, overwrite={}",
            request.name, request.kind, request.overwrite
        );
        let result = self.runtime.block_on(
            self.client
                .put_parameter()
                .name(&request.name)
                .value(&request.value)
                .r#type(to_ssm_type(request.kind))
                .data_type("text")
                .overwrite(request.overwrite)
                .send(),
        );

        match result {
            Ok(_) => Ok(()),
            Err(e) => {
                let err = e.into_service_error();
                if err.is_parameter_already_exists() {
                    Err(StoreError::AlreadyExists(request.name.clone()))
                } else {
                    Err(remote_error("PutParameter", &err))
                }
            }
        }
    }

    fn get_parameter(&self, name: &str) -> StoreResult<Parameter> {
        debug!("get_parameter: name={}", name);
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameter()
                    .name(name)
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| {
                let err = e.into_service_error();
                if err.is_parameter_not_found() {
                    StoreError::NotFound(name.to_string())
                } else {
                    remote_error("GetParameter", &err)
                }
            })?;

        output
            .parameter()
            .map(from_ssm_parameter)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    fn get_parameters(&self, names: &[String]) -> StoreResult<Vec<Parameter>> {
        debug!("get_parameters: {} names", names.len());
        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters()
                    .set_names(Some(names.to_vec()))
                    .with_decryption(true)
                    .send(),
            )
            .map_err(|e| remote_error("GetParameters", &e.into_service_error()))?;

        if !output.invalid_parameters().is_empty() {
            warn!(
                "get_parameters: store rejected names: {:?}",
                output.invalid_parameters()
            );
        }

        Ok(output
            .parameters()
            .iter()
            .map(from_ssm_parameter)
            .collect())
    }

    fn describe_parameters(
        &self,
        query: &str,
        page_size: i32,
        next_token: Option<&str>,
    ) -> StoreResult<ParameterPage> {
        debug!(
            "describe_parameters: query={}, page_size={}, continued={}",
            query,
            page_size,
            next_token.is_some()
        );
        let filter = ParameterStringFilter::builder()
            .key("Name")
            .option("Contains")
            .values(query)
            .build()
            .map_err(|e| remote_error("DescribeParameters", &e))?;

        let output = self
            .runtime
            .block_on(
                self.client
                    .describe_parameters()
                    .parameter_filters(filter)
                    .max_results(page_size)
                    .set_next_token(next_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| remote_error("DescribeParameters", &e.into_service_error()))?;

        Ok(ParameterPage {
            names: output
                .parameters()
                .iter()
                .filter_map(|meta| meta.name().map(str::to_string))
                .collect(),
            next_token: output.next_token().map(str::to_string),
        })
    }
}

fn to_ssm_type(kind: ParameterType) -> ssm::ParameterType {
    match kind {
        ParameterType::Plain => ssm::ParameterType::String,
        ParameterType::Encrypted => ssm::ParameterType::SecureString,
    }
}

fn from_ssm_parameter(p: &ssm::Parameter) -> Parameter {
    Parameter {
        name: p.name().unwrap_or_default().to_string(),
        value: p.value().unwrap_or_default().to_string(),
        kind: p
            .r#type()
            .map(|t| ParameterType::from_wire(t.as_str()))
            .unwrap_or_default(),
    }
}

fn remote_error<E: std::error::Error>(operation: &str, err: &E) -> StoreError {
    StoreError::remote(operation, DisplayErrorContext(err).to_string())
}
