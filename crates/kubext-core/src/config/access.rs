//! Cluster access configuration

use kubext_blocks::{Bind, Binding, Field, Result};
use serde::Serialize;

/// How to reach the target cluster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_cert_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_cert_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_algo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_key_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_store_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_store_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_store_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_store_passphrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_concurrent_requests_per_host: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_certs: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_proxy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_password: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub no_proxy: Vec<String>,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u32>,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_timeout: Option<u32>,
}

impl Bind for ClusterConfiguration {
    const KIND: &'static str = "access";

    fn bind_field(&mut self, field: Field<'_>) -> Result<Binding> {
        match field.name() {
            "username" => self.username = Some(field.string()?),
            "password" => self.password = Some(field.string()?),
            "masterUrl" => self.master_url = Some(field.string()?),
            "apiVersion" => self.api_version = Some(field.string()?),
            "namespace" => self.namespace = Some(field.string()?),
            "caCertFile" => self.ca_cert_file = Some(field.string()?),
            "caCertData" => self.ca_cert_data = Some(field.string()?),
            "clientCertFile" => self.client_cert_file = Some(field.string()?),
            "clientCertData" => self.client_cert_data = Some(field.string()?),
            "clientKeyFile" => self.client_key_file = Some(field.string()?),
            "clientKeyData" => self.client_key_data = Some(field.string()?),
            "clientKeyAlgo" => self.client_key_algo = Some(field.string()?),
            "clientKeyPassphrase" => self.client_key_passphrase = Some(field.string()?),
            "trustStoreFile" => self.trust_store_file = Some(field.string()?),
            "trustStorePassphrase" => self.trust_store_passphrase = Some(field.string()?),
            "keyStoreFile" => self.key_store_file = Some(field.string()?),
            "keyStorePassphrase" => self.key_store_passphrase = Some(field.string()?),
            "maxConcurrentRequests" => self.max_concurrent_requests = Some(field.integer()?),
            "maxConcurrentRequestsPerHost" => {
                self.max_concurrent_requests_per_host = Some(field.integer()?)
            }
            "trustCerts" => self.trust_certs = Some(field.boolean()?),
            "httpProxy" => self.http_proxy = Some(field.string()?),
            "httpsProxy" => self.https_proxy = Some(field.string()?),
            "proxyUsername" => self.proxy_username = Some(field.string()?),
            "proxyPassword" => self.proxy_password = Some(field.string()?),
            "noProxy" => self.no_proxy = field.strings()?,
            "requestTimeout" => self.request_timeout = Some(field.integer()?),
            "connectionTimeout" => self.connection_timeout = Some(field.integer()?),
            _ => return Ok(Binding::Unknown),
        }
        Ok(Binding::Bound)
    }
}
