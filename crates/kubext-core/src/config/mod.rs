//! Sub-configuration kinds declared as nested blocks
//!
//! Each kind binds from its block through an explicit field table. Field
//! names are the ones written in build scripts (`masterUrl`,
//! `filenameTypes`, ...) and are also used when the kinds are serialized.

mod access;
mod auth;
mod image;
mod machine;
mod mapping;
mod processor;
mod resource;

pub use access::ClusterConfiguration;
pub use auth::RegistryAuthConfiguration;
pub use image::{
    Assembly, AssemblyConfiguration, AssemblyFile, BuildConfiguration, ImageConfiguration,
};
pub use machine::DockerMachineConfiguration;
pub use mapping::MappingConfig;
pub use processor::ProcessorConfig;
pub use resource::{ConfigMap, ConfigMapEntry, MetaDataConfig, ResourceConfig};
