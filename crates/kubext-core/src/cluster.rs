//! Cluster-type probing used by manifest selection

/// Reports whether the connected cluster is of a flavour this extension does
/// not target (an OpenShift cluster, for the Kubernetes extension).
pub trait ClusterProbe {
    fn is_incompatible_cluster_type(&self) -> bool;
}

impl<F: Fn() -> bool> ClusterProbe for F {
    fn is_incompatible_cluster_type(&self) -> bool {
        self()
    }
}

/// A probe with a fixed answer, for offline use and tests.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StaticProbe {
    incompatible: bool,
}

impl StaticProbe {
    /// A plain Kubernetes cluster.
    pub fn kubernetes() -> Self {
        Self { incompatible: false }
    }

    /// An OpenShift cluster.
    pub fn openshift() -> Self {
        Self { incompatible: true }
    }
}

impl ClusterProbe for StaticProbe {
    fn is_incompatible_cluster_type(&self) -> bool {
        self.incompatible
    }
}
