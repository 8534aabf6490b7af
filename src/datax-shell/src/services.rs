//! Management services listed by `help`.

/// A management service, shown as `lower_name  name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementService {
    name: String,
    lower_name: String,
}

impl ManagementService {
    /// Create a service entry; the lowercase name is derived from `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let lower_name = name.to_lowercase();
        Self { name, lower_name }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercase name, used as the invocable form.
    pub fn lower_name(&self) -> &str {
        &self.lower_name
    }
}

/// Ordered list of management services. Order is preserved as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCatalog {
    services: Vec<ManagementService>,
}

impl ServiceCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a service.
    pub fn push(&mut self, service: ManagementService) {
        self.services.push(service);
    }

    /// Iterate services in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ManagementService> {
        self.services.iter()
    }

    /// Number of services.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl FromIterator<ManagementService> for ServiceCatalog {
    fn from_iter<I: IntoIterator<Item = ManagementService>>(iter: I) -> Self {
        Self {
            services: iter.into_iter().collect(),
        }
    }
}

impl Extend<ManagementService> for ServiceCatalog {
    fn extend<I: IntoIterator<Item = ManagementService>>(&mut self, iter: I) {
        self.services.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_name_derived() {
        let svc = ManagementService::new("ZoneMaster");
        assert_eq!(svc.name(), "ZoneMaster");
        assert_eq!(svc.lower_name(), "zonemaster");
    }

    #[test]
    fn test_catalog_keeps_order() {
        let catalog: ServiceCatalog = ["Table", "Node", "Access"]
            .into_iter()
            .map(ManagementService::new)
            .collect();

        let names: Vec<_> = catalog.iter().map(ManagementService::name).collect();
        assert_eq!(names, vec!["Table", "Node", "Access"]);
        assert_eq!(catalog.len(), 3);
    }
}
