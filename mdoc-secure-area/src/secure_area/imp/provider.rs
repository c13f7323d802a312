use std::{collections::HashMap, sync::Arc};

use crate::{
    config::SecureAreaConfig,
    key_options::KeyOptions,
    secure_area::{provider::SecureAreaProvider, SecureArea},
};

pub struct SecureAreaProviderImpl {
    secure_areas: HashMap<String, Arc<dyn SecureArea>>,
    config: SecureAreaConfig,
}

impl SecureAreaProviderImpl {
    pub fn new(
        secure_areas: HashMap<String, Arc<dyn SecureArea>>,
        config: SecureAreaConfig,
    ) -> Self {
        Self {
            secure_areas,
            config,
        }
    }
}

impl SecureAreaProvider for SecureAreaProviderImpl {
    fn get_secure_area(&self, name: &str) -> Option<Arc<dyn SecureArea>> {
        self.secure_areas.get(name).cloned()
    }

    fn get_default_secure_area_name(&self) -> String {
        self.config.default_secure_area.to_owned()
    }

    fn get_default_key_options(&self) -> KeyOptions {
        self.config.default_key_options.to_owned()
    }
}
