use std::sync::Arc;

use super::{error::SecureAreaProviderError, SecureArea};
use crate::key_options::KeyOptions;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
pub trait SecureAreaProvider: Send + Sync {
    fn get_secure_area(&self, name: &str) -> Option<Arc<dyn SecureArea>>;

    fn get_default_secure_area_name(&self) -> String;

    /// Options used when the caller has none of its own.
    fn get_default_key_options(&self) -> KeyOptions;

    /// Secure area named by `options`, or the default one when unnamed.
    fn get_secure_area_for(
        &self,
        options: &KeyOptions,
    ) -> Result<Arc<dyn SecureArea>, SecureAreaProviderError> {
        let name = match &options.secure_area_name {
            Some(name) => name.to_owned(),
            None => {
                let name = self.get_default_secure_area_name();
                tracing::debug!(%name, "No secure area requested, using default");
                name
            }
        };

        self.get_secure_area(&name)
            .ok_or(SecureAreaProviderError::UnknownSecureArea(name))
    }
}
