//! Print the initial page state.

use genae_storefront::{Storefront, StorefrontConfig};

use super::write_update;

/// Render the empty page with configuration from the environment.
///
/// # Errors
///
/// Returns an error if configuration is invalid, rendering fails, or stdout
/// cannot be written.
pub fn initial_page(pretty: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let page = Storefront::new(config)?;

    let mut out = std::io::stdout().lock();
    write_update(&mut out, &page.snapshot(), pretty)
}
