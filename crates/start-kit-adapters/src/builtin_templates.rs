//! Built-in template catalog.
//!
//! [`builtin_templates`] lists the templates that ship with create-start-kit.
//! [`builtin_catalog`] layers configured templates on top: an entry whose key
//! matches a built-in replaces it in place, new keys are appended in the
//! order given.

use tracing::{debug, info, instrument};

use start_kit_core::domain::{DomainError, TemplateCatalog, TemplateDescriptor};

/// The templates that ship with the binary, in display order.
pub fn builtin_templates() -> Vec<TemplateDescriptor> {
    vec![
        TemplateDescriptor::new(
            "start-kit",
            "Tanstack Start",
            "https://github.com/FerVillanuevas/start-kit",
            "Tanstack Start, Vite, and Tailwind CSS",
        ),
        TemplateDescriptor::new(
            "mob-kit",
            "Mobile Kit",
            "https://github.com/FerVillanuevas/mob-kit",
            "Build with love and Expo",
        ),
    ]
}

/// Build the catalog from the built-ins plus `extra`.
///
/// # Errors
///
/// [`DomainError::EmptyCatalog`] can only happen if the built-in list is
/// emptied and nothing is configured.
#[instrument(skip_all, fields(extra = extra.len()))]
pub fn builtin_catalog(extra: Vec<TemplateDescriptor>) -> Result<TemplateCatalog, DomainError> {
    for template in &extra {
        debug!(key = %template.key, repo = %template.source_location, "configured template");
    }

    let catalog = TemplateCatalog::new(builtin_templates().into_iter().chain(extra))?;
    info!(count = catalog.len(), "Template catalog ready");
    Ok(catalog)
}
