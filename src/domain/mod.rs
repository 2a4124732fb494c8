pub mod document;
pub mod error;
pub mod field_spec;
pub mod layout;
pub mod service;
pub mod settings;
pub mod transform;

pub use document::{Document, DocumentFormat};
pub use error::AppError;
pub use field_spec::{FieldKind, FieldSpec};
pub use layout::{InstallLayout, TemplateCatalog, TemplateKind};
pub use service::ServiceName;
pub use settings::{ConfigurationRecord, DEFAULT_PREFIX, FieldValue, ServiceSettings};
pub use transform::{TransformReport, transform};
