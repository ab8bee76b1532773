//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Entity identifiers
pub const FIELD_CLASS_NAME: &str = "class_name";
pub const FIELD_PACKAGE_NAME: &str = "package_name";
pub const FIELD_PROPERTY_NAME: &str = "property_name";
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_PATH: &str = "path";

// Collection sizes
pub const FIELD_CLASS_COUNT: &str = "class_count";
pub const FIELD_DIFFERENCES: &str = "differences";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";
pub const FIELD_ERR_MESSAGE: &str = "err_message";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
