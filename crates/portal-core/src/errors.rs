use portal_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using PortalError
pub type Result<T> = std::result::Result<T, PortalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the portal. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidName,
    InvalidEmail,
    InvalidStatus,
    InvalidRole,
    InvalidAmount,
    NotFound,
    AlreadyExists,
    ConstraintViolation,

    // Batch provisioning
    UnknownAssignee,
    BatchIntegrityViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Concurrency,

    // Auth
    Unauthorised,
    Forbidden,

    // Internal
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::InvalidName => "ERR_INVALID_NAME",
            ErrorKind::InvalidEmail => "ERR_INVALID_EMAIL",
            ErrorKind::InvalidStatus => "ERR_INVALID_STATUS",
            ErrorKind::InvalidRole => "ERR_INVALID_ROLE",
            ErrorKind::InvalidAmount => "ERR_INVALID_AMOUNT",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ErrorKind::UnknownAssignee => "ERR_UNKNOWN_ASSIGNEE",
            ErrorKind::BatchIntegrityViolation => "ERR_BATCH_INTEGRITY_VIOLATION",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Concurrency => "ERR_CONCURRENCY",
            ErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ErrorKind::Forbidden => "ERR_FORBIDDEN",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct OpError {
    kind: ErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    collection: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<OpError>>,
}

impl OpError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            collection: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add collection context
    pub fn with_collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: OpError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the collection context, if any
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&OpError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for OpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(collection) = &self.collection {
            write!(f, " (collection: {})", collection)?;
        }
        Ok(())
    }
}

impl std::error::Error for OpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Comprehensive error taxonomy for portal operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PortalError {
    // ===== Not Found =====
    /// Member not found in store
    #[error("Member not found: {member_id}")]
    MemberNotFound { member_id: String },

    /// Client not found in store
    #[error("Client not found: {client_id}")]
    ClientNotFound { client_id: String },

    /// Project not found in store
    #[error("Project not found: {project_id}")]
    ProjectNotFound { project_id: String },

    /// Task not found in store
    #[error("Task not found: {task_id}")]
    TaskNotFound { task_id: String },

    /// Invoice not found in store
    #[error("Invoice not found: {invoice_id}")]
    InvoiceNotFound { invoice_id: String },

    /// Campaign not found in store
    #[error("Campaign not found: {campaign_id}")]
    CampaignNotFound { campaign_id: String },

    /// Festival calendar entry not found in store
    #[error("Festival event not found: {festival_id}")]
    FestivalNotFound { festival_id: String },

    /// Notification not found in store
    #[error("Notification not found: {notification_id}")]
    NotificationNotFound { notification_id: String },

    /// FAQ entry not found in store
    #[error("FAQ entry not found: {faq_id}")]
    FaqNotFound { faq_id: String },

    /// Salary record not found in store
    #[error("Salary record not found: {salary_id}")]
    SalaryNotFound { salary_id: String },

    // ===== Validation Errors =====
    /// Invalid name (empty or whitespace-only)
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Invalid title (empty or whitespace-only)
    #[error("Invalid title: {reason}")]
    InvalidTitle { reason: String },

    /// Invalid email address
    #[error("Invalid email: {email}")]
    InvalidEmail { email: String },

    /// Unrecognised status value
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Unrecognised role value
    #[error("Invalid role: {role}")]
    InvalidRole { role: String },

    /// Unrecognised priority value
    #[error("Invalid priority: {priority}")]
    InvalidPriority { priority: String },

    /// Invalid monetary amount (negative or non-finite)
    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// Invoice must carry at least one line item
    #[error("Invoice has no line items")]
    EmptyInvoiceItems,

    /// Invalid status transition
    #[error("Invalid status transition for {entity_id}: {from} -> {to}")]
    InvalidStatusTransition {
        entity_id: String,
        from: String,
        to: String,
    },

    // ===== Provisioning Errors =====
    /// Provisioning batch references a member that does not exist
    #[error("Unknown assignee: member {member_id} does not exist")]
    UnknownAssignee { member_id: String },

    /// Provisioning produced a state that fails its own integrity check
    #[error("Batch atomicity breach: {message}")]
    BatchAtomicityBreach { message: String },

    // ===== Auth Errors =====
    /// Caller identity is missing
    #[error("Unauthorised: {message}")]
    Unauthorised { message: String },

    /// Caller role is insufficient for the operation
    #[error("Forbidden: role '{role}' cannot perform {action}")]
    Forbidden { role: String, action: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from PortalError to OpError
///
/// This maps the domain error taxonomy onto the canonical error facility so
/// outer layers (REST, CLI) can classify errors by stable code.
impl From<PortalError> for OpError {
    fn from(err: PortalError) -> Self {
        match err {
            PortalError::MemberNotFound { member_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(member_id)
                .with_collection("users")
                .with_message("Member not found"),

            PortalError::ClientNotFound { client_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(client_id)
                .with_collection("clients")
                .with_message("Client not found"),

            PortalError::ProjectNotFound { project_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(project_id)
                .with_collection("projects")
                .with_message("Project not found"),

            PortalError::TaskNotFound { task_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(task_id)
                .with_collection("tasks")
                .with_message("Task not found"),

            PortalError::InvoiceNotFound { invoice_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(invoice_id)
                .with_collection("invoices")
                .with_message("Invoice not found"),

            PortalError::CampaignNotFound { campaign_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(campaign_id)
                .with_collection("campaigns")
                .with_message("Campaign not found"),

            PortalError::FestivalNotFound { festival_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(festival_id)
                .with_collection("festival_calendar")
                .with_message("Festival event not found"),

            PortalError::NotificationNotFound { notification_id } => {
                OpError::new(ErrorKind::NotFound)
                    .with_entity_id(notification_id)
                    .with_collection("notifications")
                    .with_message("Notification not found")
            }

            PortalError::FaqNotFound { faq_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(faq_id)
                .with_collection("chatbot_faqs")
                .with_message("FAQ entry not found"),

            PortalError::SalaryNotFound { salary_id } => OpError::new(ErrorKind::NotFound)
                .with_entity_id(salary_id)
                .with_collection("salaries")
                .with_message("Salary record not found"),

            PortalError::InvalidName { reason } => OpError::new(ErrorKind::InvalidName)
                .with_message(format!("Invalid name: {}", reason)),

            PortalError::InvalidTitle { reason } => OpError::new(ErrorKind::InvalidInput)
                .with_message(format!("Invalid title: {}", reason)),

            PortalError::InvalidEmail { email } => OpError::new(ErrorKind::InvalidEmail)
                .with_message(format!("Invalid email: {}", email)),

            PortalError::InvalidStatus { status } => OpError::new(ErrorKind::InvalidStatus)
                .with_message(format!("Invalid status: {}", status)),

            PortalError::InvalidRole { role } => {
                OpError::new(ErrorKind::InvalidRole).with_message(format!("Invalid role: {}", role))
            }

            PortalError::InvalidPriority { priority } => OpError::new(ErrorKind::InvalidInput)
                .with_message(format!("Invalid priority: {}", priority)),

            PortalError::InvalidAmount { reason } => OpError::new(ErrorKind::InvalidAmount)
                .with_message(format!("Invalid amount: {}", reason)),

            PortalError::EmptyInvoiceItems => OpError::new(ErrorKind::InvalidInput)
                .with_collection("invoices")
                .with_message("Invoice has no line items"),

            PortalError::InvalidStatusTransition { entity_id, from, to } => {
                OpError::new(ErrorKind::InvalidStatus)
                    .with_entity_id(entity_id)
                    .with_message(format!("Invalid status transition: {} -> {}", from, to))
            }

            PortalError::UnknownAssignee { member_id } => OpError::new(ErrorKind::UnknownAssignee)
                .with_entity_id(member_id)
                .with_collection("users")
                .with_message("Assigned member does not exist"),

            PortalError::BatchAtomicityBreach { message } => {
                OpError::new(ErrorKind::BatchIntegrityViolation)
                    .with_op("provision_project")
                    .with_message(format!("Batch atomicity breach: {}", message))
            }

            PortalError::Unauthorised { message } => {
                OpError::new(ErrorKind::Unauthorised).with_message(message)
            }

            PortalError::Forbidden { role, action } => OpError::new(ErrorKind::Forbidden)
                .with_op(action)
                .with_message(format!("Role '{}' is not permitted", role)),

            PortalError::Serialization { message } => {
                OpError::new(ErrorKind::Serialization).with_message(message)
            }

            PortalError::Internal { message } => {
                OpError::new(ErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to PortalError
impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization {
            message: err.to_string(),
        }
    }
}
