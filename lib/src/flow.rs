//! Application flow: upload → processing → editor → preview → share.
//!
//! A producer walks the steps in order. A consumer who opens a share
//! address with a valid token enters directly at preview in read-only
//! mode, where the editing and sharing steps are unreachable.

use crate::menu::MenuDocument;
use std::fmt;

/// The screen the application is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStep {
    Upload,
    Processing,
    Editor,
    Preview,
    Share,
}

impl fmt::Display for AppStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppStep::Upload => write!(f, "upload"),
            AppStep::Processing => write!(f, "processing"),
            AppStep::Editor => write!(f, "editor"),
            AppStep::Preview => write!(f, "preview"),
            AppStep::Share => write!(f, "share"),
        }
    }
}

/// The single user-facing message for any share token that fails to
/// decode. Decode failures are never differentiated for the user.
pub const INVALID_LINK_MESSAGE: &str = "Invalid or expired menu link.";

/// A transition was requested that the current step does not allow.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Cannot {action} from the {step} step")]
pub struct FlowError {
    step: AppStep,
    action: &'static str,
}

/// Linear editing flow with a read-only consumer entry point.
#[derive(Debug)]
pub struct AppFlow {
    step: AppStep,
    document: Option<MenuDocument>,
    customer_view: bool,
    error: Option<String>,
}

impl Default for AppFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl AppFlow {
    /// Fresh producer session, starting at upload.
    pub fn new() -> Self {
        AppFlow {
            step: AppStep::Upload,
            document: None,
            customer_view: false,
            error: None,
        }
    }

    /// Consumer entry: a share address carried a token that decoded. The
    /// session lands directly in a read-only preview.
    pub fn for_customer(document: MenuDocument) -> Self {
        AppFlow {
            step: AppStep::Preview,
            document: Some(document),
            customer_view: true,
            error: None,
        }
    }

    /// Entry via an address whose token failed to decode: back at upload
    /// with the invalid-link message showing.
    pub fn invalid_link() -> Self {
        AppFlow {
            error: Some(INVALID_LINK_MESSAGE.to_owned()),
            ..Self::new()
        }
    }

    pub fn step(&self) -> AppStep {
        self.step
    }

    pub fn document(&self) -> Option<&MenuDocument> {
        self.document.as_ref()
    }

    pub fn is_customer_view(&self) -> bool {
        self.customer_view
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn begin_processing(&mut self) -> Result<(), FlowError> {
        self.expect(AppStep::Upload, "start processing")?;
        self.error = None;
        self.step = AppStep::Processing;
        Ok(())
    }

    pub fn extraction_succeeded(&mut self, document: MenuDocument) -> Result<(), FlowError> {
        self.expect(AppStep::Processing, "accept an extracted menu")?;
        self.document = Some(document);
        self.step = AppStep::Editor;
        Ok(())
    }

    /// Extraction failed: reset to upload and surface the collaborator's
    /// message verbatim.
    pub fn extraction_failed(&mut self, message: impl Into<String>) -> Result<(), FlowError> {
        self.expect(AppStep::Processing, "report an extraction failure")?;
        self.error = Some(message.into());
        self.step = AppStep::Upload;
        Ok(())
    }

    pub fn save_edits(&mut self, document: MenuDocument) -> Result<(), FlowError> {
        self.expect(AppStep::Editor, "save edits")?;
        self.document = Some(document);
        self.step = AppStep::Preview;
        Ok(())
    }

    pub fn back_to_editor(&mut self) -> Result<(), FlowError> {
        self.expect_producer("open the editor")?;
        self.expect(AppStep::Preview, "open the editor")?;
        self.step = AppStep::Editor;
        Ok(())
    }

    pub fn open_share(&mut self) -> Result<(), FlowError> {
        self.expect_producer("open sharing")?;
        self.expect(AppStep::Preview, "open sharing")?;
        self.step = AppStep::Share;
        Ok(())
    }

    pub fn back_to_preview(&mut self) -> Result<(), FlowError> {
        self.expect(AppStep::Share, "return to preview")?;
        self.step = AppStep::Preview;
        Ok(())
    }

    /// Abandon the current pass and return to upload. The document is
    /// kept so a producer can re-enter the editor later.
    pub fn restart(&mut self) -> Result<(), FlowError> {
        self.expect_producer("restart")?;
        self.step = AppStep::Upload;
        self.error = None;
        Ok(())
    }

    fn expect(&self, expected: AppStep, action: &'static str) -> Result<(), FlowError> {
        if self.step != expected {
            return Err(FlowError {
                step: self.step,
                action,
            });
        }
        Ok(())
    }

    fn expect_producer(&self, action: &'static str) -> Result<(), FlowError> {
        if self.customer_view {
            return Err(FlowError {
                step: self.step,
                action,
            });
        }
        Ok(())
    }
}
