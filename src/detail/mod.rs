//! # Detail Synchronizer
//!
//! Manages one product shown in a detail context: loading it, editing its fields,
//! and adding or removing entries in its embedded comment list.
//!
//! There is no comment endpoint. Every change is a read-modify-write of the whole
//! product: a new product value is built from the last confirmed copy (see
//! [`draft`]), submitted through [`CatalogClient::update`], and the server's
//! response replaces the local copy. A failed submission leaves the local copy as
//! it was.
//!
//! No version check is made before writing. Two synchronizers working on the same
//! product overwrite each other; the last write wins.
//!
//! ```rust,no_run
//! # use catalog_sync::clients::CatalogClient;
//! # use catalog_sync::detail::DetailSynchronizer;
//! # async fn demo(catalog: CatalogClient) -> Result<(), Box<dyn std::error::Error>> {
//! let mut detail = DetailSynchronizer::new(catalog, 1);
//! detail.load().await?;
//! detail.add_comment("Arrived in one piece").await?;
//! if let Some(notice) = detail.take_notice() {
//!     println!("{}", notice.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod draft;
pub mod error;
pub mod state;

pub use error::DetailError;
pub use state::{DetailPhase, Notice, Severity};

use crate::clients::{ActorClient, CatalogClient};
use crate::model::{CommentId, Product, ProductDraft, ProductId};
use tracing::{info, instrument, warn};

/// Display timestamp for new comments, in local time.
pub fn local_timestamp() -> String {
    chrono::Local::now()
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// State and actions for a single product.
pub struct DetailSynchronizer {
    catalog: CatalogClient,
    id: ProductId,
    phase: DetailPhase,
    product: Option<Product>,
    error: Option<String>,
    notice: Option<Notice>,
    clock: fn() -> String,
}

impl DetailSynchronizer {
    pub fn new(catalog: CatalogClient, id: impl Into<ProductId>) -> Self {
        Self {
            catalog,
            id: id.into(),
            phase: DetailPhase::Unloaded,
            product: None,
            error: None,
            notice: None,
            clock: local_timestamp,
        }
    }

    /// Replace the source of comment timestamps.
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn phase(&self) -> DetailPhase {
        self.phase
    }

    /// The last product confirmed by the server.
    pub fn product(&self) -> Option<&Product> {
        self.product.as_ref()
    }

    /// Message of the last failed load or save.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Take the pending notice, leaving none.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Fetch the product from the server.
    ///
    /// Ends in `Loaded`, `NotFound` or `LoadError`.
    #[instrument(skip(self), fields(id = %self.id))]
    pub async fn load(&mut self) -> Result<Product, DetailError> {
        if self.phase == DetailPhase::Editing {
            return Err(self.invalid("load"));
        }
        self.phase = DetailPhase::Loading;
        match self.catalog.fetch_one(self.id.clone()).await {
            Ok(Some(product)) => {
                info!("Product loaded");
                self.phase = DetailPhase::Loaded;
                self.error = None;
                self.product = Some(product.clone());
                Ok(product)
            }
            Ok(None) => {
                warn!("Product not found");
                self.phase = DetailPhase::NotFound;
                self.product = None;
                self.notice = Some(Notice::error("No product found"));
                Err(DetailError::NotFound(self.id.clone()))
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "Failed to load product");
                self.phase = DetailPhase::LoadError;
                self.product = None;
                self.error = Some(message.clone());
                self.notice = Some(Notice::error("Failed to load product"));
                Err(DetailError::Load(message))
            }
        }
    }

    /// Open the edit dialog, seeded with the confirmed product.
    pub fn begin_edit(&mut self) -> Result<ProductDraft, DetailError> {
        let draft = ProductDraft::from_product(self.confirmed("edit")?);
        self.phase = DetailPhase::Editing;
        Ok(draft)
    }

    /// Close the edit dialog without saving.
    pub fn cancel_edit(&mut self) -> Result<(), DetailError> {
        if self.phase != DetailPhase::Editing {
            return Err(self.invalid("cancel edit"));
        }
        self.phase = DetailPhase::Loaded;
        Ok(())
    }

    /// Submit the edited fields. Comments are kept as they are.
    ///
    /// An invalid draft keeps the dialog open and makes no request.
    #[instrument(skip(self, draft), fields(id = %self.id))]
    pub async fn save_product(&mut self, draft: ProductDraft) -> Result<Product, DetailError> {
        if self.phase != DetailPhase::Editing {
            return Err(self.invalid("save"));
        }
        let current = self.product.as_ref().ok_or(DetailError::NotLoaded(self.id.clone()))?;
        let draft = draft.normalized();
        if let Err(message) = draft.validate() {
            self.notice = Some(Notice::error(message.clone()));
            return Err(DetailError::Validation(message));
        }
        let candidate = current.with_draft(draft);
        self.commit(candidate, "Product updated", "Failed to update product")
            .await
    }

    /// Append a comment and submit the whole product.
    #[instrument(skip(self), fields(id = %self.id))]
    pub async fn add_comment(&mut self, text: &str) -> Result<Product, DetailError> {
        let current = self.confirmed("add a comment")?;
        let candidate = match draft::append_comment(current, text, (self.clock)()) {
            Ok(candidate) => candidate,
            Err(e) => {
                self.notice = Some(Notice::error(e.to_string()));
                return Err(e);
            }
        };
        self.commit(candidate, "Comment added", "Failed to add comment")
            .await
    }

    /// Drop one comment and submit the whole product.
    #[instrument(skip(self), fields(id = %self.id))]
    pub async fn remove_comment(&mut self, comment_id: &CommentId) -> Result<Product, DetailError> {
        let current = self.confirmed("delete a comment")?;
        let candidate = match draft::remove_comment(current, comment_id) {
            Ok(candidate) => candidate,
            Err(e) => {
                self.notice = Some(Notice::error("Failed to delete comment"));
                return Err(e);
            }
        };
        self.commit(candidate, "Comment deleted", "Failed to delete comment")
            .await
    }

    async fn commit(
        &mut self,
        candidate: Product,
        success: &str,
        failure: &str,
    ) -> Result<Product, DetailError> {
        self.phase = DetailPhase::Saving;
        match self.catalog.update(candidate).await {
            Ok(saved) => {
                info!(comments = saved.comments.len(), "{success}");
                self.phase = DetailPhase::Loaded;
                self.error = None;
                self.product = Some(saved.clone());
                self.notice = Some(Notice::success(success));
                Ok(saved)
            }
            Err(e) => {
                let message = e.to_string();
                warn!(error = %message, "{failure}");
                self.phase = DetailPhase::SaveError;
                self.error = Some(message.clone());
                self.notice = Some(Notice::error(failure));
                Err(DetailError::Save(message))
            }
        }
    }

    fn confirmed(&self, action: &'static str) -> Result<&Product, DetailError> {
        if !self.phase.is_ready() {
            return Err(self.invalid(action));
        }
        self.product
            .as_ref()
            .ok_or_else(|| DetailError::NotLoaded(self.id.clone()))
    }

    fn invalid(&self, action: &'static str) -> DetailError {
        DetailError::InvalidPhase {
            action,
            phase: self.phase.as_str(),
        }
    }
}
