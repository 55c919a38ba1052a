// File: src/views.rs
// Purpose: View component catalogue and the file-backed view loader

use anyhow::{Context, Result};
use async_trait::async_trait;
use mailroute_views::{LazyView, View, ViewError, ViewHandle, ViewLoader, ViewRef};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// View components the mail UI routes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MailView {
    MailBox,
    Compose,
    ViewMail,
    PartnerList,
    AddPartner,
    LogView,
    PModeEdit,
}

impl MailView {
    pub const ALL: [MailView; 7] = [
        MailView::MailBox,
        MailView::Compose,
        MailView::ViewMail,
        MailView::PartnerList,
        MailView::AddPartner,
        MailView::LogView,
        MailView::PModeEdit,
    ];

    /// Component name, also the file stem under the views directory
    pub fn component(&self) -> &'static str {
        match self {
            MailView::MailBox => "MailBoxView",
            MailView::Compose => "ComposeMail",
            MailView::ViewMail => "ViewMail",
            MailView::PartnerList => "PartnerList",
            MailView::AddPartner => "AddPartner",
            MailView::LogView => "LogView",
            MailView::PModeEdit => "PModeEdit",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.html", self.component())
    }

    /// The mail box is the landing view and is loaded at startup
    pub fn is_eager(&self) -> bool {
        matches!(self, MailView::MailBox)
    }

    /// Build the reference for this view, loading it now if it is eager
    pub async fn reference(&self, views_dir: &Path) -> Result<ViewRef, ViewError> {
        let loader = TemplateLoader::for_view(views_dir, *self);
        if self.is_eager() {
            ViewRef::preload(self.component(), loader).await
        } else {
            Ok(ViewRef::Lazy(LazyView::new(self.component(), loader)))
        }
    }
}

/// A view component read from disk
#[derive(Debug, Clone)]
pub struct TemplateView {
    pub name: String,
    pub path: PathBuf,
    pub content: String,
}

impl View for TemplateView {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.content
    }
}

/// Loads one view component file
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    name: String,
    path: PathBuf,
}

impl TemplateLoader {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn for_view(views_dir: &Path, view: MailView) -> Self {
        Self::new(view.component(), views_dir.join(view.file_name()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ViewLoader for TemplateLoader {
    async fn load(&self) -> Result<ViewHandle> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read view component: {:?}", self.path))?;

        Ok(Arc::new(TemplateView {
            name: self.name.clone(),
            path: self.path.clone(),
            content,
        }))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
