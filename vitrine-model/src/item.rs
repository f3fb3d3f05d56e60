use crate::ids::ItemId;

/// A single showcase entry on the focus rail.
///
/// Items are immutable: the catalog is fixed when the rail is constructed
/// and entries are never created or destroyed at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RailItem {
    pub id: ItemId,
    pub title: String,
    /// Short blurb shown beside the rail.
    pub description: Option<String>,
    /// Expanded copy for the detail view.
    pub long_description: Option<String>,
    /// Small category label (e.g. "E-Commerce").
    pub meta: Option<String>,
    /// Image reference; resolution is the renderer's concern.
    pub image_src: String,
    /// Outbound link to the live project, when one exists.
    pub href: Option<String>,
    pub tags: Vec<String>,
    /// Icon glyph names for the tech stack row.
    pub tech_icons: Vec<String>,
}

impl RailItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        image_src: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            long_description: None,
            meta: None,
            image_src: image_src.into(),
            href: None,
            tags: Vec::new(),
            tech_icons: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_long_description(
        mut self,
        long_description: impl Into<String>,
    ) -> Self {
        self.long_description = Some(long_description.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tech_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_icons = icons.into_iter().map(Into::into).collect();
        self
    }
}
