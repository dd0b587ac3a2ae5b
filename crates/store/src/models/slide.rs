//! Carousel slide record.

use meteor_core::SlideId;
use serde::{Deserialize, Serialize};

use crate::record::Record;

/// A hero-carousel slide. Independent collection from products, same
/// lifecycle shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Unique id, assigned by the backing store.
    pub id: SlideId,
    /// Image URI.
    pub image: String,
    /// Headline.
    pub title: String,
    /// Supporting copy.
    pub description: String,
}

/// Create payload for a slide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSlide {
    pub image: String,
    pub title: String,
    pub description: String,
}

/// Partial update for a slide.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlidePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Slide {
    type Id = SlideId;
    type Draft = NewSlide;
    type Patch = SlidePatch;

    const TABLE: &'static str = "slides";
    const STORAGE_KEY: &'static str = "meteor_slides_v1";
    const ENTITY: &'static str = "slide";

    fn id(&self) -> SlideId {
        self.id
    }

    fn from_draft(draft: NewSlide, id: SlideId) -> Self {
        Self {
            id,
            image: draft.image,
            title: draft.title,
            description: draft.description,
        }
    }

    fn apply(&mut self, patch: SlidePatch) {
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}
