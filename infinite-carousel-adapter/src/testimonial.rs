use alloc::format;
use alloc::string::String;

use crate::CarouselItem;

/// Number of description characters used as a fallback identity.
const KEY_PREFIX_CHARS: usize = 10;

/// A testimonial card record.
///
/// With `feature = "serde"`, this deserializes from the host page's JSON, accepting both the CMS
/// field names (`person`, `photoURL`, `logoURL`) and the widget defaults (`name`, `image`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Testimonial {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub id: Option<u64>,
    #[cfg_attr(feature = "serde", serde(alias = "name"))]
    pub person: String,
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub job_title: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub company: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "photoURL",
            alias = "image",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub photo_url: Option<String>,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "logoURL", default, skip_serializing_if = "Option::is_none")
    )]
    pub logo_url: Option<String>,
}

impl Testimonial {
    pub fn new(person: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            person: person.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_job_title(mut self, job_title: impl Into<String>) -> Self {
        self.job_title = Some(job_title.into());
        self
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn with_photo_url(mut self, url: impl Into<String>) -> Self {
        self.photo_url = Some(url.into());
        self
    }

    pub fn with_logo_url(mut self, url: impl Into<String>) -> Self {
        self.logo_url = Some(url.into());
        self
    }

    /// The line under the author's name: `"Company, Job title"`, or whichever of the two exists.
    pub fn attribution(&self) -> Option<String> {
        let company = self.company.as_deref().filter(|s| !s.is_empty());
        let job_title = self.job_title.as_deref().filter(|s| !s.is_empty());
        match (company, job_title) {
            (Some(c), Some(j)) => Some(format!("{c}, {j}")),
            (Some(s), None) | (None, Some(s)) => Some(String::from(s)),
            (None, None) => None,
        }
    }
}

impl CarouselItem for Testimonial {
    type Key = String;

    /// The record id, or the start of the description for CMS records that carry no id.
    fn key(&self) -> String {
        match self.id {
            Some(id) => format!("{id}"),
            None => self.description.chars().take(KEY_PREFIX_CHARS).collect(),
        }
    }
}
