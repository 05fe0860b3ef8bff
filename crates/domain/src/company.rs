//! Company — the persisted employer record, with an optional binary logo.

use serde::{Deserialize, Serialize};

use crate::error::{FirmdirError, ValidationError};
use crate::id::CompanyId;

/// An employer record.
///
/// The logo attachment is modelled as a single [`Logo`] value so the
/// binary payload and its MIME type are always both present or both
/// absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
    pub ceo: String,
    #[serde(rename = "foundedYear")]
    pub founded_year: Option<i32>,
    #[serde(flatten)]
    pub logo: Option<Logo>,
}

/// Binary logo payload plus its MIME content type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    #[serde(rename = "logoData")]
    pub data: Vec<u8>,
    #[serde(rename = "logoType")]
    pub content_type: String,
}

impl Logo {
    /// Check that the content type is usable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyLogoType`] when the MIME type is
    /// empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.content_type.is_empty() {
            return Err(ValidationError::EmptyLogoType);
        }
        Ok(())
    }
}

impl Company {
    /// Create a builder for constructing a [`Company`].
    #[must_use]
    pub fn builder() -> CompanyBuilder {
        CompanyBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] when `name`, `description`,
    /// or `ceo` is empty, or when an attached logo has no content type.
    pub fn validate(&self) -> Result<(), FirmdirError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        if self.description.is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        if self.ceo.is_empty() {
            return Err(ValidationError::EmptyCeo.into());
        }
        if let Some(logo) = &self.logo {
            logo.validate()?;
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Company`].
///
/// A fresh identifier is assigned when none is given, so the builder
/// covers both creation and full-field replacement of an existing record.
#[derive(Debug, Default)]
pub struct CompanyBuilder {
    id: Option<CompanyId>,
    name: Option<String>,
    description: Option<String>,
    ceo: Option<String>,
    founded_year: Option<i32>,
}

impl CompanyBuilder {
    #[must_use]
    pub fn id(mut self, id: CompanyId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn ceo(mut self, ceo: impl Into<String>) -> Self {
        self.ceo = Some(ceo.into());
        self
    }

    #[must_use]
    pub fn founded_year(mut self, year: Option<i32>) -> Self {
        self.founded_year = year;
        self
    }

    /// Consume the builder, validate, and return a [`Company`].
    ///
    /// # Errors
    ///
    /// Returns [`FirmdirError::Validation`] if any required field is
    /// missing or empty.
    pub fn build(self) -> Result<Company, FirmdirError> {
        let company = Company {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            ceo: self.ceo.unwrap_or_default(),
            founded_year: self.founded_year,
            logo: None,
        };
        company.validate()?;
        Ok(company)
    }
}

/// Lightweight projection of a [`Company`] for list and search responses.
///
/// Excludes the binary logo payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyView {
    pub id: CompanyId,
    pub name: String,
    pub description: String,
    pub ceo: String,
    #[serde(rename = "foundedYear")]
    pub founded_year: Option<i32>,
}

impl From<&Company> for CompanyView {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            description: company.description.clone(),
            ceo: company.ceo.clone(),
            founded_year: company.founded_year,
        }
    }
}

impl From<Company> for CompanyView {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            description: company.description,
            ceo: company.ceo,
            founded_year: company.founded_year,
        }
    }
}
