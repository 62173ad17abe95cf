// src/document.rs
//! The typed content model handed to the engine by the form layer.
//!
//! The model is fully constructed before rendering begins and never mutated
//! during layout. Section kinds are an explicit tagged union; the engine does
//! no string matching on titles to decide how a section renders.

use serde::{Deserialize, Serialize};

/// A document to lay out: either a resume or a cover letter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    Resume(Resume),
    CoverLetter(CoverLetter),
}

impl Document {
    /// Title written into the PDF Info dictionary.
    pub fn title(&self) -> String {
        match self {
            Document::Resume(r) => format!("{} - Resume", r.name),
            Document::CoverLetter(l) => format!("{} - Cover Letter", l.name),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resume {
    #[serde(default)]
    pub name: String,
    /// Label→value chips shown under the name (email, phone, website, ...).
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// One contact chip. `is_link` chips are drawn in the link color and carry a
/// URI annotation; `hidden` chips are kept in the document but not rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomField {
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub is_link: bool,
    #[serde(default)]
    pub hidden: bool,
}

/// A resume content section. Order in this list is the order on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Section {
    Education {
        title: String,
        #[serde(default)]
        entries: Vec<Education>,
    },
    Experience {
        title: String,
        #[serde(default)]
        entries: Vec<Experience>,
    },
    Skills {
        title: String,
        list: SkillList,
    },
    Languages {
        title: String,
        #[serde(default)]
        items: Vec<String>,
    },
    Certifications {
        title: String,
        #[serde(default)]
        items: Vec<String>,
    },
    Projects {
        title: String,
        #[serde(default)]
        entries: Vec<Project>,
    },
    /// Free-form block of paragraphs under a custom heading.
    Custom {
        title: String,
        #[serde(default)]
        paragraphs: Vec<String>,
    },
}

impl Section {
    pub fn title(&self) -> &str {
        match self {
            Section::Education { title, .. }
            | Section::Experience { title, .. }
            | Section::Skills { title, .. }
            | Section::Languages { title, .. }
            | Section::Certifications { title, .. }
            | Section::Projects { title, .. }
            | Section::Custom { title, .. } => title,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// Flat lists flow as one `" • "`-joined block; grouped lists render a bold
/// group label with the group's skills beside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillList {
    Flat(Vec<String>),
    Grouped(Vec<SkillGroup>),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverLetter {
    #[serde(default)]
    pub name: String,
    /// Sender address; may span multiple lines.
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub recipient: Recipient,
    #[serde(default)]
    pub salutation: String,
    /// The hook paragraph, rendered in bold.
    #[serde(default)]
    pub opening: String,
    /// Body blocks; each may contain blank-line-separated paragraphs.
    #[serde(default)]
    pub body: Vec<String>,
    #[serde(default)]
    pub closing: String,
    #[serde(default)]
    pub signature: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Recipient {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub address: String,
}
