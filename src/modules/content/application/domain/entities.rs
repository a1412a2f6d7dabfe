use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::patch::PatchField;

/// Named links (`github`, `linkedin`, `twitter`, ...) to profile URLs.
/// Ordered so serialized documents stay stable.
pub type SocialLinks = BTreeMap<String, String>;

//
// ──────────────────────────────────────────────────────────
// Entities (mirrored documents)
// ──────────────────────────────────────────────────────────
//

/// Site-wide owner profile. Singleton document under the `profile` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub social_links: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Server-generated document id; never stored inside the document body.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, rename = "demo")]
    pub demo_url: String,
    #[serde(default, rename = "repo")]
    pub repo_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub order: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i64,
}

/// Contact details. Singleton document under the `contact` key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub social_links: SocialLinks,
}

//
// ──────────────────────────────────────────────────────────
// Drafts (create payloads, id assigned by the store)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, rename = "demo")]
    pub demo_url: String,
    #[serde(default, rename = "repo")]
    pub repo_url: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub order: i64,
}

impl ProjectDraft {
    pub fn into_project(self, id: String) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            stack: self.stack,
            demo_url: self.demo_url,
            repo_url: self.repo_url,
            image_url: self.image_url,
            order: self.order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub order: i64,
}

impl ServiceDraft {
    pub fn into_service(self, id: String) -> Service {
        Service {
            id,
            title: self.title,
            description: self.description,
            icon: self.icon,
            order: self.order,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Patches
// ──────────────────────────────────────────────────────────
// Serializing a patch yields only the provided fields, so the same
// value doubles as the partial document sent to the store.
//

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub role: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub bio: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub skills: PatchField<Vec<String>>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub avatar_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub resume_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub social_links: PatchField<SocialLinks>,
}

impl ProfilePatch {
    pub fn apply_to(&self, profile: &mut Profile) {
        self.name.write_to(&mut profile.name);
        self.role.write_to(&mut profile.role);
        self.bio.write_to(&mut profile.bio);
        self.skills.write_to(&mut profile.skills);
        self.avatar_url.write_to(&mut profile.avatar_url);
        self.resume_url.write_to(&mut profile.resume_url);
        self.social_links.write_to(&mut profile.social_links);
    }

    /// The full document written when no profile exists yet; unset fields
    /// fall back to defaults.
    pub fn to_profile(&self) -> Profile {
        let mut profile = Profile::default();
        self.apply_to(&mut profile);
        profile
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub name: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub stack: PatchField<Vec<String>>,
    #[serde(default, rename = "demo", skip_serializing_if = "PatchField::is_unset")]
    pub demo_url: PatchField<String>,
    #[serde(default, rename = "repo", skip_serializing_if = "PatchField::is_unset")]
    pub repo_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub image_url: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i64>,
}

impl ProjectPatch {
    pub fn apply_to(&self, project: &mut Project) {
        self.name.write_to(&mut project.name);
        self.description.write_to(&mut project.description);
        self.stack.write_to(&mut project.stack);
        self.demo_url.write_to(&mut project.demo_url);
        self.repo_url.write_to(&mut project.repo_url);
        self.image_url.write_to(&mut project.image_url);
        self.order.write_to(&mut project.order);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub title: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub description: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub icon: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub order: PatchField<i64>,
}

impl ServicePatch {
    pub fn apply_to(&self, service: &mut Service) {
        self.title.write_to(&mut service.title);
        self.description.write_to(&mut service.description);
        self.icon.write_to(&mut service.icon);
        self.order.write_to(&mut service.order);
    }
}

/// Patch semantics:
/// - email/social_links: Unset => keep, Value => replace
/// - phone/location: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfoPatch {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub email: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub phone: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub location: PatchField<String>,
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    pub social_links: PatchField<SocialLinks>,
}

impl ContactInfoPatch {
    pub fn apply_to(&self, contact: &mut ContactInfo) {
        self.email.write_to(&mut contact.email);
        self.phone.write_to_optional(&mut contact.phone);
        self.location.write_to_optional(&mut contact.location);
        self.social_links.write_to(&mut contact.social_links);
    }

    pub fn to_contact_info(&self) -> ContactInfo {
        let mut contact = ContactInfo::default();
        self.apply_to(&mut contact);
        contact
    }
}
