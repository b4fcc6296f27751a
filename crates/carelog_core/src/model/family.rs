//! Family member domain model.
//!
//! # Invariants
//! - A family member is owned by one user and is the scoping target for
//!   dependents' medications, reports, disease analyses and policies.
//! - Deleting a family member orphans dependent records (their
//!   `familyMemberId` keeps pointing at the removed id); there is no
//!   cascade. Known gap inherited from the source data model.

use serde::{Deserialize, Serialize};

/// A dependent whose records the account owner manages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMember {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: String,
    pub name: String,
    /// Relationship to the account owner ("spouse", "child", ...).
    #[serde(default)]
    pub relationship: String,
    /// Unix epoch milliseconds.
    #[serde(default)]
    pub date_of_birth: Option<i64>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub blood_type: Option<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

impl FamilyMember {
    pub fn new(
        owner_id: impl Into<String>,
        name: impl Into<String>,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            owner_id: owner_id.into(),
            name: name.into(),
            relationship: relationship.into(),
            date_of_birth: None,
            gender: None,
            blood_type: None,
            allergies: Vec::new(),
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }
}
