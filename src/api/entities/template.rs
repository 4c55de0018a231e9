//
//  qiita-cli
//  api/entities/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Template types (Qiita Team).
//!
//! Templates may contain placeholders such as `%{Year}` or `%{Name}`. The
//! server returns both the raw fields and their expansion for the current
//! date and user.

use serde::{Deserialize, Serialize};

use super::Tagging;

/// An item template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: u64,

    /// Name shown in the template list
    pub name: String,

    pub title: String,

    pub body: String,

    #[serde(default)]
    pub tags: Vec<Tagging>,

    #[serde(flatten)]
    pub expanded: ExpandedTemplate,
}

/// Template fields with placeholders expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandedTemplate {
    pub expanded_title: String,

    pub expanded_body: String,

    #[serde(default)]
    pub expanded_tags: Vec<Tagging>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_flattens_expansion() {
        let json = r#"{
            "id": 1,
            "name": "Daily Report",
            "title": "Daily Report %{Year}/%{month}/%{day}",
            "body": "Weekly MTG on %{Year}/%{month}/%{day}",
            "tags": [{"name": "MTG/%{Year}", "versions": []}],
            "expanded_title": "Daily Report 2000/01/01",
            "expanded_body": "Weekly MTG on 2000/01/01",
            "expanded_tags": [{"name": "MTG/2000", "versions": []}]
        }"#;
        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.expanded.expanded_title, "Daily Report 2000/01/01");
        assert_eq!(template.expanded.expanded_tags[0].name, "MTG/2000");
        assert_eq!(template.tags[0].name, "MTG/%{Year}");
    }
}
