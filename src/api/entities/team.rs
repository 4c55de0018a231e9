//
//  qiita-cli
//  api/entities/team.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Qiita Team types.

use serde::{Deserialize, Serialize};

/// A team the authenticated user belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team ID, also the subdomain (`<id>.qiita.com`)
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub active: bool,
}

/// A pending invitation to a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInvitation {
    pub email: String,

    /// Invitation URL, valid for 24 hours
    pub url: String,
}
