// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Atelier-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Atelier and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Widget-side glue for the storage and shell contracts.
//!
//! Widget bodies render outside this crate; what lives here is the part of
//! their contract the core depends on (debounced persistence, session-scope
//! keys, registration after load).

pub mod note;
pub mod webpage;

pub use note::NoteController;
pub use webpage::session_partition;
