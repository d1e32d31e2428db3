//! Startup hook for the frontend.
//!
//! `flags` hands the viewport size to the app at startup; `load` runs once
//! the app is initialized and only logs.

use std::fmt::Debug;
use std::future::Future;

use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub window: Dimensions,
}

pub fn flags(width: u32, height: u32) -> Flags {
    Flags {
        window: Dimensions { width, height },
    }
}

/// Wait for the app handle, log it, and hand it back.
pub async fn load<A, F>(app: F) -> A
where
    F: Future<Output = A>,
    A: Debug,
{
    let app = app.await;
    info!(app = ?app, "App loaded");
    app
}
