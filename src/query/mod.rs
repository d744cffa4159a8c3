// SPDX-FileCopyrightText: 2025 slpscan contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Indexer query construction and transport
//!
//! This module covers the full round trip to an SLPDB-style indexer:
//! building aggregation pipelines, encoding them for the wire, and decoding
//! the collection-keyed response.
//!
//! # Overview
//!
//! The indexer exposes MongoDB aggregation over HTTP: a query document is
//! serialized to JSON, base64 encoded, and requested as
//! `GET <endpoint>/q/<encoded>`. slpscan only ever issues a fixed set of
//! pipelines, enumerated by [`QueryKind`] and constructed by the builders
//! on [`QueryDocument`].
//!
//! This module provides:
//! - [`QueryDocument`] - Builders for each supported aggregation pipeline
//! - [`QueryClient`] - The transport capability calculators are generic over
//! - [`HttpQueryClient`] - The standard HTTP implementation
//! - [`QueryResponse`] - The collection-keyed response envelope
//!
//! # Examples
//!
//! ```rust,ignore
//! use slpscan::{HttpQueryClient, QueryClient, QueryDocument};
//!
//! let client = HttpQueryClient::new("https://slpdb.fountainhead.cash")?;
//! let response = client.execute(&QueryDocument::indexed_height()).await?;
//! println!("indexer is at height {}", response.indexed_height()?);
//! ```

mod client;
mod document;
mod response;

pub use client::{HttpQueryClient, QueryClient};
pub use document::{QueryDocument, QueryKind};
pub use response::QueryResponse;
